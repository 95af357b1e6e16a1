use glam::Vec2;
use sdl2::event::Event;
use sdl2::keyboard::{KeyboardState, Keycode, Scancode};
use sdl2::mouse::MouseState;
use sdl2::EventPump;

/// Discrete actions produced by key presses and window events
///
/// Continuous movement input is not an action; it is sampled once per tick
/// into a [`MovementInput`] snapshot instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    // === Menu Navigation ===
    PreviousDifficulty,
    NextDifficulty,
    /// Start a fresh session (from the menu or the game-over screen)
    Start,

    // === System ===
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Difficulty selection screen
    Menu,
    /// A session is running
    Playing,
    /// Game-over screen
    GameOver,
}

/// InputSystem translates SDL2 events into GameActions
///
/// Input processing happens in phases:
/// 1. The game loop sets the InputContext from the current game state
/// 2. Pending SDL2 events are drained
/// 3. Each event is filtered by context and translated to a GameAction
/// 4. Actions are returned to the game loop in arrival order
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in the Menu context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Menu,
        }
    }

    pub fn set_context(&mut self, context: InputContext) {
        self.context = context;
    }

    /// Drain all pending SDL2 events and return the resulting actions
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate_event(&event))
            .collect()
    }

    /// Translate a single SDL2 event, if it means anything in this context
    pub fn translate_event(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => self.translate_key(*key),
            _ => None,
        }
    }

    /// Key press to action, routed by context
    pub fn translate_key(&self, key: Keycode) -> Option<GameAction> {
        // Escape quits from every screen
        if key == Keycode::Escape {
            return Some(GameAction::Quit);
        }

        match self.context {
            InputContext::Menu => match key {
                Keycode::Left => Some(GameAction::PreviousDifficulty),
                Keycode::Right => Some(GameAction::NextDifficulty),
                Keycode::Return => Some(GameAction::Start),
                _ => None,
            },
            InputContext::GameOver => match key {
                Keycode::Return => Some(GameAction::Start),
                _ => None,
            },
            // Arrows steer the player while playing; they are read as held
            // state, not as actions
            InputContext::Playing => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Held direction keys and pointer position for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer position in screen space
    pub pointer: Vec2,
}

impl MovementInput {
    /// Sample WASD / arrow keys and the mouse position
    pub fn sample(keyboard: &KeyboardState, mouse: &MouseState) -> Self {
        let held = |a: Scancode, b: Scancode| {
            keyboard.is_scancode_pressed(a) || keyboard.is_scancode_pressed(b)
        };

        MovementInput {
            up: held(Scancode::W, Scancode::Up),
            down: held(Scancode::S, Scancode::Down),
            left: held(Scancode::A, Scancode::Left),
            right: held(Scancode::D, Scancode::Right),
            pointer: Vec2::new(mouse.x() as f32, mouse.y() as f32),
        }
    }

    /// Combined key direction, not normalized (each axis is -1, 0 or 1)
    pub fn key_direction(&self) -> Vec2 {
        let mut direction = Vec2::ZERO;
        if self.up {
            direction.y -= 1.0;
        }
        if self.down {
            direction.y += 1.0;
        }
        if self.left {
            direction.x -= 1.0;
        }
        if self.right {
            direction.x += 1.0;
        }
        direction
    }

    pub fn any_key_held(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}
