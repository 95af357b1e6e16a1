// GameContext - the top-level state machine
//
// Owns everything the loop mutates: current screen, score, lives, the UI
// (including the selected difficulty) and the running Session.
//
//   Menu --Enter--> Playing --mass < 10--> GameOver --Enter--> Playing ...
//   Escape or closing the window quits from any screen.

use crate::config::GameConfig;
use crate::difficulty::Difficulty;
use crate::geometry::WORLD_SIZE;
use crate::input_system::{GameAction, MovementInput};
use crate::render::{BACKGROUND_COLOR, Surface};
use glam::Vec2;
use rand::Rng;
use std::ops::ControlFlow;

use super::{GameState, POINTS_PER_CELL, Session, UIManager};

pub struct GameContext<R: Rng> {
    pub state: GameState,
    pub score: u32,
    pub lives: u32,
    initial_lives: u32,
    pub ui: UIManager,
    pub session: Session,
    rng: R,
}

impl<R: Rng> GameContext<R> {
    /// Starts on the menu, with a session already built for the first difficulty
    pub fn new(config: &GameConfig, mut rng: R) -> Self {
        let ui = UIManager::new(config.title.clone(), config.difficulty_levels.clone());
        let session = Session::new(&Difficulty::from_name(ui.menu.selected_name()), &mut rng, WORLD_SIZE);

        GameContext {
            state: GameState::Menu,
            score: 0,
            lives: config.initial_lives,
            initial_lives: config.initial_lives,
            ui,
            session,
            rng,
        }
    }

    pub fn difficulty_index(&self) -> usize {
        self.ui.menu.selected_index()
    }

    pub fn difficulty_name(&self) -> &str {
        self.ui.menu.selected_name()
    }

    /// Apply one discrete action. `Break` means the game should exit.
    pub fn handle_action(&mut self, action: GameAction) -> ControlFlow<()> {
        match (action, self.state) {
            (GameAction::Quit, _) => {
                log::info!("Quit requested");
                return ControlFlow::Break(());
            }
            (GameAction::PreviousDifficulty, GameState::Menu) => {
                self.ui.menu.select_previous();
                log::debug!("Difficulty: {}", self.difficulty_name());
            }
            (GameAction::NextDifficulty, GameState::Menu) => {
                self.ui.menu.select_next();
                log::debug!("Difficulty: {}", self.difficulty_name());
            }
            (GameAction::Start, GameState::Menu | GameState::GameOver) => {
                self.start_session();
            }
            _ => {
                // Action has no meaning on this screen
            }
        }
        ControlFlow::Continue(())
    }

    /// Reset score and lives and begin a fresh session at the selected difficulty
    pub fn start_session(&mut self) {
        let difficulty = Difficulty::from_name(self.ui.menu.selected_name());
        self.score = 0;
        self.lives = self.initial_lives;
        self.session = Session::new(&difficulty, &mut self.rng, WORLD_SIZE);
        self.state = GameState::Playing;

        log::info!(
            "Session started: difficulty={}, cells={}, speed={}",
            difficulty.name,
            difficulty.cell_count,
            difficulty.player_speed
        );
    }

    /// Advance the simulation by one tick. Does nothing outside of play.
    pub fn update(&mut self, input: &MovementInput, screen_center: Vec2) {
        if self.state != GameState::Playing {
            return;
        }

        let eaten = self.session.tick(input, screen_center);
        if eaten > 0 {
            self.score += eaten as u32 * POINTS_PER_CELL;
            log::trace!("Ate {} cells, score {}", eaten, self.score);
        }

        if self.session.is_lost() {
            self.state = GameState::GameOver;
            log::info!("Game over, final score {}", self.score);
        }
    }

    /// Draw the current screen
    pub fn render(&self, surface: &mut impl Surface) -> Result<(), String> {
        surface.clear(BACKGROUND_COLOR)?;

        match self.state {
            GameState::Menu => self.ui.menu.render(surface),
            GameState::Playing => {
                self.session.render(surface)?;
                self.ui.hud.render(surface, self.score, self.lives, self.difficulty_name())
            }
            GameState::GameOver => self.ui.game_over_screen.render(surface, self.score),
        }
    }
}
