//! Difficulty Selection Menu
//!
//! The title screen: game title, the currently selected difficulty and a
//! controls hint. Left/right cycle the selection with wrap-around.

use crate::render::Surface;
use crate::text::draw_centered_text;
use sdl2::pixels::Color;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub title_color: Color,
    pub item_color: Color,
    pub hint_color: Color,
    pub text_scale: u32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            title_color: Color::RGB(0, 0, 0),
            item_color: Color::RGB(0, 0, 0),
            hint_color: Color::RGB(100, 100, 100),
            text_scale: 2,
        }
    }
}

/// A stateful difficulty selector
///
/// # Example
///
/// ```rust
/// let mut menu = DifficultyMenu::new("Agar.io".to_string(), config.difficulty_levels.clone());
///
/// // Navigate
/// menu.select_next();
///
/// // Start a session with the selection
/// let difficulty = Difficulty::from_name(menu.selected_name());
/// ```
pub struct DifficultyMenu {
    title: String,
    difficulties: Vec<String>,
    selected_index: usize,
    style: MenuStyle,
}

impl DifficultyMenu {
    /// Creates a menu with the first difficulty selected
    ///
    /// `difficulties` must be non-empty; the config loader guarantees it.
    pub fn new(title: String, difficulties: Vec<String>) -> Self {
        debug_assert!(!difficulties.is_empty());
        DifficultyMenu {
            title,
            difficulties,
            selected_index: 0,
            style: MenuStyle::default(),
        }
    }

    /// Move selection left (wraps to the last difficulty)
    pub fn select_previous(&mut self) {
        if self.selected_index == 0 {
            self.selected_index = self.difficulties.len().saturating_sub(1);
        } else {
            self.selected_index -= 1;
        }
    }

    /// Move selection right (wraps to the first difficulty)
    pub fn select_next(&mut self) {
        self.selected_index = (self.selected_index + 1) % self.difficulties.len().max(1);
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_name(&self) -> &str {
        self.difficulties
            .get(self.selected_index)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Render the menu centred on screen
    pub fn render(&self, surface: &mut impl Surface) -> Result<(), String> {
        let center = surface.center();
        let (cx, cy) = (center.x as i32, center.y as i32);
        let scale = self.style.text_scale;

        draw_centered_text(surface, &self.title, cx, cy - 80, self.style.title_color, scale)?;

        let difficulty = format!("Difficulty: {}", self.selected_name());
        draw_centered_text(surface, &difficulty, cx, cy - 20, self.style.item_color, scale)?;

        draw_centered_text(
            surface,
            "LEFT/RIGHT arrows, ENTER to start",
            cx,
            cy + 20,
            self.style.hint_color,
            scale,
        )
    }
}
