//! Game-Over Screen
//!
//! Shown when a session is lost. Displays the final score and waits for the
//! player to press Enter (handled by the input system) to start again.

use crate::render::Surface;
use crate::text::draw_centered_text;
use sdl2::pixels::Color;

/// Configuration for game-over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    /// "GAME OVER" text color
    pub title_color: Color,

    /// Final score text color
    pub score_color: Color,

    /// Instruction text color
    pub instruction_color: Color,

    pub title_scale: u32,
    pub text_scale: u32,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            title_color: Color::RGB(200, 0, 0),
            score_color: Color::RGB(0, 0, 0),
            instruction_color: Color::RGB(100, 100, 100),
            title_scale: 3,
            text_scale: 2,
        }
    }
}

pub struct GameOverScreen {
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        GameOverScreen {
            style: GameOverStyle::default(),
        }
    }

    pub fn render(&self, surface: &mut impl Surface, final_score: u32) -> Result<(), String> {
        let center = surface.center();
        let (cx, cy) = (center.x as i32, center.y as i32);

        draw_centered_text(surface, "GAME OVER", cx, cy - 40, self.style.title_color, self.style.title_scale)?;

        let score_text = format!("Final Score: {}", final_score);
        draw_centered_text(surface, &score_text, cx, cy, self.style.score_color, self.style.text_scale)?;

        draw_centered_text(
            surface,
            "ENTER to restart",
            cx,
            cy + 40,
            self.style.instruction_color,
            self.style.text_scale,
        )
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}
