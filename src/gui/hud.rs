use crate::render::Surface;
use crate::text::draw_simple_text;
use sdl2::pixels::Color;

/// Score, lives and difficulty in the top-left corner during play
pub struct Hud {
    pub color: Color,
    pub scale: u32,
    pub margin: i32,
    pub line_height: i32,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            color: Color::RGB(0, 0, 0),
            scale: 2,
            margin: 10,
            line_height: 25,
        }
    }

    pub fn lines(score: u32, lives: u32, difficulty: &str) -> [String; 3] {
        [
            format!("Score: {}", score),
            format!("Lives: {}", lives),
            difficulty.to_string(),
        ]
    }

    pub fn render(&self, surface: &mut impl Surface, score: u32, lives: u32, difficulty: &str) -> Result<(), String> {
        for (i, line) in Self::lines(score, lives, difficulty).iter().enumerate() {
            let y = self.margin + i as i32 * self.line_height;
            draw_simple_text(surface, line, self.margin, y, self.color, self.scale)?;
        }
        Ok(())
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}
