//! Drawing surface abstraction and world rendering
//!
//! Everything the game draws goes through the [`Surface`] trait: filled
//! rectangles, lines and filled circles. Text is built on `fill_rect` by the
//! `text` module. The SDL2 canvas implements `Surface`; tests use a recorder.
//!
//! # Layers
//!
//! The play screen is drawn back to front:
//! 1. Background fill
//! 2. Grid (world space)
//! 3. Cells (world space)
//! 4. Player outline, body and name (world space)
//! 5. HUD (screen space, see `gui::Hud`)

use crate::camera::Camera;
use crate::cell::CellPool;
use crate::player::Player;
use crate::text::{GLYPH_HEIGHT, draw_simple_text, text_width};
use glam::Vec2;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

pub const BACKGROUND_COLOR: Color = Color::RGB(242, 251, 255);
const OUTLINE_COLOR: Color = Color::RGB(0, 0, 0);
const NAME_COLOR: Color = Color::RGB(50, 50, 50);
/// Width of the dark ring around the player, in world units
const OUTLINE_WIDTH: f32 = 3.0;
const NAME_SCALE: u32 = 2;

/// An abstract 2D canvas of fixed logical size
pub trait Surface {
    /// Logical (game) resolution, not the physical window size
    fn size(&self) -> (u32, u32);

    fn clear(&mut self, color: Color) -> Result<(), String>;

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<(), String>;

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) -> Result<(), String>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), String>;

    fn center(&self) -> Vec2 {
        let (width, height) = self.size();
        Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
    }
}

impl Surface for Canvas<Window> {
    fn size(&self) -> (u32, u32) {
        self.logical_size()
    }

    fn clear(&mut self, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        Canvas::clear(self);
        Ok(())
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        Canvas::fill_rect(self, Rect::new(x, y, width, height))
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        Canvas::draw_line(
            self,
            Point::new(start.x as i32, start.y as i32),
            Point::new(end.x as i32, end.y as i32),
        )
    }

    /// SDL2 has no circle primitive, so fill one horizontal span per row
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), String> {
        self.set_draw_color(color);
        for (y, x_start, x_end) in circle_spans(center, radius) {
            Canvas::draw_line(self, Point::new(x_start, y), Point::new(x_end, y))?;
        }
        Ok(())
    }
}

/// Horizontal pixel spans `(y, x_start, x_end)` covering a filled circle
pub fn circle_spans(center: Vec2, radius: f32) -> Vec<(i32, i32, i32)> {
    let r = radius as i32;
    if r <= 0 {
        return Vec::new();
    }

    let cx = center.x as i32;
    let cy = center.y as i32;
    (-r..=r)
        .map(|dy| {
            let half = ((r * r - dy * dy) as f32).sqrt() as i32;
            (cy + dy, cx - half, cx + half)
        })
        .collect()
}

/// True when a circle at `center` (screen space) touches the visible area
fn on_screen(center: Vec2, radius: f32, (width, height): (u32, u32)) -> bool {
    center.x + radius >= 0.0
        && center.y + radius >= 0.0
        && center.x - radius <= width as f32
        && center.y - radius <= height as f32
}

pub fn render_cells(surface: &mut impl Surface, camera: &Camera, cells: &CellPool) -> Result<(), String> {
    let size = surface.size();
    for cell in cells.iter() {
        let center = camera.world_to_screen(cell.position).floor();
        let radius = camera.scale(cell.mass).floor();
        if on_screen(center, radius, size) {
            surface.fill_circle(center, radius, cell.color)?;
        }
    }
    Ok(())
}

pub fn render_player(surface: &mut impl Surface, camera: &Camera, player: &Player) -> Result<(), String> {
    let center = camera.world_to_screen(player.position).floor();
    let outline = camera.scale(player.radius() + OUTLINE_WIDTH).floor();
    let body = camera.scale(player.radius()).floor();

    surface.fill_circle(center, outline, OUTLINE_COLOR)?;
    surface.fill_circle(center, body, player.color)?;

    // Name centred on the body
    let name_width = text_width(&player.name, NAME_SCALE) as i32;
    let name_height = (GLYPH_HEIGHT * NAME_SCALE) as i32;
    draw_simple_text(
        surface,
        &player.name,
        center.x as i32 - name_width / 2,
        center.y as i32 - name_height / 2,
        NAME_COLOR,
        NAME_SCALE,
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cell::{CELL_COLORS, Cell};
    use crate::player::PLAYER_COLORS;

    /// One recorded draw call
    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCommand {
        Clear(Color),
        Rect(i32, i32, u32, u32, Color),
        Line(Vec2, Vec2, Color),
        Circle(Vec2, f32, Color),
    }

    /// Surface that records draw calls instead of rasterizing them
    pub struct RecordingSurface {
        pub width: u32,
        pub height: u32,
        pub commands: Vec<DrawCommand>,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> Self {
            RecordingSurface {
                width,
                height,
                commands: Vec::new(),
            }
        }

        pub fn circles(&self) -> Vec<(Vec2, f32, Color)> {
            self.commands
                .iter()
                .filter_map(|command| match command {
                    DrawCommand::Circle(center, radius, color) => Some((*center, *radius, *color)),
                    _ => None,
                })
                .collect()
        }

        pub fn rects_with_color(&self, wanted: Color) -> usize {
            self.commands
                .iter()
                .filter(|command| matches!(command, DrawCommand::Rect(_, _, _, _, color) if *color == wanted))
                .count()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn clear(&mut self, color: Color) -> Result<(), String> {
            self.commands.push(DrawCommand::Clear(color));
            Ok(())
        }

        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) -> Result<(), String> {
            self.commands.push(DrawCommand::Rect(x, y, width, height, color));
            Ok(())
        }

        fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color) -> Result<(), String> {
            self.commands.push(DrawCommand::Line(start, end, color));
            Ok(())
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) -> Result<(), String> {
            self.commands.push(DrawCommand::Circle(center, radius, color));
            Ok(())
        }
    }

    fn camera_on(position: Vec2, mass: f32) -> Camera {
        let mut camera = Camera::new();
        camera.follow(mass, position, Vec2::new(400.0, 250.0));
        camera
    }

    #[test]
    fn test_circle_spans_cover_diameter() {
        let spans = circle_spans(Vec2::new(50.0, 50.0), 10.0);
        assert_eq!(spans.len(), 21);
        assert_eq!(spans[10], (50, 40, 60));
        assert_eq!(spans[0], (40, 50, 50));
    }

    #[test]
    fn test_circle_spans_degenerate() {
        assert!(circle_spans(Vec2::new(5.0, 5.0), 0.4).is_empty());
    }

    #[test]
    fn test_player_outline_then_body() {
        let player = Player::new(Vec2::new(1000.0, 1000.0), 4.0, PLAYER_COLORS[2], "You");
        let camera = camera_on(player.position, player.mass);
        let mut surface = RecordingSurface::new(800, 500);

        render_player(&mut surface, &camera, &player).unwrap();

        let circles = surface.circles();
        assert_eq!(circles.len(), 2);
        assert_eq!(circles[0].2, OUTLINE_COLOR);
        assert_eq!(circles[1].2, PLAYER_COLORS[2]);
        assert!(circles[0].1 > circles[1].1);
        // Player stays in the middle of the screen
        assert_eq!(circles[1].0, Vec2::new(400.0, 250.0));
        assert!(surface.rects_with_color(NAME_COLOR) > 0);
    }

    #[test]
    fn test_offscreen_cells_skipped() {
        let camera = camera_on(Vec2::new(200.0, 200.0), 20.0);
        let cells = CellPool::new(vec![
            Cell::new(Vec2::new(210.0, 200.0), CELL_COLORS[0]),
            Cell::new(Vec2::new(1900.0, 1900.0), CELL_COLORS[1]),
        ]);
        let mut surface = RecordingSurface::new(800, 500);

        render_cells(&mut surface, &camera, &cells).unwrap();

        let circles = surface.circles();
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].2, CELL_COLORS[0]);
    }

    #[test]
    fn test_cell_radius_scales_with_zoom() {
        // mass 100 -> zoom 1.3, cell radius 5 * 1.3
        let camera = camera_on(Vec2::new(500.0, 500.0), 100.0);
        let cells = CellPool::new(vec![Cell::new(Vec2::new(500.0, 500.0), CELL_COLORS[3])]);
        let mut surface = RecordingSurface::new(800, 500);

        render_cells(&mut surface, &camera, &cells).unwrap();
        assert_eq!(surface.circles()[0].1, 6.0);
    }
}
