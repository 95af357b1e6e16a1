use crate::camera::Camera;
use crate::render::Surface;
use glam::Vec2;
use sdl2::pixels::Color;

/// Background grid drawn in world space so it pans and zooms with the camera
#[derive(Debug, Clone)]
pub struct Grid {
    pub world_size: f32,
    pub step: f32,
    pub color: Color,
}

impl Grid {
    pub fn new(world_size: f32) -> Self {
        Grid {
            world_size,
            step: 50.0,
            color: Color::RGB(220, 220, 220),
        }
    }

    /// World-space line segments, horizontal and vertical, including both edges
    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        let count = (self.world_size / self.step).floor() as usize;
        let mut lines = Vec::with_capacity((count + 1) * 2);

        for i in 0..=count {
            let at = i as f32 * self.step;
            lines.push((Vec2::new(0.0, at), Vec2::new(self.world_size, at)));
            lines.push((Vec2::new(at, 0.0), Vec2::new(at, self.world_size)));
        }

        lines
    }

    pub fn render(&self, surface: &mut impl Surface, camera: &Camera) -> Result<(), String> {
        for (start, end) in self.lines() {
            surface.draw_line(camera.world_to_screen(start), camera.world_to_screen(end), self.color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        let grid = Grid::new(2000.0);
        // 41 positions (0, 50, ..., 2000) on each axis
        assert_eq!(grid.lines().len(), 82);
    }

    #[test]
    fn test_lines_span_world() {
        let grid = Grid::new(2000.0);
        let lines = grid.lines();
        assert_eq!(lines[0], (Vec2::new(0.0, 0.0), Vec2::new(2000.0, 0.0)));
        assert_eq!(lines[81], (Vec2::new(2000.0, 0.0), Vec2::new(2000.0, 2000.0)));
    }
}
