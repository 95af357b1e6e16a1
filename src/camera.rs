//! Camera framing
//!
//! Maps world coordinates to screen coordinates. The camera is recomputed from
//! scratch every tick from the tracked entity; there is no smoothing between
//! frames.
//!
//! - zoom:   `100 / mass + 0.3` (shrinks towards 0.3 as the tracked entity grows)
//! - offset: `screen_center - position * zoom` (keeps the entity centred)

use glam::Vec2;

/// Zoom never drops below this, however heavy the tracked entity gets.
pub const MIN_ZOOM: f32 = 0.3;

const ZOOM_MASS_FACTOR: f32 = 100.0;

/// Zoom factor for an entity of the given mass.
pub fn zoom_for_mass(mass: f32) -> f32 {
    ZOOM_MASS_FACTOR / mass + MIN_ZOOM
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub zoom: f32,
}

impl Camera {
    pub fn new() -> Self {
        Camera {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Frame an entity of `mass` at `position` in the middle of the screen.
    pub fn follow(&mut self, mass: f32, position: Vec2, screen_center: Vec2) {
        self.zoom = zoom_for_mass(mass);
        self.offset = screen_center - position * self.zoom;
    }

    /// Convert world coordinates to screen coordinates.
    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world * self.zoom + self.offset
    }

    /// Scale a world-space length (radius, line length) to screen pixels.
    #[inline]
    pub fn scale(&self, length: f32) -> f32 {
        length * self.zoom
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
