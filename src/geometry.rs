//! Small geometry helpers shared by the world entities.

use glam::Vec2;

/// Side length of the square world, in world units.
pub const WORLD_SIZE: f32 = 2000.0;

/// Euclidean distance between two points.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Clamps `position` so a circle of `radius` stays inside the world square.
pub fn clamp_to_world(position: Vec2, radius: f32, world_size: f32) -> Vec2 {
    // A circle wider than the world pins to the centre instead of panicking in clamp()
    let min = radius.min(world_size / 2.0);
    let max = (world_size - radius).max(world_size / 2.0);
    Vec2::new(position.x.clamp(min, max), position.y.clamp(min, max))
}
