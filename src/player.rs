//! The player-controlled circle
//!
//! Movement is direct velocity-per-tick integration: a unit heading times a
//! constant speed, no acceleration and no momentum. Held direction keys always
//! win over the pointer. Growth comes only from eating cells.

use crate::cell::CellPool;
use crate::geometry::{clamp_to_world, distance};
use crate::input_system::MovementInput;
use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use sdl2::pixels::Color;

pub const STARTING_MASS: f32 = 20.0;

/// Mass gained per cell eaten
pub const MASS_PER_CELL: f32 = 0.5;

/// Spawn coordinates are drawn from this range on both axes
pub const SPAWN_MIN: i32 = 100;
pub const SPAWN_MAX: i32 = 400;

pub const PLAYER_COLORS: [Color; 7] = [
    Color::RGB(37, 7, 255),
    Color::RGB(35, 183, 253),
    Color::RGB(48, 254, 241),
    Color::RGB(19, 79, 251),
    Color::RGB(255, 7, 230),
    Color::RGB(255, 7, 23),
    Color::RGB(6, 254, 13),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    pub mass: f32,
    pub speed: f32,
    pub color: Color,
    pub name: String,
}

impl Player {
    pub fn new(position: Vec2, speed: f32, color: Color, name: impl Into<String>) -> Self {
        Player {
            position,
            mass: STARTING_MASS,
            speed,
            color,
            name: name.into(),
        }
    }

    /// Spawn near the top-left corner of the world with a random colour
    pub fn spawn(rng: &mut impl Rng, speed: f32, name: impl Into<String>) -> Self {
        let x = rng.random_range(SPAWN_MIN..=SPAWN_MAX);
        let y = rng.random_range(SPAWN_MIN..=SPAWN_MAX);
        let color = *PLAYER_COLORS.choose(rng).unwrap_or(&PLAYER_COLORS[0]);

        Player::new(Vec2::new(x as f32, y as f32), speed, color, name)
    }

    pub fn radius(&self) -> f32 {
        self.mass / 2.0
    }

    /// Unit heading for this tick, or zero when there is nowhere to go.
    ///
    /// Held keys take priority; otherwise the player heads from the screen
    /// centre (where the camera keeps it) towards the pointer.
    pub fn heading(input: &MovementInput, screen_center: Vec2) -> Vec2 {
        let raw = if input.any_key_held() {
            input.key_direction()
        } else {
            input.pointer - screen_center
        };

        // normalize_or_zero avoids dividing by a zero length
        raw.normalize_or_zero()
    }

    /// Advance one tick and clamp the result into the world.
    pub fn step(&mut self, input: &MovementInput, screen_center: Vec2, world_size: f32) {
        let heading = Self::heading(input, screen_center);
        self.position += heading * self.speed;
        self.position = clamp_to_world(self.position, self.radius(), world_size);
    }

    /// Eat every cell whose centre lies within the player's radius.
    ///
    /// The radius is fixed for the whole pass, so mass gained here only
    /// widens the reach from the next tick on. Returns the number eaten.
    pub fn eat(&mut self, cells: &mut CellPool) -> usize {
        let center = self.position;
        let radius = self.radius();

        let eaten = cells.remove_where(|cell| distance(center, cell.position) <= radius);
        self.mass += MASS_PER_CELL * eaten as f32;
        eaten
    }
}
