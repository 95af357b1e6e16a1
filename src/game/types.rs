// Shared enums and constants used throughout the game

use crate::input_system::InputContext;

/// Logical screen resolution
pub const SCREEN_WIDTH: u32 = 800;
pub const SCREEN_HEIGHT: u32 = 500;

/// Score awarded per cell eaten
pub const POINTS_PER_CELL: u32 = 10;

/// A player lighter than this has lost
pub const LOSE_MASS: f32 = 10.0;

/// Name shown on the player's circle
pub const PLAYER_NAME: &str = "You";

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    GameOver,
}

impl GameState {
    /// Input context matching this screen
    pub fn input_context(&self) -> InputContext {
        match self {
            GameState::Menu => InputContext::Menu,
            GameState::Playing => InputContext::Playing,
            GameState::GameOver => InputContext::GameOver,
        }
    }
}
