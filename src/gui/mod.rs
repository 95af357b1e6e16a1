//! Screen-Space GUI
//!
//! UI elements drawn at fixed screen positions, independent of the camera.
//! They hold only presentation state; game state is passed in at render time.
//!
//! # Available Components
//!
//! - [`DifficultyMenu`] - Title screen with difficulty selection
//! - [`GameOverScreen`] - Final score and restart prompt
//! - [`Hud`] - Score, lives and difficulty during play

pub mod game_over;
pub mod hud;
pub mod menu;

pub use game_over::GameOverScreen;
pub use hud::Hud;
pub use menu::DifficultyMenu;
