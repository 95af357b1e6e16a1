// Game module - Contains all game logic and state management
//
// This module contains:
// - types.rs: GameState and shared constants
// - session.rs: Session (one play-through: camera, grid, cells, player)
// - ui_manager.rs: UI components for each screen
// - context.rs: GameContext (state machine, score, lives, current session)

pub mod context;
pub mod session;
pub mod types;
pub mod ui_manager;

// Re-export types for convenience
pub use context::GameContext;
pub use session::Session;
pub use types::*;
pub use ui_manager::UIManager;
