// UIManager struct
//
// Holds the screen-space components for each game screen. The menu also owns
// the difficulty selection, which survives restarts.

use crate::gui::{DifficultyMenu, GameOverScreen, Hud};

pub struct UIManager {
    pub menu: DifficultyMenu,
    pub game_over_screen: GameOverScreen,
    pub hud: Hud,
}

impl UIManager {
    pub fn new(title: String, difficulties: Vec<String>) -> Self {
        UIManager {
            menu: DifficultyMenu::new(title, difficulties),
            game_over_screen: GameOverScreen::new(),
            hud: Hud::new(),
        }
    }
}
