//! Per-difficulty session parameters
//!
//! Difficulty names come from the config file. Two names are recognised
//! ("easy" and "hard"); anything else gets the standard parameters.

/// Parameters a session is built from
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub name: String,
    pub cell_count: usize,
    pub player_speed: f32,
}

impl Difficulty {
    pub fn from_name(name: &str) -> Self {
        let (cell_count, player_speed) = match name {
            "easy" => (800, 4.0),
            "hard" => (300, 5.0),
            _ => (500, 4.0),
        };

        Difficulty {
            name: name.to_string(),
            cell_count,
            player_speed,
        }
    }
}
