// Session struct - one play-through
//
// A Session owns every entity of a single game: the camera, the background
// grid, the cell pool and the player. Restarting throws the old Session away
// and builds a new one.

use crate::camera::Camera;
use crate::cell::CellPool;
use crate::difficulty::Difficulty;
use crate::grid::Grid;
use crate::input_system::MovementInput;
use crate::player::Player;
use crate::render::{Surface, render_cells, render_player};
use glam::Vec2;
use rand::Rng;

use super::{LOSE_MASS, PLAYER_NAME};

pub struct Session {
    pub camera: Camera,
    pub grid: Grid,
    pub cells: CellPool,
    pub player: Player,
}

impl Session {
    pub fn new(difficulty: &Difficulty, rng: &mut impl Rng, world_size: f32) -> Self {
        Session {
            camera: Camera::new(),
            grid: Grid::new(world_size),
            cells: CellPool::spawn(difficulty.cell_count, rng, world_size),
            player: Player::spawn(rng, difficulty.player_speed, PLAYER_NAME),
        }
    }

    /// Advance one tick: move, eat, then frame the player
    ///
    /// Returns the number of cells eaten this tick.
    pub fn tick(&mut self, input: &MovementInput, screen_center: Vec2) -> usize {
        self.player.step(input, screen_center, self.grid.world_size);
        let eaten = self.player.eat(&mut self.cells);
        self.camera.follow(self.player.mass, self.player.position, screen_center);
        eaten
    }

    pub fn is_lost(&self) -> bool {
        self.player.mass < LOSE_MASS
    }

    /// Draw the world layers: grid, cells, player
    pub fn render(&self, surface: &mut impl Surface) -> Result<(), String> {
        self.grid.render(surface, &self.camera)?;
        render_cells(surface, &self.camera, &self.cells)?;
        render_player(surface, &self.camera, &self.player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CELL_COLORS, Cell};
    use crate::geometry::WORLD_SIZE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CENTER: Vec2 = Vec2::new(400.0, 250.0);

    fn session(name: &str) -> Session {
        let mut rng = StdRng::seed_from_u64(11);
        Session::new(&Difficulty::from_name(name), &mut rng, WORLD_SIZE)
    }

    #[test]
    fn test_easy_session() {
        let session = session("easy");
        assert_eq!(session.cells.len(), 800);
        assert_eq!(session.player.speed, 4.0);
        assert_eq!(session.player.name, "You");
        assert_eq!(session.player.mass, 20.0);
    }

    #[test]
    fn test_hard_session() {
        let session = session("hard");
        assert_eq!(session.cells.len(), 300);
        assert_eq!(session.player.speed, 5.0);
    }

    #[test]
    fn test_tick_eats_and_follows() {
        let mut session = session("medium");
        session.player.position = Vec2::new(1000.0, 1000.0);
        session.cells = CellPool::new(vec![
            Cell::new(Vec2::new(1002.0, 1000.0), CELL_COLORS[0]),
            Cell::new(Vec2::new(1500.0, 1500.0), CELL_COLORS[1]),
        ]);

        // Pointer on the centre: no movement
        let input = MovementInput {
            pointer: CENTER,
            ..Default::default()
        };
        let eaten = session.tick(&input, CENTER);

        assert_eq!(eaten, 1);
        assert_eq!(session.cells.len(), 1);
        assert_eq!(session.player.mass, 20.5);
        assert!((session.camera.zoom - (100.0 / 20.5 + 0.3)).abs() < 1e-5);
        let on_screen = session.camera.world_to_screen(session.player.position);
        assert!((on_screen - CENTER).length() < 1e-2);
    }

    #[test]
    fn test_lose_threshold() {
        let mut session = session("easy");
        assert!(!session.is_lost());
        session.player.mass = 9.5;
        assert!(session.is_lost());
    }
}
