//! Stationary food cells
//!
//! Cells are spawned once when a session starts, never move, and only leave
//! the pool when the player eats them.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use sdl2::pixels::Color;

/// Mass of every food cell. Also its draw radius in world units.
pub const CELL_MASS: f32 = 5.0;

/// Distance kept between spawned cells and the world edge.
pub const SPAWN_MARGIN: i32 = 20;

pub const CELL_COLORS: [Color; 11] = [
    Color::RGB(80, 252, 54),
    Color::RGB(36, 244, 255),
    Color::RGB(243, 31, 46),
    Color::RGB(4, 39, 243),
    Color::RGB(254, 6, 178),
    Color::RGB(255, 211, 7),
    Color::RGB(216, 6, 254),
    Color::RGB(145, 255, 7),
    Color::RGB(7, 255, 182),
    Color::RGB(255, 6, 86),
    Color::RGB(147, 7, 255),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub position: Vec2,
    pub mass: f32,
    pub color: Color,
}

impl Cell {
    pub fn new(position: Vec2, color: Color) -> Self {
        Cell {
            position,
            mass: CELL_MASS,
            color,
        }
    }

    /// Spawn a cell at a random integer position inside the world margin.
    pub fn random(rng: &mut impl Rng, world_size: f32) -> Self {
        let max = world_size as i32 - SPAWN_MARGIN;
        let x = rng.random_range(SPAWN_MARGIN..=max);
        let y = rng.random_range(SPAWN_MARGIN..=max);
        let color = *CELL_COLORS.choose(rng).unwrap_or(&CELL_COLORS[0]);

        Cell::new(Vec2::new(x as f32, y as f32), color)
    }
}

/// Fixed-size collection of consumable cells. Shrinks as cells are eaten.
#[derive(Debug, Clone, Default)]
pub struct CellPool {
    cells: Vec<Cell>,
}

impl CellPool {
    pub fn new(cells: Vec<Cell>) -> Self {
        CellPool { cells }
    }

    pub fn spawn(count: usize, rng: &mut impl Rng, world_size: f32) -> Self {
        let cells = (0..count).map(|_| Cell::random(rng, world_size)).collect();
        CellPool { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Remove every cell matching `predicate`, returning how many were removed.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&Cell) -> bool) -> usize {
        let before = self.cells.len();
        self.cells.retain(|cell| !predicate(cell));
        before - self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::WORLD_SIZE;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = CellPool::spawn(800, &mut rng, WORLD_SIZE);
        assert_eq!(pool.len(), 800);
    }

    #[test]
    fn test_spawn_inside_margin() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = CellPool::spawn(500, &mut rng, WORLD_SIZE);

        for cell in pool.iter() {
            assert!(cell.position.x >= 20.0 && cell.position.x <= WORLD_SIZE - 20.0);
            assert!(cell.position.y >= 20.0 && cell.position.y <= WORLD_SIZE - 20.0);
            assert_eq!(cell.position.x.fract(), 0.0);
            assert_eq!(cell.mass, CELL_MASS);
            assert!(CELL_COLORS.contains(&cell.color));
        }
    }

    #[test]
    fn test_remove_where() {
        let mut pool = CellPool::new(vec![
            Cell::new(Vec2::new(10.0, 10.0), CELL_COLORS[0]),
            Cell::new(Vec2::new(50.0, 10.0), CELL_COLORS[1]),
            Cell::new(Vec2::new(90.0, 10.0), CELL_COLORS[2]),
        ]);

        let removed = pool.remove_where(|cell| cell.position.x < 60.0);
        assert_eq!(removed, 2);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool.iter().next().map(|c| c.position.x), Some(90.0));
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let pool = CellPool::spawn(0, &mut rng, WORLD_SIZE);
        assert!(pool.is_empty());
    }
}
