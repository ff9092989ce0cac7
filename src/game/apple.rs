use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::ApplePlacement;
use super::grid::Grid;
use super::state::{Position, Snake};

/// Redraws allowed by [`ApplePlacement::AvoidSnake`] before giving up
const AVOID_SNAKE_ATTEMPTS: usize = 64;

/// Picks apple cells inside the grid, away from the outer ring
pub struct AppleSpawner {
    rng: StdRng,
    placement: ApplePlacement,
}

impl AppleSpawner {
    pub fn new(placement: ApplePlacement, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, placement }
    }

    /// Both coordinates are uniform over `[1, N-1)`
    pub fn candidate(&mut self, grid: &Grid) -> Position {
        let upper = grid.max();
        Position::new(self.rng.gen_range(1..upper), self.rng.gen_range(1..upper))
    }

    pub fn place(&mut self, grid: &Grid, snake: &Snake) -> Position {
        match self.placement {
            ApplePlacement::Anywhere => self.candidate(grid),
            ApplePlacement::AvoidSnake => {
                let mut pos = self.candidate(grid);
                for _ in 1..AVOID_SNAKE_ATTEMPTS {
                    if !snake.occupies(pos) {
                        break;
                    }
                    pos = self.candidate(grid);
                }
                pos
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use std::collections::HashSet;

    #[test]
    fn test_apple_stays_off_the_outer_ring() {
        let grid = Grid::new(20);
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let mut spawner = AppleSpawner::new(ApplePlacement::Anywhere, Some(7));

        let mut seen_x = HashSet::new();
        for _ in 0..5_000 {
            let apple = spawner.place(&grid, &snake);
            assert!((1..19).contains(&apple.x), "x out of range: {apple:?}");
            assert!((1..19).contains(&apple.y), "y out of range: {apple:?}");
            seen_x.insert(apple.x);
        }

        // every inner column shows up
        assert_eq!(seen_x.len(), 18);
    }

    #[test]
    fn test_seeded_spawners_agree() {
        let grid = Grid::new(20);
        let mut a = AppleSpawner::new(ApplePlacement::Anywhere, Some(42));
        let mut b = AppleSpawner::new(ApplePlacement::Anywhere, Some(42));
        for _ in 0..20 {
            assert_eq!(a.candidate(&grid), b.candidate(&grid));
        }
    }

    #[test]
    fn test_avoid_snake_skips_occupied_cells() {
        // 4x4 grid leaves a 2x2 inner square; the snake covers three of it
        let grid = Grid::new(4);
        let snake = Snake {
            body: vec![Position::new(1, 1), Position::new(2, 1), Position::new(2, 2)],
            direction: Direction::Left,
        };
        let mut spawner = AppleSpawner::new(ApplePlacement::AvoidSnake, Some(3));

        for _ in 0..200 {
            assert_eq!(spawner.place(&grid, &snake), Position::new(1, 2));
        }
    }
}
