use rand::Rng;

use crate::config::{CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
use crate::snake::Position;

/// Food currently active on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food on a uniformly random grid cell, drawing the x and y
    /// cell indices independently.
    ///
    /// The draw ignores the snake body entirely: food can land on an
    /// occupied cell and stays hidden under it until the body moves off.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = rng.gen_range(0..GRID_WIDTH) * CELL_SIZE;
        let y = rng.gen_range(0..GRID_HEIGHT) * CELL_SIZE;

        Self::at(Position { x, y })
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE};

    use super::Food;

    #[test]
    fn spawn_positions_are_cell_aligned_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let food = Food::spawn(&mut rng);

            assert_eq!(food.position.x % CELL_SIZE, 0);
            assert_eq!(food.position.y % CELL_SIZE, 0);
            assert!((0..BOARD_WIDTH).contains(&food.position.x));
            assert!((0..BOARD_HEIGHT).contains(&food.position.y));
        }
    }

    #[test]
    fn spawn_depends_only_on_the_rng() {
        let mut first = StdRng::seed_from_u64(42);
        let mut second = StdRng::seed_from_u64(42);

        for _ in 0..20 {
            assert_eq!(Food::spawn(&mut first), Food::spawn(&mut second));
        }
    }
}
