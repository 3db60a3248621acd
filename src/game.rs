use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::food::Food;
use crate::input::Direction;
use crate::snake::Snake;

/// Whether the simulation is accepting ticks.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum RunState {
    Running,
    GameOver,
}

/// What ended the game.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeathCause {
    WallCollision,
    SelfCollision,
}

/// Complete mutable game state for one session.
///
/// Owns the authoritative board model; the presentation layer reads it
/// every repaint and feeds it ticks and direction changes.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub run_state: RunState,
    pub death_cause: Option<DeathCause>,
    rng: StdRng,
}

impl GameState {
    /// Creates a starting state with OS entropy behind the food draws.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Creates a deterministic state for tests and reproducible runs.
    #[must_use]
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let food = Food::spawn(&mut rng);

        Self {
            snake: Snake::starting(),
            food,
            score: 0,
            run_state: RunState::Running,
            death_cause: None,
            rng,
        }
    }

    /// Restores the canonical starting state. Callable from any state and
    /// idempotent; only the food draw differs between calls.
    pub fn reset(&mut self) {
        self.snake = Snake::starting();
        self.food = Food::spawn(&mut self.rng);
        self.score = 0;
        self.run_state = RunState::Running;
        self.death_cause = None;
    }

    /// Stages a direction change for the next tick. Reversals of the
    /// current heading are silently ignored.
    pub fn set_direction(&mut self, direction: Direction) {
        self.snake.steer(direction);
    }

    /// Advances the simulation by one tick. No-op once the game is over.
    pub fn advance(&mut self) {
        if self.run_state != RunState::Running {
            return;
        }

        let head = self.snake.advance_head();

        // Food resolves before the collision checks, so a move that eats
        // and dies on the same tick still credits the score and the growth.
        if head == self.food.position {
            self.score += 1;
            self.food = Food::spawn(&mut self.rng);
        } else {
            self.snake.drop_tail();
        }

        if self.snake.head_overlaps_body() {
            self.end_game(DeathCause::SelfCollision);
            return;
        }

        if !head.is_on_board() {
            self.end_game(DeathCause::WallCollision);
        }
    }

    fn end_game(&mut self, cause: DeathCause) {
        self.run_state = RunState::GameOver;
        self.death_cause = Some(cause);
    }
}
