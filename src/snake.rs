use std::collections::VecDeque;

use crate::config::{
    BOARD_HEIGHT, BOARD_WIDTH, CELL_SIZE, INITIAL_SNAKE_LENGTH, SNAKE_START_X, SNAKE_START_Y,
};
use crate::input::{direction_change_is_valid, Direction};

/// Board position in logical units, aligned to the cell grid.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns the position one cell away in `direction`.
    #[must_use]
    pub fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self {
                x: self.x,
                y: self.y - CELL_SIZE,
            },
            Direction::Down => Self {
                x: self.x,
                y: self.y + CELL_SIZE,
            },
            Direction::Left => Self {
                x: self.x - CELL_SIZE,
                y: self.y,
            },
            Direction::Right => Self {
                x: self.x + CELL_SIZE,
                y: self.y,
            },
        }
    }

    /// Returns true while the position may be occupied without ending the
    /// game.
    ///
    /// The upper edges are inclusive: x = [`BOARD_WIDTH`] and
    /// y = [`BOARD_HEIGHT`] sit one cell past the last on-grid column/row
    /// and are still survivable for one tick.
    #[must_use]
    pub fn is_on_board(self) -> bool {
        self.x >= 0 && self.x <= BOARD_WIDTH && self.y >= 0 && self.y <= BOARD_HEIGHT
    }

    /// Returns true when the position maps to a visible grid cell.
    #[must_use]
    pub fn is_on_grid(self) -> bool {
        self.x >= 0 && self.x < BOARD_WIDTH && self.y >= 0 && self.y < BOARD_HEIGHT
    }
}

/// Snake body plus heading state.
///
/// The body is ordered head first. Direction changes are staged in a single
/// pending slot and only become the heading when the next movement tick
/// applies them.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
    pending: Direction,
}

impl Snake {
    /// Creates the canonical starting snake: three horizontal segments with
    /// the head rightmost, moving right.
    #[must_use]
    pub fn starting() -> Self {
        let mut body = VecDeque::with_capacity(INITIAL_SNAKE_LENGTH);
        let mut x = SNAKE_START_X;
        for _ in 0..INITIAL_SNAKE_LENGTH {
            body.push_back(Position {
                x,
                y: SNAKE_START_Y,
            });
            x -= CELL_SIZE;
        }

        Self {
            body,
            heading: Direction::Right,
            pending: Direction::Right,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        Self {
            body: VecDeque::from(segments),
            heading,
            pending: heading,
        }
    }

    /// Stages a direction change for the next movement tick.
    ///
    /// A reversal of the current heading is silently ignored; repeated calls
    /// within one tick keep the last accepted direction.
    pub fn steer(&mut self, direction: Direction) {
        if !direction_change_is_valid(self.heading, direction) {
            return;
        }

        self.pending = direction;
    }

    /// Applies the pending direction and moves the head one cell, leaving
    /// the tail in place. Returns the new head position.
    ///
    /// The caller decides whether the move grows the snake; a plain move
    /// must be completed with [`Snake::drop_tail`].
    pub fn advance_head(&mut self) -> Position {
        self.heading = self.pending;
        let next = self.head().stepped(self.heading);
        self.body.push_front(next);
        next
    }

    /// Removes the tail segment, completing a non-growing move.
    pub fn drop_tail(&mut self) {
        let _ = self.body.pop_back();
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current heading.
    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Returns true if any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    /// Returns true if the head overlaps any non-head segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::input::Direction;

    use super::{Position, Snake};

    #[test]
    fn starting_snake_is_three_segments_heading_right() {
        let snake = Snake::starting();
        let body: Vec<Position> = snake.segments().copied().collect();

        assert_eq!(
            body,
            vec![
                Position { x: 100, y: 100 },
                Position { x: 80, y: 100 },
                Position { x: 60, y: 100 },
            ]
        );
        assert_eq!(snake.heading(), Direction::Right);
    }

    #[test]
    fn snake_moves_one_cell_per_tick() {
        let mut snake = Snake::starting();

        snake.advance_head();
        snake.drop_tail();

        assert_eq!(snake.head(), Position { x: 120, y: 100 });
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn growth_keeps_the_previous_tail() {
        let mut snake = Snake::starting();

        // A growing move skips drop_tail.
        snake.advance_head();

        assert_eq!(snake.len(), 4);
        assert_eq!(
            snake.segments().last().copied(),
            Some(Position { x: 60, y: 100 })
        );
    }

    #[test]
    fn steer_rejects_reversal_of_heading() {
        let mut snake = Snake::starting();

        snake.steer(Direction::Left);
        snake.advance_head();

        assert_eq!(snake.head(), Position { x: 120, y: 100 });
        assert_eq!(snake.heading(), Direction::Right);
    }

    #[test]
    fn steer_applies_on_the_next_move_only() {
        let mut snake = Snake::starting();

        snake.steer(Direction::Up);
        assert_eq!(snake.heading(), Direction::Right);

        snake.advance_head();
        assert_eq!(snake.heading(), Direction::Up);
        assert_eq!(snake.head(), Position { x: 100, y: 80 });
    }

    #[test]
    fn last_accepted_steer_wins_within_one_tick() {
        let mut snake = Snake::starting();

        snake.steer(Direction::Up);
        snake.steer(Direction::Down);
        snake.advance_head();

        assert_eq!(snake.head(), Position { x: 100, y: 120 });
    }

    #[test]
    fn reversal_cannot_sneak_in_through_the_pending_slot() {
        // Heading right; stage Up, then try Left. Left reverses the current
        // heading and must be rejected even though Up is pending.
        let mut snake = Snake::starting();

        snake.steer(Direction::Up);
        snake.steer(Direction::Left);
        snake.advance_head();

        assert_eq!(snake.heading(), Direction::Up);
    }

    #[test]
    fn head_overlap_ignores_the_head_itself() {
        let snake = Snake::from_segments(
            vec![
                Position { x: 100, y: 100 },
                Position { x: 80, y: 100 },
                Position { x: 60, y: 100 },
            ],
            Direction::Right,
        );

        assert!(!snake.head_overlaps_body());
        assert!(snake.occupies(Position { x: 80, y: 100 }));
        assert!(!snake.occupies(Position { x: 40, y: 100 }));
    }

    #[test]
    fn board_edges_are_survivable_one_cell_past_the_grid() {
        assert!(Position { x: 800, y: 100 }.is_on_board());
        assert!(!Position { x: 800, y: 100 }.is_on_grid());

        assert!(Position { x: 100, y: 600 }.is_on_board());
        assert!(!Position { x: 820, y: 100 }.is_on_board());
        assert!(!Position { x: -20, y: 100 }.is_on_board());
        assert!(!Position { x: 100, y: -20 }.is_on_board());
    }
}
