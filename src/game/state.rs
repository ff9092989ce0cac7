use super::direction::Direction;
use super::grid::Grid;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Unit step that continues the line from `before` through `from`.
///
/// Neighbours that straddle an edge are `max` apart after a wrap, so their
/// continuation points back across that edge.
fn continuation(from: i32, before: i32) -> i32 {
    let delta = from - before;
    if delta.abs() > 1 { -delta.signum() } else { delta }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Direction the snake last moved in
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        assert!(length > 0, "snake needs at least a head");
        let mut body = vec![head];

        // Add initial body segments behind the head
        let (dx, dy) = direction.delta();
        let (back_dx, back_dy) = (-dx, -dy);

        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_by(back_dx, back_dy));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        *self.body.first().expect("snake body is never empty")
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        *self.body.last().expect("snake body is never empty")
    }

    /// Check if the position is covered by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// True when another segment sits on the head's cell
    pub fn is_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().filter(|&&segment| segment == head).count() > 1
    }

    /// Step the head one cell in `direction` and drop the last segment
    pub fn advance(&mut self, direction: Direction, grid: &Grid) {
        let (dx, dy) = direction.delta();
        let new_head = grid.step(self.head(), dx, dy);
        self.body.insert(0, new_head);
        self.body.pop();
        self.direction = direction;
    }

    /// Append a segment extending the line of the last two segments.
    ///
    /// The next [`Snake::advance`] drops this cell again, so the body ends
    /// up one segment longer than before the apple.
    pub fn grow(&mut self, grid: &Grid) {
        let tail = self.tail();
        let before = match self.body.len() {
            0 | 1 => tail,
            len => self.body[len - 2],
        };

        let step_x = continuation(tail.x, before.x);
        let step_y = continuation(tail.y, before.y);
        self.body.push(grid.step(tail, step_x, step_y));
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Built and drawn, timer not started yet
    Ready,
    Running,
    /// Self-collision ended the game
    Over,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub apple: Option<Position>,
    pub grid: Grid,
    pub score: u32,
    /// Ticks processed, the one that ended the game included
    pub ticks: u32,
    pub status: GameStatus,
    pending_direction: Option<Direction>,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, grid: Grid) -> Self {
        Self {
            snake,
            apple: None,
            grid,
            score: 0,
            ticks: 0,
            status: GameStatus::Ready,
            pending_direction: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }

    /// Queue a turn for the next tick.
    ///
    /// Rejected (returns false) when it would reverse the direction the
    /// snake last moved in. Accepted turns replace any earlier queued one.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if self.snake.direction.is_opposite(direction) {
            return false;
        }

        self.pending_direction = Some(direction);
        true
    }

    /// Direction the next tick will move the snake in
    pub fn velocity(&self) -> Direction {
        self.pending_direction.unwrap_or(self.snake.direction)
    }

    /// Consume the queued turn, returning the direction to move in
    pub(crate) fn take_velocity(&mut self) -> Direction {
        self.pending_direction
            .take()
            .unwrap_or(self.snake.direction)
    }

    /// Check if the head is on the active apple
    pub fn head_on_apple(&self) -> bool {
        self.apple == Some(self.snake.head())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_snake() -> Snake {
        Snake::new(Position::new(5, 5), Direction::Right, 3)
    }

    #[test]
    fn test_snake_creation() {
        let snake = starting_snake();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
    }

    #[test]
    fn test_snake_advance() {
        let grid = Grid::new(20);
        let mut snake = starting_snake();

        snake.advance(Direction::Right, &grid);
        assert_eq!(
            snake.body,
            vec![Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );

        snake.advance(Direction::Down, &grid);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 6));
        assert_eq!(snake.direction, Direction::Down);
    }

    #[test]
    fn test_snake_wraps_at_edge() {
        let grid = Grid::new(10);
        let mut snake = Snake::new(Position::new(9, 2), Direction::Right, 3);
        snake.advance(Direction::Right, &grid);
        assert_eq!(snake.head(), Position::new(0, 2));
        assert!(snake.body.iter().all(|&p| grid.contains(p)));
    }

    #[test]
    fn test_grow_then_advance_adds_one_segment() {
        let grid = Grid::new(20);
        let mut snake = starting_snake();

        snake.grow(&grid);
        assert_eq!(snake.tail(), Position::new(2, 5));
        snake.advance(Direction::Right, &grid);

        assert_eq!(snake.len(), 4);
        assert_eq!(
            snake.body,
            vec![
                Position::new(6, 5),
                Position::new(5, 5),
                Position::new(4, 5),
                Position::new(3, 5)
            ]
        );
    }

    #[test]
    fn test_grow_at_edge_stays_on_grid() {
        let grid = Grid::new(10);
        let mut snake = Snake {
            body: vec![Position::new(2, 4), Position::new(1, 4), Position::new(0, 4)],
            direction: Direction::Right,
        };
        snake.grow(&grid);
        assert_eq!(snake.tail(), Position::new(9, 4));

        // tail pair straddling the edge after a wrap
        let mut snake = Snake {
            body: vec![Position::new(1, 4), Position::new(0, 4), Position::new(9, 4)],
            direction: Direction::Right,
        };
        snake.grow(&grid);
        assert_eq!(snake.tail(), Position::new(8, 4));
    }

    #[test]
    fn test_self_collision() {
        let snake = starting_snake();
        assert!(!snake.is_self_collision());

        let looped = Snake {
            body: vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(6, 6),
                Position::new(6, 5),
                Position::new(5, 5),
            ],
            direction: Direction::Up,
        };
        assert!(looped.is_self_collision());

        // overlap away from the head is not a self-collision
        let tail_overlap = Snake {
            body: vec![Position::new(1, 1), Position::new(2, 1), Position::new(2, 1)],
            direction: Direction::Left,
        };
        assert!(!tail_overlap.is_self_collision());
    }

    #[test]
    fn test_pending_direction_rejects_reversal() {
        let mut state = GameState::new(starting_snake(), Grid::new(20));

        assert!(!state.set_pending_direction(Direction::Left));
        assert_eq!(state.velocity(), Direction::Right);

        assert!(state.set_pending_direction(Direction::Up));
        assert!(state.set_pending_direction(Direction::Down));
        assert_eq!(state.velocity(), Direction::Down);

        assert_eq!(state.take_velocity(), Direction::Down);
        assert_eq!(state.velocity(), Direction::Right);
    }

    #[test]
    fn test_head_on_apple() {
        let mut state = GameState::new(starting_snake(), Grid::new(20));
        assert!(!state.head_on_apple());
        state.apple = Some(Position::new(5, 5));
        assert!(state.head_on_apple());
    }
}
