use super::state::Position;

/// Moves `coordinate` by `step`, reflecting through `max - coordinate` when
/// the result would leave `[0, max]`.
///
/// `step` is one of `-1`, `0` or `1` and `coordinate` already lies inside
/// the grid, so the reflection only fires on the outer row or column.
pub fn wrap(coordinate: i32, step: i32, max: i32) -> i32 {
    let next = coordinate + step;
    if next > max || next < 0 {
        return max - coordinate;
    }

    next
}

/// Square playing field of side `size`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid must have at least one cell");
        Self { size }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Largest valid coordinate on either axis
    pub fn max(&self) -> i32 {
        self.size as i32 - 1
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..=self.max()).contains(&pos.x) && (0..=self.max()).contains(&pos.y)
    }

    /// Step `pos` by `(dx, dy)` using the wrap rule on both axes
    pub fn step(&self, pos: Position, dx: i32, dy: i32) -> Position {
        Position::new(wrap(pos.x, dx, self.max()), wrap(pos.y, dy, self.max()))
    }
}
