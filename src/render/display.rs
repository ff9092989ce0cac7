//! Output side of the game core.
//!
//! The engine never talks to a terminal. It draws into a [`Canvas`] and
//! reports score and game-over through a [`Scoreboard`]; the terminal front
//! end implements both with [`FrameBuffer`] and paints that buffer later.

use crate::game::Position;

/// Surface the board is drawn on
pub trait Canvas {
    /// Paint the empty checkerboard, wiping the previous frame
    fn draw_grid(&mut self);
    fn draw_snake(&mut self, body: &[Position]);
    fn draw_apple(&mut self, apple: Position);
}

/// Score text and the end-of-game message
pub trait Scoreboard {
    fn show_score(&mut self, score: u32);
    fn show_game_over_message(&mut self);
    fn clear_game_over_message(&mut self);
}

/// Everything a game needs to present itself
pub trait Display: Canvas + Scoreboard {}

impl<T: Canvas + Scoreboard> Display for T {}

/// What a single cell shows in the last drawn frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Light,
    Dark,
    SnakeHead,
    Snake,
    Apple,
}

impl Tile {
    fn background(x: usize, y: usize) -> Self {
        if (x + y) % 2 == 1 { Tile::Dark } else { Tile::Light }
    }
}

/// In-memory frame that a renderer paints from
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    size: usize,
    tiles: Vec<Tile>,
    score: u32,
    game_over: bool,
}

impl FrameBuffer {
    pub fn new(size: usize) -> Self {
        let mut buffer = Self {
            size,
            tiles: Vec::with_capacity(size * size),
            score: 0,
            game_over: false,
        };
        buffer.draw_grid();
        buffer
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tile(&self, x: usize, y: usize) -> Tile {
        self.tiles[y * self.size + x]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn index(&self, pos: Position) -> Option<usize> {
        let size = self.size as i32;
        if (0..size).contains(&pos.x) && (0..size).contains(&pos.y) {
            Some((pos.y * size + pos.x) as usize)
        } else {
            None
        }
    }

    fn paint(&mut self, pos: Position, tile: Tile) {
        // cells off the board are simply not drawn
        if let Some(i) = self.index(pos) {
            self.tiles[i] = tile;
        }
    }
}

impl Canvas for FrameBuffer {
    fn draw_grid(&mut self) {
        let size = self.size;
        self.tiles.clear();
        self.tiles
            .extend((0..size).flat_map(|y| (0..size).map(move |x| Tile::background(x, y))));
    }

    fn draw_snake(&mut self, body: &[Position]) {
        for (i, &segment) in body.iter().enumerate() {
            let tile = if i == 0 { Tile::SnakeHead } else { Tile::Snake };
            self.paint(segment, tile);
        }
        // a later segment on the head's cell must not hide it
        if let Some(&head) = body.first() {
            self.paint(head, Tile::SnakeHead);
        }
    }

    fn draw_apple(&mut self, apple: Position) {
        self.paint(apple, Tile::Apple);
    }
}

impl Scoreboard for FrameBuffer {
    fn show_score(&mut self, score: u32) {
        self.score = score;
    }

    fn show_game_over_message(&mut self) {
        self.game_over = true;
    }

    fn clear_game_over_message(&mut self) {
        self.game_over = false;
    }
}
