pub mod display;
pub mod renderer;

pub use display::{Canvas, Display, FrameBuffer, Scoreboard, Tile};
pub use renderer::Renderer;
