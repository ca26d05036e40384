pub use dir::Dir;
pub use point::{GridDim, GridPoint};

pub mod board;
mod dir;
mod point;

pub type Ticks = u64;

/// What happens when the head leaves the board
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Boundary {
    /// Reappear on the opposite edge
    Wrap,
    /// Crash into the edge
    Solid,
}
