//! Core library for Conway's Game of Life.

pub mod engine;
pub mod error;
pub mod pos;
pub mod render;
pub mod seed;

pub use engine::{CellState, Grid, GridWindow, Simulation, Transition};
pub use error::GridError;
pub use pos::Coord;
pub use render::{Frame, Renderer};
pub use seed::FillMode;
