//! The simulation engine for a Conways game of life board drawn onto a canvas.
//!
//! A [`Board`] is fitted onto a drawing surface of a fixed size, maps pointer positions to its cells & advances all
//! of its cells a generation at a time. Drawing is done through a [`RenderSurface`] provided by the host, & the host
//! is expected to call [`Board::poll`] from its event loop whilst the board is running. For running without a host
//! see [`run_with_callback`].

mod board;
mod cell;
mod driver;
mod grid;
mod layout;
mod pattern;
mod position;
mod render;

pub use board::{Board, DEFAULT_TICK_PERIOD, GenerationTimer, RunMode};
pub use cell::{Cell, CellState, GridReader, next_state};
pub use driver::{run, run_with_callback};
pub use grid::Grid;
pub use layout::{BoardLayout, DEFAULT_CELL_SIZE, MAX_CELL_COUNT, PixelRect};
pub use pattern::{Pattern, PatternError};
pub use position::{GridDimensions, GridPosition};
pub use render::{Colour, DrawCommand, Palette, RenderSurface, render_cell};
