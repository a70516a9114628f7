//! Conway's game of life on an unbounded plane, stored as the set of live cells.

pub use utils::Pos;
mod utils;

pub use error::{LifeError, LifeResult};
pub mod error;

pub use world::{World, COORD_LIMIT};
pub mod world;

pub use sim::Generations;
pub mod sim;

pub use view::{animate, picture, Canvas, Window};
pub mod view;

pub mod config;
pub mod pattern;
