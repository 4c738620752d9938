#![warn(clippy::all)]

mod engine;
mod gui;
mod utils;

pub use engine::{Change, GameState, LifeEngine, ObserverId};
pub use gui::{App, Config};
pub use utils::{EdgeBehavior, GridError, GridPosition};
