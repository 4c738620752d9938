mod edge_behavior;
mod error;
mod position;

pub use edge_behavior::EdgeBehavior;
pub use error::GridError;
pub use position::GridPosition;
