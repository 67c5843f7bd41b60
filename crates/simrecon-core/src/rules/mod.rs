pub mod direction;
pub mod reconcile;

pub use direction::Direction;
pub use reconcile::{reconcile, MismatchResult};
