pub mod stack;

pub use stack::{OutOfBounds, Stack};
