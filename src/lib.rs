//! Navigation containers built on resize-on-write stacks.
//!
//! [`Stack`] is a LIFO buffer that reallocates to exact capacity on every
//! mutation and answers out-of-range reads by clamping toward the nearest
//! end. [`History`] composes two of them into a browser-style undo/redo
//! cursor over visited values.

pub mod history;
pub mod stacks;

pub use history::History;
pub use stacks::{OutOfBounds, Stack};
