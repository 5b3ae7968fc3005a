//! Game implementations built on the core types and rules engine.

pub mod focus;

pub use focus::{FocusGame, FocusGameBuilder};
