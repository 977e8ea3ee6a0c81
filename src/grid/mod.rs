//! The grid environment: positions, the four-way action set, and the
//! movement/collision rule.
//!
//! [`GridWorld`] is purely functional with respect to the two tokens: given a
//! position and an action it deterministically returns the resulting
//! position. All session state (token positions, scores, learning) lives
//! elsewhere.

pub mod action;
pub mod world;

// Public re-exports
pub use action::Action;
pub use world::{GridWorld, Position};
