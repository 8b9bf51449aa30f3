//! Shared primitives used across the question and cost modules

pub mod duration;

pub use duration::{CallDuration, SECONDS_PER_TURN};
