//! Combat events and sinks.

pub mod events;

pub use events::*;
