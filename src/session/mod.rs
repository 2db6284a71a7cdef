//! Combat sessions: a roster of heroes sharing one RNG and one event sink.

pub mod arena;
pub mod script;

pub use arena::*;
pub use script::*;
