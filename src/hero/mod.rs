//! Heroes: data model and combat behavior.

pub mod error;
pub mod logic;
pub mod types;

pub use error::*;
pub use types::*;
