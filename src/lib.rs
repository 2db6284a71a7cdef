//! Arena - Turn-Based Hero Combat Library
//!
//! Heroes, their class-specific combat behavior, and the sessions that
//! drive them. All output goes through [`combat::EventSink`].

pub mod build_info;
pub mod combat;
pub mod config;
pub mod core;
pub mod hero;
pub mod session;

pub use combat::{AttackStyle, CombatEvent, CombatLog, ConsoleSink, EventSink};
pub use config::{ArenaConfig, JsonOutput};
pub use hero::{Hero, HeroClass, HeroError, HeroKind};
pub use session::{Arena, ArenaAction, ArenaError, HeroId};
