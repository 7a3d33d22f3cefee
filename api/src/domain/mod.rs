//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for teams, players and games
//! - `ports`: Trait definitions for storage
//! - `dates`: Game date parsing and display
//! - `operation`: The table of remote-callable operations

pub mod dates;
pub mod entities;
pub mod operation;
pub mod ports;

pub use operation::Operation;
