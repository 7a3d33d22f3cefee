//! Domain entities
//!
//! Pure domain models for the NFL database.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod game;
pub mod player;
pub mod query;
pub mod team;

pub use game::{GameFilter, GameId, GameSummary, NewGame};
pub use player::{NewPlayer, Player, PlayerFilter, PlayerId};
pub use query::{Page, WriteResult};
pub use team::{Conference, Division, Team, TeamFilter, TeamId};
