//! SeaORM entities
//!
//! Table and column names match the existing schema (`Team`, `Player`,
//! `Game` with PascalCase columns).

pub mod game;
pub mod player;
pub mod team;
