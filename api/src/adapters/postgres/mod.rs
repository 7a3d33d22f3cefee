//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod game_repo;
pub mod player_repo;
pub mod schema;
pub mod team_repo;


pub use game_repo::PostgresGameRepository;
pub use player_repo::PostgresPlayerRepository;
pub use schema::bootstrap_schema;
pub use team_repo::PostgresTeamRepository;
