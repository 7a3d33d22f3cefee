//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services validate operation payloads and coordinate with repository ports.

pub mod game_service;
pub mod player_service;
pub mod requests;
pub mod team_service;
pub mod validation;

pub use game_service::GameService;
pub use player_service::PlayerService;
pub use requests::{
    AddGameRequest, AddPlayerRequest, DeleteGamesRequest, DeletePlayersRequest, GameQuery,
    PlayerQuery, TeamQuery,
};
pub use team_service::TeamService;
