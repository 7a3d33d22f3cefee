//! HTTP handlers
//!
//! Axum request handlers for the `/functions/<operation>` endpoints.

pub mod games;
pub mod payload;
pub mod players;
pub mod teams;
pub mod write_result;

use axum::http::Uri;

use crate::error::AppError;

pub use games::{
    add_game, delete_games, get_games, get_games_by_date, get_games_by_team,
    get_games_by_team_and_date,
};
pub use players::{
    add_player, delete_players, get_players, get_players_by_pos, get_players_by_team_and_pos,
    get_players_on_team, get_positions,
};
pub use teams::{
    get_teams, get_teams_by_conference, get_teams_by_division, get_teams_ordered_by_div,
};

/// Fallback for paths that are not a known operation
pub async fn unknown_operation(uri: Uri) -> AppError {
    AppError::NotFound(format!("No operation at {}", uri.path()))
}
