//! NFL Database API Server
//!
//! Exposes the team, player and game operations as `POST /functions/<name>`
//! endpoints backed by a relational database.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    middleware,
    routing::{get, post, MethodRouter},
    Json, Router,
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;

#[cfg(test)]
mod integration_tests;

use adapters::{
    bootstrap_schema, PostgresGameRepository, PostgresPlayerRepository, PostgresTeamRepository,
};
use app::{GameService, PlayerService, TeamService};
use config::Config;
use domain::Operation;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub team_service: Arc<TeamService<PostgresTeamRepository>>,
    pub player_service: Arc<PlayerService<PostgresPlayerRepository>>,
    pub game_service: Arc<GameService<PostgresGameRepository>>,
    /// SHA-256 of the configured API key; `None` leaves the service open
    pub api_key_hash: Option<String>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, api_key: Option<&str>) -> Self {
        let team_repo = Arc::new(PostgresTeamRepository::new(db.clone()));
        let player_repo = Arc::new(PostgresPlayerRepository::new(db.clone()));
        let game_repo = Arc::new(PostgresGameRepository::new(db));

        Self {
            team_service: Arc::new(TeamService::new(team_repo)),
            player_service: Arc::new(PlayerService::new(player_repo)),
            game_service: Arc::new(GameService::new(game_repo)),
            api_key_hash: api_key.map(auth::hash_api_key),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler mounted for an operation
fn operation_route(operation: Operation) -> MethodRouter<AppState> {
    match operation {
        Operation::AddGame => post(handlers::add_game),
        Operation::DeleteGames => post(handlers::delete_games),
        Operation::AddPlayer => post(handlers::add_player),
        Operation::DeletePlayers => post(handlers::delete_players),
        Operation::GetTeams => post(handlers::get_teams),
        Operation::GetTeamsOrderedByDiv => post(handlers::get_teams_ordered_by_div),
        Operation::GetTeamsByConference => post(handlers::get_teams_by_conference),
        Operation::GetTeamsByDivision => post(handlers::get_teams_by_division),
        Operation::GetPlayers => post(handlers::get_players),
        Operation::GetPositions => post(handlers::get_positions),
        Operation::GetPlayersOnTeam => post(handlers::get_players_on_team),
        Operation::GetPlayersByPos => post(handlers::get_players_by_pos),
        Operation::GetPlayersByTeamAndPos => post(handlers::get_players_by_team_and_pos),
        Operation::GetGames => post(handlers::get_games),
        Operation::GetGamesByTeam => post(handlers::get_games_by_team),
        Operation::GetGamesByDate => post(handlers::get_games_by_date),
        Operation::GetGamesByTeamAndDate => post(handlers::get_games_by_team_and_date),
    }
}

/// Build the full router: operations, health check and middleware
pub fn build_router(state: AppState) -> Router {
    let functions = Operation::ALL
        .into_iter()
        .fold(Router::new(), |router, operation| {
            tracing::debug!(%operation, write = operation.is_write(), "Mounting operation");
            router.route(operation.path(), operation_route(operation))
        })
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_api_key,
        ));

    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        .merge(functions)
        .fallback(handlers::unknown_operation)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,nfl_db_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting NFL DB API...");

    // Load configuration
    let config = Config::from_env()?;

    // Connect to the database
    tracing::info!("Connecting to database...");
    let mut options = ConnectOptions::new(config.database_url.clone());
    options.max_connections(config.max_connections);
    let db = Database::connect(options)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    if config.bootstrap_schema {
        bootstrap_schema(&db)
            .await
            .context("Failed to bootstrap schema")?;
        tracing::info!("Schema bootstrapped");
    }

    if config.api_key.is_none() {
        tracing::warn!("NFL_DB_API_KEY is not set; operations are open to any caller");
    }

    let state = AppState::new(db, config.api_key.as_deref());
    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
