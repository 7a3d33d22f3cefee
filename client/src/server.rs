//! NFL DB MCP Server implementation
//!
//! Each tool drives one of the client views: it updates the view's filter or
//! issues a write, re-runs the view's read and returns the rendered table.

use std::sync::Arc;

use anyhow::Result;
use chrono::NaiveDate;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{
    handler::server::tool::ToolRouter,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::client::{ClientError, NewGame, NewPlayer, NflApi, NflDbClient};
use crate::render;
use crate::views::{GamesFilter, PlayersFilter, Views};

/// NFL DB MCP Server
///
/// Browses and edits the NFL database through the Query Service.
#[derive(Clone)]
pub struct NflDbServer {
    views: Arc<Views>,
    tool_router: ToolRouter<Self>,
}

impl NflDbServer {
    pub fn from_env() -> Result<Self> {
        let client = NflDbClient::from_env()?;
        Ok(Self::new(Arc::new(client)))
    }

    pub fn new(api: Arc<dyn NflApi>) -> Self {
        Self {
            views: Arc::new(Views::new(api)),
            tool_router: Self::tool_router(),
        }
    }
}

// --- Tool Parameter Types ---

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TeamsParams {
    /// "AFC", "NFC", or omit for all conferences
    #[serde(default)]
    pub conference: Option<String>,
    /// "NORTH", "SOUTH", "EAST" or "WEST"; only used with a conference
    #[serde(default)]
    pub division: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PlayersParams {
    /// Only players on this team
    #[serde(default)]
    pub team_id: Option<i32>,
    /// Only players at this position, e.g. "QB"
    #[serde(default)]
    pub position: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GamesParams {
    /// Only games this team played, home or away
    #[serde(default)]
    pub team_id: Option<i32>,
    /// Only games on this date (YYYY-MM-DD)
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddGameParams {
    /// Game date (YYYY-MM-DD)
    pub date: String,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct AddPlayerParams {
    pub team_id: i32,
    pub player_name: String,
    /// Position abbreviation, e.g. "QB"
    pub position: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteParams {
    /// Ids of rows shown in the current view
    pub ids: Vec<i32>,
}

/// "All" and blank choices mean no filter
fn choice(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date '{}': expected YYYY-MM-DD", value))
}

fn respond(result: Result<String, ClientError>) -> CallToolResult {
    match result {
        Ok(content) => CallToolResult::success(vec![Content::text(content)]),
        Err(e) => CallToolResult::error(vec![Content::text(e.to_string())]),
    }
}

fn tool_error(message: String) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message)])
}

#[tool_router]
impl NflDbServer {
    #[tool(description = "Summary of the database: number of teams, players and games. Call this first.")]
    async fn home(&self) -> Result<CallToolResult, McpError> {
        let result = self.views.home().await;
        let statuses = self.views.statuses().await;
        Ok(respond(
            result.map(|summary| render::render_home(&summary, &statuses)),
        ))
    }

    #[tool(
        description = "List teams ordered by conference and division, optionally narrowed to one conference or one division within it."
    )]
    async fn teams(&self, params: Parameters<TeamsParams>) -> Result<CallToolResult, McpError> {
        let result = self
            .views
            .teams(choice(params.0.conference), choice(params.0.division))
            .await;
        Ok(respond(result.map(|teams| render::render_teams(&teams))))
    }

    #[tool(description = "List every team with its id, for the team_id parameters of other tools.")]
    async fn team_ids(&self) -> Result<CallToolResult, McpError> {
        let result = self.views.team_choices().await;
        Ok(respond(result.map(|teams| render::render_teams(&teams))))
    }

    #[tool(description = "List players, optionally filtered by team id and/or position.")]
    async fn players(&self, params: Parameters<PlayersParams>) -> Result<CallToolResult, McpError> {
        let filter = PlayersFilter {
            team: params.0.team_id,
            position: choice(params.0.position),
        };
        let result = self.views.players(filter).await;
        Ok(respond(result.map(|players| render::render_players(&players))))
    }

    #[tool(description = "List the distinct player positions.")]
    async fn positions(&self) -> Result<CallToolResult, McpError> {
        let result = self.views.positions().await;
        Ok(respond(result.map(|positions| render::render_positions(&positions))))
    }

    #[tool(description = "List games by date, optionally filtered by team id and/or date (YYYY-MM-DD).")]
    async fn games(&self, params: Parameters<GamesParams>) -> Result<CallToolResult, McpError> {
        let date = match choice(params.0.date).as_deref().map(parse_date).transpose() {
            Ok(date) => date,
            Err(message) => return Ok(tool_error(message)),
        };
        let filter = GamesFilter {
            team: params.0.team_id,
            date,
        };
        let result = self.views.games(filter).await;
        Ok(respond(result.map(|games| render::render_games(&games))))
    }

    #[tool(description = "Add a game result, then show the games view again.")]
    async fn add_game(&self, params: Parameters<AddGameParams>) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let date = match parse_date(&params.date) {
            Ok(date) => date,
            Err(message) => return Ok(tool_error(message)),
        };
        let game = NewGame {
            date,
            home_team_id: params.home_team_id,
            away_team_id: params.away_team_id,
            home_team_score: params.home_team_score,
            away_team_score: params.away_team_score,
        };
        let result = self.views.add_game(&game).await;
        Ok(respond(result.map(|(written, games)| {
            render::render_added("game", &written, render::render_games(&games))
        })))
    }

    #[tool(
        description = "Delete games by id. The ids must be shown in the current games view; run 'games' first."
    )]
    async fn delete_games(&self, params: Parameters<DeleteParams>) -> Result<CallToolResult, McpError> {
        if self.views.select_games(&params.0.ids).await == 0 {
            return Ok(tool_error(
                "None of those games are in the current games view. Run 'games' first.".to_string(),
            ));
        }
        let result = self.views.delete_selected_games().await;
        Ok(respond(result.map(|deletion| {
            render::render_deleted_games(&deletion.removed, &deletion.result, &deletion.rows)
        })))
    }

    #[tool(description = "Add a player to a team, then show the players view again.")]
    async fn add_player(&self, params: Parameters<AddPlayerParams>) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let player = NewPlayer {
            team_id: params.team_id,
            player_name: params.player_name,
            position: params.position,
        };
        let result = self.views.add_player(&player).await;
        Ok(respond(result.map(|(written, players)| {
            render::render_added("player", &written, render::render_players(&players))
        })))
    }

    #[tool(
        description = "Delete players by id. The ids must be shown in the current players view; run 'players' first."
    )]
    async fn delete_players(
        &self,
        params: Parameters<DeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        if self.views.select_players(&params.0.ids).await == 0 {
            return Ok(tool_error(
                "None of those players are in the current players view. Run 'players' first."
                    .to_string(),
            ));
        }
        let result = self.views.delete_selected_players().await;
        Ok(respond(result.map(|deletion| {
            render::render_deleted_players(&deletion.removed, &deletion.result, &deletion.rows)
        })))
    }
}

#[tool_handler]
impl ServerHandler for NflDbServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nfl-db".into(),
                title: Some("NFL Database".into()),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                r#"NFL Database - teams, players and game results

VIEWS:
- 'home' - counts of teams, players and games
- 'teams' - filter by conference ("AFC"/"NFC") and division
- 'players' - filter by team id and/or position; 'positions' lists positions
- 'games' - filter by team id and/or date (YYYY-MM-DD)

EDITING:
- 'add_game' / 'add_player' add a row and refresh the view
- 'delete_games' / 'delete_players' delete rows shown in the current view

Team ids come from 'team_ids'."#
                    .into(),
            ),
        }
    }
}
