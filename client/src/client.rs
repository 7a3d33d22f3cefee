//! HTTP client for the NFL DB API
//!
//! Every operation is a `POST /functions/<name>` with a JSON payload. The
//! `NflApi` trait carries the typed operations on top of a single raw `call`,
//! so the views can run against any implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Errors surfaced to the views and tools
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with an error body
    #[error("{code} ({status}): {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    /// A newer request for the same view finished first
    #[error("Superseded by a newer request for this view; its result was discarded")]
    Superseded,
}

// --- Rows ---

/// A Team row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TeamRow {
    pub team_id: i32,
    pub team_location: String,
    pub nickname: String,
    pub conference: String,
    pub division: String,
}

/// A Player row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerRow {
    pub player_id: i32,
    pub team_id: i32,
    pub player_name: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PositionRow {
    pub position: String,
}

/// A game with both teams' names; `GameDate` is `MM/DD/YYYY`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameRow {
    pub game_id: i32,
    pub game_date: String,
    pub home_team_location: String,
    pub home_team_nickname: String,
    pub away_team_location: String,
    pub away_team_nickname: String,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

/// Outcome of an add or delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResult {
    pub affected_rows: u64,
    pub insert_id: Option<i32>,
}

// --- Inputs ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    /// Sent as `YYYY-MM-DD`
    pub date: NaiveDate,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub home_team_score: i32,
    pub away_team_score: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayer {
    pub team_id: i32,
    pub player_name: String,
    pub position: String,
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ClientError> {
    Ok(serde_json::from_value(value)?)
}

/// The Query Service operations
#[async_trait]
pub trait NflApi: Send + Sync {
    /// Invoke an operation by wire name and return the raw JSON result
    async fn call(&self, operation: &str, payload: Value) -> Result<Value, ClientError>;

    async fn get_teams(&self) -> Result<Vec<TeamRow>, ClientError> {
        decode(self.call("getTeams", json!({})).await?)
    }

    async fn get_teams_ordered_by_div(&self) -> Result<Vec<TeamRow>, ClientError> {
        decode(self.call("getTeamsOrderedByDiv", json!({})).await?)
    }

    async fn get_teams_by_conference(&self, conference: &str) -> Result<Vec<TeamRow>, ClientError> {
        let payload = json!({ "conference": conference });
        decode(self.call("getTeamsByConference", payload).await?)
    }

    async fn get_teams_by_division(
        &self,
        conference: &str,
        division: &str,
    ) -> Result<Vec<TeamRow>, ClientError> {
        let payload = json!({ "conference": conference, "division": division });
        decode(self.call("getTeamsByDivision", payload).await?)
    }

    async fn get_players(&self) -> Result<Vec<PlayerRow>, ClientError> {
        decode(self.call("getPlayers", json!({})).await?)
    }

    async fn get_positions(&self) -> Result<Vec<PositionRow>, ClientError> {
        decode(self.call("getPositions", json!({})).await?)
    }

    async fn get_players_on_team(&self, team_id: i32) -> Result<Vec<PlayerRow>, ClientError> {
        decode(self.call("getPlayersOnTeam", json!({ "teamId": team_id })).await?)
    }

    async fn get_players_by_pos(&self, position: &str) -> Result<Vec<PlayerRow>, ClientError> {
        decode(self.call("getPlayersByPos", json!({ "position": position })).await?)
    }

    async fn get_players_by_team_and_pos(
        &self,
        team_id: i32,
        position: &str,
    ) -> Result<Vec<PlayerRow>, ClientError> {
        let payload = json!({ "teamId": team_id, "position": position });
        decode(self.call("getPlayersByTeamAndPos", payload).await?)
    }

    async fn get_games(&self) -> Result<Vec<GameRow>, ClientError> {
        decode(self.call("getGames", json!({})).await?)
    }

    async fn get_games_by_team(&self, team_id: i32) -> Result<Vec<GameRow>, ClientError> {
        decode(self.call("getGamesByTeam", json!({ "teamId": team_id })).await?)
    }

    async fn get_games_by_date(&self, date: NaiveDate) -> Result<Vec<GameRow>, ClientError> {
        let payload = json!({ "date": date.format("%Y-%m-%d").to_string() });
        decode(self.call("getGamesByDate", payload).await?)
    }

    async fn get_games_by_team_and_date(
        &self,
        team_id: i32,
        date: NaiveDate,
    ) -> Result<Vec<GameRow>, ClientError> {
        let payload = json!({
            "teamId": team_id,
            "date": date.format("%Y-%m-%d").to_string(),
        });
        decode(self.call("getGamesByTeamAndDate", payload).await?)
    }

    async fn add_game(&self, game: &NewGame) -> Result<WriteResult, ClientError> {
        decode(self.call("addGame", serde_json::to_value(game)?).await?)
    }

    async fn delete_games(&self, game_ids: &[i32]) -> Result<WriteResult, ClientError> {
        decode(self.call("deleteGames", json!({ "gameIds": game_ids })).await?)
    }

    async fn add_player(&self, player: &NewPlayer) -> Result<WriteResult, ClientError> {
        decode(self.call("addPlayer", serde_json::to_value(player)?).await?)
    }

    async fn delete_players(&self, player_ids: &[i32]) -> Result<WriteResult, ClientError> {
        decode(self.call("deletePlayers", json!({ "playerIds": player_ids })).await?)
    }
}

/// HTTP client for communicating with the NFL DB API
#[derive(Clone)]
pub struct NflDbClient {
    client: reqwest::Client,
    base_url: String,
}

impl NflDbClient {
    /// Create a new client from environment variables
    ///
    /// - NFL_DB_API_URL: Base URL of the API (default http://localhost:8080)
    /// - NFL_DB_API_KEY: Bearer key, only needed when the service requires one
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var("NFL_DB_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let api_key = std::env::var("NFL_DB_API_KEY").ok();

        Self::new(&base_url, api_key.as_deref())
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str, api_key: Option<&str>) -> Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        if let Some(api_key) = api_key.filter(|key| !key.is_empty()) {
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&format!("Bearer {}", api_key))
                    .map_err(|_| ClientError::Config("Invalid API key format".to_string()))?,
            );
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl NflApi for NflDbClient {
    async fn call(&self, operation: &str, payload: Value) -> Result<Value, ClientError> {
        let url = format!("{}/functions/{}", self.base_url, operation);
        tracing::debug!(%operation, "Calling operation");

        let response = self.client.post(&url).json(&payload).send().await?;
        handle_response(response).await
    }
}

/// Error body returned by the service
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
    details: Option<String>,
}

async fn handle_response(response: reqwest::Response) -> Result<Value, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(service_error(status.as_u16(), &body));
    }

    Ok(serde_json::from_str(&body)?)
}

fn service_error(status: u16, body: &str) -> ClientError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(err) => ClientError::Service {
            status,
            code: err.code,
            message: err.details.unwrap_or(err.error),
        },
        Err(_) => ClientError::Service {
            status,
            code: "unknown".to_string(),
            message: body.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = NflDbClient::new("http://localhost:8080/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_rejects_bad_key() {
        let result = NflDbClient::new("http://localhost:8080", Some("bad\nkey"));
        assert!(matches!(result, Err(ClientError::Config(_))));
    }

    #[test]
    fn test_new_game_serialization() {
        let game = NewGame {
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            home_team_id: 1,
            away_team_id: 17,
            home_team_score: 21,
            away_team_score: 14,
        };
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["date"], "2024-01-05");
        assert_eq!(json["homeTeamId"], 1);
        assert_eq!(json["awayTeamScore"], 14);
    }

    #[test]
    fn test_game_row_deserialization() {
        let row: GameRow = serde_json::from_value(json!({
            "GameId": 3,
            "GameDate": "01/05/2024",
            "HomeTeamLocation": "Buffalo",
            "HomeTeamNickname": "Bills",
            "AwayTeamLocation": "Dallas",
            "AwayTeamNickname": "Cowboys",
            "HomeTeamScore": 21,
            "AwayTeamScore": 14
        }))
        .unwrap();
        assert_eq!(row.game_id, 3);
        assert_eq!(row.away_team_nickname, "Cowboys");
    }

    #[test]
    fn test_write_result_with_null_insert_id() {
        let result: WriteResult =
            serde_json::from_value(json!({ "affectedRows": 2, "insertId": null })).unwrap();
        assert_eq!(result.affected_rows, 2);
        assert_eq!(result.insert_id, None);
    }

    #[test]
    fn test_service_error_prefers_details() {
        let err = service_error(
            400,
            r#"{"error":"Missing required field","code":"invalid-argument","details":"Must specify a position."}"#,
        );
        match err {
            ClientError::Service {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(code, "invalid-argument");
                assert_eq!(message, "Must specify a position.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_service_error_with_plain_body() {
        let err = service_error(502, "Bad Gateway");
        assert_eq!(err.to_string(), "unknown (502): Bad Gateway");
    }
}
