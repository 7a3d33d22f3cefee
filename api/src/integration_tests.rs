//! HTTP integration tests
//!
//! Drive the full router with axum-test against an in-memory SQLite
//! database seeded with the 32 teams (Buffalo = 1, ..., Dallas = 17).
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::domain::Operation;
    use crate::test_utils::test_db;
    use crate::{build_router, AppState};

    async fn server() -> TestServer {
        let state = AppState::new(test_db().await, None);
        TestServer::new(build_router(state)).unwrap()
    }

    async fn call(server: &TestServer, operation: Operation, payload: Value) -> Value {
        let response = server.post(operation.path()).json(&payload).await;
        response.assert_status_ok();
        response.json::<Value>()
    }

    #[tokio::test]
    async fn health_check() {
        let response = server().await.get("/health").await;
        response.assert_status_ok();
        assert_eq!(response.json::<Value>()["status"], "ok");
    }

    #[tokio::test]
    async fn every_operation_is_mounted() {
        let server = server().await;
        for operation in Operation::ALL {
            let response = server.post(operation.path()).json(&json!({})).await;
            assert_ne!(
                response.status_code(),
                StatusCode::NOT_FOUND,
                "{} is not routed",
                operation
            );
        }
    }

    #[tokio::test]
    async fn get_teams_without_body() {
        let server = server().await;
        let response = server.post(Operation::GetTeams.path()).await;
        response.assert_status_ok();

        let teams = response.json::<Value>();
        let teams = teams.as_array().unwrap();
        assert_eq!(teams.len(), 32);
        assert_eq!(teams[0]["TeamLocation"], "Buffalo");
        assert_eq!(teams[0]["Nickname"], "Bills");
        assert_eq!(teams[0]["Conference"], "AFC");
        assert_eq!(teams[0]["Division"], "EAST");
    }

    #[tokio::test]
    async fn teams_ordered_by_division() {
        let server = server().await;
        let teams = call(&server, Operation::GetTeamsOrderedByDiv, json!({})).await;

        let keys: Vec<(String, String)> = teams
            .as_array()
            .unwrap()
            .iter()
            .map(|t| {
                (
                    t["Conference"].as_str().unwrap().to_string(),
                    t["Division"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[tokio::test]
    async fn teams_by_division_is_case_insensitive() {
        let server = server().await;
        let teams = call(
            &server,
            Operation::GetTeamsByDivision,
            json!({ "conference": "nfc", "division": "west" }),
        )
        .await;

        let nicknames: Vec<&str> = teams
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["Nickname"].as_str().unwrap())
            .collect();
        assert_eq!(nicknames, vec!["Cardinals", "Rams", "49ers", "Seahawks"]);
    }

    #[tokio::test]
    async fn add_game_then_read_by_team() {
        let server = server().await;

        let result = call(
            &server,
            Operation::AddGame,
            json!({
                "date": "2024-01-05",
                "homeTeamId": "1",
                "awayTeamId": 17,
                "homeTeamScore": 21,
                "awayTeamScore": 14
            }),
        )
        .await;
        assert_eq!(result["affectedRows"], 1);
        let game_id = result["insertId"].as_i64().unwrap();

        for team_id in [1, 17] {
            let games = call(&server, Operation::GetGamesByTeam, json!({ "teamId": team_id })).await;
            let games = games.as_array().unwrap();
            assert_eq!(games.len(), 1);
            let game = &games[0];
            assert_eq!(game["GameId"], game_id);
            assert_eq!(game["GameDate"], "01/05/2024");
            assert_eq!(game["HomeTeamLocation"], "Buffalo");
            assert_eq!(game["HomeTeamNickname"], "Bills");
            assert_eq!(game["AwayTeamLocation"], "Dallas");
            assert_eq!(game["AwayTeamNickname"], "Cowboys");
            assert_eq!(game["HomeTeamScore"], 21);
            assert_eq!(game["AwayTeamScore"], 14);
        }

        let games = call(&server, Operation::GetGamesByTeam, json!({ "teamId": 2 })).await;
        assert!(games.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn games_by_date_and_team() {
        let server = server().await;
        for (date, home, away) in [("2024-09-08", 1, 2), ("2024-09-08", 3, 4), ("2024-09-15", 2, 1)] {
            call(
                &server,
                Operation::AddGame,
                json!({
                    "date": date,
                    "homeTeamId": home,
                    "awayTeamId": away,
                    "homeTeamScore": 0,
                    "awayTeamScore": 0
                }),
            )
            .await;
        }

        let on_day = call(&server, Operation::GetGamesByDate, json!({ "date": "2024-09-08" })).await;
        assert_eq!(on_day.as_array().unwrap().len(), 2);

        let both = call(
            &server,
            Operation::GetGamesByTeamAndDate,
            json!({ "teamId": 1, "date": "2024-09-15" }),
        )
        .await;
        let both = both.as_array().unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0]["HomeTeamNickname"], "Dolphins");

        let all = call(&server, Operation::GetGames, json!({})).await;
        let dates: Vec<&str> = all
            .as_array()
            .unwrap()
            .iter()
            .map(|g| g["GameDate"].as_str().unwrap())
            .collect();
        assert_eq!(dates, vec!["09/08/2024", "09/08/2024", "09/15/2024"]);

        let paged = call(&server, Operation::GetGames, json!({ "limit": 1, "offset": 2 })).await;
        assert_eq!(paged[0]["GameDate"], "09/15/2024");
    }

    #[tokio::test]
    async fn add_player_without_position_is_rejected() {
        let server = server().await;

        let response = server
            .post(Operation::AddPlayer.path())
            .json(&json!({ "teamId": 1, "playerName": "Josh Allen" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["code"], "invalid-argument");
        assert_eq!(body["details"], "Must specify a position.");

        let players = call(&server, Operation::GetPlayers, json!({})).await;
        assert!(players.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_division_is_reported_before_bad_conference() {
        let server = server().await;

        let response = server
            .post(Operation::GetTeamsByDivision.path())
            .json(&json!({ "conference": "XFL" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "Missing required field");
        assert_eq!(body["details"], "Must specify a division.");
    }

    #[tokio::test]
    async fn invalid_date_is_rejected() {
        let server = server().await;
        let response = server
            .post(Operation::AddGame.path())
            .json(&json!({
                "date": "2023-02-30",
                "homeTeamId": 1,
                "awayTeamId": 2,
                "homeTeamScore": 0,
                "awayTeamScore": 0
            }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["code"], "invalid-argument");

        let games = call(&server, Operation::GetGames, json!({})).await;
        assert!(games.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn player_lifecycle() {
        let server = server().await;
        let mut ids = Vec::new();
        for (name, position) in [("Josh Allen", "QB"), ("James Cook", "RB"), ("Dalton Kincaid", "TE")] {
            let result = call(
                &server,
                Operation::AddPlayer,
                json!({ "teamId": 1, "playerName": name, "position": position }),
            )
            .await;
            ids.push(result["insertId"].as_i64().unwrap());
        }

        let positions = call(&server, Operation::GetPositions, json!({})).await;
        let mut positions: Vec<&str> = positions
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["Position"].as_str().unwrap())
            .collect();
        positions.sort();
        assert_eq!(positions, vec!["QB", "RB", "TE"]);

        let result = call(
            &server,
            Operation::DeletePlayers,
            json!({ "playerIds": [ids[0], ids[2], 9999] }),
        )
        .await;
        assert_eq!(result["affectedRows"], 2);

        let left = call(&server, Operation::GetPlayersOnTeam, json!({ "teamId": 1 })).await;
        let left = left.as_array().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0]["PlayerName"], "James Cook");
        assert_eq!(left[0]["PlayerId"], ids[1]);

        let empty = call(&server, Operation::DeletePlayers, json!({ "playerIds": [] })).await;
        assert_eq!(empty["affectedRows"], 0);
        assert!(empty["insertId"].is_null());
    }

    #[tokio::test]
    async fn delete_games_requires_ids() {
        let server = server().await;
        let response = server.post(Operation::DeleteGames.path()).await;
        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["details"], "Must specify game IDs.");
    }

    #[tokio::test]
    async fn unknown_operation_is_not_found() {
        let response = server().await.post("/functions/dropTables").await;
        response.assert_status(StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["code"], "not-found");
    }

    #[tokio::test]
    async fn api_key_is_enforced_when_configured() {
        let state = AppState::new(test_db().await, Some("secret"));
        let server = TestServer::new(build_router(state)).unwrap();

        let response = server.post(Operation::GetTeams.path()).await;
        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(response.json::<Value>()["code"], "unauthenticated");

        let response = server
            .post(Operation::GetTeams.path())
            .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer wrong"))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let response = server
            .post(Operation::GetTeams.path())
            .add_header(AUTHORIZATION, HeaderValue::from_static("Bearer secret"))
            .await;
        response.assert_status_ok();

        // Health stays open
        server.get("/health").await.assert_status_ok();
    }
}
