//! Table renderer
//!
//! Renders view rows to LLM-readable markdown tables.

use crate::client::{GameRow, PlayerRow, TeamRow, WriteResult};
use crate::views::{HomeSummary, ViewStatus};

/// Keep a value inside one table cell
fn cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ")
}

/// Markdown table from a header and string cells
fn table(headers: &[&str], rows: Vec<Vec<String>>) -> String {
    let mut buf = String::new();
    buf.push_str(&format!("| {} |\n", headers.join(" | ")));
    buf.push_str(&format!(
        "|{}\n",
        headers.iter().map(|_| "---|").collect::<String>()
    ));
    for row in rows {
        let cells: Vec<String> = row.iter().map(|value| cell(value)).collect();
        buf.push_str(&format!("| {} |\n", cells.join(" | ")));
    }
    buf
}

fn heading(title: &str, count: usize) -> String {
    format!("## {} ({})\n\n", title, count)
}

pub fn render_home(summary: &HomeSummary, statuses: &[ViewStatus]) -> String {
    let mut buf = String::from("# NFL Database\n\n");
    buf.push_str(&format!("- Teams: {}\n", summary.teams));
    buf.push_str(&format!("- Players: {}\n", summary.players));
    buf.push_str(&format!("- Games: {}\n\n", summary.games));
    buf.push_str(&render_statuses(statuses));
    buf.push_str("\nUse `teams`, `players` or `games` to browse.\n");
    buf
}

/// One line per view: loading, last error, or rows shown
fn render_statuses(statuses: &[ViewStatus]) -> String {
    let mut buf = String::from("## Views\n\n");
    for status in statuses {
        let line = if status.loading {
            "loading...".to_string()
        } else if let Some(error) = &status.error {
            format!("last fetch failed: {}", error)
        } else {
            format!("{} row(s) shown", status.shown)
        };
        buf.push_str(&format!("- {}: {}\n", status.name, line));
    }
    buf
}

pub fn render_teams(teams: &[TeamRow]) -> String {
    let mut buf = heading("Teams", teams.len());
    if teams.is_empty() {
        buf.push_str("_No teams match._\n");
        return buf;
    }
    let rows = teams
        .iter()
        .map(|t| {
            vec![
                t.team_id.to_string(),
                t.team_location.clone(),
                t.nickname.clone(),
                t.conference.clone(),
                t.division.clone(),
            ]
        })
        .collect();
    buf.push_str(&table(
        &["ID", "Location", "Nickname", "Conference", "Division"],
        rows,
    ));
    buf
}

pub fn render_players(players: &[PlayerRow]) -> String {
    let mut buf = heading("Players", players.len());
    if players.is_empty() {
        buf.push_str("_No players match._\n");
        return buf;
    }
    let rows = players
        .iter()
        .map(|p| {
            vec![
                p.player_id.to_string(),
                p.player_name.clone(),
                p.position.clone(),
                p.team_id.to_string(),
            ]
        })
        .collect();
    buf.push_str(&table(&["ID", "Name", "Position", "Team ID"], rows));
    buf
}

pub fn render_positions(positions: &[String]) -> String {
    let mut buf = heading("Positions", positions.len());
    for position in positions {
        buf.push_str(&format!("- {}\n", position));
    }
    buf
}

fn game_cells(g: &GameRow) -> Vec<String> {
    vec![
        g.game_id.to_string(),
        g.game_date.clone(),
        format!("{} {}", g.home_team_location, g.home_team_nickname),
        format!("{} {}", g.away_team_location, g.away_team_nickname),
        g.home_team_score.to_string(),
        g.away_team_score.to_string(),
    ]
}

const GAME_HEADERS: [&str; 6] = ["ID", "Date", "Home Team", "Away Team", "Home", "Away"];

pub fn render_games(games: &[GameRow]) -> String {
    let mut buf = heading("Games", games.len());
    if games.is_empty() {
        buf.push_str("_No games match._\n");
        return buf;
    }
    buf.push_str(&table(&GAME_HEADERS, games.iter().map(game_cells).collect()));
    buf
}

/// Confirmation of a games delete: what was removed, then the refreshed view
pub fn render_deleted_games(removed: &[GameRow], result: &WriteResult, games: &[GameRow]) -> String {
    let mut buf = format!("Deleted {} game(s).\n\n", result.affected_rows);
    if !removed.is_empty() {
        buf.push_str(&table(
            &GAME_HEADERS,
            removed.iter().map(game_cells).collect(),
        ));
        buf.push('\n');
    }
    buf.push_str(&render_games(games));
    buf
}

pub fn render_deleted_players(
    removed: &[PlayerRow],
    result: &WriteResult,
    players: &[PlayerRow],
) -> String {
    let mut buf = format!("Deleted {} player(s).\n\n", result.affected_rows);
    for p in removed {
        buf.push_str(&format!("- {} ({}, {})\n", p.player_name, p.position, p.player_id));
    }
    if !removed.is_empty() {
        buf.push('\n');
    }
    buf.push_str(&render_players(players));
    buf
}

/// Acknowledge an insert, then show the refreshed view
pub fn render_added(kind: &str, result: &WriteResult, view: String) -> String {
    match result.insert_id {
        Some(id) => format!("Added {} {}.\n\n{}", kind, id, view),
        None => format!("Added {}.\n\n{}", kind, view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> GameRow {
        GameRow {
            game_id: 3,
            game_date: "01/05/2024".to_string(),
            home_team_location: "Buffalo".to_string(),
            home_team_nickname: "Bills".to_string(),
            away_team_location: "Dallas".to_string(),
            away_team_nickname: "Cowboys".to_string(),
            home_team_score: 21,
            away_team_score: 14,
        }
    }

    #[test]
    fn test_games_show_location_and_nickname() {
        let out = render_games(&[game()]);
        assert!(out.starts_with("## Games (1)"));
        assert!(out.contains("| 3 | 01/05/2024 | Buffalo Bills | Dallas Cowboys | 21 | 14 |"));
    }

    #[test]
    fn test_empty_views_say_so() {
        assert!(render_games(&[]).contains("_No games match._"));
        assert!(render_players(&[]).contains("_No players match._"));
        assert!(render_teams(&[]).contains("_No teams match._"));
    }

    #[test]
    fn test_table_separator_matches_headers() {
        let out = table(&["A", "B"], vec![vec!["1".to_string(), "2".to_string()]]);
        assert_eq!(out, "| A | B |\n|---|---|\n| 1 | 2 |\n");
    }

    #[test]
    fn test_cells_escape_pipes_and_newlines() {
        let out = table(&["Name"], vec![vec!["A | B\nC".to_string()]]);
        assert_eq!(out, "| Name |\n|---|\n| A \\| B C |\n");
    }

    #[test]
    fn test_home_shows_view_status() {
        let summary = HomeSummary {
            teams: 32,
            players: 0,
            games: 1,
        };
        let statuses = vec![
            ViewStatus {
                name: "Teams",
                shown: 0,
                loading: true,
                error: None,
            },
            ViewStatus {
                name: "Players",
                shown: 0,
                loading: false,
                error: Some("internal (500): boom".to_string()),
            },
            ViewStatus {
                name: "Games",
                shown: 1,
                loading: false,
                error: None,
            },
        ];
        let out = render_home(&summary, &statuses);
        assert!(out.contains("- Teams: 32"));
        assert!(out.contains("- Teams: loading..."));
        assert!(out.contains("- Players: last fetch failed: internal (500): boom"));
        assert!(out.contains("- Games: 1 row(s) shown"));
    }

    #[test]
    fn test_deleted_games_lists_removed_rows() {
        let result = WriteResult {
            affected_rows: 1,
            insert_id: None,
        };
        let out = render_deleted_games(&[game()], &result, &[]);
        assert!(out.starts_with("Deleted 1 game(s)."));
        assert!(out.contains("Buffalo Bills"));
        assert!(out.contains("_No games match._"));
    }

    #[test]
    fn test_added_mentions_insert_id() {
        let result = WriteResult {
            affected_rows: 1,
            insert_id: Some(9),
        };
        let out = render_added("player", &result, String::from("view"));
        assert_eq!(out, "Added player 9.\n\nview");
    }
}
