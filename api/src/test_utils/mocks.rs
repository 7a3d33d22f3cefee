//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    GameFilter, GameId, GameSummary, NewGame, NewPlayer, Page, Player, PlayerFilter, PlayerId,
    Team, TeamFilter, TeamId, WriteResult,
};
use crate::domain::ports::{GameRepository, PlayerRepository, TeamRepository};
use crate::error::DomainError;

// ============================================================================
// In-Memory Team Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<Vec<Team>>>,
    failing: bool,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_teams(self, teams: Vec<Team>) -> Self {
        *self.teams.write().unwrap() = teams;
        self
    }

    /// Every call fails with a database error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn find(&self, filter: TeamFilter) -> Result<Vec<Team>, DomainError> {
        if self.failing {
            return Err(DomainError::Database("connection refused".to_string()));
        }
        let teams = self.teams.read().unwrap();
        let mut found: Vec<Team> = teams
            .iter()
            .filter(|team| match filter {
                TeamFilter::All | TeamFilter::OrderedByDivision => true,
                TeamFilter::Conference(conference) => team.conference == conference.to_string(),
                TeamFilter::Division(conference, division) => {
                    team.conference == conference.to_string()
                        && team.division == division.to_string()
                }
            })
            .cloned()
            .collect();
        if filter == TeamFilter::OrderedByDivision {
            found.sort_by_key(|team| (team.conference.clone(), team.division.clone()));
        }
        Ok(found)
    }
}

// ============================================================================
// In-Memory Player Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<BTreeMap<PlayerId, Player>>>,
    next_id: Arc<RwLock<i32>>,
    delete_calls: AtomicUsize,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_player(self, player: Player) -> Self {
        {
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(player.id.0);
            self.players.write().unwrap().insert(player.id, player);
        }
        self
    }

    pub fn get_all(&self) -> Vec<Player> {
        self.players.read().unwrap().values().cloned().collect()
    }

    /// Number of times `delete_many` reached storage
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn find(&self, filter: &PlayerFilter, page: Page) -> Result<Vec<Player>, DomainError> {
        let players = self.players.read().unwrap();
        let found = players
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        Ok(page.slice(found))
    }

    async fn find_positions(&self) -> Result<Vec<String>, DomainError> {
        let players = self.players.read().unwrap();
        let mut positions: Vec<String> = Vec::new();
        for player in players.values() {
            if !positions.contains(&player.position) {
                positions.push(player.position.clone());
            }
        }
        Ok(positions)
    }

    async fn create(&self, player: &NewPlayer) -> Result<WriteResult, DomainError> {
        let id = {
            let mut next_id = self.next_id.write().unwrap();
            *next_id += 1;
            PlayerId(*next_id)
        };
        self.players.write().unwrap().insert(
            id,
            Player {
                id,
                team_id: player.team_id,
                name: player.name.clone(),
                position: player.position.clone(),
            },
        );
        Ok(WriteResult::inserted(id.0))
    }

    async fn delete_many(&self, ids: &[PlayerId]) -> Result<WriteResult, DomainError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut players = self.players.write().unwrap();
        let before = players.len();
        players.retain(|id, _| !ids.contains(id));
        Ok(WriteResult::deleted((before - players.len()) as u64))
    }
}

// ============================================================================
// In-Memory Game Repository
// ============================================================================

/// Stores raw games and joins team names on read, like the SQL adapter.
#[derive(Default)]
pub struct InMemoryGameRepository {
    teams: Vec<Team>,
    games: Arc<RwLock<BTreeMap<GameId, NewGame>>>,
    next_id: Arc<RwLock<i32>>,
    delete_calls: AtomicUsize,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Teams available to the join
    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    pub fn with_game(self, id: GameId, game: NewGame) -> Self {
        {
            let mut next_id = self.next_id.write().unwrap();
            *next_id = (*next_id).max(id.0);
            self.games.write().unwrap().insert(id, game);
        }
        self
    }

    pub fn game_count(&self) -> usize {
        self.games.read().unwrap().len()
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == id)
    }

    fn summarize(&self, id: GameId, game: &NewGame) -> Option<GameSummary> {
        let home = self.team(game.home_team_id)?;
        let away = self.team(game.away_team_id)?;
        Some(GameSummary {
            id,
            date: game.date,
            home_team_id: home.id,
            home_team_location: home.location.clone(),
            home_team_nickname: home.nickname.clone(),
            away_team_id: away.id,
            away_team_location: away.location.clone(),
            away_team_nickname: away.nickname.clone(),
            home_team_score: game.home_team_score,
            away_team_score: game.away_team_score,
        })
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn find_summaries(
        &self,
        filter: GameFilter,
        page: Page,
    ) -> Result<Vec<GameSummary>, DomainError> {
        let games = self.games.read().unwrap();
        let mut found: Vec<GameSummary> = games
            .iter()
            .filter_map(|(id, game)| self.summarize(*id, game))
            .filter(|summary| filter.matches(summary))
            .collect();
        found.sort_by_key(|summary| (summary.date, summary.id));
        Ok(page.slice(found))
    }

    async fn create(&self, game: &NewGame) -> Result<WriteResult, DomainError> {
        let id = {
            let mut next_id = self.next_id.write().unwrap();
            *next_id += 1;
            GameId(*next_id)
        };
        self.games.write().unwrap().insert(id, game.clone());
        Ok(WriteResult::inserted(id.0))
    }

    async fn delete_many(&self, ids: &[GameId]) -> Result<WriteResult, DomainError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut games = self.games.write().unwrap();
        let before = games.len();
        games.retain(|id, _| !ids.contains(id));
        Ok(WriteResult::deleted((before - games.len()) as u64))
    }
}
