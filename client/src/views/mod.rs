//! Client views
//!
//! Each view (games, players, teams) owns a filter and a `ViewState`. A fetch
//! takes a ticket under the lock, releases the lock for the network call and
//! re-locks to apply the result, so the newest request always wins.

pub mod filters;
pub mod state;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::client::{
    ClientError, GameRow, NewGame, NewPlayer, NflApi, PlayerRow, TeamRow, WriteResult,
};
use filters::{TeamsFilter, ViewFilter};
use state::ViewState;

pub use filters::{GamesFilter, PlayersFilter};

/// A filter plus the rows it produced
pub struct View<F: ViewFilter> {
    pub filter: F,
    pub state: ViewState<F::Row>,
}

impl<F: ViewFilter + Default> Default for View<F> {
    fn default() -> Self {
        Self {
            filter: F::default(),
            state: ViewState::default(),
        }
    }
}

/// Result of a bulk delete from a view
#[derive(Debug)]
pub struct Deletion<R> {
    /// Rows that were selected when the delete was issued
    pub removed: Vec<R>,
    pub result: WriteResult,
    /// The view after refreshing
    pub rows: Vec<R>,
}

/// Counts shown on the home view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeSummary {
    pub teams: usize,
    pub players: usize,
    pub games: usize,
}

/// Snapshot of one view's fetch state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewStatus {
    pub name: &'static str,
    pub shown: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl<F: ViewFilter> View<F> {
    fn status(&self, name: &'static str) -> ViewStatus {
        ViewStatus {
            name,
            shown: self.state.rows().len(),
            loading: self.state.is_loading(),
            error: self.state.error().map(String::from),
        }
    }
}

pub struct Views {
    api: Arc<dyn NflApi>,
    games: Mutex<View<GamesFilter>>,
    players: Mutex<View<PlayersFilter>>,
    teams: Mutex<View<TeamsFilter>>,
}

impl Views {
    pub fn new(api: Arc<dyn NflApi>) -> Self {
        Self {
            api,
            games: Mutex::new(View::default()),
            players: Mutex::new(View::default()),
            teams: Mutex::new(View::default()),
        }
    }

    // --- Home ---

    pub async fn home(&self) -> Result<HomeSummary, ClientError> {
        let (teams, players, games) = tokio::join!(
            self.api.get_teams(),
            self.api.get_players(),
            self.api.get_games()
        );
        Ok(HomeSummary {
            teams: teams?.len(),
            players: players?.len(),
            games: games?.len(),
        })
    }

    /// Fetch state of every view, in display order
    pub async fn statuses(&self) -> Vec<ViewStatus> {
        vec![
            self.teams.lock().await.status("Teams"),
            self.players.lock().await.status("Players"),
            self.games.lock().await.status("Games"),
        ]
    }

    // --- Teams ---

    /// Apply the conference and division selection and reload
    pub async fn teams(
        &self,
        conference: Option<String>,
        division: Option<String>,
    ) -> Result<Vec<TeamRow>, ClientError> {
        self.teams.lock().await.filter = TeamsFilter::new(conference, division);
        refresh(self.api.as_ref(), &self.teams).await
    }

    /// Every team, for picking ids
    pub async fn team_choices(&self) -> Result<Vec<TeamRow>, ClientError> {
        self.api.get_teams().await
    }

    // --- Players ---

    pub async fn players(&self, filter: PlayersFilter) -> Result<Vec<PlayerRow>, ClientError> {
        self.players.lock().await.filter = filter;
        refresh(self.api.as_ref(), &self.players).await
    }

    pub async fn positions(&self) -> Result<Vec<String>, ClientError> {
        let rows = self.api.get_positions().await?;
        Ok(rows.into_iter().map(|row| row.position).collect())
    }

    /// Add a player, then reload the players view with its current filter
    pub async fn add_player(
        &self,
        player: &NewPlayer,
    ) -> Result<(WriteResult, Vec<PlayerRow>), ClientError> {
        let result = self.api.add_player(player).await?;
        let rows = refresh(self.api.as_ref(), &self.players).await?;
        Ok((result, rows))
    }

    /// Select shown players by id; returns how many were selected
    pub async fn select_players(&self, ids: &[i32]) -> usize {
        let mut view = self.players.lock().await;
        view.state.select(ids);
        view.state.selected_ids().len()
    }

    pub async fn delete_selected_players(&self) -> Result<Deletion<PlayerRow>, ClientError> {
        let (removed, ids) = take_selection(&self.players).await;
        if ids.is_empty() {
            return Ok(nothing_deleted(&self.players).await);
        }
        let result = self.api.delete_players(&ids).await?;
        self.players.lock().await.state.clear_selection();
        let rows = refresh(self.api.as_ref(), &self.players).await?;
        Ok(Deletion {
            removed,
            result,
            rows,
        })
    }

    // --- Games ---

    pub async fn games(&self, filter: GamesFilter) -> Result<Vec<GameRow>, ClientError> {
        self.games.lock().await.filter = filter;
        refresh(self.api.as_ref(), &self.games).await
    }

    /// Add a game, then reload the games view with its current filter
    pub async fn add_game(&self, game: &NewGame) -> Result<(WriteResult, Vec<GameRow>), ClientError> {
        let result = self.api.add_game(game).await?;
        let rows = refresh(self.api.as_ref(), &self.games).await?;
        Ok((result, rows))
    }

    /// Select shown games by id; returns how many were selected
    pub async fn select_games(&self, ids: &[i32]) -> usize {
        let mut view = self.games.lock().await;
        view.state.select(ids);
        view.state.selected_ids().len()
    }

    pub async fn delete_selected_games(&self) -> Result<Deletion<GameRow>, ClientError> {
        let (removed, ids) = take_selection(&self.games).await;
        if ids.is_empty() {
            return Ok(nothing_deleted(&self.games).await);
        }
        let result = self.api.delete_games(&ids).await?;
        self.games.lock().await.state.clear_selection();
        let rows = refresh(self.api.as_ref(), &self.games).await?;
        Ok(Deletion {
            removed,
            result,
            rows,
        })
    }
}

/// Re-run a view's current filter. Fails with `Superseded` when a newer
/// fetch of the same view started before this one finished.
async fn refresh<F: ViewFilter>(
    api: &dyn NflApi,
    view: &Mutex<View<F>>,
) -> Result<Vec<F::Row>, ClientError> {
    let (ticket, filter) = {
        let mut view = view.lock().await;
        (view.state.begin(), view.filter.clone())
    };

    tracing::debug!(operation = filter.operation(), "Fetching view");
    let result = filter.fetch(api).await;

    let mut view = view.lock().await;
    if !view.state.finish(ticket, result)? {
        return Err(ClientError::Superseded);
    }
    Ok(view.state.rows().to_vec())
}

async fn take_selection<F: ViewFilter>(view: &Mutex<View<F>>) -> (Vec<F::Row>, Vec<i32>) {
    let view = view.lock().await;
    (view.state.selected_rows(), view.state.selected_ids())
}

async fn nothing_deleted<F: ViewFilter>(view: &Mutex<View<F>>) -> Deletion<F::Row> {
    Deletion {
        removed: Vec::new(),
        result: WriteResult {
            affected_rows: 0,
            insert_id: None,
        },
        rows: view.lock().await.state.rows().to_vec(),
    }
}
