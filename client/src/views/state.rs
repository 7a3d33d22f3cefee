//! Per-view fetch state
//!
//! Each fetch takes a ticket. Only the response holding the newest ticket is
//! applied, so a slow answer to an old filter cannot overwrite the rows of a
//! newer one.

use std::collections::BTreeSet;

use crate::client::{ClientError, GameRow, PlayerRow, TeamRow};

/// Rows that can be selected by id
pub trait Keyed {
    fn key(&self) -> i32;
}

impl Keyed for GameRow {
    fn key(&self) -> i32 {
        self.game_id
    }
}

impl Keyed for PlayerRow {
    fn key(&self) -> i32 {
        self.player_id
    }
}

impl Keyed for TeamRow {
    fn key(&self) -> i32 {
        self.team_id
    }
}

/// Identifies one fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug)]
pub struct ViewState<R> {
    rows: Vec<R>,
    loading: bool,
    error: Option<String>,
    selected: BTreeSet<i32>,
    generation: u64,
}

impl<R> Default for ViewState<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            loading: false,
            error: None,
            selected: BTreeSet::new(),
            generation: 0,
        }
    }
}

impl<R: Keyed + Clone> ViewState<R> {
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch, cleared by the next success
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a fetch. Any ticket handed out earlier becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.loading = true;
        Ticket(self.generation)
    }

    /// Apply a fetch result. Returns `Ok(false)` when the ticket is stale and
    /// the result was dropped.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        result: Result<Vec<R>, ClientError>,
    ) -> Result<bool, ClientError> {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                current = self.generation,
                "Dropping stale response"
            );
            return Ok(false);
        }

        self.loading = false;
        match result {
            Ok(rows) => {
                self.selected
                    .retain(|id| rows.iter().any(|row| row.key() == *id));
                self.rows = rows;
                self.error = None;
                Ok(true)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Replace the selection with the listed ids that are currently shown
    pub fn select(&mut self, ids: &[i32]) {
        self.selected = ids
            .iter()
            .copied()
            .filter(|id| self.rows.iter().any(|row| row.key() == *id))
            .collect();
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn selected_ids(&self) -> Vec<i32> {
        self.selected.iter().copied().collect()
    }

    /// Selected rows in display order
    pub fn selected_rows(&self) -> Vec<R> {
        self.rows
            .iter()
            .filter(|row| self.selected.contains(&row.key()))
            .cloned()
            .collect()
    }
}
