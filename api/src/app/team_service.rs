//! Team service
//!
//! Read-only access to the team reference data.

use std::sync::Arc;

use super::requests::TeamQuery;
use crate::domain::entities::{Team, TeamFilter};
use crate::domain::ports::TeamRepository;
use crate::error::AppError;

/// Service for reading teams
pub struct TeamService<TR>
where
    TR: TeamRepository,
{
    teams: Arc<TR>,
}

impl<TR> TeamService<TR>
where
    TR: TeamRepository,
{
    pub fn new(teams: Arc<TR>) -> Self {
        Self { teams }
    }

    /// `getTeams`: every team in storage order
    pub async fn get_teams(&self) -> Result<Vec<Team>, AppError> {
        self.find(TeamFilter::All).await
    }

    /// `getTeamsOrderedByDiv`
    pub async fn get_teams_ordered_by_division(&self) -> Result<Vec<Team>, AppError> {
        self.find(TeamFilter::OrderedByDivision).await
    }

    /// `getTeamsByConference`
    pub async fn get_teams_by_conference(&self, query: &TeamQuery) -> Result<Vec<Team>, AppError> {
        let conference = query.conference()?;
        self.find(TeamFilter::Conference(conference)).await
    }

    /// `getTeamsByDivision`
    pub async fn get_teams_by_division(&self, query: &TeamQuery) -> Result<Vec<Team>, AppError> {
        let (conference, division) = query.conference_and_division()?;
        self.find(TeamFilter::Division(conference, division)).await
    }

    async fn find(&self, filter: TeamFilter) -> Result<Vec<Team>, AppError> {
        let teams = self.teams.find(filter).await?;
        tracing::debug!(?filter, count = teams.len(), "Loaded teams");
        Ok(teams)
    }
}
