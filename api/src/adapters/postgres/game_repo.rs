//! PostgreSQL adapter for GameRepository
//!
//! Game listings join `Game` to `Team` twice, aliased `HomeTeam` and
//! `AwayTeam`. A team filter matches either side, so every game appears once.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::sea_query::{Alias, Condition, Expr, JoinType, Order, Query, SelectStatement};
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryFilter,
    Set,
};

use crate::domain::entities::{
    GameFilter, GameId, GameSummary, NewGame, Page, TeamId, WriteResult,
};
use crate::domain::ports::GameRepository;
use crate::entity::{game, team};
use crate::error::DomainError;

/// PostgreSQL implementation of GameRepository
pub struct PostgresGameRepository {
    db: DatabaseConnection,
}

impl PostgresGameRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// One row of the game listing query
#[derive(Debug, FromQueryResult)]
struct GameSummaryRow {
    game_id: i32,
    game_date: NaiveDate,
    home_team_id: i32,
    home_team_location: String,
    home_team_nickname: String,
    away_team_id: i32,
    away_team_location: String,
    away_team_nickname: String,
    home_team_score: i32,
    away_team_score: i32,
}

impl From<GameSummaryRow> for GameSummary {
    fn from(row: GameSummaryRow) -> Self {
        GameSummary {
            id: GameId(row.game_id),
            date: row.game_date,
            home_team_id: TeamId(row.home_team_id),
            home_team_location: row.home_team_location,
            home_team_nickname: row.home_team_nickname,
            away_team_id: TeamId(row.away_team_id),
            away_team_location: row.away_team_location,
            away_team_nickname: row.away_team_nickname,
            home_team_score: row.home_team_score,
            away_team_score: row.away_team_score,
        }
    }
}

/// Build the game listing statement for a filter and page
fn summary_query(filter: GameFilter, page: Page) -> SelectStatement {
    let home = Alias::new("HomeTeam");
    let away = Alias::new("AwayTeam");

    let mut query = Query::select();
    query
        .expr_as(
            Expr::col((game::Entity, game::Column::GameId)),
            Alias::new("game_id"),
        )
        .expr_as(
            Expr::col((game::Entity, game::Column::GameDate)),
            Alias::new("game_date"),
        )
        .expr_as(
            Expr::col((game::Entity, game::Column::HomeTeamId)),
            Alias::new("home_team_id"),
        )
        .expr_as(
            Expr::col((home.clone(), team::Column::TeamLocation)),
            Alias::new("home_team_location"),
        )
        .expr_as(
            Expr::col((home.clone(), team::Column::Nickname)),
            Alias::new("home_team_nickname"),
        )
        .expr_as(
            Expr::col((game::Entity, game::Column::AwayTeamId)),
            Alias::new("away_team_id"),
        )
        .expr_as(
            Expr::col((away.clone(), team::Column::TeamLocation)),
            Alias::new("away_team_location"),
        )
        .expr_as(
            Expr::col((away.clone(), team::Column::Nickname)),
            Alias::new("away_team_nickname"),
        )
        .expr_as(
            Expr::col((game::Entity, game::Column::HomeTeamScore)),
            Alias::new("home_team_score"),
        )
        .expr_as(
            Expr::col((game::Entity, game::Column::AwayTeamScore)),
            Alias::new("away_team_score"),
        )
        .from(game::Entity)
        .join_as(
            JoinType::InnerJoin,
            team::Entity,
            home.clone(),
            Expr::col((home, team::Column::TeamId))
                .equals((game::Entity, game::Column::HomeTeamId)),
        )
        .join_as(
            JoinType::InnerJoin,
            team::Entity,
            away.clone(),
            Expr::col((away, team::Column::TeamId))
                .equals((game::Entity, game::Column::AwayTeamId)),
        );

    if let Some(team_id) = filter.team_id {
        query.cond_where(
            Condition::any()
                .add(Expr::col((game::Entity, game::Column::HomeTeamId)).eq(team_id.0))
                .add(Expr::col((game::Entity, game::Column::AwayTeamId)).eq(team_id.0)),
        );
    }
    if let Some(date) = filter.date {
        query.and_where(Expr::col((game::Entity, game::Column::GameDate)).eq(date));
    }

    query
        .order_by((game::Entity, game::Column::GameDate), Order::Asc)
        .order_by((game::Entity, game::Column::GameId), Order::Asc);

    if let Some(limit) = page.limit {
        query.limit(limit).offset(page.offset.unwrap_or(0));
    }

    query
}

#[async_trait]
impl GameRepository for PostgresGameRepository {
    async fn find_summaries(
        &self,
        filter: GameFilter,
        page: Page,
    ) -> Result<Vec<GameSummary>, DomainError> {
        let stmt = self
            .db
            .get_database_backend()
            .build(&summary_query(filter, page));

        let rows = GameSummaryRow::find_by_statement(stmt)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(GameSummary::from).collect())
    }

    async fn create(&self, game: &NewGame) -> Result<WriteResult, DomainError> {
        let model = game::ActiveModel {
            game_date: Set(game.date),
            home_team_id: Set(game.home_team_id.0),
            away_team_id: Set(game.away_team_id.0),
            home_team_score: Set(game.home_team_score),
            away_team_score: Set(game.away_team_score),
            ..Default::default()
        };

        let result = game::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(WriteResult::inserted(result.last_insert_id))
    }

    async fn delete_many(&self, ids: &[GameId]) -> Result<WriteResult, DomainError> {
        let result = game::Entity::delete_many()
            .filter(game::Column::GameId.is_in(ids.iter().map(|id| id.0)))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(WriteResult::deleted(result.rows_affected))
    }
}
