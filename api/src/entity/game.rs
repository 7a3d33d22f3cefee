use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Game")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "GameId")]
    pub game_id: i32,
    #[sea_orm(column_name = "GameDate")]
    pub game_date: Date,
    #[sea_orm(column_name = "HomeTeamId")]
    pub home_team_id: i32,
    #[sea_orm(column_name = "AwayTeamId")]
    pub away_team_id: i32,
    #[sea_orm(column_name = "HomeTeamScore")]
    pub home_team_score: i32,
    #[sea_orm(column_name = "AwayTeamScore")]
    pub away_team_score: i32,
}

// Both sides point at Team, so there is no `Related<team::Entity>` impl;
// queries join through the named relation instead.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HomeTeamId",
        to = "super::team::Column::TeamId",
        fk_name = "fk_game_home_team"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::AwayTeamId",
        to = "super::team::Column::TeamId",
        fk_name = "fk_game_away_team"
    )]
    AwayTeam,
}

impl ActiveModelBehavior for ActiveModel {}
