use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Player")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "PlayerId")]
    pub player_id: i32,
    #[sea_orm(column_name = "TeamId")]
    pub team_id: i32,
    #[sea_orm(column_name = "PlayerName")]
    pub player_name: String,
    #[sea_orm(column_name = "Position")]
    pub position: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::TeamId",
        fk_name = "fk_player_team"
    )]
    Team,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
