use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Team")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "TeamId")]
    pub team_id: i32,
    #[sea_orm(column_name = "TeamLocation")]
    pub team_location: String,
    #[sea_orm(column_name = "Nickname")]
    pub nickname: String,
    #[sea_orm(column_name = "Conference")]
    pub conference: String,
    #[sea_orm(column_name = "Division")]
    pub division: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player::Entity")]
    Player,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
