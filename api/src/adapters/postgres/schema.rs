//! Development schema bootstrap
//!
//! Creates the Team, Player and Game tables from the entity definitions when
//! they are missing, then seeds the 32 NFL teams into an empty Team table.

use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Schema, Set,
};

use crate::entity::{game, player, team};

/// Location, nickname, conference, division
const NFL_TEAMS: [(&str, &str, &str, &str); 32] = [
    ("Buffalo", "Bills", "AFC", "EAST"),
    ("Miami", "Dolphins", "AFC", "EAST"),
    ("New England", "Patriots", "AFC", "EAST"),
    ("New York", "Jets", "AFC", "EAST"),
    ("Baltimore", "Ravens", "AFC", "NORTH"),
    ("Cincinnati", "Bengals", "AFC", "NORTH"),
    ("Cleveland", "Browns", "AFC", "NORTH"),
    ("Pittsburgh", "Steelers", "AFC", "NORTH"),
    ("Houston", "Texans", "AFC", "SOUTH"),
    ("Indianapolis", "Colts", "AFC", "SOUTH"),
    ("Jacksonville", "Jaguars", "AFC", "SOUTH"),
    ("Tennessee", "Titans", "AFC", "SOUTH"),
    ("Denver", "Broncos", "AFC", "WEST"),
    ("Kansas City", "Chiefs", "AFC", "WEST"),
    ("Las Vegas", "Raiders", "AFC", "WEST"),
    ("Los Angeles", "Chargers", "AFC", "WEST"),
    ("Dallas", "Cowboys", "NFC", "EAST"),
    ("New York", "Giants", "NFC", "EAST"),
    ("Philadelphia", "Eagles", "NFC", "EAST"),
    ("Washington", "Commanders", "NFC", "EAST"),
    ("Chicago", "Bears", "NFC", "NORTH"),
    ("Detroit", "Lions", "NFC", "NORTH"),
    ("Green Bay", "Packers", "NFC", "NORTH"),
    ("Minnesota", "Vikings", "NFC", "NORTH"),
    ("Atlanta", "Falcons", "NFC", "SOUTH"),
    ("Carolina", "Panthers", "NFC", "SOUTH"),
    ("New Orleans", "Saints", "NFC", "SOUTH"),
    ("Tampa Bay", "Buccaneers", "NFC", "SOUTH"),
    ("Arizona", "Cardinals", "NFC", "WEST"),
    ("Los Angeles", "Rams", "NFC", "WEST"),
    ("San Francisco", "49ers", "NFC", "WEST"),
    ("Seattle", "Seahawks", "NFC", "WEST"),
];

/// Create missing tables and seed teams. Safe to run on every startup.
pub async fn bootstrap_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmts = vec![
        schema.create_table_from_entity(team::Entity),
        schema.create_table_from_entity(player::Entity),
        schema.create_table_from_entity(game::Entity),
    ];

    for stmt in stmts.iter_mut() {
        stmt.if_not_exists();
        db.execute(backend.build(&*stmt)).await?;
    }

    seed_teams(db).await
}

async fn seed_teams(db: &DatabaseConnection) -> Result<(), DbErr> {
    if team::Entity::find().count(db).await? > 0 {
        return Ok(());
    }

    let teams = NFL_TEAMS
        .iter()
        .map(|(location, nickname, conference, division)| team::ActiveModel {
            team_location: Set(location.to_string()),
            nickname: Set(nickname.to_string()),
            conference: Set(conference.to_string()),
            division: Set(division.to_string()),
            ..Default::default()
        });

    team::Entity::insert_many(teams).exec(db).await?;
    tracing::info!("Seeded {} teams", NFL_TEAMS.len());

    Ok(())
}
