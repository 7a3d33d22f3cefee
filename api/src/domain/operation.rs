//! Operation table
//!
//! Every remote-callable action has a fixed wire name. The router mounts one
//! route per operation under `/functions/<name>`.

/// A named Query Service operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddGame,
    DeleteGames,
    AddPlayer,
    DeletePlayers,
    GetTeams,
    GetTeamsOrderedByDiv,
    GetTeamsByConference,
    GetTeamsByDivision,
    GetPlayers,
    GetPositions,
    GetPlayersOnTeam,
    GetPlayersByPos,
    GetPlayersByTeamAndPos,
    GetGames,
    GetGamesByTeam,
    GetGamesByDate,
    GetGamesByTeamAndDate,
}

impl Operation {
    pub const ALL: [Operation; 17] = [
        Operation::AddGame,
        Operation::DeleteGames,
        Operation::AddPlayer,
        Operation::DeletePlayers,
        Operation::GetTeams,
        Operation::GetTeamsOrderedByDiv,
        Operation::GetTeamsByConference,
        Operation::GetTeamsByDivision,
        Operation::GetPlayers,
        Operation::GetPositions,
        Operation::GetPlayersOnTeam,
        Operation::GetPlayersByPos,
        Operation::GetPlayersByTeamAndPos,
        Operation::GetGames,
        Operation::GetGamesByTeam,
        Operation::GetGamesByDate,
        Operation::GetGamesByTeamAndDate,
    ];

    /// Wire name used by callers
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddGame => "addGame",
            Operation::DeleteGames => "deleteGames",
            Operation::AddPlayer => "addPlayer",
            Operation::DeletePlayers => "deletePlayers",
            Operation::GetTeams => "getTeams",
            Operation::GetTeamsOrderedByDiv => "getTeamsOrderedByDiv",
            Operation::GetTeamsByConference => "getTeamsByConference",
            Operation::GetTeamsByDivision => "getTeamsByDivision",
            Operation::GetPlayers => "getPlayers",
            Operation::GetPositions => "getPositions",
            Operation::GetPlayersOnTeam => "getPlayersOnTeam",
            Operation::GetPlayersByPos => "getPlayersByPos",
            Operation::GetPlayersByTeamAndPos => "getPlayersByTeamAndPos",
            Operation::GetGames => "getGames",
            Operation::GetGamesByTeam => "getGamesByTeam",
            Operation::GetGamesByDate => "getGamesByDate",
            Operation::GetGamesByTeamAndDate => "getGamesByTeamAndDate",
        }
    }

    /// HTTP route the operation is mounted on
    pub fn path(&self) -> &'static str {
        match self {
            Operation::AddGame => "/functions/addGame",
            Operation::DeleteGames => "/functions/deleteGames",
            Operation::AddPlayer => "/functions/addPlayer",
            Operation::DeletePlayers => "/functions/deletePlayers",
            Operation::GetTeams => "/functions/getTeams",
            Operation::GetTeamsOrderedByDiv => "/functions/getTeamsOrderedByDiv",
            Operation::GetTeamsByConference => "/functions/getTeamsByConference",
            Operation::GetTeamsByDivision => "/functions/getTeamsByDivision",
            Operation::GetPlayers => "/functions/getPlayers",
            Operation::GetPositions => "/functions/getPositions",
            Operation::GetPlayersOnTeam => "/functions/getPlayersOnTeam",
            Operation::GetPlayersByPos => "/functions/getPlayersByPos",
            Operation::GetPlayersByTeamAndPos => "/functions/getPlayersByTeamAndPos",
            Operation::GetGames => "/functions/getGames",
            Operation::GetGamesByTeam => "/functions/getGamesByTeam",
            Operation::GetGamesByDate => "/functions/getGamesByDate",
            Operation::GetGamesByTeamAndDate => "/functions/getGamesByTeamAndDate",
        }
    }

    /// Whether the operation changes stored data
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Operation::AddGame
                | Operation::DeleteGames
                | Operation::AddPlayer
                | Operation::DeletePlayers
        )
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}
