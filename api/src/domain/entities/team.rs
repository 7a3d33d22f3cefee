//! Team domain entity
//!
//! Teams are reference data: the service reads them but never writes them.

use serde::{Deserialize, Serialize};

/// Unique identifier for a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i32);

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An NFL team. Conference and division are kept as stored, so a row
/// outside the known values still reads back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub location: String,
    pub nickname: String,
    pub conference: String,
    pub division: String,
}

/// Conference a team plays in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conference {
    Afc,
    Nfc,
}

impl std::fmt::Display for Conference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conference::Afc => write!(f, "AFC"),
            Conference::Nfc => write!(f, "NFC"),
        }
    }
}

impl std::str::FromStr for Conference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "AFC" => Ok(Conference::Afc),
            "NFC" => Ok(Conference::Nfc),
            _ => Err(format!("Unknown conference: {}", s)),
        }
    }
}

/// Division within a conference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Division {
    North,
    South,
    East,
    West,
}

impl std::fmt::Display for Division {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Division::North => write!(f, "NORTH"),
            Division::South => write!(f, "SOUTH"),
            Division::East => write!(f, "EAST"),
            Division::West => write!(f, "WEST"),
        }
    }
}

impl std::str::FromStr for Division {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NORTH" => Ok(Division::North),
            "SOUTH" => Ok(Division::South),
            "EAST" => Ok(Division::East),
            "WEST" => Ok(Division::West),
            _ => Err(format!("Unknown division: {}", s)),
        }
    }
}

/// Which teams to read, and in what order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamFilter {
    /// Every team, storage order
    All,
    /// Every team, ordered by conference then division
    OrderedByDivision,
    Conference(Conference),
    Division(Conference, Division),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conference_display() {
        assert_eq!(Conference::Afc.to_string(), "AFC");
        assert_eq!(Conference::Nfc.to_string(), "NFC");
    }

    #[test]
    fn conference_parse_is_case_insensitive() {
        assert_eq!("afc".parse::<Conference>().unwrap(), Conference::Afc);
        assert_eq!(" NFC ".parse::<Conference>().unwrap(), Conference::Nfc);
        assert!("XFL".parse::<Conference>().is_err());
    }

    #[test]
    fn division_roundtrip() {
        for division in [
            Division::North,
            Division::South,
            Division::East,
            Division::West,
        ] {
            assert_eq!(division.to_string().parse::<Division>().unwrap(), division);
        }
        assert!("CENTRAL".parse::<Division>().is_err());
    }

    #[test]
    fn conference_serializes_uppercase() {
        let json = serde_json::to_string(&Conference::Nfc).unwrap();
        assert_eq!(json, r#""NFC""#);
        let json = serde_json::to_string(&Division::West).unwrap();
        assert_eq!(json, r#""WEST""#);
    }
}
