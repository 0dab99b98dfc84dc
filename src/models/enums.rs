use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A token that is not a member of a closed identifier set.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} identifier `{token}`")]
pub struct LookupError {
    pub kind: &'static str,
    pub token: String,
}

// One table per enum drives Display, FromStr and serde so every path validates the same way.
macro_rules! identifier_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $($variant:ident => $token:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant,)+];

            /// Canonical token used by the API.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = LookupError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    other => Err(LookupError { kind: $kind, token: other.to_string() }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                token.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

identifier_enum! {
    /// Game identifiers accepted and returned by the event API.
    Game ("game") {
        RocketSpleef => "MG_ROCKET_SPLEEF",
        SurvivalGames => "MG_SURVIVAL_GAMES",
        ParkourWarrior => "MG_PARKOUR_WARRIOR",
        AceRace => "MG_ACE_RACE",
        BingoButFast => "MG_BINGO_BUT_FAST",
        Tgttosawaf => "MG_TGTTOSAWAF",
        Skyblockle => "MG_SKYBLOCKLE",
        SkyBattle => "MG_SKY_BATTLE",
        HoleInTheWall => "MG_HOLE_IN_THE_WALL",
        BattleBox => "MG_BATTLE_BOX",
        BuildMart => "MG_BUILD_MART",
        SandsOfTime => "MG_SANDS_OF_TIME",
        Dodgebolt => "MG_DODGEBOLT",
        ParkourTag => "MG_PARKOUR_TAG",
        GridRunners => "MG_GRID_RUNNERS",
        Meltdown => "MG_MELTDOWN",
        GlobalStatistics => "GLOBAL_STATISTICS",
        LegacyStatistics => "LEGACY_STATISTICS",
        LockoutBingo => "MG_LOCKOUT_BINGO",
        FootRace => "MG_FOOT_RACE",
        RocketSpleefOld => "MG_ROCKET_SPLEEF_OLD",
        RailroadRush => "MG_RAILROAD_RUSH",
    }
}

identifier_enum! {
    /// Team identifiers accepted and returned by the event API.
    Team ("team") {
        Red => "RED",
        Orange => "ORANGE",
        Yellow => "YELLOW",
        Lime => "LIME",
        Green => "GREEN",
        Cyan => "CYAN",
        Aqua => "AQUA",
        Blue => "BLUE",
        Purple => "PURPLE",
        Pink => "PINK",
        Spectators => "SPECTATORS",
        None => "NONE",
    }
}

impl Team {
    /// The ten competing teams, excluding spectators and the unassigned bucket.
    pub const PLAYING: &'static [Team] = &[
        Team::Red,
        Team::Orange,
        Team::Yellow,
        Team::Lime,
        Team::Green,
        Team::Cyan,
        Team::Aqua,
        Team::Blue,
        Team::Purple,
        Team::Pink,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn every_game_round_trips() {
        for game in Game::ALL {
            assert_eq!(game.as_str().parse::<Game>().unwrap(), *game);
            let json = serde_json::to_string(game).unwrap();
            assert_eq!(serde_json::from_str::<Game>(&json).unwrap(), *game);
        }
    }

    #[test]
    fn every_team_round_trips() {
        for team in Team::ALL {
            assert_eq!(team.to_string().parse::<Team>().unwrap(), *team);
        }
        assert_eq!(Team::ALL.len(), 12);
    }

    #[test]
    fn unknown_token_is_rejected() {
        let err = "MG_NOT_A_GAME".parse::<Game>().unwrap_err();
        assert_eq!(err.kind, "game");
        assert_eq!(err.token, "MG_NOT_A_GAME");

        // tokens are case sensitive
        assert!("red".parse::<Team>().is_err());
        assert!(serde_json::from_str::<Team>("\"WHITE\"").is_err());
    }

    #[test]
    fn enum_map_keys_are_validated() {
        let ok: BTreeMap<Team, i64> = serde_json::from_str(r#"{"RED": 1, "NONE": 0}"#).unwrap();
        assert_eq!(ok[&Team::Red], 1);

        let bad = serde_json::from_str::<BTreeMap<Team, i64>>(r#"{"RED": 1, "WHITE": 2}"#);
        assert!(bad.is_err());
    }
}
