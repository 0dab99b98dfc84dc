use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::enums::{Game, Team};

/// Scores, games and participants for a single event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRundown {
    /// Rounds of Dodgebolt won by each of the two finalists.
    pub dodgebolt_data: BTreeMap<Team, i64>,
    /// Final placements, zero-indexed.
    pub event_placements: BTreeMap<Team, i64>,
    pub event_scores: BTreeMap<Team, i64>,
    pub individual_scores: HashMap<String, i64>,
    /// Games keyed by their zero-indexed position in the event.
    pub history: BTreeMap<u32, RundownHistoryGame>,
    pub creators: BTreeMap<Team, Vec<String>>,
}

impl EventRundown {
    /// Games in the order they were played.
    pub fn games(&self) -> impl Iterator<Item = &RundownHistoryGame> {
        self.history.values()
    }

    pub fn multipliers(&self) -> Vec<f64> {
        self.games().map(|g| g.multiplier).collect()
    }
}

/// Score and placement data for one game of one event.
///
/// Statistics-only rounds carry no per-team data, so every mapping is `Some`
/// exactly when the API sent the key, even if it sent an empty object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RundownHistoryGame {
    pub index: u32,
    pub game: Game,
    pub multiplier: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub individual_scores: Option<HashMap<String, i64>>,
    /// Coins earned during this game, multiplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_scores: Option<BTreeMap<Team, i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_scores: Option<BTreeMap<Team, i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_placements: Option<BTreeMap<Team, i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_placements: Option<BTreeMap<Team, i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_empty_mappings_stay_distinct() {
        let game: RundownHistoryGame = serde_json::from_value(json!({
            "index": 3,
            "game": "GLOBAL_STATISTICS",
            "multiplier": 1,
            "gameScores": {}
        }))
        .unwrap();

        assert_eq!(game.game, Game::GlobalStatistics);
        assert_eq!(game.multiplier, 1.0);
        assert_eq!(game.game_scores, Some(BTreeMap::new()));
        assert!(game.event_scores.is_none());
        assert!(game.individual_scores.is_none());
    }

    #[test]
    fn history_orders_numerically() {
        let mut history = serde_json::Map::new();
        for i in (0..12u32).rev() {
            history.insert(
                i.to_string(),
                json!({ "index": i, "game": "MG_DODGEBOLT", "multiplier": 1 }),
            );
        }
        let rundown: EventRundown = serde_json::from_value(json!({
            "dodgeboltData": {},
            "eventPlacements": {},
            "eventScores": {},
            "individualScores": {},
            "history": history,
            "creators": {}
        }))
        .unwrap();

        let indices: Vec<u32> = rundown.games().map(|g| g.index).collect();
        assert_eq!(indices, (0..12).collect::<Vec<_>>());
    }
}
