use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::enums::Game;

/// Every game's records, keyed by record name.
pub type HallOfFame = BTreeMap<Game, HallOfFameGame>;

/// A single game's records, keyed by record name.
pub type HallOfFameGame = BTreeMap<String, HallOfFameRecord>;

/// A single Hall of Fame record. The record name is the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HallOfFameRecord {
    pub player: String,
    pub value: RecordValue,
    pub placement: i64,
    #[serde(rename = "changedHands")]
    pub changed_hands: bool,
}

/// Records hold either a count or preformatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Integer(i64),
    Text(String),
}

impl RecordValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            RecordValue::Integer(n) => Some(*n),
            RecordValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RecordValue::Text(s) => Some(s),
            RecordValue::Integer(_) => None,
        }
    }
}

impl fmt::Display for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordValue::Integer(n) => write!(f, "{n}"),
            RecordValue::Text(s) => f.write_str(s),
        }
    }
}
