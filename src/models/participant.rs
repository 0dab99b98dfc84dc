use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Team;

/// A participant in the current event cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    pub username: String,
    pub uuid: Uuid,
    pub stream: String,
}

/// Every team and its participants.
pub type Participants = BTreeMap<Team, Vec<Creator>>;
