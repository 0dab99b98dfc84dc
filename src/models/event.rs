use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// The current event cycle's event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInformation {
    /// Start of the event, with the offset the API reported.
    pub date: DateTime<FixedOffset>,
    pub event: String,
    #[serde(rename = "updateVideo")]
    pub update_video: Option<String>,
}

/// Event keys made available by the API, mapped to their descriptors.
pub type Events = BTreeMap<String, serde_json::Value>;
