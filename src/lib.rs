//! Typed, rate-limited access to the MCC event API and the MCC Island GraphQL API.
//!
//! ```no_run
//! # async fn run() -> Result<(), mcc_api::MccError> {
//! use mcc_api::{MccClient, Team};
//!
//! let client: MccClient = MccClient::new()?;
//! let rundown = client.rundown(None).await?;
//! for game in rundown.data.games() {
//!     println!("{} x{}", game.game, game.multiplier);
//! }
//! let red = client.participants_team(Team::Red).await?;
//! println!("{} players on RED", red.data.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod island;
pub mod models;
pub mod rate_limit;

pub use client::{Current, Legacy, LegacyClient, MccClient, Surface};
pub use config::{ClientConfig, RateLimit};
pub use decode::{ApiResponse, Decoder, PathParam};
pub use error::{ApiStatus, MccError};
pub use island::IslandClient;
pub use models::{
    Creator, EventInformation, EventRundown, Events, Game, HallOfFame, HallOfFameGame,
    HallOfFameRecord, LookupError, Participants, RecordValue, RundownHistoryGame, Team,
};
pub use rate_limit::SlidingWindow;

pub type EventInformationResponse = ApiResponse<EventInformation>;
pub type EventsResponse = ApiResponse<Events>;
pub type HallOfFameResponse = ApiResponse<HallOfFame>;
pub type HallOfFameGameResponse = ApiResponse<HallOfFameGame>;
pub type RundownResponse = ApiResponse<EventRundown>;
pub type ParticipantsResponse = ApiResponse<Participants>;
pub type ParticipantsTeamResponse = ApiResponse<Vec<Creator>>;
pub type ParticipantResponse = ApiResponse<Creator>;
