pub mod enums;
pub mod event;
pub mod hall_of_fame;
pub mod participant;
pub mod rundown;

pub use enums::{Game, LookupError, Team};
pub use event::{EventInformation, Events};
pub use hall_of_fame::{HallOfFame, HallOfFameGame, HallOfFameRecord, RecordValue};
pub use participant::{Creator, Participants};
pub use rundown::{EventRundown, RundownHistoryGame};
