use tracing::warn;

use crate::client::{MccClient, Surface};
use crate::decode::{ApiResponse, PathParam};
use crate::error::MccError;
use crate::models::enums::Game;
use crate::models::hall_of_fame::{HallOfFame, HallOfFameGame};

const DEPRECATION: &str = "The /halloffame endpoint is deprecated and will be removed in a future \
     release of the API. See https://github.com/Noxcrew/mcchampionship-api/releases/tag/v1.3.0";

impl<S: Surface> MccClient<S> {
    /// Get the entire Hall of Fame (`/halloffame`).
    #[deprecated(note = "the /halloffame endpoint is deprecated by the API and will be removed")]
    pub async fn hall_of_fame(&self) -> Result<ApiResponse<HallOfFame>, MccError> {
        warn!(surface = S::NAME, "{DEPRECATION}");
        self.fetch(&["halloffame"], None).await
    }

    /// Get a single game's Hall of Fame records (`/halloffame/{game}`).
    #[deprecated(note = "the /halloffame endpoint is deprecated by the API and will be removed")]
    pub async fn hall_of_fame_game(&self, game: Game) -> Result<ApiResponse<HallOfFameGame>, MccError> {
        warn!(surface = S::NAME, %game, "{DEPRECATION}");
        self.fetch(&["halloffame", game.as_str()], Some(PathParam::Game)).await
    }
}
