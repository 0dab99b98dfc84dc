use crate::client::{MccClient, Surface};
use crate::decode::{ApiResponse, PathParam};
use crate::error::MccError;
use crate::models::rundown::EventRundown;

impl<S: Surface> MccClient<S> {
    /// Get an event's rundown: the latest event for `None` (`/rundown`), or
    /// the named one (`/rundown/{event}`).
    pub async fn rundown(&self, event: Option<&str>) -> Result<ApiResponse<EventRundown>, MccError> {
        match event.filter(|e| !e.is_empty()) {
            Some(event) => self.fetch(&["rundown", event], Some(PathParam::Event)).await,
            None => self.fetch(&["rundown"], None).await,
        }
    }
}
