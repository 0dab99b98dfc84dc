use crate::client::{Current, MccClient, Surface};
use crate::decode::ApiResponse;
use crate::error::MccError;
use crate::models::event::{EventInformation, Events};

impl<S: Surface> MccClient<S> {
    /// Get the current event cycle's event (`/event`).
    pub async fn event(&self) -> Result<ApiResponse<EventInformation>, MccError> {
        self.fetch(&["event"], None).await
    }
}

impl MccClient<Current> {
    /// Get every event key the API makes available (`/events`).
    pub async fn events(&self) -> Result<ApiResponse<Events>, MccError> {
        self.fetch(&["events"], None).await
    }
}
