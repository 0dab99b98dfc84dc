use uuid::Uuid;

use crate::client::{Current, MccClient, Surface};
use crate::decode::{ApiResponse, PathParam};
use crate::error::MccError;
use crate::models::enums::Team;
use crate::models::participant::{Creator, Participants};

impl<S: Surface> MccClient<S> {
    /// Get every team and its participants (`/participants`).
    pub async fn participants(&self) -> Result<ApiResponse<Participants>, MccError> {
        self.fetch(&["participants"], None).await
    }

    /// Get one team's participants (`/participants/{team}`).
    pub async fn participants_team(&self, team: Team) -> Result<ApiResponse<Vec<Creator>>, MccError> {
        self.fetch(&["participants", team.as_str()], Some(PathParam::Team)).await
    }
}

impl MccClient<Current> {
    /// Get a single participant by Minecraft UUID (`/participant/{uuid}`).
    ///
    /// Accepts dashed and undashed UUIDs. Malformed input is rejected before
    /// any request is made.
    pub async fn participant(&self, uuid: &str) -> Result<ApiResponse<Creator>, MccError> {
        let uuid = normalize_uuid(uuid)?;
        self.fetch(&["participant", uuid.as_str()], Some(PathParam::Participant)).await
    }
}

/// Hyphenated lowercase form of a dashed or undashed UUID.
pub fn normalize_uuid(raw: &str) -> Result<String, MccError> {
    let uuid = Uuid::parse_str(raw.trim())?;
    Ok(uuid.hyphenated().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dashed_and_undashed() {
        let dashed = normalize_uuid("3e7a89ee-c4e2-4392-a317-444b861b0794").unwrap();
        let undashed = normalize_uuid("3e7a89eec4e24392a317444b861b0794").unwrap();
        assert_eq!(dashed, undashed);
        assert_eq!(dashed, "3e7a89ee-c4e2-4392-a317-444b861b0794");
    }

    #[test]
    fn lowercases_input() {
        let uuid = normalize_uuid("3E7A89EEC4E24392A317444B861B0794").unwrap();
        assert_eq!(uuid, "3e7a89ee-c4e2-4392-a317-444b861b0794");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(normalize_uuid("not-a-uuid"), Err(MccError::InvalidUuid(_))));
        assert!(normalize_uuid("3e7a89eec4e24392a317444b861b079").is_err());
    }
}
