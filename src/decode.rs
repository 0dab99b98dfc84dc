//! Envelope classification and typed decoding of REST payloads.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiStatus, MccError};

pub const RATE_LIMIT_CODE: u16 = 429;

/// Path parameter an endpoint takes, deciding which error an invalid-parameter
/// status maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathParam {
    Game,
    Team,
    Event,
    Participant,
}

impl PathParam {
    fn reject(self, status: ApiStatus) -> MccError {
        match self {
            PathParam::Game => MccError::InvalidGame(status),
            PathParam::Team => MccError::InvalidTeam(status),
            PathParam::Event => MccError::InvalidEvent(status),
            PathParam::Participant => MccError::InvalidParticipant(status),
        }
    }
}

/// A decoded envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub reason: Option<String>,
    pub data: T,
    json: String,
}

impl<T> ApiResponse<T> {
    /// The envelope exactly as the API returned it, re-serialized.
    pub fn json(&self) -> &str {
        &self.json
    }

    pub fn into_data(self) -> T {
        self.data
    }
}

/// Turns envelopes into typed responses or taxonomy errors.
///
/// Surfaces differ only in which codes mean "unknown path parameter".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoder {
    invalid_param_codes: &'static [u16],
}

impl Decoder {
    pub const LEGACY: Decoder = Decoder {
        invalid_param_codes: &[400],
    };
    pub const CURRENT: Decoder = Decoder {
        invalid_param_codes: &[400, 404],
    };

    pub fn decode_str<T: DeserializeOwned>(
        &self,
        raw: &str,
        param: Option<PathParam>,
    ) -> Result<ApiResponse<T>, MccError> {
        let payload: Value = serde_json::from_str(raw)?;
        self.decode(payload, param)
    }

    /// Classify the envelope, then decode `data` into `T`.
    ///
    /// A 429 wins over every other check, then the endpoint's invalid-parameter
    /// codes, then any other non-2xx code. Only a successful envelope reaches
    /// the typed decode, where an unknown enum token fails the whole payload.
    pub fn decode<T: DeserializeOwned>(
        &self,
        payload: Value,
        param: Option<PathParam>,
    ) -> Result<ApiResponse<T>, MccError> {
        let json = payload.to_string();
        let mut envelope = match payload {
            Value::Object(map) => map,
            other => {
                return Err(MccError::Envelope(format!(
                    "expected a JSON object, found {}",
                    kind_of(&other)
                )))
            }
        };

        let code = envelope
            .get("code")
            .and_then(Value::as_u64)
            .and_then(|c| u16::try_from(c).ok())
            .ok_or_else(|| MccError::Envelope("missing integer `code`".into()))?;
        let reason = match envelope.get("reason") {
            Some(Value::String(reason)) => Some(reason.clone()),
            _ => None,
        };
        let status = ApiStatus::new(code, reason);

        if code == RATE_LIMIT_CODE {
            return Err(MccError::RateLimit(status));
        }
        if let Some(param) = param {
            if self.invalid_param_codes.contains(&code) {
                return Err(param.reject(status));
            }
        }
        if !(200..300).contains(&code) {
            return Err(MccError::Api(status));
        }

        let data = envelope
            .remove("data")
            .ok_or_else(|| MccError::Envelope(format!("code {code} envelope has no `data`")))?;
        let data = serde_json::from_value(data)?;

        Ok(ApiResponse {
            code: status.code,
            reason: status.reason,
            data,
            json,
        })
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
