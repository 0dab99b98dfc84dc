use std::env;
use std::time::Duration;

use reqwest::Url;
use tracing::warn;

use crate::client::Surface;
use crate::error::MccError;

pub const DEFAULT_BASE_URL: &str = "https://api.mcchampionship.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
pub const USER_AGENT: &str = concat!("mcc-api/", env!("CARGO_PKG_VERSION"));

/// Call budget over a sliding window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub calls: u32,
    pub period: Duration,
}

impl RateLimit {
    pub const fn per_minute(calls: u32) -> Self {
        Self {
            calls,
            period: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// Bounds each network call, not the time spent waiting on the rate limiter.
    pub timeout: Duration,
    pub rate_limit: RateLimit,
}

impl ClientConfig {
    /// Defaults for the given API surface.
    pub fn for_surface<S: Surface>() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            rate_limit: S::RATE_LIMIT,
        }
    }

    /// Surface defaults overridden by `MCC_API_BASE_URL`, `MCC_API_TIMEOUT_SECS`
    /// and `MCC_API_USER_AGENT`.
    pub fn from_env<S: Surface>() -> Self {
        let mut config = Self::for_surface::<S>();
        if let Ok(base_url) = env::var("MCC_API_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(user_agent) = env::var("MCC_API_USER_AGENT") {
            config.user_agent = user_agent;
        }
        if let Ok(raw) = env::var("MCC_API_TIMEOUT_SECS") {
            match raw.parse::<f64>() {
                Ok(secs) if secs > 0.0 && secs.is_finite() => {
                    config.timeout = Duration::from_secs_f64(secs)
                }
                _ => warn!(value = %raw, "ignoring invalid MCC_API_TIMEOUT_SECS"),
            }
        }
        config
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Full URL for an endpoint path such as `["participants", "RED"]`.
    ///
    /// Each segment is percent-encoded, so `/`, `?` and `#` in caller input stay
    /// inside their segment.
    pub fn endpoint_url(&self, segments: &[&str]) -> Result<Url, MccError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| MccError::Config(format!("base URL {:?}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| MccError::Config(format!("base URL {:?} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
