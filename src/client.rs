use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::{ClientConfig, RateLimit};
use crate::decode::{ApiResponse, Decoder, PathParam, RATE_LIMIT_CODE};
use crate::error::{ApiStatus, MccError};
use crate::rate_limit::SlidingWindow;

/// A version of the REST API.
pub trait Surface: fmt::Debug + Clone + Copy + Send + Sync + 'static {
    const NAME: &'static str;
    const RATE_LIMIT: RateLimit;
    const DECODER: Decoder;
}

/// The single-event API.
#[derive(Debug, Clone, Copy)]
pub struct Legacy;

/// The multi-event API.
#[derive(Debug, Clone, Copy)]
pub struct Current;

impl Surface for Legacy {
    const NAME: &'static str = "legacy";
    const RATE_LIMIT: RateLimit = RateLimit::per_minute(40);
    const DECODER: Decoder = Decoder::LEGACY;
}

impl Surface for Current {
    const NAME: &'static str = "current";
    const RATE_LIMIT: RateLimit = RateLimit::per_minute(200);
    const DECODER: Decoder = Decoder::CURRENT;
}

/// Rate-limited client for one REST surface.
///
/// Clones share the rate limiter, so a client and every clone of it draw from
/// the same budget.
#[derive(Debug, Clone)]
pub struct MccClient<S: Surface = Current> {
    pub(crate) http: Client,
    pub(crate) config: Arc<ClientConfig>,
    pub(crate) limiter: Arc<SlidingWindow>,
    user_agent: HeaderValue,
    timeout: Duration,
    _surface: PhantomData<S>,
}

pub type LegacyClient = MccClient<Legacy>;

impl<S: Surface> MccClient<S> {
    pub fn new() -> Result<Self, MccError> {
        Self::with_config(ClientConfig::for_surface::<S>())
    }

    pub fn from_env() -> Result<Self, MccError> {
        Self::with_config(ClientConfig::from_env::<S>())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, MccError> {
        let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|_| {
            MccError::Config(format!("user agent {:?} is not a valid header", config.user_agent))
        })?;
        config.endpoint_url(&[])?;
        let http = Client::builder().build()?;
        let limiter = SlidingWindow::new(config.rate_limit.calls, config.rate_limit.period);

        Ok(Self {
            http,
            timeout: config.timeout,
            config: Arc::new(config),
            limiter: Arc::new(limiter),
            user_agent,
            _surface: PhantomData,
        })
    }

    /// A clone that uses `timeout` for its network calls and shares this client's limiter.
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        Self {
            timeout,
            ..self.clone()
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn limiter(&self) -> &SlidingWindow {
        &self.limiter
    }

    /// Wait for the rate limiter, then GET the endpoint at `segments` and parse
    /// the body as JSON.
    ///
    /// Timeouts come back as [`MccError::Timeout`] and are never retried. An
    /// HTTP 429 is a [`MccError::RateLimit`] whatever the body holds.
    pub(crate) async fn request(&self, segments: &[&str]) -> Result<serde_json::Value, MccError> {
        let url = self.config.endpoint_url(segments)?;
        self.limiter.acquire().await;
        debug!(surface = S::NAME, %url, timeout_ms = self.timeout.as_millis() as u64, "GET");

        let resp = self
            .http
            .get(url.clone())
            .header(USER_AGENT, self.user_agent.clone())
            .timeout(self.timeout)
            .send()
            .await?;
        let status = resp.status();
        debug!(surface = S::NAME, %url, status = status.as_u16(), "response");

        if status == StatusCode::TOO_MANY_REQUESTS {
            let body = resp.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("reason")?.as_str().map(str::to_owned));
            return Err(MccError::RateLimit(ApiStatus::new(RATE_LIMIT_CODE, reason)));
        }

        Ok(resp.json().await?)
    }

    pub(crate) async fn fetch<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        param: Option<PathParam>,
    ) -> Result<ApiResponse<T>, MccError> {
        let payload = self.request(segments).await?;
        S::DECODER.decode(payload, param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clients_get_surface_budgets() {
        let legacy = LegacyClient::new().unwrap();
        assert_eq!(legacy.limiter().limit(), 40);

        let current = MccClient::<Current>::new().unwrap();
        assert_eq!(current.limiter().limit(), 200);
        assert_eq!(current.limiter().window(), Duration::from_secs(60));
    }

    #[test]
    fn with_timeout_shares_the_limiter() {
        let client = MccClient::<Current>::new().unwrap();
        let slow = client.with_timeout(Duration::from_secs(30));

        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert_eq!(slow.timeout(), Duration::from_secs(30));
        assert!(Arc::ptr_eq(&client.limiter, &slow.limiter));
    }

    #[test]
    fn separate_clients_have_separate_limiters() {
        let a = MccClient::<Current>::new().unwrap();
        let b = MccClient::<Current>::new().unwrap();
        assert!(!Arc::ptr_eq(&a.limiter, &b.limiter));
    }

    #[test]
    fn rejects_unusable_base_url() {
        let config = ClientConfig::for_surface::<Current>().with_base_url("mailto:mcc@example.com");
        assert!(matches!(MccClient::<Current>::with_config(config), Err(MccError::Config(_))));
    }

    #[test]
    fn rejects_unusable_user_agent() {
        let config = ClientConfig::for_surface::<Current>().with_user_agent("bad\nagent");
        assert!(MccClient::<Current>::with_config(config).is_err());
    }
}
