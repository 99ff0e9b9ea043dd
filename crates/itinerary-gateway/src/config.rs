//! REST gateway configuration

/// Configuration for [`crate::RestGateway`]
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the trip-plan service
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl GatewayConfig {
    /// Create configuration for a service base URL
    #[inline]
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// With User-Agent header
    #[inline]
    #[must_use]
    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 30,
            user_agent: format!("itinerary-gateway/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
