//! JSON-over-HTTP gateway against the trip-plan service
//!
//! Speaks the two endpoints of the itinerary protocol:
//! - `GET {base}/trip-plan-itinerary/by-trip-id/{tripId}`
//! - `PUT {base}/trip-plan-itinerary/{id}`

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::ItineraryGateway;
use async_trait::async_trait;
use itinerary_model::{ItineraryDocument, TripId};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use url::Url;

/// REST implementation of [`ItineraryGateway`]
#[derive(Debug, Clone)]
pub struct RestGateway {
    http: Client,
    base_url: Url,
}

impl RestGateway {
    /// Create a gateway from configuration
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidUrl`] for an unparseable base URL and
    /// [`GatewayError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| GatewayError::InvalidUrl(format!("{}: {e}", config.base_url)))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, GatewayError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| GatewayError::InvalidUrl("base url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_document(response: Response) -> Result<ItineraryDocument, GatewayError> {
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::NotFound(body));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        response.json::<ItineraryDocument>().await.map_err(Into::into)
    }
}

#[async_trait]
impl ItineraryGateway for RestGateway {
    async fn fetch_by_trip(&self, trip: &TripId) -> Result<ItineraryDocument, GatewayError> {
        let url = self.endpoint(&["trip-plan-itinerary", "by-trip-id", trip.as_str()])?;
        tracing::debug!(%trip, %url, "fetching itinerary");

        let response = self.http.get(url).send().await?;
        let doc = Self::read_document(response).await?;

        tracing::info!(%trip, id = %doc.id, entries = doc.entry_count(), "itinerary fetched");
        Ok(doc)
    }

    async fn persist(&self, doc: &ItineraryDocument) -> Result<ItineraryDocument, GatewayError> {
        let url = self.endpoint(&["trip-plan-itinerary", doc.id.as_str()])?;
        tracing::debug!(id = %doc.id, %url, entries = doc.entry_count(), "persisting itinerary");

        let response = self.http.put(url).json(doc).send().await?;
        let stored = Self::read_document(response).await?;

        tracing::info!(id = %stored.id, entries = stored.entry_count(), "itinerary persisted");
        Ok(stored)
    }
}
