//! HTTP client for the leads search service
//!
//! One GET per search. The parameter names come from [`QueryParams`] so the
//! same client can talk to either deployment of the service.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

use crate::config::{Config, EndpointConfig, QueryParams};
use crate::error::RequestError;
use crate::form::SearchQuery;
use crate::lead::Lead;

/// Anything that can answer a search. The session only sees this trait.
#[async_trait]
pub trait LeadSource: Send + Sync {
  async fn search(&self, query: &SearchQuery) -> Result<Vec<Lead>, RequestError>;
}

/// reqwest-backed [`LeadSource`]
#[derive(Debug, Clone)]
pub struct LeadsClient {
  client: Client,
  endpoint: EndpointConfig,
  params: QueryParams,
}

impl LeadsClient {
  pub fn new(endpoint: EndpointConfig, params: QueryParams) -> Result<Self, RequestError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(endpoint.timeout_secs))
      .build()
      .map_err(|e| RequestError::network(format!("failed to create HTTP client: {e}")))?;

    Ok(Self { client, endpoint, params })
  }

  pub fn from_config(config: &Config) -> Result<Self, RequestError> {
    Self::new(config.endpoint.clone(), config.query.clone())
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.endpoint.timeout_secs)
  }

  /// Build the request URL for a query
  pub fn build_url(&self, query: &SearchQuery) -> Result<Url, RequestError> {
    let mut url =
      Url::parse(&self.endpoint.url()).map_err(|e| RequestError::invalid_endpoint(e.to_string()))?;

    let keywords = query.keywords.join(&self.params.keyword_separator);
    url
      .query_pairs_mut()
      .append_pair(&self.params.country, &query.country)
      .append_pair(&self.params.city, &query.city)
      .append_pair(&self.params.category, &keywords)
      .append_pair(&self.params.limit, &query.limit.to_string());

    Ok(url)
  }

  async fn fetch(&self, url: Url) -> Result<Vec<Lead>, RequestError> {
    let response = self.client.get(url).send().await.map_err(|e| self.transport_error(e))?;

    let status = response.status();
    tracing::debug!(status = status.as_u16(), "leads service answered");
    if !status.is_success() {
      return Err(RequestError::from_status(status.as_u16()));
    }

    let body = response.text().await.map_err(|e| self.transport_error(e))?;
    serde_json::from_str::<Vec<Lead>>(&body)
      .map_err(|e| RequestError::malformed_body(e.to_string()))
  }

  fn transport_error(&self, error: reqwest::Error) -> RequestError {
    if error.is_timeout() {
      RequestError::Timeout { after: self.timeout() }
    } else {
      RequestError::network(error.to_string())
    }
  }
}

#[async_trait]
impl LeadSource for LeadsClient {
  async fn search(&self, query: &SearchQuery) -> Result<Vec<Lead>, RequestError> {
    let url = self.build_url(query)?;
    tracing::debug!(%url, "requesting leads");

    let leads = timeout(self.timeout(), self.fetch(url))
      .await
      .map_err(|_| RequestError::Timeout { after: self.timeout() })??;

    tracing::debug!(count = leads.len(), "received leads");
    Ok(leads)
  }
}
