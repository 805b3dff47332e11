/// Results provider client: athlete search and per-athlete results.
use h2h_core::{AthleteCandidate, Performance};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Connection settings for the provider.
pub struct ProviderConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider returned {status} for {url}: {body}")]
    Http {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("unexpected response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid provider endpoint '{0}'")]
    Endpoint(String),
}

pub struct ResultsProvider {
    client: Client,
    base: String,
}

impl ResultsProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let base = config.endpoint.trim_end_matches('/').to_string();
        if Url::parse(&base).is_err() {
            return Err(ProviderError::Endpoint(config.endpoint.clone()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|source| ProviderError::Request {
                url: base.clone(),
                source,
            })?;

        Ok(ResultsProvider { client, base })
    }

    /// `GET {base}/athletes/search?name=<query>`
    pub async fn search_athletes(&self, name: &str) -> Result<Vec<AthleteCandidate>, ProviderError> {
        let url = format!("{}/athletes/search", self.base);
        self.get_json(&url, &[("name", name.to_string())]).await
    }

    /// `GET {base}/athletes/{id}/results`, with `?year=` only when a year is given.
    pub async fn fetch_results(
        &self,
        athlete_id: i64,
        year: Option<u32>,
    ) -> Result<Vec<Performance>, ProviderError> {
        let url = format!("{}/athletes/{athlete_id}/results", self.base);
        let query: Vec<(&str, String)> = year.map(|y| ("year", y.to_string())).into_iter().collect();
        self.get_json(&url, &query).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        debug!(url, ?query, "provider request");

        let resp = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| ProviderError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|source| ProviderError::Request {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(ProviderError::Http {
                status,
                url: url.to_string(),
                body: body.chars().take(200).collect(),
            });
        }

        debug!(url, %status, bytes = body.len(), "provider response");
        serde_json::from_str(&body).map_err(|source| ProviderError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
