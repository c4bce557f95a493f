use std::time::{Duration, Instant};

use async_trait::async_trait;
use gronk_data::Snapshot;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("requesting {url}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with {status}")]
    Status { url: String, status: StatusCode },
    #[error("decoding the activity document from {url}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the poller gets its snapshots from.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot, FetchError>;
}

pub fn activity_url(host: &str, machine: &str) -> String {
    format!("http://{host}/{machine}/activity.json")
}

/// Plain GET of `http://<host>/<machine>/activity.json`, no retries.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(host: &str, machine: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            url: activity_url(host, machine),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SnapshotSource for HttpSource {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let started = Instant::now();
        let transport = |source: reqwest::Error| FetchError::Transport {
            url: self.url.clone(),
            source,
        };

        let response = self.client.get(&self.url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status,
            });
        }
        let body = response.bytes().await.map_err(transport)?;
        let snapshot = Snapshot::from_json(&body).map_err(|source| FetchError::Decode {
            url: self.url.clone(),
            source,
        })?;

        debug!(
            elapsed = ?started.elapsed(),
            bytes = body.len(),
            running = snapshot.running.len(),
            "fetched snapshot"
        );
        Ok(snapshot)
    }
}
