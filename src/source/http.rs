use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::time::timeout;

use super::{FetchError, TaskSource};
use crate::config::SourceConfig;

/// One item of the remote collection; only the title is used.
#[derive(Debug, Deserialize)]
struct RemoteTask {
    title: String,
}

/// Fetches task titles over HTTP.
pub struct HttpTaskSource {
    client: Client,
    url: Url,
    request_timeout: Duration,
}

impl HttpTaskSource {
    /// Build a source from configuration.
    ///
    /// The request URL is `config.url` with `_limit=<config.limit>` appended.
    pub fn new(config: &SourceConfig) -> Result<Self, FetchError> {
        let mut url = Url::parse(&config.url).map_err(|e| FetchError::InvalidUrl {
            url: config.url.clone(),
            reason: e.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair("_limit", &config.limit.to_string());

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(u64::from(config.connect_timeout_seconds)))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url,
            request_timeout: Duration::from_secs(u64::from(config.timeout_seconds)),
        })
    }

    /// Full request URL, including the limit parameter.
    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn do_fetch(&self) -> Result<Vec<String>, FetchError> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Connection {
                url: self.url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Connection {
            url: self.url.to_string(),
            source: e,
        })?;

        let items: Vec<RemoteTask> = serde_json::from_slice(&body)?;
        Ok(items.into_iter().map(|item| item.title).collect())
    }
}

#[async_trait]
impl TaskSource for HttpTaskSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_titles(&self) -> Result<Vec<String>, FetchError> {
        match timeout(self.request_timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }
}
