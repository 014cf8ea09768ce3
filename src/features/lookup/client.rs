use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::time::Duration;

use crate::data::models::{CorrectionList, LookupResult, Query, SuggestionList};
use crate::features::lookup::ServiceError;

/// Word sent by the reachability probe.
const PROBE_WORD: &str = "test";

/// HTTP client for the remote dictionary service.
///
/// Every call is a single `GET` with one percent-encoded query parameter.
/// No retries, no caching.
#[derive(Clone)]
pub struct DictionaryClient {
    http: Client,
    base_url: String,
}

impl DictionaryClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> Result<Self, ServiceError> {
        let http = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `true` iff the lookup endpoint answers with a 2xx status.
    pub async fn probe(&self) -> bool {
        match self
            .http
            .get(self.endpoint("/search"))
            .query(&[("word", PROBE_WORD)])
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::debug!("Status probe failed: {}", e);
                false
            }
        }
    }

    pub async fn lookup(&self, word: &Query) -> Result<LookupResult, ServiceError> {
        self.get_json("/search", "word", word).await
    }

    pub async fn suggestions(&self, prefix: &Query) -> Result<SuggestionList, ServiceError> {
        self.get_json("/suggestions", "prefix", prefix).await
    }

    pub async fn corrections(&self, word: &Query) -> Result<CorrectionList, ServiceError> {
        self.get_json("/corrections", "word", word).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        param: &str,
        value: &Query,
    ) -> Result<T, ServiceError> {
        let response = self
            .http
            .get(self.endpoint(path))
            .query(&[(param, value.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Status(status));
        }

        response.json::<T>().await.map_err(ServiceError::decode)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
