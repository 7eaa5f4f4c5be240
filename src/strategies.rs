use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use std::sync::Mutex;

use anyhow::{anyhow, Context};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecord {
    pub token_address: String,
}

/// Strategies of one chain, keyed by strategy identifier.
pub type ChainStrategies = BTreeMap<String, StrategyRecord>;

/// The registry document: chain identifier -> strategies.
pub type StrategyDocument = HashMap<String, ChainStrategies>;

/// Memoizing fetch of the strategy-resolution document. Implementations
/// are expected to serve repeated calls with the same cache key from
/// memory.
pub trait StrategySource: Send + Sync {
    fn get_config(
        &self,
        cache_key: &str,
        url: &str,
    ) -> impl Future<Output = anyhow::Result<StrategyDocument>> + Send;
}

#[derive(Default)]
pub struct HttpStrategySource {
    client: Client,
    cache: Mutex<HashMap<String, StrategyDocument>>,
}

impl HttpStrategySource {
    pub fn new() -> Self {
        Self::default()
    }

    fn cached(&self, cache_key: &str) -> Option<StrategyDocument> {
        self.cache
            .lock()
            .expect("strategy cache lock poisoned")
            .get(cache_key)
            .cloned()
    }

    fn store(&self, cache_key: &str, document: StrategyDocument) {
        self.cache
            .lock()
            .expect("strategy cache lock poisoned")
            .insert(cache_key.to_string(), document);
    }
}

impl StrategySource for HttpStrategySource {
    async fn get_config(&self, cache_key: &str, url: &str) -> anyhow::Result<StrategyDocument> {
        if let Some(document) = self.cached(cache_key) {
            return Ok(document);
        }

        let req = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to get the strategy document")?;

        let document: StrategyDocument = match req.status() {
            StatusCode::OK => req
                .json()
                .await
                .context("Expect the endpoint to return a strategy document")?,
            code => return Err(anyhow!("strategy request failed: {:?}", code)),
        };

        self.store(cache_key, document.clone());
        Ok(document)
    }
}
