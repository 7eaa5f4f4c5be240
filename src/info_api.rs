use anyhow::{anyhow, Context};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::config::HYPERLIQUID_INFO_URL;

/// Request bodies accepted by the info endpoint, discriminated by `type`.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InfoRequest {
    SpotClearinghouseState {
        user: String,
    },
    ClearinghouseState {
        user: String,
    },
    #[serde(rename_all = "camelCase")]
    VaultDetails {
        vault_address: String,
        user: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotClearinghouseState {
    pub balances: Vec<SpotBalance>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpotBalance {
    pub coin: String,
    pub total: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearinghouseState {
    pub margin_summary: MarginSummary,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginSummary {
    pub account_value: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultDetails {
    pub follower_state: Option<FollowerState>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowerState {
    pub vault_equity: String,
}

/// Per-account state queries against the trading platform.
pub trait InfoApi: Send + Sync {
    fn spot_clearinghouse_state(
        &self,
        user: &str,
    ) -> impl Future<Output = anyhow::Result<SpotClearinghouseState>> + Send;

    fn clearinghouse_state(
        &self,
        user: &str,
    ) -> impl Future<Output = anyhow::Result<ClearinghouseState>> + Send;

    fn vault_details(
        &self,
        vault_address: &str,
        user: &str,
    ) -> impl Future<Output = anyhow::Result<VaultDetails>> + Send;
}

pub struct HttpInfoClient {
    client: Client,
    endpoint: String,
}

impl HttpInfoClient {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.append(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP Client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn mainnet() -> anyhow::Result<Self> {
        Self::new(HYPERLIQUID_INFO_URL)
    }

    async fn info<T: DeserializeOwned>(&self, request: &InfoRequest) -> anyhow::Result<T> {
        let req = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .context("Failed to post to the info endpoint")?;

        match req.status() {
            StatusCode::OK => req
                .json()
                .await
                .context("Expect the info endpoint to return the requested state"),
            code => Err(anyhow!("info request failed: {:?}", code)),
        }
    }
}

impl InfoApi for HttpInfoClient {
    async fn spot_clearinghouse_state(
        &self,
        user: &str,
    ) -> anyhow::Result<SpotClearinghouseState> {
        self.info(&InfoRequest::SpotClearinghouseState {
            user: user.to_string(),
        })
        .await
    }

    async fn clearinghouse_state(&self, user: &str) -> anyhow::Result<ClearinghouseState> {
        self.info(&InfoRequest::ClearinghouseState {
            user: user.to_string(),
        })
        .await
    }

    async fn vault_details(&self, vault_address: &str, user: &str) -> anyhow::Result<VaultDetails> {
        self.info(&InfoRequest::VaultDetails {
            vault_address: vault_address.to_string(),
            user: user.to_string(),
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::info_api::{ClearinghouseState, InfoRequest, SpotClearinghouseState, VaultDetails};
    use serde_json::json;

    #[test]
    fn request_bodies_are_tagged() {
        let spot = serde_json::to_value(InfoRequest::SpotClearinghouseState {
            user: "0xabc".to_string(),
        })
        .unwrap();
        assert_eq!(spot, json!({"type": "spotClearinghouseState", "user": "0xabc"}));

        let perp = serde_json::to_value(InfoRequest::ClearinghouseState {
            user: "0xabc".to_string(),
        })
        .unwrap();
        assert_eq!(perp, json!({"type": "clearinghouseState", "user": "0xabc"}));

        let vault = serde_json::to_value(InfoRequest::VaultDetails {
            vault_address: "0xdef".to_string(),
            user: "0xabc".to_string(),
        })
        .unwrap();
        assert_eq!(
            vault,
            json!({"type": "vaultDetails", "vaultAddress": "0xdef", "user": "0xabc"})
        );
    }

    #[test]
    fn parse_spot_state() {
        let state: SpotClearinghouseState = serde_json::from_str(
            r#"{"balances": [{"coin": "USDC", "total": "100.5", "hold": "0.0"}]}"#,
        )
        .unwrap();
        assert_eq!(state.balances.len(), 1);
        assert_eq!(state.balances[0].coin, "USDC");
        assert_eq!(state.balances[0].total, "100.5");
    }

    #[test]
    fn parse_clearinghouse_state() {
        let state: ClearinghouseState =
            serde_json::from_str(r#"{"marginSummary": {"accountValue": "50"}}"#).unwrap();
        assert_eq!(state.margin_summary.account_value, "50");

        let missing = serde_json::from_str::<ClearinghouseState>(r#"{}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn parse_vault_details() {
        let empty: VaultDetails = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.follower_state.is_none());

        let with_follower: VaultDetails =
            serde_json::from_str(r#"{"followerState": {"vaultEquity": "42.0"}}"#).unwrap();
        assert_eq!(with_follower.follower_state.unwrap().vault_equity, "42.0");
    }
}
