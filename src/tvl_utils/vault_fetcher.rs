use anyhow::Context;

use crate::info_api::{InfoApi, VaultDetails};

/// One address's equity as a follower of the given vault. Transport
/// failures surface as errors from the underlying client; a success
/// response without follower state is a valid "no position" and yields
/// exactly zero.
pub async fn fetch_vault_equity<Api: InfoApi>(
    api: &Api,
    vault_address: &str,
    user: &str,
) -> anyhow::Result<f64> {
    let details = api.vault_details(vault_address, user).await?;
    equity_from_details(details)
}

pub fn equity_from_details(details: VaultDetails) -> anyhow::Result<f64> {
    match details.follower_state {
        Some(follower) => follower
            .vault_equity
            .parse::<f64>()
            .with_context(|| format!("can't parse vault equity: {}", follower.vault_equity)),
        None => Ok(0.0),
    }
}
