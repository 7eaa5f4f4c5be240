use itertools::Itertools;

use crate::config::ProtocolConfig;
use crate::info_api::InfoApi;
use crate::strategies::StrategySource;
use crate::token_resolver::{TokenBalanceResolver, TokenSumRequest};
use crate::tvl_utils::address_filter::sanitize_and_validate_evm_addresses;
use crate::tvl_utils::balance_fetcher::fetch_usd_balances;
use crate::tvl_utils::usd_sink::UsdValueSink;
use crate::tvl_utils::vault_fetcher::fetch_vault_equity;

/// Computes the protocol TVL and reports it into the sink. Totals are
/// reported only when strictly positive, and the first failed fetch
/// aborts the whole run before anything reaches the sink.
pub async fn run_tvl<Api, Strategies, Resolver, Sink>(
    api: &Api,
    strategies: &Strategies,
    resolver: &Resolver,
    config: &ProtocolConfig,
    sink: &mut Sink,
) -> anyhow::Result<()>
where
    Api: InfoApi,
    Strategies: StrategySource,
    Resolver: TokenBalanceResolver,
    Sink: UsdValueSink + Send,
{
    let mut total_whlp_tvl = 0.0;
    let mut total_usd_balances = 0.0;

    for multisig in config.hyper_core_multisigs.iter() {
        let vault_equity = fetch_vault_equity(api, &config.hlp_vault_address, multisig).await?;
        total_whlp_tvl += vault_equity;

        let balances = fetch_usd_balances(api, multisig).await?;
        total_usd_balances += balances.total_perp_and_spot_usdc;

        // the stablecoin breakdown feeds no total yet, keep it visible
        tracing::debug!(
            "multisig {}: vault equity {}, perp+spot {}, USDHL {}, USDT0 {}",
            multisig,
            vault_equity,
            balances.total_perp_and_spot_usdc,
            balances.stablecoins.usdhl,
            balances.stablecoins.usdt0,
        );
    }

    tracing::info!(
        "hyper core totals: vault equity {}, usd balances {}",
        total_whlp_tvl,
        total_usd_balances
    );

    if total_whlp_tvl > 0.0 {
        sink.add_usd_value(total_whlp_tvl);
    }
    if total_usd_balances > 0.0 {
        sink.add_usd_value(total_usd_balances);
    }

    let document = strategies
        .get_config(
            &config.strategies_cache_key,
            &config.underlying_strategies_url(),
        )
        .await?;

    // no entry for the chain is a valid empty-strategy state
    if let Some(chain_strategies) = document.get(&config.chain_id) {
        let mut tokens: Vec<String> = chain_strategies
            .values()
            .map(|strategy| strategy.token_address.clone())
            .collect();
        tokens.push(config.lhype_vault_address.clone());
        tokens.push(config.usdhl_token_address.clone());
        let tokens = sanitize_and_validate_evm_addresses(&tokens);

        tracing::info!("resolving strategy tokens: {}", tokens.iter().join(", "));

        resolver
            .sum_token_balances(
                TokenSumRequest {
                    owners: vec![
                        config.lhype_vault_address.clone(),
                        config.whlp_vault_address.clone(),
                    ],
                    tokens,
                    resolve_lp: true,
                },
                sink,
            )
            .await?;
    }

    Ok(())
}
