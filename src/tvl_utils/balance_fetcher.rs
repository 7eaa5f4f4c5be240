use anyhow::Context;

use crate::info_api::{ClearinghouseState, InfoApi, SpotBalance, SpotClearinghouseState};

pub const USDC_COIN: &str = "USDC";
pub const USDHL_COIN: &str = "USDHL";
pub const USDT0_COIN: &str = "USDT0";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StablecoinBalances {
    pub usdhl: f64,
    pub usdt0: f64,
}

/// One address's exchange-accounted USD exposure: margin account value plus
/// the USDC spot holding, with the USDHL/USDT0 holdings broken out
/// separately.
#[derive(Debug, Clone, PartialEq)]
pub struct UsdBalanceSnapshot {
    pub total_perp_and_spot_usdc: f64,
    pub stablecoins: StablecoinBalances,
}

pub async fn fetch_usd_balances<Api: InfoApi>(
    api: &Api,
    user: &str,
) -> anyhow::Result<UsdBalanceSnapshot> {
    // both account queries go out at once, the snapshot combines them
    let (spot, perp) = tokio::try_join!(
        api.spot_clearinghouse_state(user),
        api.clearinghouse_state(user),
    )?;

    snapshot_from_states(spot, perp)
}

pub fn snapshot_from_states(
    spot: SpotClearinghouseState,
    perp: ClearinghouseState,
) -> anyhow::Result<UsdBalanceSnapshot> {
    let account_value = perp
        .margin_summary
        .account_value
        .parse::<f64>()
        .with_context(|| {
            format!(
                "can't parse margin account value: {}",
                perp.margin_summary.account_value
            )
        })?;

    let usdc_total = coin_total(&spot.balances, USDC_COIN)?;

    Ok(UsdBalanceSnapshot {
        total_perp_and_spot_usdc: account_value + usdc_total,
        stablecoins: StablecoinBalances {
            usdhl: coin_total(&spot.balances, USDHL_COIN)?,
            usdt0: coin_total(&spot.balances, USDT0_COIN)?,
        },
    })
}

// a coin missing from the spot balance list is a zero holding, not an error
fn coin_total(balances: &[SpotBalance], coin: &str) -> anyhow::Result<f64> {
    match balances.iter().find(|balance| balance.coin == coin) {
        Some(balance) => balance
            .total
            .parse::<f64>()
            .with_context(|| format!("can't parse {} spot balance: {}", coin, balance.total)),
        None => Ok(0.0),
    }
}

#[cfg(test)]
mod tests {
    use crate::info_api::{ClearinghouseState, MarginSummary, SpotBalance, SpotClearinghouseState};
    use crate::tvl_utils::balance_fetcher::{snapshot_from_states, StablecoinBalances};

    fn spot_state(balances: &[(&str, &str)]) -> SpotClearinghouseState {
        SpotClearinghouseState {
            balances: balances
                .iter()
                .map(|(coin, total)| SpotBalance {
                    coin: coin.to_string(),
                    total: total.to_string(),
                })
                .collect(),
        }
    }

    fn perp_state(account_value: &str) -> ClearinghouseState {
        ClearinghouseState {
            margin_summary: MarginSummary {
                account_value: account_value.to_string(),
            },
        }
    }

    #[test]
    fn combines_margin_and_usdc() {
        let snapshot = snapshot_from_states(
            spot_state(&[("USDC", "100.5"), ("USDHL", "10")]),
            perp_state("50"),
        )
        .unwrap();

        assert_eq!(snapshot.total_perp_and_spot_usdc, 150.5);
        assert_eq!(
            snapshot.stablecoins,
            StablecoinBalances {
                usdhl: 10.0,
                usdt0: 0.0,
            }
        );
    }

    #[test]
    fn missing_usdc_contributes_zero() {
        let snapshot = snapshot_from_states(
            spot_state(&[("HYPE", "3.5"), ("USDT0", "7")]),
            perp_state("50"),
        )
        .unwrap();

        assert_eq!(snapshot.total_perp_and_spot_usdc, 50.0);
        assert_eq!(
            snapshot.stablecoins,
            StablecoinBalances {
                usdhl: 0.0,
                usdt0: 7.0,
            }
        );
    }

    #[test]
    fn empty_spot_balances() {
        let snapshot = snapshot_from_states(spot_state(&[]), perp_state("12.25")).unwrap();

        assert_eq!(snapshot.total_perp_and_spot_usdc, 12.25);
        assert_eq!(snapshot.stablecoins, StablecoinBalances::default());
    }

    #[test]
    fn unparsable_account_value_is_fatal() {
        let result = snapshot_from_states(spot_state(&[]), perp_state("not-a-number"));
        assert!(result.is_err());
        let error_string = result.err().unwrap().to_string();
        assert!(error_string.starts_with("can't parse margin account value"));
    }

    #[test]
    fn unparsable_spot_balance_is_fatal() {
        let result = snapshot_from_states(spot_state(&[("USDC", "")]), perp_state("1"));
        assert!(result.is_err());
        let error_string = result.err().unwrap().to_string();
        assert!(error_string.starts_with("can't parse USDC spot balance"));
    }
}
