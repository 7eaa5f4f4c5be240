use std::future::Future;

use crate::tvl_utils::usd_sink::UsdValueSink;

/// Inputs for the delegated token-balance summation: query each
/// (owner, token) pair on chain, resolve LP tokens into underlying value
/// when asked to, and add the resulting USD value to the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenSumRequest {
    pub owners: Vec<String>,
    pub tokens: Vec<String>,
    pub resolve_lp: bool,
}

/// External on-chain balance summation. Opaque to the aggregation core
/// beyond this contract; implementations add value to the sink as a side
/// effect.
pub trait TokenBalanceResolver: Send + Sync {
    fn sum_token_balances<Sink>(
        &self,
        request: TokenSumRequest,
        sink: &mut Sink,
    ) -> impl Future<Output = anyhow::Result<()>> + Send
    where
        Sink: UsdValueSink + Send;
}
