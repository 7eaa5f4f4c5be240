use std::fs::File;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use itertools::Itertools;
use serde::Deserialize;

use tracing_subscriber::prelude::*;

use looped_hype_tvl::config::ProtocolConfig;
use looped_hype_tvl::info_api::HttpInfoClient;
use looped_hype_tvl::strategies::HttpStrategySource;
use looped_hype_tvl::token_resolver::{TokenBalanceResolver, TokenSumRequest};
use looped_hype_tvl::tvl::run_tvl;
use looped_hype_tvl::tvl_utils::usd_sink::{UsdValueSink, UsdValueTotal};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    info_endpoint: String,
    strategies_endpoint: String,
}

#[derive(Parser, Debug)]
#[clap(version)]
pub struct Cli {
    /// path to config file
    #[clap(long, value_parser)]
    config_path: PathBuf,
}

// on-chain token summation lives outside this crate; report what would be
// delegated instead of resolving it
struct ReportOnlyResolver;

impl TokenBalanceResolver for ReportOnlyResolver {
    async fn sum_token_balances<Sink>(
        &self,
        request: TokenSumRequest,
        _sink: &mut Sink,
    ) -> anyhow::Result<()>
    where
        Sink: UsdValueSink + Send,
    {
        tracing::info!(
            "token summation delegated: owners [{}], tokens [{}], resolve_lp: {}",
            request.owners.iter().join(", "),
            request.tokens.iter().join(", "),
            request.resolve_lp
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    let result = _main().await;
    result.unwrap();
}

async fn _main() -> anyhow::Result<()> {
    // Start logging setup block
    let fmt_layer = tracing_subscriber::fmt::layer().with_test_writer();

    tracing_subscriber::registry().with(fmt_layer).init();

    let Cli { config_path } = Cli::parse();

    tracing::info!("Config file {:?}", config_path);
    let file = File::open(&config_path).with_context(|| {
        format!(
            "Cannot read config file {path}",
            path = config_path.display()
        )
    })?;
    let config: Config = serde_yaml::from_reader(file).with_context(|| {
        format!(
            "Cannot read config file {path}",
            path = config_path.display()
        )
    })?;

    let api = HttpInfoClient::new(config.info_endpoint)?;
    let strategies = HttpStrategySource::new();
    let protocol = ProtocolConfig {
        strategies_endpoint: config.strategies_endpoint,
        ..ProtocolConfig::default()
    };

    let mut sink = UsdValueTotal::default();
    run_tvl(&api, &strategies, &ReportOnlyResolver, &protocol, &mut sink).await?;

    tracing::info!(
        "total value locked: {} usd over {} contributions",
        sink.total(),
        sink.contributions()
    );

    Ok(())
}
