//! End-to-end wiring: configuration to aggregator to ranked trades.

mod support;

use std::sync::Arc;

use alloy_primitives::{address, U256};
use ecorouter::domain::{ChainId, CurrencyAmount, Token};
use ecorouter::infrastructure::bootstrap::{build_aggregator, build_source_registry, Backends};
use ecorouter::infrastructure::config::settings::Config;
use ecorouter::port::ExactInParams;
use ecorouter::testkit::config::GNOSIS;
use ecorouter::testkit::quoter::{ScriptedPairQuoter, ScriptedPoolQuoter};
use ecorouter::testkit::source::MockSource;

use support::assertions::{failed_platforms, ranked_platforms};

fn usdc() -> Token {
    Token::new(
        ChainId::Gnosis,
        address!("0xDDAfbb505ad214D7b80b1f830fcCc89B60fb7A83"),
        6,
    )
    .with_symbol("USDC")
}

fn usdt() -> Token {
    Token::new(
        ChainId::Gnosis,
        address!("0x4ECaBa5870353805a9F068101A40E0f32ed605C6"),
        6,
    )
    .with_symbol("USDT")
}

#[test]
fn registry_has_one_source_per_platform_plus_pools() {
    let config = Config::parse_toml(GNOSIS).unwrap();
    let registry = build_source_registry(
        &config,
        Backends {
            pool_quoter: Some(Arc::new(ScriptedPoolQuoter::new())),
            pair_quoter: Some(Arc::new(ScriptedPairQuoter::new())),
            extra_sources: vec![Arc::new(MockSource::new("zerox").on_chains(&[ChainId::Mainnet]))],
        },
    );

    assert_eq!(registry.len(), 4);
    let gnosis: Vec<_> = registry
        .platforms_on(ChainId::Gnosis)
        .into_iter()
        .map(|platform| platform.as_str())
        .collect();
    assert_eq!(gnosis, ["swapr", "honeyswap", "curve"]);
}

#[test]
fn registry_without_backends_is_empty() {
    let config = Config::parse_toml(GNOSIS).unwrap();
    let registry = build_source_registry(&config, Backends::default());
    assert!(registry.is_empty());
}

#[tokio::test]
async fn configured_aggregator_ranks_pool_and_pair_quotes() {
    let config = Config::parse_toml(GNOSIS).unwrap();
    let aggregator = build_aggregator(
        &config,
        Backends {
            pool_quoter: Some(Arc::new(
                ScriptedPoolQuoter::new().with_quote("x3pool", U256::from(999_000u64)),
            )),
            pair_quoter: Some(Arc::new(
                ScriptedPairQuoter::new().with_route(1_000_000, 995_000),
            )),
            extra_sources: vec![Arc::new(MockSource::new("cow").failing("rate limited"))],
        },
    );
    assert_eq!(aggregator.source_count(), 4);

    let params = ExactInParams::new(
        CurrencyAmount::new(usdc(), U256::from(1_000_000u64)),
        usdt(),
        config.default_slippage(),
    );
    let results = aggregator
        .get_exact_in(&params, &config.source_options(ChainId::Gnosis))
        .await;

    assert_eq!(ranked_platforms(&results), ["curve", "swapr", "honeyswap"]);
    assert_eq!(failed_platforms(&results), ["cow"]);

    let best = results.best().unwrap();
    assert_eq!(best.output_amount().raw(), U256::from(999_000u64));
    // 999000 / 1.01
    assert_eq!(best.minimum_amount_out().raw(), U256::from(989_108u64));
}
