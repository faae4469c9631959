//! Integration tests for the aggregation orchestrator.

mod support;

use std::sync::Arc;
use std::time::Duration;

use ecorouter::application::{Aggregator, SourceRegistry};
use ecorouter::domain::{ChainId, TradeType};
use ecorouter::port::SourceOptions;
use ecorouter::testkit::domain::trade;
use ecorouter::testkit::source::MockSource;

use support::assertions::{assert_unsupported_chain, failed_platforms, is_timeout, ranked_platforms};
use support::swap;

fn aggregator(sources: &[Arc<MockSource>]) -> Aggregator {
    let mut registry = SourceRegistry::new();
    for source in sources {
        registry.register(source.clone());
    }
    Aggregator::new(registry)
}

#[tokio::test]
async fn exact_in_returns_trades_ranked_by_output() {
    let sources = [
        Arc::new(MockSource::new("swapr").returning(trade("swapr", TradeType::ExactInput, 100, 97))),
        Arc::new(MockSource::new("curve").returning(trade("curve", TradeType::ExactInput, 100, 99))),
        Arc::new(MockSource::new("sushi").returning(trade("sushi", TradeType::ExactInput, 100, 98))),
    ];

    let results = aggregator(&sources)
        .get_exact_in(&swap::exact_in(), &SourceOptions::default())
        .await;

    assert_eq!(ranked_platforms(&results), ["curve", "sushi", "swapr"]);
    assert!(results.errors.is_empty());
}

#[tokio::test]
async fn exact_out_returns_cheapest_input_first() {
    let sources = [
        Arc::new(MockSource::new("pricey").returning(trade("pricey", TradeType::ExactOutput, 110, 100))),
        Arc::new(MockSource::new("cheap").returning(trade("cheap", TradeType::ExactOutput, 101, 100))),
    ];

    let results = aggregator(&sources)
        .get_exact_out(&swap::exact_out(), &SourceOptions::default())
        .await;

    assert_eq!(ranked_platforms(&results), ["cheap", "pricey"]);
}

#[tokio::test]
async fn equal_prices_keep_registration_order() {
    let sources = [
        Arc::new(MockSource::new("first").returning(trade("first", TradeType::ExactInput, 100, 100))),
        Arc::new(MockSource::new("second").returning(trade("second", TradeType::ExactInput, 50, 50))),
        Arc::new(MockSource::new("third").returning(trade("third", TradeType::ExactInput, 10, 10))),
    ];

    let results = aggregator(&sources)
        .get_exact_in(&swap::exact_in(), &SourceOptions::default())
        .await;

    assert_eq!(ranked_platforms(&results), ["first", "second", "third"]);
}

#[tokio::test]
async fn failures_are_collected_without_aborting_siblings() {
    let sources = [
        Arc::new(MockSource::new("down").failing("connection refused")),
        Arc::new(MockSource::new("up").returning(trade("up", TradeType::ExactInput, 100, 99))),
        Arc::new(MockSource::new("broken").failing("bad response")),
    ];

    let results = aggregator(&sources)
        .get_exact_in(&swap::exact_in(), &SourceOptions::default())
        .await;

    assert_eq!(ranked_platforms(&results), ["up"]);
    assert_eq!(failed_platforms(&results), ["broken", "down"]);
    assert!(sources.iter().all(|source| source.calls() == 1));
}

#[tokio::test]
async fn all_sources_failing_returns_every_error() {
    let sources = [
        Arc::new(MockSource::new("a").failing("offline")),
        Arc::new(MockSource::new("b").failing("offline")),
        Arc::new(MockSource::new("c").failing("offline")),
    ];

    let results = aggregator(&sources)
        .get_exact_out(&swap::exact_out(), &SourceOptions::default())
        .await;

    assert!(results.trades.is_empty());
    assert_eq!(results.errors.len(), 3);
}

#[tokio::test]
async fn unresolvable_chain_short_circuits_exact_in() {
    let sources = [
        Arc::new(MockSource::new("a").returning(trade("a", TradeType::ExactInput, 1, 1))),
        Arc::new(MockSource::new("b")),
    ];

    let results = aggregator(&sources)
        .get_exact_in(&swap::native_to_native_in(), &SourceOptions::default())
        .await;

    assert_unsupported_chain(&results);
    assert!(sources.iter().all(|source| source.calls() == 0));
}

#[tokio::test]
async fn unresolvable_chain_short_circuits_exact_out() {
    let sources = [Arc::new(MockSource::new("a"))];

    let results = aggregator(&sources)
        .get_exact_out(&swap::native_to_native_out(), &SourceOptions::default())
        .await;

    assert_unsupported_chain(&results);
    assert_eq!(sources[0].calls(), 0);
}

#[tokio::test]
async fn only_sources_on_the_swap_chain_are_queried() {
    let sources = [
        Arc::new(MockSource::new("mainnet").on_chains(&[ChainId::Mainnet])),
        Arc::new(MockSource::new("gnosis").on_chains(&[ChainId::Gnosis])),
    ];

    aggregator(&sources)
        .get_exact_in(&swap::exact_in(), &SourceOptions::default())
        .await;

    assert_eq!(sources[0].calls(), 1);
    assert_eq!(sources[1].calls(), 0);
}

#[tokio::test]
async fn sources_run_concurrently() {
    let delay = Duration::from_millis(200);
    let sources = [
        Arc::new(MockSource::new("a").delayed(delay)),
        Arc::new(MockSource::new("b").delayed(delay)),
        Arc::new(MockSource::new("c").delayed(delay)),
    ];

    let started = tokio::time::Instant::now();
    aggregator(&sources)
        .get_exact_in(&swap::exact_in(), &SourceOptions::default())
        .await;

    assert!(started.elapsed() < delay * 2);
}

#[tokio::test]
async fn slow_source_times_out_as_caught_failure() {
    let sources = [
        Arc::new(MockSource::new("slow").pending()),
        Arc::new(MockSource::new("fast").returning(trade("fast", TradeType::ExactInput, 100, 99))),
    ];

    let results = aggregator(&sources)
        .with_source_timeout(Duration::from_millis(50))
        .get_exact_in(&swap::exact_in(), &SourceOptions::default())
        .await;

    assert_eq!(ranked_platforms(&results), ["fast"]);
    assert_eq!(results.errors.len(), 1);
    assert!(is_timeout(&results.errors[0]));
    assert_eq!(failed_platforms(&results), ["slow"]);
}

#[tokio::test]
async fn dropping_the_call_cancels_in_flight_sources() {
    let sources = [
        Arc::new(MockSource::new("stuck").pending()),
        Arc::new(MockSource::new("also-stuck").pending()),
    ];
    let aggregator = aggregator(&sources);
    let params = swap::exact_in();
    let options = SourceOptions::default();

    let outcome = tokio::time::timeout(
        Duration::from_millis(50),
        aggregator.get_exact_in(&params, &options),
    )
    .await;

    assert!(outcome.is_err());
    assert!(sources.iter().all(|source| source.calls() == 1));
    assert!(sources.iter().all(|source| source.in_flight() == 0));
}
