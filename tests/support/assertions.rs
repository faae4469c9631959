use ecorouter::application::AggregateResults;
use ecorouter::error::{AggregationError, Error, SourceError};

/// Platforms of the returned trades, best first.
pub fn ranked_platforms(results: &AggregateResults) -> Vec<&str> {
    results
        .trades
        .iter()
        .map(|trade| trade.platform().as_str())
        .collect()
}

/// Platforms named by source errors, sorted for order-independent checks.
pub fn failed_platforms(results: &AggregateResults) -> Vec<String> {
    let mut platforms: Vec<String> = results
        .errors
        .iter()
        .filter_map(|err| match err {
            Error::Source(source) => Some(source.platform().to_string()),
            _ => None,
        })
        .collect();
    platforms.sort();
    platforms
}

pub fn assert_unsupported_chain(results: &AggregateResults) {
    assert!(results.trades.is_empty(), "expected no trades");
    assert!(
        matches!(
            results.errors.as_slice(),
            [Error::Aggregation(AggregationError::UnsupportedChain)]
        ),
        "expected a single unsupported-chain error, got {:?}",
        results.errors
    );
}

pub fn is_timeout(err: &Error) -> bool {
    matches!(err, Error::Source(SourceError::TimedOut { .. }))
}
