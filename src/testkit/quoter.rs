//! Scripted quoting ports.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use alloy_primitives::U256;
use async_trait::async_trait;
use url::Url;

use crate::domain::{PlatformId, Pool};
use crate::error::{Result, SourceError};
use crate::port::{PairQuoter, PoolQuoter, RouteQuote, RouteRequest};

/// Pool quoter answering by pool name.
///
/// Unscripted pools are rejected. Every request is recorded as
/// `(pool name, index in, index out)`.
#[derive(Default)]
pub struct ScriptedPoolQuoter {
    quotes: HashMap<String, Option<U256>>,
    requests: Mutex<Vec<(String, usize, usize)>>,
}

impl ScriptedPoolQuoter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quote(mut self, pool: &str, amount: U256) -> Self {
        self.quotes.insert(pool.to_string(), Some(amount));
        self
    }

    pub fn with_failure(mut self, pool: &str) -> Self {
        self.quotes.insert(pool.to_string(), None);
        self
    }

    pub fn requests(&self) -> Vec<(String, usize, usize)> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn respond(&self, pool: &Pool, index_in: usize, index_out: usize) -> Result<U256> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((pool.name.clone(), index_in, index_out));

        let platform = PlatformId::from("scripted-pool");
        match self.quotes.get(&pool.name) {
            Some(Some(amount)) => Ok(*amount),
            Some(None) => Err(SourceError::Unreachable {
                platform,
                reason: format!("{} offline", pool.name),
            }
            .into()),
            None => Err(SourceError::QuoteRejected {
                platform,
                reason: format!("{} not scripted", pool.name),
            }
            .into()),
        }
    }
}

#[async_trait]
impl PoolQuoter for ScriptedPoolQuoter {
    async fn quote_exact_in(
        &self,
        pool: &Pool,
        index_in: usize,
        index_out: usize,
        _amount_in: U256,
        _provider: Option<&Url>,
    ) -> Result<U256> {
        self.respond(pool, index_in, index_out)
    }

    async fn quote_exact_out(
        &self,
        pool: &Pool,
        index_in: usize,
        index_out: usize,
        _amount_out: U256,
        _provider: Option<&Url>,
    ) -> Result<U256> {
        self.respond(pool, index_in, index_out)
    }
}

/// Pair quoter returning one fixed route (or none, or a failure).
#[derive(Default)]
pub struct ScriptedPairQuoter {
    route: Option<(u64, u64)>,
    failing: bool,
    max_hops: Mutex<Vec<usize>>,
}

impl ScriptedPairQuoter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, amount_in: u64, amount_out: u64) -> Self {
        self.route = Some((amount_in, amount_out));
        self
    }

    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Hop limits of every request received, in order.
    pub fn max_hops_seen(&self) -> Vec<usize> {
        self.max_hops
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn respond(&self, request: &RouteRequest) -> Result<Option<RouteQuote>> {
        self.max_hops
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.max_hops);

        if self.failing {
            return Err(SourceError::Unreachable {
                platform: request.platform.clone(),
                reason: "pair graph unavailable".to_string(),
            }
            .into());
        }
        Ok(self.route.map(|(amount_in, amount_out)| RouteQuote {
            amount_in: U256::from(amount_in),
            amount_out: U256::from(amount_out),
            path: vec![request.token_in.address(), request.token_out.address()],
        }))
    }
}

#[async_trait]
impl PairQuoter for ScriptedPairQuoter {
    async fn best_route_exact_in(
        &self,
        request: &RouteRequest,
        _provider: Option<&Url>,
    ) -> Result<Option<RouteQuote>> {
        self.respond(request)
    }

    async fn best_route_exact_out(
        &self,
        request: &RouteRequest,
        _provider: Option<&Url>,
    ) -> Result<Option<RouteQuote>> {
        self.respond(request)
    }
}
