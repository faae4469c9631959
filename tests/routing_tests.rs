//! Integration tests for pool routing over realistic pool topologies.

mod support;

use alloy_primitives::{address, Address};
use ecorouter::domain::{
    classify_token, filter_routable_pools, resolve_token_index, ChainId, ChainRegistry, Pool,
    PoolToken, TokenKind, NATIVE_ASSET_ADDRESS,
};

const DAI: Address = address!("0x6B175474E89094C44Da98b954EedeAC495271d0F");
const USDC: Address = address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
const USDT: Address = address!("0xdAC17F958D2ee523a2206206994597C13D831ec7");
const THREE_CRV: Address = address!("0x6c3F90f043a72FA612cbac8115EE7e52BDe6E490");
const MIM: Address = address!("0x99D8a9C45b2ecA8864373A26D1459e3Dff1e17F3");
const STETH: Address = address!("0xae7ab96520DE3A18E5e111B5EaAb095312D7fE84");

fn three_pool() -> Pool {
    Pool::new(
        "3pool",
        address!("0xbEbc44782C7dB0a1A60Cb6fe97d0b483032FF1C7"),
        ChainId::Mainnet,
        vec![
            PoolToken::new(USDC, "USDC").with_decimals(6),
            PoolToken::new(USDT, "USDT").with_decimals(6),
            PoolToken::new(DAI, "DAI"),
        ],
    )
}

fn mim_pool() -> Pool {
    Pool::new(
        "mim",
        address!("0x5a6A4D54456819380173272A5E8E9B9904BdF41B"),
        ChainId::Mainnet,
        vec![
            PoolToken::new(MIM, "MIM"),
            PoolToken::new(THREE_CRV, "3Crv").lp_token(),
        ],
    )
    .with_meta_tokens(vec![
        PoolToken::new(DAI, "DAI"),
        PoolToken::new(USDC, "USDC").with_decimals(6),
        PoolToken::new(USDT, "USDT").with_decimals(6),
    ])
}

fn steth_pool() -> Pool {
    Pool::new(
        "steth",
        address!("0xDC24316b9AE028F1497c275EB9192a3Ea0f67022"),
        ChainId::Mainnet,
        vec![
            PoolToken::new(NATIVE_ASSET_ADDRESS, "ETH"),
            PoolToken::new(STETH, "stETH"),
        ],
    )
    .allowing_eth()
}

#[test]
fn plain_pool_scenario() {
    let registry = ChainRegistry::with_defaults();
    let pool = three_pool();
    assert_eq!(resolve_token_index(&pool, DAI, ChainId::Mainnet, &registry), Some(2));
    assert_eq!(
        resolve_token_index(&pool, Address::repeat_byte(0x99), ChainId::Mainnet, &registry),
        None
    );
}

#[test]
fn meta_pool_scenario_resolves_into_meta_segment() {
    let registry = ChainRegistry::with_defaults();
    let pool = mim_pool();
    let index = resolve_token_index(&pool, USDC, ChainId::Mainnet, &registry).unwrap();
    assert!(index >= 1, "index {index} should fall after the primary segment");
    assert_eq!(index, 2);
}

#[test]
fn lowercase_address_resolves_like_checksummed() {
    let registry = ChainRegistry::with_defaults();
    let lowercase: Address = "0x6b175474e89094c44da98b954eedeac495271d0f".parse().unwrap();
    assert_eq!(
        resolve_token_index(&three_pool(), lowercase, ChainId::Mainnet, &registry),
        Some(2)
    );
}

#[test]
fn filter_keeps_pools_listing_both_sides() {
    let registry = ChainRegistry::with_defaults();
    let pools = vec![three_pool(), mim_pool(), steth_pool()];

    let routable = filter_routable_pools(
        &pools,
        MIM,
        USDT,
        ChainId::Mainnet,
        false,
        false,
        &registry,
    );
    let names: Vec<_> = routable.iter().map(|pool| pool.name.as_str()).collect();
    assert_eq!(names, ["mim"]);

    let routable = filter_routable_pools(
        &pools,
        DAI,
        USDC,
        ChainId::Mainnet,
        false,
        false,
        &registry,
    );
    let names: Vec<_> = routable.iter().map(|pool| pool.name.as_str()).collect();
    assert_eq!(names, ["3pool", "mim"]);
}

#[test]
fn native_side_routes_through_eth_pool() {
    let registry = ChainRegistry::with_defaults();
    let weth = registry.wrapped_native(ChainId::Mainnet).unwrap().address();
    let pools = vec![three_pool(), steth_pool()];

    let routable = filter_routable_pools(
        &pools,
        weth,
        STETH,
        ChainId::Mainnet,
        true,
        false,
        &registry,
    );

    assert_eq!(routable.len(), 1);
    assert_eq!(
        resolve_token_index(routable[0], NATIVE_ASSET_ADDRESS, ChainId::Mainnet, &registry),
        Some(0)
    );
}

#[test]
fn filtering_twice_changes_nothing() {
    let registry = ChainRegistry::with_defaults();
    let pools = vec![three_pool(), mim_pool(), steth_pool()];

    let once: Vec<Pool> = filter_routable_pools(
        &pools,
        USDC,
        DAI,
        ChainId::Mainnet,
        false,
        false,
        &registry,
    )
    .into_iter()
    .cloned()
    .collect();
    let twice: Vec<Pool> = filter_routable_pools(
        &once,
        USDC,
        DAI,
        ChainId::Mainnet,
        false,
        false,
        &registry,
    )
    .into_iter()
    .cloned()
    .collect();

    assert_eq!(once, twice);
}

#[test]
fn pool_tokens_classify_by_peg_group() {
    let kinds: Vec<_> = mim_pool()
        .all_tokens()
        .map(|token| classify_token(&token.symbol))
        .collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Usd,
            TokenKind::Other,
            TokenKind::Usd,
            TokenKind::Other,
            TokenKind::Other,
        ]
    );
    assert_eq!(classify_token("eth"), TokenKind::Native);
}
