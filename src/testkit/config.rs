//! Canonical test configurations.
//!
//! Single source of truth for TOML used across config and wiring tests.

/// Gnosis-only deployment: two pair-graph platforms and one stable pool.
pub const GNOSIS: &str = r#"
[logging]
level = "debug"
format = "json"

[aggregator]
source_timeout_ms = 250
default_slippage = 0.01
use_multihops = false

[[chains]]
chain_id = 100
wrapped_native = "0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"
rpc_url = "https://rpc.gnosischain.com"

[[platforms]]
name = "swapr"
chains = [100]

[[platforms]]
name = "honeyswap"
chains = [100]

[[pools]]
name = "x3pool"
address = "0x7f90122BF0700F9E7e1F688fe926940E8839F353"
chain_id = 100

[[pools.tokens]]
address = "0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d"
symbol = "WXDAI"

[[pools.tokens]]
address = "0xDDAfbb505ad214D7b80b1f830fcCc89B60fb7A83"
symbol = "USDC"
decimals = 6

[[pools.tokens]]
address = "0x4ECaBa5870353805a9F068101A40E0f32ed605C6"
symbol = "USDT"
decimals = 6
"#;
