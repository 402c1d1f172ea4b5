use crate::config::Network;
use crate::entities::{Bundle, Token};
use bigdecimal::BigDecimal;
use std::ops::Mul;

const MAINNET_WHITELIST_TOKENS: [&str; 21] = [
    "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", // WETH
    "0x6b175474e89094c44da98b954eedeac495271d0f", // DAI
    "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", // USDC
    "0xdac17f958d2ee523a2206206994597c13d831ec7", // USDT
    "0x0000000000085d4780b73119b644ae5ecd22b376", // TUSD
    "0x2260fac5e5542a773aa44fbcfedf7c193bc2c599", // WBTC
    "0x5d3a536e4d6dbd6114cc1ead35777bab948e3643", // cDAI
    "0x39aa39c021dfbae8fac545936693ac917d5e7563", // cUSDC
    "0x86fadb80d8d2cff3c3680819e4da99c10232ba0f", // EBASE
    "0x57ab1ec28d129707052df4df418d58a2d46d5f51", // sUSD
    "0x9f8f72aa9304c8b593d555f12ef6589cc3a579a2", // MKR
    "0xc00e94cb662c3520282e6f5717214004a7f26888", // COMP
    "0x514910771af9ca656af840dff83e8264ecf986ca", // LINK
    "0xc011a73ee8576fb46f5e1c5751ca3b9fe0af2a6f", // SNX
    "0x0bc529c00c6401aef6d220be8c6ea1667f6ad93e", // YFI
    "0x111111111117dc0aa78b770fa6a738034120c302", // 1INCH
    "0xdf5e0e81dff6faf3a7e52ba697820c5e32d806a8", // yCurv
    "0x956f47f50a910163d8bf957cf5846d573e7f87ca", // FEI
    "0x7d1afa7b718fb893db30a3abc0cfc608aacfebb0", // MATIC
    "0x7fc66500c84a76ad7e9c93437bfc5ac33e2ddae9", // AAVE
    "0xfe2e637202056d30016725477c5da089ab0a043a", // sETH2
];

const OPTIMISM_WHITELIST_TOKENS: [&str; 8] = [
    "0x4200000000000000000000000000000000000006", // WETH
    "0xda10009cbd5d07dd0cecc66161fc93d7c9000da1", // DAI
    "0x7f5c764cbc14f9669b88837ca1490cca17c31607", // USDC
    "0x94b008aa00579c1307b0ef2c499ad98a8ce58e58", // USDT
    "0x68f180fcce6836688e9084f035309e29bf0a2095", // WBTC
    "0x8700daec35af8ff88c16bdf0418774cb3d7599b4", // SNX
    "0x8c6f28f2f1a3c87f0f938b96d27520d9751ec8d9", // sUSD
    "0x4200000000000000000000000000000000000042", // OP
];

const ARBITRUM_WHITELIST_TOKENS: [&str; 5] = [
    "0x82af49447d8a07e3bd95bd0d56f35241523fbab1", // WETH
    "0xff970a61a04b1ca14834a43f5de4533ebddb5cc8", // USDC.e
    "0xda10009cbd5d07dd0cecc66161fc93d7c9000da1", // DAI
    "0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9", // USDT
    "0x2f2a2543b76a4166549f7aab2e75bef0aefc5b0f", // WBTC
];

const POLYGON_WHITELIST_TOKENS: [&str; 5] = [
    "0x0d500b1d8e8ef31e21c99d1db9a6444d3adf1270", // WMATIC
    "0x2791bca1f2de4661ed88a30c99a7a9449aa84174", // USDC
    "0x7ceb23fd6bc0add59e62ac25578270cff1b9f619", // WETH
    "0x8f3cf7ad23cd3cadbd9735aff958023239c6a063", // DAI
    "0xc2132d05d31c914a87c6611c10748aeb04b58e8f", // USDT
];

const BASE_WHITELIST_TOKENS: [&str; 3] = [
    "0x4200000000000000000000000000000000000006", // WETH
    "0xd9aaec86b65d86f6a7b5b1b0c42ffa531710b6ca", // USDbC
    "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913", // USDC
];

/// Default whitelist of pricing reference tokens for `network`.
pub fn whitelist_tokens(network: Network) -> &'static [&'static str] {
    match network {
        Network::Mainnet => &MAINNET_WHITELIST_TOKENS,
        Network::Optimism => &OPTIMISM_WHITELIST_TOKENS,
        Network::Arbitrum => &ARBITRUM_WHITELIST_TOKENS,
        Network::Polygon => &POLYGON_WHITELIST_TOKENS,
        Network::Base => &BASE_WHITELIST_TOKENS,
        _ => &[],
    }
}

pub fn token_price_usd(token: &Token, bundle: &Bundle) -> BigDecimal {
    token.derived_eth.clone().mul(bundle.eth_price_usd.clone())
}
