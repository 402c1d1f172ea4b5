use bigdecimal::{BigDecimal, Zero};
use num_bigint::BigInt;

/// A record the entity store keeps under a string id.
pub trait Entity: Clone {
    const NAME: &'static str;

    fn id(&self) -> &str;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub total_supply: BigInt,
    pub derived_eth: BigDecimal,
    pub volume: BigDecimal,
    pub volume_usd: BigDecimal,
    pub untracked_volume_usd: BigDecimal,
    pub fees_usd: BigDecimal,
    pub total_value_locked: BigDecimal,
    pub total_value_locked_usd: BigDecimal,
    pub total_value_locked_usd_untracked: BigDecimal,
    pub tx_count: u64,
    pub pool_count: u64,
    /// pools paired with a whitelisted token, used for USD pricing
    pub whitelist_pools: Vec<String>,
}

impl Token {
    pub fn new(id: &str, symbol: &str, name: &str, decimals: u8, total_supply: BigInt) -> Self {
        Token {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            decimals,
            total_supply,
            derived_eth: BigDecimal::zero(),
            volume: BigDecimal::zero(),
            volume_usd: BigDecimal::zero(),
            untracked_volume_usd: BigDecimal::zero(),
            fees_usd: BigDecimal::zero(),
            total_value_locked: BigDecimal::zero(),
            total_value_locked_usd: BigDecimal::zero(),
            total_value_locked_usd_untracked: BigDecimal::zero(),
            tx_count: 0,
            pool_count: 0,
            whitelist_pools: vec![],
        }
    }
}

impl Entity for Token {
    const NAME: &'static str = "Token";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Pool {
    pub id: String,
    pub created_at_timestamp: i64,
    pub created_at_block_number: u64,
    pub token0: String,
    pub token1: String,
    pub fee_tier: u32,
    pub liquidity: BigInt,
    pub sqrt_price: BigInt,
    pub token0_price: BigDecimal,
    pub token1_price: BigDecimal,
    /// unknown until the pool is initialized
    pub tick: Option<BigInt>,
    pub observation_index: BigInt,
    pub volume_token0: BigDecimal,
    pub volume_token1: BigDecimal,
    pub volume_usd: BigDecimal,
    pub untracked_volume_usd: BigDecimal,
    pub fees_usd: BigDecimal,
    pub tx_count: u64,
    pub collected_fees_token0: BigDecimal,
    pub collected_fees_token1: BigDecimal,
    pub collected_fees_usd: BigDecimal,
    pub total_value_locked_token0: BigDecimal,
    pub total_value_locked_token1: BigDecimal,
    pub total_value_locked_eth: BigDecimal,
    pub total_value_locked_usd: BigDecimal,
    pub total_value_locked_usd_untracked: BigDecimal,
    pub total_value_locked_eth_untracked: BigDecimal,
    pub liquidity_provider_count: u64,
}

impl Pool {
    pub fn new(
        id: &str,
        token0: &str,
        token1: &str,
        fee_tier: u32,
        created_at_block_number: u64,
        created_at_timestamp: i64,
    ) -> Self {
        Pool {
            id: id.to_string(),
            created_at_timestamp,
            created_at_block_number,
            token0: token0.to_string(),
            token1: token1.to_string(),
            fee_tier,
            liquidity: BigInt::zero(),
            sqrt_price: BigInt::zero(),
            token0_price: BigDecimal::zero(),
            token1_price: BigDecimal::zero(),
            tick: None,
            observation_index: BigInt::zero(),
            volume_token0: BigDecimal::zero(),
            volume_token1: BigDecimal::zero(),
            volume_usd: BigDecimal::zero(),
            untracked_volume_usd: BigDecimal::zero(),
            fees_usd: BigDecimal::zero(),
            tx_count: 0,
            collected_fees_token0: BigDecimal::zero(),
            collected_fees_token1: BigDecimal::zero(),
            collected_fees_usd: BigDecimal::zero(),
            total_value_locked_token0: BigDecimal::zero(),
            total_value_locked_token1: BigDecimal::zero(),
            total_value_locked_eth: BigDecimal::zero(),
            total_value_locked_usd: BigDecimal::zero(),
            total_value_locked_usd_untracked: BigDecimal::zero(),
            total_value_locked_eth_untracked: BigDecimal::zero(),
            liquidity_provider_count: 0,
        }
    }
}

impl Entity for Pool {
    const NAME: &'static str = "Pool";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Network wide aggregate.
#[derive(Clone, Debug, PartialEq)]
pub struct Factory {
    pub id: String,
    pub pool_count: u64,
    pub tx_count: u64,
    pub total_volume_usd: BigDecimal,
    pub total_volume_eth: BigDecimal,
    pub total_fees_usd: BigDecimal,
    pub total_fees_eth: BigDecimal,
    pub untracked_volume_usd: BigDecimal,
    pub total_value_locked_usd: BigDecimal,
    pub total_value_locked_eth: BigDecimal,
    pub total_value_locked_usd_untracked: BigDecimal,
    pub total_value_locked_eth_untracked: BigDecimal,
    pub owner: String,
}

impl Factory {
    pub fn new(id: &str, owner: &str) -> Self {
        Factory {
            id: id.to_string(),
            pool_count: 0,
            tx_count: 0,
            total_volume_usd: BigDecimal::zero(),
            total_volume_eth: BigDecimal::zero(),
            total_fees_usd: BigDecimal::zero(),
            total_fees_eth: BigDecimal::zero(),
            untracked_volume_usd: BigDecimal::zero(),
            total_value_locked_usd: BigDecimal::zero(),
            total_value_locked_eth: BigDecimal::zero(),
            total_value_locked_usd_untracked: BigDecimal::zero(),
            total_value_locked_eth_untracked: BigDecimal::zero(),
            owner: owner.to_string(),
        }
    }
}

impl Entity for Factory {
    const NAME: &'static str = "Factory";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Reference price of the native token in USD.
#[derive(Clone, Debug, PartialEq)]
pub struct Bundle {
    pub id: String,
    pub eth_price_usd: BigDecimal,
}

impl Entity for Bundle {
    const NAME: &'static str = "Bundle";

    fn id(&self) -> &str {
        &self.id
    }
}
