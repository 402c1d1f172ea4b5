use crate::error::Error;
use crate::price;
use crate::utils::StaticTokenDefinitions;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Optimism,
    Arbitrum,
    Polygon,
    Base,
    Bsc,
    Avalanche,
    Celo,
    Blast,
    Zora,
}

impl Network {
    pub const ALL: [Network; 10] = [
        Network::Mainnet,
        Network::Optimism,
        Network::Arbitrum,
        Network::Polygon,
        Network::Base,
        Network::Bsc,
        Network::Avalanche,
        Network::Celo,
        Network::Blast,
        Network::Zora,
    ];

    pub fn chain_id(self) -> u64 {
        match self {
            Network::Mainnet => 1,
            Network::Optimism => 10,
            Network::Arbitrum => 42161,
            Network::Polygon => 137,
            Network::Base => 8453,
            Network::Bsc => 56,
            Network::Avalanche => 43114,
            Network::Celo => 42220,
            Network::Blast => 81457,
            Network::Zora => 7777777,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Optimism => "optimism",
            Network::Arbitrum => "arbitrum",
            Network::Polygon => "polygon",
            Network::Base => "base",
            Network::Bsc => "bsc",
            Network::Avalanche => "avalanche",
            Network::Celo => "celo",
            Network::Blast => "blast",
            Network::Zora => "zora",
        }
    }

    pub fn from_chain_id(chain_id: u64) -> Option<Network> {
        Network::ALL.into_iter().find(|network| network.chain_id() == chain_id)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Network {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(chain_id) = s.parse::<u64>() {
            return Network::from_chain_id(chain_id).ok_or_else(|| Error::UnknownNetwork(s.to_string()));
        }
        let lower = s.to_ascii_lowercase();
        Network::ALL
            .into_iter()
            .find(|network| network.name() == lower)
            .ok_or_else(|| Error::UnknownNetwork(s.to_string()))
    }
}

/// A pool that existed before the indexed block range, with its two tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct PoolMapping {
    pub pool: String,
    pub token0: String,
    pub token1: String,
}

impl PoolMapping {
    pub fn new(pool: &str, token0: &str, token1: &str) -> Self {
        PoolMapping {
            pool: pool.to_string(),
            token0: token0.to_string(),
            token1: token1.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct BackfillConfig {
    pub network: Network,
    pub block_number: u64,
    pub block_timestamp: i64,
    pub pools: Vec<PoolMapping>,
    pub whitelist_tokens: Vec<String>,
    pub token_overrides: StaticTokenDefinitions,
}

impl BackfillConfig {
    /// Starts from the network's default whitelist and no token overrides.
    pub fn new(network: Network, block_number: u64, block_timestamp: i64) -> Self {
        BackfillConfig {
            network,
            block_number,
            block_timestamp,
            pools: vec![],
            whitelist_tokens: price::whitelist_tokens(network)
                .iter()
                .map(|token| token.to_string())
                .collect(),
            token_overrides: StaticTokenDefinitions::default(),
        }
    }

    pub fn with_pools(mut self, pools: Vec<PoolMapping>) -> Self {
        self.pools = pools;
        self
    }

    pub fn with_whitelist_tokens(mut self, whitelist_tokens: Vec<String>) -> Self {
        self.whitelist_tokens = whitelist_tokens;
        self
    }

    pub fn with_token_overrides(mut self, token_overrides: StaticTokenDefinitions) -> Self {
        self.token_overrides = token_overrides;
        self
    }

    pub fn is_whitelisted(&self, token_address: &str) -> bool {
        self.whitelist_tokens.iter().any(|token| token == token_address)
    }
}
