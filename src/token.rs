//! Token metadata resolution.
//!
//! Every attribute is resolved the same way: the static override table wins,
//! then addresses that are not well formed get a sentinel without touching the
//! chain, then the token contract is read and an empty answer falls back to the
//! same sentinel.

use bigdecimal::Zero;
use crate::entities::Token;
use crate::error::Result;
use crate::eth;
use crate::rpc::{self, ChainClients, ChainReader, Network};
use crate::utils::{StaticTokenDefinitions, UNKNOWN};
use num_bigint::BigInt;

pub async fn fetch_token_symbol<C: ChainReader>(
    token_address: &str,
    token_overrides: &StaticTokenDefinitions,
    clients: &ChainClients<C>,
    network: Network,
) -> Result<String> {
    if let Some(definition) = token_overrides.get(token_address) {
        return Ok(definition.symbol.clone());
    }
    if !eth::is_address(token_address) {
        return Ok(UNKNOWN.to_string());
    }

    let symbol = rpc::token_symbol_call(clients.get(network)?, token_address).await?;
    Ok(symbol.unwrap_or_else(|| UNKNOWN.to_string()))
}

pub async fn fetch_token_name<C: ChainReader>(
    token_address: &str,
    token_overrides: &StaticTokenDefinitions,
    clients: &ChainClients<C>,
    network: Network,
) -> Result<String> {
    if let Some(definition) = token_overrides.get(token_address) {
        return Ok(definition.name.clone());
    }
    if !eth::is_address(token_address) {
        return Ok(UNKNOWN.to_string());
    }

    let name = rpc::token_name_call(clients.get(network)?, token_address).await?;
    Ok(name.unwrap_or_else(|| UNKNOWN.to_string()))
}

/// `None` when the decimals cannot be determined. Zero is a valid answer.
pub async fn fetch_token_decimals<C: ChainReader>(
    token_address: &str,
    token_overrides: &StaticTokenDefinitions,
    clients: &ChainClients<C>,
    network: Network,
) -> Result<Option<u8>> {
    if let Some(definition) = token_overrides.get(token_address) {
        return Ok(Some(definition.decimals));
    }
    if !eth::is_address(token_address) {
        return Ok(None);
    }

    rpc::token_decimals_call(clients.get(network)?, token_address).await
}

pub async fn fetch_token_total_supply<C: ChainReader>(
    token_address: &str,
    token_overrides: &StaticTokenDefinitions,
    clients: &ChainClients<C>,
    network: Network,
) -> Result<BigInt> {
    // overrides without a supply still go to the chain
    if let Some(total_supply) = token_overrides
        .get(token_address)
        .and_then(|definition| definition.total_supply.clone())
    {
        return Ok(total_supply);
    }
    if !eth::is_address(token_address) {
        return Ok(BigInt::zero());
    }

    let total_supply = rpc::token_total_supply_call(clients.get(network)?, token_address).await?;
    Ok(total_supply.unwrap_or_default())
}

#[derive(Clone, Debug, PartialEq)]
pub struct TokenMetadata {
    pub symbol: String,
    pub name: String,
    pub decimals: Option<u8>,
    pub total_supply: BigInt,
}

impl TokenMetadata {
    /// A fresh token record, or `None` when the decimals are unknown.
    pub fn into_token(self, token_address: &str) -> Option<Token> {
        let decimals = self.decimals?;
        Some(Token::new(
            token_address,
            &self.symbol,
            &self.name,
            decimals,
            self.total_supply,
        ))
    }
}

/// Resolves the four attributes concurrently.
pub async fn resolve_token_metadata<C: ChainReader>(
    token_address: &str,
    token_overrides: &StaticTokenDefinitions,
    clients: &ChainClients<C>,
    network: Network,
) -> Result<TokenMetadata> {
    let (symbol, name, total_supply, decimals) = futures::try_join!(
        fetch_token_symbol(token_address, token_overrides, clients, network),
        fetch_token_name(token_address, token_overrides, clients, network),
        fetch_token_total_supply(token_address, token_overrides, clients, network),
        fetch_token_decimals(token_address, token_overrides, clients, network),
    )?;

    Ok(TokenMetadata {
        symbol,
        name,
        decimals,
        total_supply,
    })
}
