use crate::abi::{self, RpcCall};
use crate::error::{Error, Result};
use crate::eth;
use num_bigint::BigInt;
use std::collections::HashMap;

pub use crate::config::Network;

/// Read access to contract state on one network.
#[allow(async_fn_in_trait)]
pub trait ChainReader {
    /// Executes `eth_call` with `input` against `to`. `None` means the node
    /// answered without any return data.
    async fn eth_call(&self, to: &str, input: Vec<u8>) -> Result<Option<Vec<u8>>>;
}

/// One reader per supported network.
pub struct ChainClients<C> {
    clients: HashMap<Network, C>,
}

impl<C: ChainReader> ChainClients<C> {
    pub fn new() -> Self {
        ChainClients {
            clients: HashMap::new(),
        }
    }

    pub fn with(mut self, network: Network, client: C) -> Self {
        self.insert(network, client);
        self
    }

    pub fn insert(&mut self, network: Network, client: C) {
        self.clients.insert(network, client);
    }

    pub fn get(&self, network: Network) -> Result<&C> {
        self.clients
            .get(&network)
            .ok_or(Error::UnsupportedNetwork(network))
    }
}

impl<C: ChainReader> Default for ChainClients<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Calls `call` on `address`. Empty or undecodable answers come back as `None`,
/// transport failures as errors.
pub async fn read_contract<C: ChainReader, F: RpcCall>(
    client: &C,
    address: &str,
    call: &F,
) -> Result<Option<F::Output>> {
    let raw = match client.eth_call(address, call.encode()).await? {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            log::debug!("{} returned no data for `{}`", address, F::NAME);
            return Ok(None);
        }
    };

    match F::output(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            log::debug!("{} `{}` output could not be decoded: {}", address, F::NAME, e);
            Ok(None)
        }
    }
}

pub async fn token_decimals_call<C: ChainReader>(client: &C, token_address: &str) -> Result<Option<u8>> {
    read_contract(client, token_address, &abi::erc20::functions::Decimals {}).await
}

pub async fn token_name_call<C: ChainReader>(client: &C, token_address: &str) -> Result<Option<String>> {
    read_contract(client, token_address, &abi::erc20::functions::Name {}).await
}

pub async fn token_symbol_call<C: ChainReader>(client: &C, token_address: &str) -> Result<Option<String>> {
    read_contract(client, token_address, &abi::erc20::functions::Symbol {}).await
}

pub async fn token_total_supply_call<C: ChainReader>(client: &C, token_address: &str) -> Result<Option<BigInt>> {
    read_contract(client, token_address, &abi::erc20::functions::TotalSupply {}).await
}

pub async fn token_balance_of_call<C: ChainReader>(
    client: &C,
    token_address: &str,
    holder_address: &str,
) -> Result<Option<BigInt>> {
    let account = match eth::address_bytes(holder_address) {
        Some(account) => account,
        None => {
            log::warn!("cannot query balance of malformed holder address {}", holder_address);
            return Ok(None);
        }
    };
    read_contract(client, token_address, &abi::erc20::functions::BalanceOf { account }).await
}

pub async fn pool_liquidity_call<C: ChainReader>(client: &C, pool_address: &str) -> Result<Option<BigInt>> {
    read_contract(client, pool_address, &abi::pool::functions::Liquidity {}).await
}

pub async fn pool_fee_call<C: ChainReader>(client: &C, pool_address: &str) -> Result<Option<u32>> {
    read_contract(client, pool_address, &abi::pool::functions::Fee {}).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockChain, TOKEN_A};

    #[tokio::test]
    async fn test_missing_network() {
        let clients = ChainClients::new().with(Network::Mainnet, MockChain::new());
        assert!(clients.get(Network::Mainnet).is_ok());
        assert!(matches!(
            clients.get(Network::Optimism),
            Err(Error::UnsupportedNetwork(Network::Optimism))
        ));
    }

    #[tokio::test]
    async fn test_read_contract_decodes() {
        let chain = MockChain::new().with_symbol(TOKEN_A, "WETH").with_decimals(TOKEN_A, 18);

        assert_eq!(Some("WETH".to_string()), token_symbol_call(&chain, TOKEN_A).await.unwrap());
        assert_eq!(Some(18), token_decimals_call(&chain, TOKEN_A).await.unwrap());
        assert_eq!(2, chain.calls());
    }

    #[tokio::test]
    async fn test_read_contract_empty_and_garbage() {
        let chain = MockChain::new()
            .with_raw(TOKEN_A, abi::erc20::functions::Name {}.encode(), Some(vec![]))
            .with_raw(TOKEN_A, abi::erc20::functions::Decimals {}.encode(), Some(vec![1, 2, 3]));

        assert_eq!(None, token_name_call(&chain, TOKEN_A).await.unwrap());
        assert_eq!(None, token_decimals_call(&chain, TOKEN_A).await.unwrap());
        assert_eq!(None, token_total_supply_call(&chain, TOKEN_A).await.unwrap());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let chain = MockChain::new().failing();
        assert!(matches!(
            token_symbol_call(&chain, TOKEN_A).await,
            Err(Error::Rpc { .. })
        ));
    }

    #[tokio::test]
    async fn test_balance_of_malformed_holder() {
        let chain = MockChain::new();
        assert_eq!(None, token_balance_of_call(&chain, TOKEN_A, "0xPOOL").await.unwrap());
        assert_eq!(0, chain.calls());
    }
}
