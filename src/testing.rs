//! Chain double and fixtures shared by the unit tests.

use crate::abi::{erc20, pool, RpcCall};
use crate::error::{Error, Result};
use crate::eth;
use crate::rpc::ChainReader;
use num_bigint::BigInt;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TOKEN_A: &str = "0x1111111111111111111111111111111111111111";
pub const TOKEN_B: &str = "0x2222222222222222222222222222222222222222";
pub const TOKEN_C: &str = "0x3333333333333333333333333333333333333333";
pub const POOL_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const POOL_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

/// Answers `eth_call` from canned responses keyed by contract and calldata.
/// Anything not registered answers with no data.
#[derive(Default)]
pub struct MockChain {
    responses: HashMap<(String, Vec<u8>), Option<Vec<u8>>>,
    calls: AtomicUsize,
    failing: bool,
}

impl MockChain {
    pub fn new() -> Self {
        MockChain::default()
    }

    /// Every call fails at the transport level.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn with_raw(mut self, address: &str, input: Vec<u8>, output: Option<Vec<u8>>) -> Self {
        self.responses.insert((address.to_ascii_lowercase(), input), output);
        self
    }

    fn with_output<F: RpcCall>(self, address: &str, call: F, output: ethabi::Token) -> Self {
        let input = call.encode();
        self.with_raw(address, input, Some(ethabi::encode(&[output])))
    }

    pub fn with_symbol(self, address: &str, symbol: &str) -> Self {
        self.with_output(address, erc20::functions::Symbol {}, ethabi::Token::String(symbol.to_string()))
    }

    pub fn with_name(self, address: &str, name: &str) -> Self {
        self.with_output(address, erc20::functions::Name {}, ethabi::Token::String(name.to_string()))
    }

    pub fn with_decimals(self, address: &str, decimals: u64) -> Self {
        self.with_output(address, erc20::functions::Decimals {}, uint(decimals))
    }

    pub fn with_total_supply(self, address: &str, total_supply: &str) -> Self {
        self.with_output(address, erc20::functions::TotalSupply {}, big_uint(total_supply))
    }

    /// Registers symbol, name, decimals and total supply at once.
    pub fn with_token(self, address: &str, symbol: &str, decimals: u64) -> Self {
        self.with_symbol(address, symbol)
            .with_name(address, &format!("{} Token", symbol))
            .with_decimals(address, decimals)
            .with_total_supply(address, "1000000000000000000000000")
    }

    pub fn with_balance(self, token: &str, holder: &str, amount: &str) -> Self {
        let account = eth::address_bytes(holder).unwrap();
        self.with_output(token, erc20::functions::BalanceOf { account }, big_uint(amount))
    }

    pub fn with_liquidity(self, pool_address: &str, liquidity: &str) -> Self {
        self.with_output(pool_address, pool::functions::Liquidity {}, big_uint(liquidity))
    }

    pub fn with_fee(self, pool_address: &str, fee: u64) -> Self {
        self.with_output(pool_address, pool::functions::Fee {}, uint(fee))
    }
}

impl ChainReader for MockChain {
    async fn eth_call(&self, to: &str, input: Vec<u8>) -> Result<Option<Vec<u8>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(Error::Rpc {
                address: to.to_string(),
                message: "connection refused".to_string(),
            });
        }

        Ok(self
            .responses
            .get(&(to.to_ascii_lowercase(), input))
            .cloned()
            .flatten())
    }
}

fn uint(value: u64) -> ethabi::Token {
    ethabi::Token::Uint(ethabi::Uint::from(value))
}

fn big_uint(value: &str) -> ethabi::Token {
    ethabi::Token::Uint(ethabi::Uint::from_dec_str(value).unwrap())
}

pub fn big(value: &str) -> BigInt {
    value.parse().unwrap()
}
