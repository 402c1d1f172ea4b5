#[macro_use]
mod macros;

pub mod abi;
pub mod backfill;
pub mod config;
pub mod entities;
pub mod error;
pub mod eth;
pub mod interval;
pub mod keyer;
pub mod math;
pub mod price;
pub mod rpc;
pub mod store;
pub mod tables;
pub mod token;
pub mod utils;
pub mod windows;

#[cfg(test)]
mod testing;

pub use backfill::{populate_empty_pools, populate_token, BackfillReport};
pub use config::{BackfillConfig, Network, PoolMapping};
pub use error::{Error, Result};
pub use rpc::{ChainClients, ChainReader};
pub use store::EntityStore;
pub use token::{
    fetch_token_decimals, fetch_token_name, fetch_token_symbol, fetch_token_total_supply, resolve_token_metadata,
};
pub use windows::{
    update_network_day_data, update_pool_day_data, update_pool_hour_data, update_token_day_data,
    update_token_hour_data,
};
