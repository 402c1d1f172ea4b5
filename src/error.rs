use crate::rpc::Network;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("rpc call to {address} failed: {message}")]
    Rpc { address: String, message: String },
    #[error("entity store failure on {table}: {message}")]
    Store { table: &'static str, message: String },
    #[error("no chain client configured for network {0}")]
    UnsupportedNetwork(Network),
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("abi encoding failed: {0}")]
    Abi(#[from] ethabi::Error),
    #[error("{0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, Error>;
