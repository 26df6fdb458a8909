use std::net::SocketAddr;
use thiserror::Error;

pub type GreeterResult<T> = Result<T, GreeterError>;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidSetting { name: &'static str, value: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
