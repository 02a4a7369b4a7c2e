use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("buffer underrun: requested {requested} bytes, {remaining} remaining")]
    BufferUnderrun { requested: usize, remaining: usize },

    #[error("Unrecognized argument for Block: {0}")]
    UnrecognizedArgument(String),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid object: {0}")]
    InvalidObject(String),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} trailing bytes after header")]
    TrailingBytes(usize),
}

pub type Result<T> = std::result::Result<T, CodecError>;
