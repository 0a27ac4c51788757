use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unsupported digest algorithm: '{0}'")]
    UnsupportedAlgorithm(String),

    #[error("digest computation failed: {0}")]
    Digest(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
