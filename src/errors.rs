use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("assertion failed: {0}")]
    AssertionFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
