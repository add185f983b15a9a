use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TracksError {
    #[error("IO Error: {0}")]
    Io(#[from] io::Error),
    #[error("Regex Error: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, TracksError>;
