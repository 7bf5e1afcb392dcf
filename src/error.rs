use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("position {position} is out of bounds, must be below {len}")]
    OutOfRange { position: usize, len: usize },
    #[error("invalid literal for integer on line {line}: '{token}'")]
    MalformedRecord { line: usize, token: String },
    #[error("unknown pivot strategy '{0}', expected first, last or median_of_three")]
    InvalidPivot(String),
    #[error("invalid quicksort configuration '{0}', expected PIVOT:THRESHOLD")]
    InvalidConfig(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
