use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by configuration, round bookkeeping and word bank loading.
///
/// The scoring primitives themselves are total and never return these.
#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("base points must be greater than zero")]
    InvalidBasePoints,

    #[error("first bonus multiplier must be a finite positive number, got {0}")]
    InvalidMultiplier(f64),

    #[error("round duration must be greater than zero seconds")]
    InvalidRoundDuration,

    #[error("the round is over")]
    RoundOver,

    #[error("player '{0}' already guessed the word this round")]
    AlreadyGuessed(String),

    #[error("failed to read word bank from '{path}': {source}")]
    Wordbank {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word bank contains no usable words")]
    EmptyWordbank,
}

pub type Result<T> = std::result::Result<T, ScorerError>;
