// src/error.rs

use std::num::ParseIntError;

use thiserror::Error;

/// All failure modes of the simulator.
///
/// The first two variants cover command-line validation; the rest are the
/// defensive contracts of the pure computation functions and are not
/// reachable through a normal CLI run.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("expected 3 arguments, got {0}")]
    WrongArgumentCount(usize),

    #[error("'{value}' is not a valid integer argument")]
    InvalidArgument {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("{0} must be either 1 or 2")]
    InvalidAccessPoint(u8),

    #[error("{0} is an unsupported frequency or is incorrectly formatted")]
    UnsupportedBand(String),

    #[error("distance {0} must be strictly positive")]
    NonPositiveDistance(f64),

    #[error("failed to write output file")]
    Io(#[from] std::io::Error),
}
