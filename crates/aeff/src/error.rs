//! Result and Error types for nutools-aeff

/// Type alias for Result<T, aeff::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `nutools-aeff` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to parse simulation file")]
    ParseError(#[from] serde_json::Error),

    #[error("failed to infer flavor from \"{0}\"")]
    FailedToInferFlavor(String),

    #[error("failed to infer interaction type from \"{0}\"")]
    FailedToInferIntType(String),

    #[error("simulation file has no \"{0}\" group")]
    GroupNotFound(String),

    #[error(
        "inconsistent event sample lengths in \"{group}\" (energy {energy:?}, coszen {coszen:?}, weights {weights:?})"
    )]
    MismatchedSampleLengths {
        group: String,
        energy: usize,
        coszen: usize,
        weights: usize,
    },

    #[error("inconsistent sequence lengths (x {x:?}, y {y:?}, weights {weights:?})")]
    MismatchedSequenceLengths { x: usize, y: usize, weights: usize },

    #[error("expected at least 2 bin edges per axis, found {x:?} x-edges and {y:?} y-edges")]
    NotEnoughBinEdges { x: usize, y: usize },
}
