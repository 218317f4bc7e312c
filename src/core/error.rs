use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or writing an EDI order.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdiError {
    /// Customer or supplier has no EDI operational point.
    #[error("Missing EDI Operational Point from party \"{party}\"")]
    MissingOperationalPoint { party: String },

    /// The resolved delivery address has no warehouse EAN code.
    #[error("Missing EDI EAN code for warehouse address \"{address}\"")]
    MissingWarehouseEan { address: String },

    /// An address had to be resolved from a party without any.
    #[error("party \"{party}\" has no addresses")]
    MissingAddress { party: String },

    /// The output directory does not exist.
    #[error("path \"{}\" does not exist", path.display())]
    PathNotFound { path: PathBuf },

    /// Writing the order file failed.
    #[error("cannot write \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Amount arithmetic overflowed.
    #[error("arithmetic error: {0}")]
    Arithmetic(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),
}
