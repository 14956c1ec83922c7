//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

use crate::types::LoadState;

// Re-export library error type
pub use tilegrid_provider::ProviderError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Coordinate outside the grid's current bounds
    #[error("Coordinate out of range: row {row}, tile {tile}")]
    OutOfRange { row: usize, tile: usize },

    /// Row handle that was never issued by this grid
    #[error("Unknown row: {0}")]
    UnknownRow(usize),

    /// Row already settled (loaded or failed); its tiles are fixed
    #[error("Row {row} already settled as {state:?}")]
    AlreadySettled { row: usize, state: LoadState },

    /// Provider error (converting from library)
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl CoreError {
    /// Whether it is expected behavior (missing set, bad reference id), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// `OutOfRange`, `UnknownRow` and `AlreadySettled` are contract violations and never expected.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Provider(e) => e.is_expected(),
            Self::OutOfRange { .. } | Self::UnknownRow(_) | Self::AlreadySettled { .. } => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
