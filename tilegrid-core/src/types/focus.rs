//! Focus coordinate

use serde::{Deserialize, Serialize};

/// The single highlighted grid coordinate
///
/// A reference by coordinate: always re-resolved against the live grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusPosition {
    pub row_index: usize,
    pub tile_index: usize,
}

impl FocusPosition {
    #[must_use]
    pub const fn new(row_index: usize, tile_index: usize) -> Self {
        Self {
            row_index,
            tile_index,
        }
    }
}

impl std::fmt::Display for FocusPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row_index, self.tile_index)
    }
}
