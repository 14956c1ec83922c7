//! Row related type definitions

use serde::{Deserialize, Serialize};

use super::tile::Tile;

/// Externally visible load state of a row
///
/// `Unloaded → Loaded` or `Unloaded → LoadFailed`, each at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    Unloaded,
    Loaded,
    LoadFailed,
}

/// Stable handle of a row (its index in the grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RowHandle(pub(crate) usize);

impl RowHandle {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Internal row status; `InFlight` reads as `Unloaded` from outside
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RowStatus {
    Unloaded,
    InFlight,
    Loaded,
    LoadFailed,
}

impl RowStatus {
    pub(crate) const fn load_state(self) -> LoadState {
        match self {
            Self::Unloaded | Self::InFlight => LoadState::Unloaded,
            Self::Loaded => LoadState::Loaded,
            Self::LoadFailed => LoadState::LoadFailed,
        }
    }

    pub(crate) const fn is_settled(self) -> bool {
        matches!(self, Self::Loaded | Self::LoadFailed)
    }
}

/// A horizontal, titled group of tiles
#[derive(Debug, Clone)]
pub struct Row {
    pub(crate) title: String,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) status: RowStatus,
}

impl Row {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub const fn load_state(&self) -> LoadState {
        self.status.load_state()
    }

    /// Fetch started and not yet settled
    pub fn is_fetching(&self) -> bool {
        self.status == RowStatus::InFlight
    }
}
