//! Tile related type definitions

use serde::{Deserialize, Serialize};

use tilegrid_provider::TileRecord;

use crate::utils::datetime::format_release_date;

/// Title used when a tile or row carries none
pub const DEFAULT_TITLE: &str = "Untitled";
/// Description used when a tile carries none
pub const DEFAULT_DESCRIPTION: &str = "No description available.";
/// Rating used when a tile carries none
pub const DEFAULT_RATING: &str = "No rating";
/// Content type used when a tile carries none
pub const DEFAULT_CONTENT_TYPE: &str = "Unknown type";
/// Reference id used when a tile carries none
pub const DEFAULT_REF_ID: &str = "Unknown-Ref-ID";

/// One selectable grid item. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Position within the owning row (insertion order)
    pub index: usize,
    pub ref_id: String,
    pub title: String,
    pub description: String,
    /// Raw release date; `None` when unknown
    pub release_date: Option<String>,
    pub rating: String,
    pub content_type: String,
    /// `None` renders as a placeholder
    pub image_url: Option<String>,
}

impl Tile {
    /// Construct a tile from a provider record, filling every missing field with its default.
    ///
    /// This is the only place display defaults are applied.
    #[must_use]
    pub fn from_record(index: usize, record: TileRecord) -> Self {
        Self {
            index,
            ref_id: record.ref_id.unwrap_or_else(|| DEFAULT_REF_ID.to_string()),
            title: record.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: record
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            release_date: record.release_date,
            rating: record.rating.unwrap_or_else(|| DEFAULT_RATING.to_string()),
            content_type: record
                .content_type
                .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
            image_url: record.image_url,
        }
    }

    /// Build a row's tile sequence, indexing records in order
    pub fn from_records(records: impl IntoIterator<Item = TileRecord>) -> Vec<Self> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, record)| Self::from_record(index, record))
            .collect()
    }
}

/// Snapshot of a tile shown by the detail overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDetailView {
    pub title: String,
    pub description: String,
    /// Formatted release date, or `"N/A"`
    pub release_date: String,
    pub rating: String,
    pub content_type: String,
    pub ref_id: String,
    pub image_url: Option<String>,
}

impl From<&Tile> for TileDetailView {
    fn from(tile: &Tile) -> Self {
        Self {
            title: tile.title.clone(),
            description: tile.description.clone(),
            release_date: format_release_date(tile.release_date.as_deref()),
            rating: tile.rating.clone(),
            content_type: tile.content_type.clone(),
            ref_id: tile.ref_id.clone(),
            image_url: tile.image_url.clone(),
        }
    }
}
