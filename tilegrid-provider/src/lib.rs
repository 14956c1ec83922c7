//! # tilegrid-provider
//!
//! The catalog source abstraction used by tilegrid: where rows and their
//! tiles come from.
//!
//! A catalog exposes two operations:
//!
//! | Operation | Returns |
//! |-----------|---------|
//! | [`CatalogSource::fetch_collection_listing`] | One [`RowDescriptor`] per top-level container, either inline (tiles included) or deferred (an opaque `ref_id`) |
//! | [`CatalogSource::fetch_row_content`] | A [`RowContent`]: typed collection name → tile records |
//!
//! ## Sources
//!
//! - [`HttpCatalogSource`]: fetches `home.json` and `sets/{refId}.json` from a
//!   static CDN base URL.
//! - [`FileCatalogSource`]: reads the same layout from a local directory.
//!   Useful offline and for fixtures.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tilegrid_provider::{CatalogSource, HttpCatalogSource, RowDescriptor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpCatalogSource::new("https://cd-static.bamgrid.com/dp-117731241344")?;
//!
//!     for row in source.fetch_collection_listing().await? {
//!         match row {
//!             RowDescriptor::Inline { title, items } => {
//!                 println!("{title:?}: {} tiles", items.len());
//!             }
//!             RowDescriptor::Deferred { title, ref_id, .. } => {
//!                 let content = source.fetch_row_content(&ref_id).await?;
//!                 println!("{title:?}: {:?}", content.collection_names());
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ProviderError>`](ProviderError). Missing
//! optional fields inside tile data are never errors; they surface as `None`
//! in [`TileRecord`] and are resolved to display defaults by the core crate.
//! Failed requests are not retried.

mod error;
mod http_client;
mod sources;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ProviderError, Result};

// Re-export core trait
pub use traits::CatalogSource;

// Re-export types
pub use types::{RowContent, RowDescriptor, TileRecord};

// Re-export concrete sources
pub use sources::{FileCatalogSource, HttpCatalogSource};
