//! tilegrid Core Library
//!
//! The focus-navigation and lazy-population state machine behind tilegrid:
//! - `GridModel`: rows and tiles, append-only, with monotonic load states
//! - `LazyRowLoader`: fetches each deferred row at most once, when it first becomes visible
//! - `FocusController`: saturating directional moves, re-resolved against the live grid
//! - `ModalController`: detail overlay snapshot
//! - `InputRouter`: the single dispatch point that gates navigation while the overlay is open
//!
//! `NavigationSession` composes them. The library is presentation-independent;
//! visibility detection is abstracted by the `VisibilityFeed` trait and data
//! retrieval by `CatalogSource` from `tilegrid-provider`.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    CollectionPreference, GridModel, InputAction, LazyRowLoader, LoadReport, LoaderEvent,
    NavigationSession, RouteOutcome,
};
pub use traits::{CatalogSource, VisibilityEvent, VisibilityFeed, VisibilityPublisher};
