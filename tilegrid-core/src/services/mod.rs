//! 状态机服务层
//!
//! ```text
//!   LazyRowLoader ──(async, via events)──▶ GridModel ◀──(sync read)── FocusController
//!                                                                        ▲
//!   key ──▶ InputRouter ──────────────────────────────────────────────────┤
//!                  └──────────────────────────────▶ ModalController ◀─────┘
//! ```

mod collection_preference;
mod focus_controller;
mod grid_model;
mod input_router;
mod lazy_row_loader;
mod modal_controller;
mod navigation_session;

pub use collection_preference::{CollectionPreference, DEFAULT_FALLBACK_COLLECTION};
pub use focus_controller::FocusController;
pub use grid_model::GridModel;
pub use input_router::{InputAction, InputRouter, RouteOutcome};
pub use lazy_row_loader::{LazyRowLoader, LoadReport, LoaderEvent};
pub use modal_controller::ModalController;
pub use navigation_session::NavigationSession;
