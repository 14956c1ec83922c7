//! 类型定义模块

mod focus;
mod row;
mod tile;

pub use focus::FocusPosition;
pub use row::{LoadState, Row, RowHandle};
pub(crate) use row::RowStatus;
pub use tile::{
    DEFAULT_CONTENT_TYPE, DEFAULT_DESCRIPTION, DEFAULT_RATING, DEFAULT_REF_ID, DEFAULT_TITLE,
    Tile, TileDetailView,
};

// Re-export provider 库的公共类型
pub use tilegrid_provider::{RowContent, RowDescriptor, TileRecord};
