//! 外部能力抽象

mod visibility_feed;

pub use visibility_feed::{
    ChannelVisibilityFeed, StreamVisibilityFeed, VisibilityEvent, VisibilityFeed,
    VisibilityPublisher,
};

// Re-export 数据源 Trait
pub use tilegrid_provider::CatalogSource;
