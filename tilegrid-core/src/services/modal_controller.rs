//! 详情弹窗状态
//!
//! 打开时保存瓦片快照，之后不再读取网格。关闭不影响焦点。

use crate::types::{Tile, TileDetailView};

#[derive(Debug, Default)]
pub struct ModalController {
    content: Option<TileDetailView>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_open(&self) -> bool {
        self.content.is_some()
    }

    /// 打开时的快照；关闭时为 None
    pub const fn content(&self) -> Option<&TileDetailView> {
        self.content.as_ref()
    }

    /// 打开弹窗；已打开时不做任何事并返回 `false`
    pub fn select(&mut self, tile: &Tile) -> bool {
        if self.is_open() {
            return false;
        }
        self.content = Some(TileDetailView::from(tile));
        true
    }

    /// 关闭弹窗并丢弃快照；已关闭时返回 `false`
    pub fn dismiss(&mut self) -> bool {
        self.content.take().is_some()
    }
}
