//! 视口几何与滚动

use std::collections::HashMap;
use std::ops::Range;

use tilegrid_core::GridModel;
use tilegrid_core::types::FocusPosition;

/// 瓦片宽度（含边框）
pub const TILE_WIDTH: u16 = 24;
/// 瓦片之间的水平间隔
pub const TILE_GAP: u16 = 1;
/// 瓦片高度（含边框）
pub const TILE_HEIGHT: u16 = 6;
/// 行标题高度
pub const ROW_TITLE_HEIGHT: u16 = 1;
const ROW_GAP: u16 = 1;
/// 每行总高度
pub const ROW_HEIGHT: u16 = ROW_TITLE_HEIGHT + TILE_HEIGHT + ROW_GAP;

// 标题栏 + 状态栏 + 网格边框
const CHROME_HEIGHT: u16 = 1 + 1 + 2;
const CHROME_WIDTH: u16 = 2;

/// 让 `focus` 尽量居中时的起始偏移
///
/// 内容不足一屏时为 0；靠近末尾时贴底，不留空白。
pub fn centered_offset(focus: usize, total: usize, visible: usize) -> usize {
    if visible == 0 || total <= visible {
        return 0;
    }
    focus.saturating_sub(visible / 2).min(total - visible)
}

#[derive(Debug, Clone, Default)]
pub struct Viewport {
    width: u16,
    height: u16,
    row_offset: usize,
    /// 每行各自的水平滚动位置
    tile_offsets: HashMap<usize, usize>,
}

impl Viewport {
    /// 以终端尺寸创建
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// 网格区域内部高度
    pub const fn grid_height(&self) -> u16 {
        self.height.saturating_sub(CHROME_HEIGHT)
    }

    /// 网格区域内部宽度
    pub const fn grid_width(&self) -> u16 {
        self.width.saturating_sub(CHROME_WIDTH)
    }

    /// 一屏能完整显示的行数（至少 1）
    pub fn rows_per_page(&self) -> usize {
        usize::from(self.grid_height() / ROW_HEIGHT).max(1)
    }

    /// 一行能完整显示的瓦片数（至少 1）
    pub fn tiles_per_row(&self) -> usize {
        usize::from((self.grid_width() + TILE_GAP) / (TILE_WIDTH + TILE_GAP)).max(1)
    }

    pub fn tile_offset(&self, row_index: usize) -> usize {
        self.tile_offsets.get(&row_index).copied().unwrap_or(0)
    }

    /// 按焦点更新滚动位置
    pub fn follow(&mut self, focus: FocusPosition, grid: &GridModel) {
        let row_count = grid.row_count();
        self.row_offset = centered_offset(focus.row_index, row_count, self.rows_per_page());
        if row_count == 0 {
            return;
        }

        let per_row = self.tiles_per_row();
        let offset = centered_offset(focus.tile_index, grid.tile_count(focus.row_index), per_row);
        self.tile_offsets.insert(focus.row_index, offset);

        // 尺寸变大后，旧偏移可能让行尾留白
        for (row, offset) in &mut self.tile_offsets {
            let count = grid.tile_count(*row);
            *offset = (*offset).min(count.saturating_sub(per_row));
        }
    }

    /// 视口内的行
    pub fn visible_rows(&self, row_count: usize) -> Range<usize> {
        let start = self.row_offset.min(row_count);
        let end = (start + self.rows_per_page()).min(row_count);
        start..end
    }

    /// 某行视口内的瓦片
    pub fn visible_tiles(&self, row_index: usize, tile_count: usize) -> Range<usize> {
        let start = self.tile_offset(row_index).min(tile_count);
        let end = (start + self.tiles_per_row()).min(tile_count);
        start..end
    }
}
