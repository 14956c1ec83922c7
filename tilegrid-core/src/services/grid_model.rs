//! 网格模型：行与瓦片的唯一所有者
//!
//! 行只追加不删除；瓦片在行填充时一次性创建，之后不再变化。
//! 加载状态单调推进：
//!
//! ```text
//!   Unloaded ──begin_fetch──▶ InFlight ──populate_row──▶ Loaded
//!       │                        │
//!       └──────mark_load_failed──┴──────────────────────▶ LoadFailed
//! ```

use crate::error::{CoreError, CoreResult};
use crate::types::{LoadState, Row, RowHandle, RowStatus, Tile};

#[derive(Debug, Default)]
pub struct GridModel {
    rows: Vec<Row>,
}

impl GridModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一行
    ///
    /// 提供内联瓦片时行直接为 `Loaded`，否则为 `Unloaded`。
    pub fn append_row(&mut self, title: impl Into<String>, tiles: Option<Vec<Tile>>) -> RowHandle {
        let handle = RowHandle(self.rows.len());
        let (tiles, status) = match tiles {
            Some(tiles) => (tiles, RowStatus::Loaded),
            None => (Vec::new(), RowStatus::Unloaded),
        };
        self.rows.push(Row {
            title: title.into(),
            tiles,
            status,
        });
        handle
    }

    /// 原子地将 `Unloaded` 行标记为获取中
    ///
    /// 返回 `true` 表示调用方获得了该行唯一的获取权。
    /// 其他任何状态（获取中、已加载、已失败、未知行）都返回 `false`。
    pub fn begin_fetch(&mut self, handle: RowHandle) -> bool {
        match self.rows.get_mut(handle.0) {
            Some(row) if row.status == RowStatus::Unloaded => {
                row.status = RowStatus::InFlight;
                true
            }
            _ => false,
        }
    }

    /// 填充行并标记为 `Loaded`
    ///
    /// 已结算（`Loaded`/`LoadFailed`）的行保持不变并返回 `AlreadySettled`。
    pub fn populate_row(&mut self, handle: RowHandle, tiles: Vec<Tile>) -> CoreResult<()> {
        let row = self
            .rows
            .get_mut(handle.0)
            .ok_or(CoreError::UnknownRow(handle.0))?;
        if row.status.is_settled() {
            return Err(CoreError::AlreadySettled {
                row: handle.0,
                state: row.status.load_state(),
            });
        }
        row.tiles = tiles;
        row.status = RowStatus::Loaded;
        Ok(())
    }

    /// 标记行加载失败，行保持为空
    ///
    /// 返回是否发生了状态转换；已结算或未知的行返回 `false`。
    pub fn mark_load_failed(&mut self, handle: RowHandle) -> bool {
        match self.rows.get_mut(handle.0) {
            Some(row) if !row.status.is_settled() => {
                row.status = RowStatus::LoadFailed;
                true
            }
            _ => false,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// 行内瓦片数；未知行为 0
    pub fn tile_count(&self, row_index: usize) -> usize {
        self.rows.get(row_index).map_or(0, |row| row.tiles.len())
    }

    pub fn tile_at(&self, row_index: usize, tile_index: usize) -> CoreResult<&Tile> {
        self.rows
            .get(row_index)
            .and_then(|row| row.tiles.get(tile_index))
            .ok_or(CoreError::OutOfRange {
                row: row_index,
                tile: tile_index,
            })
    }

    pub fn row(&self, row_index: usize) -> Option<&Row> {
        self.rows.get(row_index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// 索引对应的句柄（越界为 None）
    pub fn handle(&self, row_index: usize) -> Option<RowHandle> {
        (row_index < self.rows.len()).then_some(RowHandle(row_index))
    }

    pub fn load_state(&self, handle: RowHandle) -> Option<LoadState> {
        self.rows.get(handle.0).map(Row::load_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tiles;

    #[test]
    fn append_sets_initial_state() {
        let mut grid = GridModel::new();
        let inline = grid.append_row("Inline", Some(tiles(3)));
        let deferred = grid.append_row("Deferred", None);

        assert_eq!(inline.index(), 0);
        assert_eq!(deferred.index(), 1);
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.load_state(inline), Some(LoadState::Loaded));
        assert_eq!(grid.load_state(deferred), Some(LoadState::Unloaded));
        assert_eq!(grid.tile_count(0), 3);
        assert_eq!(grid.tile_count(1), 0);
        assert_eq!(grid.tile_count(9), 0);
    }

    #[test]
    fn begin_fetch_is_granted_once() {
        let mut grid = GridModel::new();
        let row = grid.append_row("Deferred", None);

        assert!(grid.begin_fetch(row));
        assert!(!grid.begin_fetch(row));
        // 获取中对外仍是 Unloaded
        assert_eq!(grid.load_state(row), Some(LoadState::Unloaded));
        assert!(grid.row(0).is_some_and(Row::is_fetching));
    }

    #[test]
    fn begin_fetch_refuses_inline_rows() {
        let mut grid = GridModel::new();
        let row = grid.append_row("Inline", Some(tiles(1)));
        assert!(!grid.begin_fetch(row));
        assert!(!grid.begin_fetch(RowHandle(5)));
    }

    #[test]
    fn populate_settles_row() {
        let mut grid = GridModel::new();
        let row = grid.append_row("Deferred", None);
        assert!(grid.begin_fetch(row));

        grid.populate_row(row, tiles(2)).unwrap();
        assert_eq!(grid.load_state(row), Some(LoadState::Loaded));
        assert_eq!(grid.tile_count(0), 2);
        assert!(!grid.begin_fetch(row));
    }

    #[test]
    fn second_populate_is_rejected_and_ignored() {
        let mut grid = GridModel::new();
        let row = grid.append_row("Deferred", None);
        grid.populate_row(row, tiles(2)).unwrap();

        let err = grid.populate_row(row, tiles(5)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::AlreadySettled {
                row: 0,
                state: LoadState::Loaded
            }
        ));
        assert_eq!(grid.tile_count(0), 2);
    }

    #[test]
    fn failed_row_stays_empty() {
        let mut grid = GridModel::new();
        let row = grid.append_row("Deferred", None);
        assert!(grid.begin_fetch(row));

        assert!(grid.mark_load_failed(row));
        assert!(!grid.mark_load_failed(row));
        assert_eq!(grid.load_state(row), Some(LoadState::LoadFailed));
        assert!(grid.populate_row(row, tiles(1)).is_err());
        assert_eq!(grid.tile_count(0), 0);
    }

    #[test]
    fn tile_at_bounds() {
        let mut grid = GridModel::new();
        grid.append_row("Inline", Some(tiles(2)));

        assert_eq!(grid.tile_at(0, 1).unwrap().index, 1);
        assert!(matches!(
            grid.tile_at(0, 2),
            Err(CoreError::OutOfRange { row: 0, tile: 2 })
        ));
        assert!(grid.tile_at(1, 0).is_err());
    }

    #[test]
    fn unknown_row_errors() {
        let mut grid = GridModel::new();
        assert!(matches!(
            grid.populate_row(RowHandle(0), Vec::new()),
            Err(CoreError::UnknownRow(0))
        ));
        assert!(grid.handle(0).is_none());
    }
}
