//! 焦点控制
//!
//! 焦点只是一个坐标，每次使用都针对网格的当前状态重新解析。
//! 移动在边缘处饱和，不回绕；换行时列重置为 0。

use super::grid_model::GridModel;
use crate::types::{FocusPosition, Tile};

#[derive(Debug, Default)]
pub struct FocusController {
    position: FocusPosition,
}

impl FocusController {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn position(&self) -> FocusPosition {
        self.position
    }

    /// 网格构建完成后回到 (0, 0)
    pub fn reset(&mut self) {
        self.position = FocusPosition::default();
    }

    pub fn move_right(&mut self, grid: &GridModel) -> bool {
        let next = self.position.tile_index + 1;
        if next < grid.tile_count(self.position.row_index) {
            self.position.tile_index = next;
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self, _grid: &GridModel) -> bool {
        if self.position.tile_index == 0 {
            return false;
        }
        self.position.tile_index -= 1;
        true
    }

    pub fn move_down(&mut self, grid: &GridModel) -> bool {
        let next = self.position.row_index + 1;
        if next < grid.row_count() {
            self.position = FocusPosition::new(next, 0);
            true
        } else {
            false
        }
    }

    pub fn move_up(&mut self, _grid: &GridModel) -> bool {
        if self.position.row_index == 0 {
            return false;
        }
        self.position = FocusPosition::new(self.position.row_index - 1, 0);
        true
    }

    /// 当前焦点瓦片；所在行没有瓦片时为 None（NoFocus）
    ///
    /// 解析前先把列钳制到 `[0, tile_count - 1]`。
    pub fn current_tile<'g>(&mut self, grid: &'g GridModel) -> Option<&'g Tile> {
        let count = grid.tile_count(self.position.row_index);
        self.position.tile_index = self.position.tile_index.min(count.saturating_sub(1));
        if count == 0 {
            return None;
        }
        grid.tile_at(self.position.row_index, self.position.tile_index).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tiles;

    fn grid(shape: &[Option<usize>]) -> GridModel {
        let mut grid = GridModel::new();
        for (i, row) in shape.iter().enumerate() {
            grid.append_row(format!("row-{i}"), row.map(tiles));
        }
        grid
    }

    fn assert_valid(focus: &FocusController, grid: &GridModel) {
        let p = focus.position();
        assert!(p.row_index < grid.row_count().max(1));
        let count = grid.tile_count(p.row_index);
        if count == 0 {
            assert_eq!(p.tile_index, 0);
        } else {
            assert!(p.tile_index < count, "{p} outside row of {count}");
        }
    }

    #[test]
    fn saturates_at_origin() {
        let g = grid(&[Some(3), Some(2)]);
        let mut focus = FocusController::new();
        assert!(!focus.move_up(&g));
        assert!(!focus.move_left(&g));
        assert_eq!(focus.position(), FocusPosition::new(0, 0));
    }

    #[test]
    fn saturates_at_far_corner() {
        let g = grid(&[Some(3), Some(2)]);
        let mut focus = FocusController::new();
        assert!(focus.move_down(&g));
        assert!(focus.move_right(&g));
        assert!(!focus.move_right(&g));
        assert!(!focus.move_down(&g));
        assert_eq!(focus.position(), FocusPosition::new(1, 1));
    }

    #[test]
    fn vertical_moves_reset_column() {
        let g = grid(&[Some(5), Some(5), Some(5)]);
        let mut focus = FocusController::new();
        focus.move_right(&g);
        focus.move_right(&g);
        assert!(focus.move_down(&g));
        assert_eq!(focus.position(), FocusPosition::new(1, 0));
        focus.move_right(&g);
        assert!(focus.move_up(&g));
        assert_eq!(focus.position(), FocusPosition::new(0, 0));
    }

    #[test]
    fn empty_row_has_no_focus() {
        let g = grid(&[Some(2), None]);
        let mut focus = FocusController::new();
        focus.move_down(&g);
        assert!(!focus.move_right(&g));
        assert!(focus.current_tile(&g).is_none());
        assert_eq!(focus.position(), FocusPosition::new(1, 0));
    }

    #[test]
    fn empty_grid_is_inert() {
        let g = GridModel::new();
        let mut focus = FocusController::new();
        assert!(!focus.move_down(&g));
        assert!(!focus.move_right(&g));
        assert!(focus.current_tile(&g).is_none());
    }

    #[test]
    fn late_population_resolves() {
        let mut g = grid(&[Some(1), None]);
        let mut focus = FocusController::new();
        focus.move_down(&g);
        assert!(focus.current_tile(&g).is_none());

        let row = g.handle(1).unwrap();
        g.populate_row(row, tiles(2)).unwrap();
        assert_eq!(focus.current_tile(&g).map(|t| t.index), Some(0));
        assert!(focus.move_right(&g));
        assert_eq!(focus.current_tile(&g).map(|t| t.index), Some(1));
    }

    #[test]
    fn arbitrary_move_sequences_keep_invariants() {
        let g = grid(&[Some(4), None, Some(1), Some(0), Some(7)]);
        let mut focus = FocusController::new();
        // 简单的线性同余序列，覆盖各种组合
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            match (seed >> 16) % 4 {
                0 => focus.move_up(&g),
                1 => focus.move_down(&g),
                2 => focus.move_left(&g),
                _ => focus.move_right(&g),
            };
            assert_valid(&focus, &g);
            if let Some(tile) = focus.current_tile(&g) {
                assert_eq!(tile.index, focus.position().tile_index);
            }
        }
    }
}
