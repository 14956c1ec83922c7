//! 输入分发
//!
//! 所有按键动作都从这里进入。弹窗打开时只响应 `Dismiss`，其余动作被吞掉。

use serde::{Deserialize, Serialize};

use super::focus_controller::FocusController;
use super::grid_model::GridModel;
use super::modal_controller::ModalController;

/// 与具体按键无关的输入动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Select,
    Dismiss,
}

impl InputAction {
    pub const fn is_directional(self) -> bool {
        matches!(
            self,
            Self::MoveUp | Self::MoveDown | Self::MoveLeft | Self::MoveRight
        )
    }
}

/// 分发结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// 焦点移动了
    Moved,
    /// 动作合法但没有效果（边缘、无焦点、弹窗未打开时的 Dismiss）
    Unchanged,
    /// 弹窗已打开
    Opened,
    /// 弹窗已关闭
    Dismissed,
    /// 弹窗打开期间被吞掉的动作
    Suppressed,
}

pub struct InputRouter;

impl InputRouter {
    pub fn route(
        action: InputAction,
        grid: &GridModel,
        focus: &mut FocusController,
        modal: &mut ModalController,
    ) -> RouteOutcome {
        if modal.is_open() {
            return match action {
                InputAction::Dismiss if modal.dismiss() => RouteOutcome::Dismissed,
                _ => RouteOutcome::Suppressed,
            };
        }

        let changed = match action {
            InputAction::MoveUp => focus.move_up(grid),
            InputAction::MoveDown => focus.move_down(grid),
            InputAction::MoveLeft => focus.move_left(grid),
            InputAction::MoveRight => focus.move_right(grid),
            InputAction::Select => {
                return match focus.current_tile(grid) {
                    Some(tile) if modal.select(tile) => RouteOutcome::Opened,
                    _ => RouteOutcome::Unchanged,
                };
            }
            InputAction::Dismiss => false,
        };

        if changed {
            RouteOutcome::Moved
        } else {
            RouteOutcome::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::tiles;
    use crate::types::FocusPosition;

    struct Fixture {
        grid: GridModel,
        focus: FocusController,
        modal: ModalController,
    }

    impl Fixture {
        fn new() -> Self {
            let mut grid = GridModel::new();
            grid.append_row("a", Some(tiles(3)));
            grid.append_row("b", None);
            Self {
                grid,
                focus: FocusController::new(),
                modal: ModalController::new(),
            }
        }

        fn route(&mut self, action: InputAction) -> RouteOutcome {
            InputRouter::route(action, &self.grid, &mut self.focus, &mut self.modal)
        }
    }

    #[test]
    fn directional_keys_move_focus() {
        let mut f = Fixture::new();
        assert_eq!(f.route(InputAction::MoveRight), RouteOutcome::Moved);
        assert_eq!(f.route(InputAction::MoveLeft), RouteOutcome::Moved);
        assert_eq!(f.route(InputAction::MoveLeft), RouteOutcome::Unchanged);
        assert_eq!(f.route(InputAction::Dismiss), RouteOutcome::Unchanged);
    }

    #[test]
    fn modal_gates_navigation() {
        let mut f = Fixture::new();
        f.route(InputAction::MoveRight);
        assert_eq!(f.route(InputAction::Select), RouteOutcome::Opened);
        let before = f.focus.position();

        for action in [
            InputAction::MoveUp,
            InputAction::MoveDown,
            InputAction::MoveLeft,
            InputAction::MoveRight,
            InputAction::Select,
        ] {
            assert_eq!(f.route(action), RouteOutcome::Suppressed);
        }
        assert_eq!(f.focus.position(), before);

        assert_eq!(f.route(InputAction::Dismiss), RouteOutcome::Dismissed);
        assert!(!f.modal.is_open());
        assert_eq!(f.focus.position(), FocusPosition::new(0, 1));
    }

    #[test]
    fn select_without_focus_is_noop() {
        let mut f = Fixture::new();
        f.route(InputAction::MoveDown);
        assert_eq!(f.route(InputAction::Select), RouteOutcome::Unchanged);
        assert!(!f.modal.is_open());
    }

    #[test]
    fn snapshot_matches_focused_tile() {
        let mut f = Fixture::new();
        f.route(InputAction::MoveRight);
        f.route(InputAction::MoveRight);
        f.route(InputAction::Select);
        assert_eq!(
            f.modal.content().map(|c| c.title.as_str()),
            Some("tile-2")
        );
    }
}
