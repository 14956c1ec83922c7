//! 导航会话
//!
//! 网格构建完成时创建，组合网格、加载器、焦点与弹窗，生命周期到进程结束。
//! 表现层只与这个对象交互。

use super::focus_controller::FocusController;
use super::grid_model::GridModel;
use super::input_router::{InputAction, InputRouter, RouteOutcome};
use super::lazy_row_loader::{LazyRowLoader, LoadReport, LoaderEvent};
use super::modal_controller::ModalController;
use crate::traits::VisibilityFeed;
use crate::types::{DEFAULT_TITLE, FocusPosition, RowDescriptor, RowHandle, Tile};

pub struct NavigationSession {
    grid: GridModel,
    loader: LazyRowLoader,
    focus: FocusController,
    modal: ModalController,
}

impl NavigationSession {
    /// 按行描述构建网格
    ///
    /// 内联行直接为 `Loaded`；延迟行为 `Unloaded`，并用 `feed_factory` 为其创建可见性 feed 交给加载器。
    /// 必须在 tokio 运行时内调用。
    pub fn build<F>(
        listing: Vec<RowDescriptor>,
        mut loader: LazyRowLoader,
        mut feed_factory: F,
    ) -> Self
    where
        F: FnMut(RowHandle) -> Box<dyn VisibilityFeed>,
    {
        let mut grid = GridModel::new();
        for descriptor in listing {
            match descriptor {
                RowDescriptor::Inline { title, items } => {
                    grid.append_row(
                        title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                        Some(Tile::from_records(items)),
                    );
                }
                RowDescriptor::Deferred {
                    title,
                    ref_id,
                    ref_type,
                } => {
                    let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
                    let row = grid.append_row(title, None);
                    loader.attach(row, ref_id, ref_type, feed_factory(row));
                }
            }
        }

        log::info!(
            "Grid built: {} rows, {} deferred",
            grid.row_count(),
            loader.attached_rows()
        );

        let mut focus = FocusController::new();
        focus.reset();
        Self {
            grid,
            loader,
            focus,
            modal: ModalController::new(),
        }
    }

    pub fn dispatch(&mut self, action: InputAction) -> RouteOutcome {
        InputRouter::route(action, &self.grid, &mut self.focus, &mut self.modal)
    }

    pub const fn focus(&self) -> FocusPosition {
        self.focus.position()
    }

    /// 当前焦点瓦片（会钳制焦点列）
    pub fn current_tile(&mut self) -> Option<&Tile> {
        self.focus.current_tile(&self.grid)
    }

    pub const fn modal(&self) -> &ModalController {
        &self.modal
    }

    pub const fn grid(&self) -> &GridModel {
        &self.grid
    }

    pub fn handle_loader_event(&mut self, event: LoaderEvent) -> Option<LoadReport> {
        self.loader.handle_event(&mut self.grid, event)
    }

    /// 应用所有已就绪的加载器事件，返回其中结算的行
    pub fn pump(&mut self) -> Vec<LoadReport> {
        let mut reports = Vec::new();
        while let Some(event) = self.loader.try_next_event() {
            reports.extend(self.loader.handle_event(&mut self.grid, event));
        }
        reports
    }

    /// 等待下一个加载器事件（不应用）
    pub async fn next_loader_event(&mut self) -> Option<LoaderEvent> {
        self.loader.next_event().await
    }
}
