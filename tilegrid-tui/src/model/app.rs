//! 应用主状态结构

use tilegrid_core::VisibilityPublisher;

use super::{GridState, OverlayState, Viewport};
use crate::backend::CatalogService;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 数据源与首页请求
    pub catalog: CatalogService,

    /// 网格（首页返回后构建）
    pub grid: GridState,

    /// 延迟行的可见性发布器
    pub visibility: VisibilityPublisher,

    /// 视口尺寸与滚动位置
    pub viewport: Viewport,

    /// 帮助 / 错误弹窗
    pub overlay: OverlayState,

    /// 状态栏消息
    pub status_message: Option<String>,
}

impl App {
    /// 创建新的应用实例
    pub fn new(catalog: CatalogService, width: u16, height: u16) -> Self {
        Self {
            should_quit: false,
            catalog,
            grid: GridState::Loading,
            visibility: VisibilityPublisher::new(),
            viewport: Viewport::new(width, height),
            overlay: OverlayState::new(),
            status_message: None,
        }
    }

    /// 是否有任意弹窗打开（应用层弹窗或瓦片详情）
    pub fn modal_open(&self) -> bool {
        self.overlay.is_open()
            || self
                .grid
                .session()
                .is_some_and(|session| session.modal().is_open())
    }

    /// 按当前焦点更新滚动，并向延迟行发布可见性变化
    pub fn sync_visibility(&mut self) {
        let Some(session) = self.grid.session() else {
            return;
        };
        let grid = session.grid();
        self.viewport.follow(session.focus(), grid);

        let visible: Vec<_> = self
            .viewport
            .visible_rows(grid.row_count())
            .filter_map(|row| grid.handle(row))
            .collect();
        let sent = self.visibility.publish(&visible);
        if sent > 0 {
            tracing::debug!("Visibility changed for {sent} rows, {} in view", visible.len());
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
