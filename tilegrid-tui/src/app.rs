//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     catalog: CatalogService,                        // 数据源 + 后台结果通道
//!     grid: GridState::Loading,                       // 首页尚未返回
//!     visibility: VisibilityPublisher,                // 向各延迟行推送进入/离开视口
//!     viewport: Viewport,                             // 网格区域尺寸与每行的滚动偏移
//!     overlay: OverlayState,                          // 帮助 / 错误弹窗
//!     status_message = None,                          // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     drain_background(&mut app)                      // 排空后台通道：首页结果、行加载结果
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新状态，随后重新计算可见行
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::message::{AppMessage, CatalogMessage};
use crate::model::{App, GridState};
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        // 1. 排空后台结果
        drain_background(app);

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            // 5. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 6. 更新状态
            update::update(app, msg);
        }
    }

    Ok(())
}

/// 把后台通道里已就绪的结果转成消息
fn drain_background(app: &mut App) {
    while let Some(listing) = app.catalog.try_recv_listing() {
        update::update(app, AppMessage::Catalog(CatalogMessage::ListingLoaded(listing)));
    }

    if let GridState::Ready(session) = &mut app.grid {
        let reports = session.pump();
        if !reports.is_empty() {
            update::update(app, AppMessage::Catalog(CatalogMessage::RowsSettled(reports)));
        }
    }
}
