//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ Overlay   │               ▼               │   │
//！│  │   ┌─────────┐          │ CatalogMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ Input     │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │     tilegrid-     │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod input;              // 网格输入（交给 NavigationSession）
//!         mod overlay;            // 帮助 / 错误弹窗
//!         mod catalog;            // 后台结果（首页、行加载）
//!
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {
//!             match msg {
//!                 AppMessage::Quit => app.should_quit = true,
//!                 AppMessage::Input(action) => input::update(app, action),
//!                 AppMessage::Overlay(msg) => overlay::update(app, msg),
//!                 AppMessage::Catalog(msg) => catalog::update(app, msg),
//!                 AppMessage::Resize { .. } => app.viewport.resize(..),
//!                 AppMessage::Noop => {}
//!             }
//!             app.sync_visibility();
//!         }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 可见性同步
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每条消息处理完后都会调用 app.sync_visibility()：
//!         1. 视口按当前焦点重新滚动（焦点行居中、焦点瓦片居中）
//!         2. 计算视口内的行
//!         3. VisibilityPublisher 对状态变化的延迟行发送 Entered / Left
//!
//!     延迟行收到 Entered 后，core 的 LazyRowLoader 发起获取；
//!     结果在下一个 tick 由 app.rs 的 session.pump() 取回，
//!     再以 CatalogMessage::RowsSettled 回到这里。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 首页结果（catalog.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     ListingLoaded(Ok(rows))
//!         → NavigationSession::build(rows, loader, |row| publisher.register(row))
//!         → GridState::Ready
//!
//!     ListingLoaded(Err(e))
//!         → GridState::Failed，并弹出错误弹窗
//!
//!     RowsSettled(reports)
//!         → 失败的行在状态栏提示，网格本身已由 core 更新
//!
//!
//! Model 更新完毕后，下一次循环由 View 层重新渲染。
//!     → 去往 src/view/mod.rs 吧
//!

mod catalog;
mod input;
mod overlay;

use crate::message::AppMessage;
use crate::model::App;

/// 主更新函数
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }
        AppMessage::Input(action) => input::update(app, action),
        AppMessage::Overlay(overlay_msg) => overlay::update(app, overlay_msg),
        AppMessage::Catalog(catalog_msg) => catalog::update(app, catalog_msg),
        AppMessage::Resize { width, height } => {
            app.viewport.resize(width, height);
        }
        AppMessage::Noop => {}
    }

    app.sync_visibility();
}
