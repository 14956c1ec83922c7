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
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 网格本身（行、瓦片、焦点、详情弹窗）由 tilegrid-core 的 NavigationSession 持有，
//! 这里只保存表现层自己的状态。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod grid;           // 首页加载状态（Loading / Ready / Failed）
//!         mod overlay;        // 应用层弹窗（帮助、错误）
//!         mod viewport;       // 视口尺寸、滚动偏移与可见行计算
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 网格状态（GridState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     pub enum GridState {
//!         Loading,                            // home.json 尚未返回
//!         Ready(Box<NavigationSession>),      // 网格已构建
//!         Failed(String),                     // 首页获取失败
//!     }
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 视口（Viewport）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     每行占固定高度（行标题 + 瓦片 + 间隔），每个瓦片占固定宽度。
//!     由终端尺寸算出一屏能放几行、一行能放几个瓦片：
//!
//!         ┌ 标题栏 ─────────────────────────────────────────┐
//!         │┌───────────────────────────────────────────────┐│
//!         ││ Row title                                     ││
//!         ││ ┌──────┐ ┌──────┐ ┌──────┐ ┌──────┐           ││  ◀ row_offset 起
//!         ││ │ tile │ │ tile │ │▓tile▓│ │ tile │  ...      ││
//!         ││ └──────┘ └──────┘ └──────┘ └──────┘           ││
//!         ││ Row title                                     ││
//!         ││ ...                                           ││
//!         │└───────────────────────────────────────────────┘│
//!         └ 状态栏 ─────────────────────────────────────────┘
//!
//!     焦点移动后：
//!         · 焦点行尽量垂直居中（row_offset）
//!         · 焦点瓦片在其所在行内尽量水平居中（tile_offsets[row]）
//!         · 其他行保持各自上一次的水平滚动位置
//!
//!     视口内的行就是 “可见行”，交给 VisibilityPublisher 发布进入/离开事件，
//!     延迟行因此在第一次进入视口时开始加载。
//!
//!
//!     → 去往 src/view/mod.rs 看看状态是如何被渲染的吧
//!

mod app;
mod grid;
mod overlay;
mod viewport;

pub use app::App;
pub use grid::GridState;
pub use overlay::{Overlay, OverlayState};
pub use viewport::{
    ROW_HEIGHT, ROW_TITLE_HEIGHT, TILE_GAP, TILE_HEIGHT, TILE_WIDTH, Viewport,
};
