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
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 键盘事件与后台结果都被翻译成 Update 能够看懂的 Messages。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod catalog;
//!         mod overlay;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                               // 退出应用
//!             Input(InputAction),                 // 方向 / 选择 / 关闭，原样交给 core
//!             Overlay(OverlayMessage),            // 帮助、错误弹窗
//!             Catalog(CatalogMessage),            // 后台结果（首页、行加载）
//!             Resize { width, height },           // 终端尺寸改变，需重新计算可见行
//!             Noop,                               // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     InputAction 直接复用 tilegrid-core 的定义：
//!         弹窗打开时方向键是否生效，由 core 的 InputRouter 决定，
//!         TUI 只负责把按键翻译成动作。
//!
//!
//!     CatalogMessage 不来自键盘，而是 app.rs 每个 tick 排空后台通道时产生：
//!         ListingLoaded(Result<Vec<RowDescriptor>, ProviderError>)
//!         RowsSettled(Vec<LoadReport>)
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     → 去往 src/update/mod.rs 吧
//!

mod app;
mod catalog;
mod overlay;

pub use app::AppMessage;
pub use catalog::CatalogMessage;
pub use overlay::OverlayMessage;
