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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘、窗口尺寸等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event , poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件
//!             Event::Resize(width , height)       // 终端尺寸改变 → AppMessage::Resize
//!             Event::Mouse(MouseEvent)            // 鼠标事件（不处理）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 键盘分发顺序
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     1. 帮助 / 错误弹窗打开时：
//!             Esc / Backspace / Ctrl+C / q / ?    → OverlayMessage::Close
//!             其他                                  → Noop
//!
//!     2. 瓦片详情弹窗打开时：
//!             Esc / Backspace / Ctrl+C            → Input(Dismiss)
//!             方向键 / Enter                       → Input(...)，InputRouter 返回 Suppressed
//!             其他（包括 q）                        → Noop
//!
//!     3. 没有弹窗时：
//!             q / Alt+q / Ctrl+C                  → Quit
//!             ?                                   → OverlayMessage::ShowHelp
//!             ↑ ↓ ← → / k j h l                   → Input(MoveUp/Down/Left/Right)
//!             Enter                               → Input(Select)
//!             Esc / Backspace                     → Input(Dismiss)（无弹窗时无效果）
//!
//!
//!     handler.rs 只负责 “翻译”，焦点是否移动、弹窗是否打开
//!     全部由 tilegrid-core 的 InputRouter 决定。
//!     → 去往 src/message/mod.rs 吧
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
