//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         pub mod logging;    // 文件日志
//!         pub mod text;       // 按显示宽度截断文本
//!
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     终端：
//!         init_terminal()     启用原始模式、进入备用屏幕，并安装 panic hook，
//!                             panic 时先把终端还原再打印信息
//!         restore_terminal()  禁用原始模式、离开备用屏幕、显示光标
//!
//!         restore_terminal 在 app::run 之后立即执行，即使 run 返回错误，
//!         也会先恢复终端，再返回错误结果。
//!
//!
//!     日志：
//!         stdout 被终端界面占用，日志只能写文件。
//!         logging::init() 安装 tracing-subscriber，经 tracing-appender
//!         的非阻塞写入器落到 数据目录/tilegrid/tilegrid.log。
//!         core 与 provider 走 `log` 门面，由 tracing-subscriber 桥接。
//!
//!         过滤级别取自环境变量 TILEGRID_LOG（EnvFilter 语法），默认 info。
//!
//!     → 去往 src/app.rs 主循环吧
//!

pub mod logging;
mod terminal;
pub mod text;

pub use terminal::{Term, init_terminal, restore_terminal};
