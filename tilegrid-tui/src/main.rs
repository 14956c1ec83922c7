//! tilegrid TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与目录服务 (`backend/`)
//!
//!
//! main.rs
//! tilegrid 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     load_config()           // 读取 config.json（缺失或损坏时使用默认值）
//!     logging::init()         // 日志写入数据目录下的 tilegrid.log
//!     Runtime::new()          // tokio 运行时，加载任务都在这里跑
//!     init_terminal()         // 初始化终端
//!     model::App::new()       // 创建 APP 实例并发起首页请求
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 主循环本身是同步的，只在每个 tick 中排空后台通道；
//! 网络请求与可见性监听都是运行时上的 tokio 任务。
//!     → 去往 src/app.rs 主循环吧

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
#[cfg(test)]
mod test_support;
mod update;
mod util;
mod view;

use anyhow::Result;

use backend::{CatalogService, ConfigService, LocalConfigService};
use util::{init_terminal, logging, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置（终端尚未接管，错误先保留到日志初始化之后）
    let config_service = LocalConfigService::new();
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (backend::AppConfig::default(), Some(e)),
    };
    let config = config.with_env_overrides();

    // 2. 日志（guard 必须活到进程结束，否则缓冲区不会刷新）
    let _log_guard = logging::init(&logging::default_log_dir())?;
    tracing::info!("tilegrid starting, config at {}", config_service.path().display());
    if let Some(e) = &config_error {
        tracing::warn!("Config ignored, using defaults: {e}");
    }

    view::theme::set_theme(config.theme);
    i18n::set_language(i18n::Language::from_code(&config.language).unwrap_or_default());

    // 3. tokio 运行时
    let runtime = tokio::runtime::Runtime::new()?;
    let _runtime_guard = runtime.enter();

    // 4. 目录服务与应用实例
    let catalog = CatalogService::new(&config)?;
    let mut terminal = init_terminal()?;
    let size = terminal.size()?;
    let mut app = model::App::new(catalog, size.width, size.height);
    if config_error.is_some() {
        app.set_status(i18n::t().status.config_ignored);
    }
    app.catalog.request_listing();

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    tracing::info!("tilegrid exiting");
    result
}
