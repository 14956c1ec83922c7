//!
//! src/backend/mod.rs
//! Backend 层：配置与目录服务
//!
//! Backend 层与 UI 解耦，负责读取配置和与数据源打交道。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置文件（config.json）
//!         mod catalog_service;    // 数据源 + 首页请求
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、配置服务（LocalConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     配置文件位于 dirs::config_dir()/tilegrid/config.json：
//!
//!         {
//!             "source": { "kind": "http", "base_url": "https://..." },
//!             "fallbackCollections": ["CuratedSet"],
//!             "theme": "dark",
//!             "language": "en-US"
//!         }
//!
//!     所有字段都可省略。文件不存在时使用默认值；
//!     解析失败时返回 ConfigError::Parse，由 main.rs 记录日志并回退到默认值。
//!
//!     环境变量 TILEGRID_SOURCE_DIR 会把数据源切换为本地目录（离线模式）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、目录服务（CatalogService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     根据 SourceConfig 创建 HttpCatalogSource 或 FileCatalogSource。
//!
//!         request_listing()       在 tokio 任务中获取 home.json，
//!                                 结果经无界通道送回
//!         try_recv_listing()      主循环每个 tick 调用，非阻塞
//!         loader()                为 NavigationSession 创建 LazyRowLoader，
//!                                 与首页共享同一个数据源
//!
//!     行内容的加载不经过这里：那是 core 里 LazyRowLoader 的职责。
//!

mod catalog_service;
mod config_service;

pub use catalog_service::{CatalogService, ListingResult};
pub use config_service::{AppConfig, ConfigService, LocalConfigService};
