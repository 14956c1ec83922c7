//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 网格 + 状态栏 + 弹窗
//!         mod components;         // 网格、详情弹窗、应用弹窗、状态栏
//!         pub mod theme;          // 主题颜色与常用样式
//!
//!
//!     渲染顺序（后画的在上层）：
//!         1. 标题栏               应用名 + 数据源位置
//!         2. 网格                 Loading / Failed / 各行与瓦片
//!         3. 状态栏               快捷键提示 + 状态消息
//!         4. 瓦片详情弹窗          NavigationSession::modal() 打开时
//!         5. 帮助 / 错误弹窗       app.overlay 打开时
//!
//!
//!     行的显示：
//!         Loaded        瓦片条（只画视口内的瓦片，焦点瓦片高亮）
//!         Loaded 但为空  一行灰色提示
//!         Unloaded      未进入视口时为 “…”，进入视口（获取中）后为 “Loading…”
//!         LoadFailed    一行错误提示
//!
//!     终端无法显示图片：有图片的瓦片画一条纹理带，没有图片的画占位块。
//!

mod components;
mod layout;
pub mod theme;

pub use layout::render;
