//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `detail.*` / `help.*`**：瓦片详情与帮助各自一组
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 网格文本
    pub grid: GridTexts,
    /// 瓦片详情弹窗
    pub detail: DetailTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
    /// 状态栏消息
    pub status: StatusTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
    pub error: &'static str,
}

/// 键盘提示
pub struct HintTexts {
    pub keys: KeyNames,
    pub move_focus: &'static str,
    pub select: &'static str,
    pub close: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 按键名称
pub struct KeyNames {
    pub arrows: &'static str,
    pub vim: &'static str,
    pub enter: &'static str,
    pub esc: &'static str,
    pub backspace: &'static str,
    pub ctrl_c: &'static str,
    pub q: &'static str,
    pub question: &'static str,
}

/// 网格文本
pub struct GridTexts {
    pub title: &'static str,
    pub loading_catalog: &'static str,
    pub catalog_failed: &'static str,
    pub no_rows: &'static str,
    /// 延迟行尚未进入视口
    pub row_pending: &'static str,
    /// 延迟行已进入视口，正在获取
    pub row_loading: &'static str,
    pub row_failed: &'static str,
    pub row_empty: &'static str,
    /// 无图片瓦片的占位标记
    pub no_image: &'static str,
}

/// 瓦片详情弹窗
pub struct DetailTexts {
    pub release_date: &'static str,
    pub rating: &'static str,
    pub content_type: &'static str,
    pub reference_id: &'static str,
    pub image: &'static str,
    pub no_image: &'static str,
}

/// 帮助弹窗
pub struct HelpTexts {
    pub title: &'static str,
    pub move_focus: &'static str,
    pub open_details: &'static str,
    pub close_details: &'static str,
    pub toggle_help: &'static str,
    pub quit: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    /// 前接行数
    pub rows_loaded: &'static str,
    pub listing_failed: &'static str,
    /// 后接行标题
    pub row_failed: &'static str,
    pub config_ignored: &'static str,
}
