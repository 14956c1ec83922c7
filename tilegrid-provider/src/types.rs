use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============ 行描述 ============

/// 首页中的一行
///
/// 内联行自带瓦片数据；延迟行只携带引用 ID，内容需在可见时再获取。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RowDescriptor {
    /// 内联行
    Inline {
        /// 行标题（缺失时为 None）
        title: Option<String>,
        /// 瓦片数据
        items: Vec<TileRecord>,
    },
    /// 延迟行
    Deferred {
        /// 行标题（缺失时为 None）
        title: Option<String>,
        /// 不透明引用 ID
        ref_id: String,
        /// 首选集合类型提示（如 `BecauseYouSet`）
        ref_type: Option<String>,
    },
}

impl RowDescriptor {
    /// 行标题
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Inline { title, .. } | Self::Deferred { title, .. } => title.as_deref(),
        }
    }

    /// 是否为延迟行
    pub const fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred { .. })
    }
}

// ============ 行内容 ============

/// 延迟行的内容：集合类型名 → 瓦片记录
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowContent {
    pub collections: HashMap<String, Vec<TileRecord>>,
}

impl RowContent {
    /// 按集合类型名查找
    pub fn collection(&self, name: &str) -> Option<&[TileRecord]> {
        self.collections.get(name).map(Vec::as_slice)
    }

    /// 按名称排序的集合类型名（用于日志）
    pub fn collection_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.collections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// 取出指定集合的所有权
    pub fn take_collection(&mut self, name: &str) -> Option<Vec<TileRecord>> {
        self.collections.remove(name)
    }
}

// ============ 瓦片记录 ============

/// 单个瓦片的原始数据
///
/// 每个字段都可能缺失。默认值由 core 层在构造 `Tile` 时统一补齐，
/// 这里只做字段提取。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    pub ref_id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// 原始发行日期字符串（通常为 `YYYY-MM-DD`）
    pub release_date: Option<String>,
    pub rating: Option<String>,
    pub content_type: Option<String>,
    /// 1.78 比例的瓦片图片 URL
    pub image_url: Option<String>,
}
