//! 集合类型选择
//!
//! 一个集合文档可能同时包含多个类型化集合（`CuratedSet`、`TrendingSet` …）。
//! 选择顺序：行自身的 `refType` 提示，然后依次尝试回退名单，第一个存在的胜出。
//! 全部缺失时视为成功加载的空行。

use serde::{Deserialize, Serialize};

use tilegrid_provider::{RowContent, TileRecord};

/// 默认回退集合
pub const DEFAULT_FALLBACK_COLLECTION: &str = "CuratedSet";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectionPreference {
    fallbacks: Vec<String>,
}

impl Default for CollectionPreference {
    fn default() -> Self {
        Self {
            fallbacks: vec![DEFAULT_FALLBACK_COLLECTION.to_string()],
        }
    }
}

impl CollectionPreference {
    pub fn new<I, S>(fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fallbacks: fallbacks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fallbacks(&self) -> &[String] {
        &self.fallbacks
    }

    /// 按优先级取出一个集合的记录
    pub fn select(&self, mut content: RowContent, hint: Option<&str>) -> Vec<TileRecord> {
        let chosen = hint
            .into_iter()
            .chain(self.fallbacks.iter().map(String::as_str))
            .find(|name| content.collection(name).is_some())
            .map(str::to_string);

        match chosen {
            Some(name) => content.take_collection(&name).unwrap_or_default(),
            None => {
                log::warn!(
                    "No preferred collection (hint {hint:?}, fallbacks {:?}) in {:?}",
                    self.fallbacks,
                    content.collection_names()
                );
                Vec::new()
            }
        }
    }
}
