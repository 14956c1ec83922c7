//! 目录 JSON 的反序列化结构
//!
//! 所有字段都是 `Option`，未知字段忽略。单个条目解析失败只会让该条目的字段
//! 全部缺失，不会让整行失败。

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ProviderError, Result};
use crate::types::{RowContent, RowDescriptor, TileRecord};

/// 瓦片图片比例
const TILE_ASPECT_RATIO: &str = "1.78";

// ============ 首页 ============

#[derive(Debug, Deserialize)]
struct HomeDocument {
    data: Option<HomeData>,
}

#[derive(Debug, Deserialize)]
struct HomeData {
    #[serde(rename = "StandardCollection")]
    standard_collection: Option<StandardCollection>,
}

#[derive(Debug, Deserialize)]
struct StandardCollection {
    containers: Option<Vec<Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct Container {
    set: Option<WireSet>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSet {
    text: Option<TextBlock>,
    items: Option<Vec<Value>>,
    ref_id: Option<String>,
    ref_type: Option<String>,
}

// ============ 集合文档 ============

#[derive(Debug, Deserialize)]
struct SetDocument {
    data: Option<HashMap<String, Value>>,
}

// ============ 条目 ============

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireItem {
    encoded_series_id: Option<String>,
    program_id: Option<String>,
    collection_id: Option<String>,
    text: Option<TextBlock>,
    description: Option<String>,
    releases: Option<Vec<Release>>,
    ratings: Option<Vec<Rating>>,
    #[serde(rename = "type")]
    content_type: Option<String>,
    image: Option<ImageBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct TextBlock {
    title: Option<TextField>,
    description: Option<TextField>,
}

#[derive(Debug, Default, Deserialize)]
struct TextField {
    full: Option<TextVariants>,
    medium: Option<TextVariants>,
}

#[derive(Debug, Default, Deserialize)]
struct TextVariants {
    set: Option<TextContent>,
    series: Option<TextContent>,
    program: Option<TextContent>,
    collection: Option<TextContent>,
}

#[derive(Debug, Default, Deserialize)]
struct TextContent {
    default: Option<TextValue>,
}

#[derive(Debug, Default, Deserialize)]
struct TextValue {
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Release {
    release_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Rating {
    value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageBlock {
    tile: Option<HashMap<String, ImageVariants>>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageVariants {
    program: Option<ImageRef>,
    series: Option<ImageRef>,
    default: Option<ImageRef>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageRef {
    default: Option<ImageUrl>,
}

#[derive(Debug, Default, Deserialize)]
struct ImageUrl {
    url: Option<String>,
}

// ============ 转换 ============

/// 空字符串与缺失等价
fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty()).cloned()
}

fn text_content(content: Option<&TextContent>) -> Option<String> {
    non_empty(content?.default.as_ref()?.content.as_ref())
}

/// series → program → collection，第一个有内容的胜出
fn item_text(variants: Option<&TextVariants>) -> Option<String> {
    let v = variants?;
    [&v.series, &v.program, &v.collection]
        .into_iter()
        .find_map(|c| text_content(c.as_ref()))
}

fn image_url(image: Option<&ImageBlock>) -> Option<String> {
    let variants = image?.tile.as_ref()?.get(TILE_ASPECT_RATIO)?;
    [&variants.program, &variants.series, &variants.default]
        .into_iter()
        .find_map(|r| non_empty(r.as_ref()?.default.as_ref()?.url.as_ref()))
}

impl WireItem {
    fn into_record(self) -> TileRecord {
        let text = self.text.as_ref();
        let ref_id = [&self.encoded_series_id, &self.program_id, &self.collection_id]
            .into_iter()
            .find_map(|id| non_empty(id.as_ref()));
        let title = item_text(text.and_then(|t| t.title.as_ref()?.full.as_ref()));
        let description = item_text(text.and_then(|t| t.description.as_ref()?.medium.as_ref()))
            .or_else(|| non_empty(self.description.as_ref()));

        TileRecord {
            ref_id,
            title,
            description,
            release_date: self
                .releases
                .as_ref()
                .and_then(|r| non_empty(r.first()?.release_date.as_ref())),
            rating: self
                .ratings
                .as_ref()
                .and_then(|r| non_empty(r.first()?.value.as_ref())),
            content_type: non_empty(self.content_type.as_ref()),
            image_url: image_url(self.image.as_ref()),
        }
    }
}

impl WireSet {
    fn title(&self) -> Option<String> {
        let full = self.text.as_ref()?.title.as_ref()?.full.as_ref()?;
        text_content(full.set.as_ref())
    }
}

/// 宽松解析：结构不符时退化为默认值并记录警告
fn lenient<T>(value: Value, what: &str, provider: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    serde_json::from_value(value).unwrap_or_else(|e| {
        log::warn!("[{provider}] Malformed {what}, using empty defaults: {e}");
        T::default()
    })
}

fn records(items: Vec<Value>, provider: &str) -> Vec<TileRecord> {
    items
        .into_iter()
        .map(|v| lenient::<WireItem>(v, "item", provider).into_record())
        .collect()
}

fn parse_error(provider: &str, detail: impl Into<String>) -> ProviderError {
    ProviderError::ParseError {
        provider: provider.to_string(),
        detail: detail.into(),
    }
}

/// 解析 `home.json`
pub fn parse_listing(document: &str, provider: &str) -> Result<Vec<RowDescriptor>> {
    let home: HomeDocument = crate::http_client::HttpUtils::parse_json(document, provider)?;
    let containers = home
        .data
        .and_then(|d| d.standard_collection)
        .and_then(|c| c.containers)
        .ok_or_else(|| parse_error(provider, "missing data.StandardCollection.containers"))?;

    let rows = containers
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let set = lenient::<Container>(value, "container", provider)
                .set
                .unwrap_or_default();
            let title = set.title();
            match (set.items, non_empty(set.ref_id.as_ref())) {
                (Some(items), _) => RowDescriptor::Inline {
                    title,
                    items: records(items, provider),
                },
                (None, Some(ref_id)) => RowDescriptor::Deferred {
                    title,
                    ref_id,
                    ref_type: non_empty(set.ref_type.as_ref()),
                },
                (None, None) => {
                    log::warn!(
                        "[{provider}] Container {index} has neither items nor refId, treating as empty row"
                    );
                    RowDescriptor::Inline {
                        title,
                        items: Vec::new(),
                    }
                }
            }
        })
        .collect();

    Ok(rows)
}

/// 解析 `sets/{refId}.json`
pub fn parse_row_content(document: &str, provider: &str) -> Result<RowContent> {
    let doc: SetDocument = crate::http_client::HttpUtils::parse_json(document, provider)?;
    let data = doc
        .data
        .ok_or_else(|| parse_error(provider, "missing data"))?;

    let collections = data
        .into_iter()
        .map(|(name, value)| {
            let set = lenient::<WireSet>(value, "collection", provider);
            let items = records(set.items.unwrap_or_default(), provider);
            (name, items)
        })
        .collect();

    Ok(RowContent { collections })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = r#"{
      "data": { "StandardCollection": { "containers": [
        { "set": {
            "text": { "title": { "full": { "set": { "default": { "content": "New to Disney+" } } } } },
            "items": [
              { "encodedSeriesId": "abc",
                "type": "DmcSeries",
                "text": { "title": { "full": { "series": { "default": { "content": "The Mandalorian" } } } } },
                "releases": [ { "releaseDate": "2019-11-12" } ],
                "ratings": [ { "value": "TV-14" } ],
                "image": { "tile": { "1.78": { "series": { "default": { "url": "https://img/mando.jpg" } } } } }
              },
              { "programId": "p-1" }
            ]
        } },
        { "set": {
            "refId": "ref-1",
            "refType": "BecauseYouSet",
            "text": { "title": { "full": { "set": { "default": { "content": "Because You Watched" } } } } }
        } },
        { "set": { "text": {} } },
        { "unexpected": true }
      ] } }
    }"#;

    #[test]
    fn listing_distinguishes_inline_and_deferred() {
        let rows = parse_listing(HOME, "test").unwrap();
        assert_eq!(rows.len(), 4);

        let RowDescriptor::Inline { title, items } = &rows[0] else {
            panic!("row 0 should be inline");
        };
        assert_eq!(title.as_deref(), Some("New to Disney+"));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].ref_id.as_deref(), Some("abc"));
        assert_eq!(items[0].title.as_deref(), Some("The Mandalorian"));
        assert_eq!(items[0].release_date.as_deref(), Some("2019-11-12"));
        assert_eq!(items[0].rating.as_deref(), Some("TV-14"));
        assert_eq!(items[0].content_type.as_deref(), Some("DmcSeries"));
        assert_eq!(items[0].image_url.as_deref(), Some("https://img/mando.jpg"));

        assert_eq!(
            rows[1],
            RowDescriptor::Deferred {
                title: Some("Because You Watched".to_string()),
                ref_id: "ref-1".to_string(),
                ref_type: Some("BecauseYouSet".to_string()),
            }
        );
    }

    #[test]
    fn sparse_item_yields_empty_fields() {
        let rows = parse_listing(HOME, "test").unwrap();
        let RowDescriptor::Inline { items, .. } = &rows[0] else {
            panic!("row 0 should be inline");
        };
        let sparse = &items[1];
        assert_eq!(sparse.ref_id.as_deref(), Some("p-1"));
        assert!(sparse.title.is_none());
        assert!(sparse.rating.is_none());
        assert!(sparse.release_date.is_none());
        assert!(sparse.image_url.is_none());
    }

    #[test]
    fn container_without_items_or_ref_is_empty_inline() {
        let rows = parse_listing(HOME, "test").unwrap();
        assert_eq!(
            rows[2],
            RowDescriptor::Inline {
                title: None,
                items: Vec::new()
            }
        );
        assert!(!rows[3].is_deferred());
    }

    #[test]
    fn listing_without_containers_is_parse_error() {
        let err = parse_listing(r#"{"data": {}}"#, "test").unwrap_err();
        assert!(matches!(err, ProviderError::ParseError { .. }));
    }

    #[test]
    fn row_content_keeps_every_collection() {
        let doc = r#"{ "data": {
            "CuratedSet": { "items": [ { "encodedSeriesId": "a" }, { "encodedSeriesId": "b" } ] },
            "TrendingSet": { "items": [ { "programId": "c" } ] },
            "Broken": 42
        } }"#;
        let content = parse_row_content(doc, "test").unwrap();
        assert_eq!(content.collection_names(), vec!["Broken", "CuratedSet", "TrendingSet"]);
        assert_eq!(content.collection("CuratedSet").map(<[_]>::len), Some(2));
        assert_eq!(content.collection("Broken").map(<[_]>::len), Some(0));
    }

    #[test]
    fn description_prefers_medium_text() {
        let doc = r#"{ "data": { "CuratedSet": { "items": [ {
            "description": "flat",
            "text": { "description": { "medium": { "program": { "default": { "content": "rich" } } } } }
        }, { "description": "flat only" } ] } } }"#;
        let content = parse_row_content(doc, "test").unwrap();
        let items = content.collection("CuratedSet").unwrap();
        assert_eq!(items[0].description.as_deref(), Some("rich"));
        assert_eq!(items[1].description.as_deref(), Some("flat only"));
    }

    #[test]
    fn image_prefers_program_then_series_then_default() {
        let doc = r#"{ "data": { "CuratedSet": { "items": [ { "image": { "tile": {
            "1.78": {
                "default": { "default": { "url": "d" } },
                "series": { "default": { "url": "s" } }
            },
            "0.71": { "program": { "default": { "url": "wrong-ratio" } } }
        } } } ] } } }"#;
        let content = parse_row_content(doc, "test").unwrap();
        let items = content.collection("CuratedSet").unwrap();
        assert_eq!(items[0].image_url.as_deref(), Some("s"));
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let doc = r#"{ "data": { "CuratedSet": { "items": [ {
            "encodedSeriesId": "",
            "ratings": [ { "value": "" } ]
        } ] } } }"#;
        let content = parse_row_content(doc, "test").unwrap();
        let item = &content.collection("CuratedSet").unwrap()[0];
        assert!(item.ref_id.is_none());
        assert!(item.rating.is_none());
    }
}
