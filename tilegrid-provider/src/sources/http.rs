//! 远程 CDN 数据源

use async_trait::async_trait;
use reqwest::Client;

use super::{LISTING_DOCUMENT, SETS_DIR, validate_ref_id, wire};
use crate::error::{ProviderError, Result};
use crate::http_client::{HttpUtils, create_http_client};
use crate::traits::CatalogSource;
use crate::types::{RowContent, RowDescriptor};

const PROVIDER_NAME: &str = "http";

/// 从静态 CDN 读取 `home.json` 与 `sets/{refId}.json`
pub struct HttpCatalogSource {
    client: Client,
    base_url: String,
}

impl HttpCatalogSource {
    /// `base_url` 末尾的 `/` 会被去掉
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(create_http_client(PROVIDER_NAME)?, base_url))
    }

    /// 使用外部构造的 Client（自定义代理、超时等）
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn listing_url(&self) -> String {
        format!("{}/{LISTING_DOCUMENT}", self.base_url)
    }

    fn set_url(&self, ref_id: &str) -> String {
        format!(
            "{}/{SETS_DIR}/{}.json",
            self.base_url,
            urlencoding::encode(ref_id)
        )
    }

    async fn get(&self, url: &str) -> Result<String> {
        HttpUtils::execute_request(self.client.get(url), PROVIDER_NAME, url).await
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_collection_listing(&self) -> Result<Vec<RowDescriptor>> {
        let body = self.get(&self.listing_url()).await?;
        let rows = wire::parse_listing(&body, PROVIDER_NAME)?;
        log::info!("[{PROVIDER_NAME}] Listing loaded: {} rows", rows.len());
        Ok(rows)
    }

    async fn fetch_row_content(&self, ref_id: &str) -> Result<RowContent> {
        validate_ref_id(ref_id, PROVIDER_NAME)?;

        let body = match self.get(&self.set_url(ref_id)).await {
            Err(ProviderError::HttpStatus { status: 404, .. }) => {
                return Err(ProviderError::NotFound {
                    provider: PROVIDER_NAME.to_string(),
                    ref_id: ref_id.to_string(),
                });
            }
            other => other?,
        };

        let content = wire::parse_row_content(&body, PROVIDER_NAME)?;
        log::debug!(
            "[{PROVIDER_NAME}] Set {ref_id} loaded: {:?}",
            content.collection_names()
        );
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(base: &str) -> HttpCatalogSource {
        HttpCatalogSource::with_client(Client::new(), base)
    }

    #[test]
    fn urls_are_built_from_base() {
        let s = source("https://cdn.example/dp-1/");
        assert_eq!(s.base_url(), "https://cdn.example/dp-1");
        assert_eq!(s.listing_url(), "https://cdn.example/dp-1/home.json");
        assert_eq!(
            s.set_url("5a8e1b2c-0d"),
            "https://cdn.example/dp-1/sets/5a8e1b2c-0d.json"
        );
    }

    #[test]
    fn ref_id_is_percent_encoded() {
        let s = source("https://cdn.example");
        assert_eq!(s.set_url("a b"), "https://cdn.example/sets/a%20b.json");
    }

    #[tokio::test]
    async fn invalid_ref_id_fails_before_request() {
        // 不可达地址：若发出请求会得到 NetworkError
        let s = source("http://127.0.0.1:9");
        let err = s.fetch_row_content("../home").await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidRefId { .. }));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let s = source("http://127.0.0.1:9");
        let err = s.fetch_collection_listing().await.unwrap_err();
        assert!(matches!(
            err,
            ProviderError::NetworkError { .. } | ProviderError::Timeout { .. }
        ));
        assert!(!err.is_expected());
    }
}
