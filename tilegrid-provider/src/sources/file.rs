//! 本地目录数据源
//!
//! 目录结构与 CDN 一致：
//!
//! ```text
//! <root>/
//! ├── home.json
//! └── sets/
//!     ├── <refId>.json
//!     └── ...
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{LISTING_DOCUMENT, SETS_DIR, validate_ref_id, wire};
use crate::error::{ProviderError, Result};
use crate::traits::CatalogSource;
use crate::types::{RowContent, RowDescriptor};

const PROVIDER_NAME: &str = "file";

/// 从本地目录读取目录数据（离线模式、测试夹具）
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    root: PathBuf,
}

impl FileCatalogSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read(&self, path: &Path) -> std::io::Result<String> {
        log::debug!("[{PROVIDER_NAME}] Reading {}", path.display());
        tokio::fs::read_to_string(path).await
    }

    fn io_error(path: &Path, e: &std::io::Error) -> ProviderError {
        ProviderError::Io {
            provider: PROVIDER_NAME.to_string(),
            detail: format!("{}: {e}", path.display()),
        }
    }
}

#[async_trait]
impl CatalogSource for FileCatalogSource {
    fn id(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn fetch_collection_listing(&self) -> Result<Vec<RowDescriptor>> {
        let path = self.root.join(LISTING_DOCUMENT);
        let body = self
            .read(&path)
            .await
            .map_err(|e| Self::io_error(&path, &e))?;
        wire::parse_listing(&body, PROVIDER_NAME)
    }

    async fn fetch_row_content(&self, ref_id: &str) -> Result<RowContent> {
        validate_ref_id(ref_id, PROVIDER_NAME)?;

        let path = self.root.join(SETS_DIR).join(format!("{ref_id}.json"));
        let body = self.read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ProviderError::NotFound {
                provider: PROVIDER_NAME.to_string(),
                ref_id: ref_id.to_string(),
            },
            _ => Self::io_error(&path, &e),
        })?;
        wire::parse_row_content(&body, PROVIDER_NAME)
    }
}
