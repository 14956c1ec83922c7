//! Catalog source implementations

mod file;
mod http;
mod wire;

pub use file::FileCatalogSource;
pub use http::HttpCatalogSource;

use crate::error::{ProviderError, Result};

/// 首页文档名
pub(crate) const LISTING_DOCUMENT: &str = "home.json";
/// 集合文档目录
pub(crate) const SETS_DIR: &str = "sets";

/// 校验引用 ID：非空，且不能逃逸出 `sets/` 目录
pub(crate) fn validate_ref_id(ref_id: &str, provider: &str) -> Result<()> {
    let escapes = ref_id.contains(['/', '\\']) || ref_id == "." || ref_id == "..";
    if ref_id.trim().is_empty() || escapes {
        return Err(ProviderError::InvalidRefId {
            provider: provider.to_string(),
            ref_id: ref_id.to_string(),
        });
    }
    Ok(())
}
