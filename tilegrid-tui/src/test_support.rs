//! 测试用的 App 构造

use std::path::PathBuf;
use std::sync::Arc;

use tilegrid_core::{CollectionPreference, NavigationSession};
use tilegrid_provider::{FileCatalogSource, RowDescriptor, TileRecord};

use crate::backend::CatalogService;
use crate::model::{App, GridState};

/// provider 的 JSON 夹具目录
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tilegrid-provider/tests/fixtures/catalog")
}

pub fn catalog() -> CatalogService {
    CatalogService::with_source(
        Arc::new(FileCatalogSource::new(fixture_dir())),
        CollectionPreference::default(),
        "fixtures",
    )
}

/// 首页尚未加载的 App（三行高、四个瓦片宽的终端）
pub fn app() -> App {
    App::new(catalog(), 101, 28)
}

pub fn inline_row(title: &str, n: usize) -> RowDescriptor {
    RowDescriptor::Inline {
        title: Some(title.to_string()),
        items: (0..n)
            .map(|i| TileRecord {
                ref_id: Some(format!("{title}-{i}")),
                title: Some(format!("{title} {i}")),
                ..TileRecord::default()
            })
            .collect(),
    }
}

/// 以内联行构建好网格的 App；必须在 tokio 运行时内调用
pub fn app_with_rows(row_sizes: &[usize]) -> App {
    let listing = row_sizes
        .iter()
        .enumerate()
        .map(|(i, n)| inline_row(&format!("row-{i}"), *n))
        .collect();
    let mut app = app();
    let loader = app.catalog.loader();
    let visibility = &mut app.visibility;
    let session = NavigationSession::build(listing, loader, |row| Box::new(visibility.register(row)));
    app.grid = GridState::Ready(Box::new(session));
    app
}
