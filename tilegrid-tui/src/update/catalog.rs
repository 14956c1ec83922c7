//! 后台结果更新逻辑

use tilegrid_core::{LoadReport, NavigationSession};
use tilegrid_provider::RowDescriptor;

use crate::i18n::t;
use crate::message::CatalogMessage;
use crate::model::{App, GridState, Overlay};

pub fn update(app: &mut App, msg: CatalogMessage) {
    match msg {
        CatalogMessage::ListingLoaded(Ok(listing)) => build_grid(app, listing),
        CatalogMessage::ListingLoaded(Err(e)) => {
            let detail = e.to_string();
            app.set_status(t().status.listing_failed);
            app.overlay.show(Overlay::Error {
                title: t().grid.catalog_failed.to_string(),
                message: detail.clone(),
            });
            app.grid = GridState::Failed(detail);
        }
        CatalogMessage::RowsSettled(reports) => {
            for report in reports {
                settle_row(app, &report);
            }
        }
    }
}

/// 以首页行列表构建导航会话
fn build_grid(app: &mut App, listing: Vec<RowDescriptor>) {
    if matches!(app.grid, GridState::Ready(_)) {
        tracing::warn!("Listing arrived after the grid was built, ignored");
        return;
    }

    let loader = app.catalog.loader();
    let visibility = &mut app.visibility;
    let session = NavigationSession::build(listing, loader, |row| {
        Box::new(visibility.register(row))
    });

    let rows = session.grid().row_count();
    app.grid = GridState::Ready(Box::new(session));
    app.set_status(format!("{rows} {}", t().status.rows_loaded));
}

fn settle_row(app: &mut App, report: &LoadReport) {
    let Some(session) = app.grid.session() else {
        return;
    };
    let row = report.row();
    let title = session
        .grid()
        .row(row.index())
        .map(|r| r.title().to_string())
        .unwrap_or_else(|| row.to_string());

    match report {
        LoadReport::Loaded { tiles, .. } => {
            tracing::debug!("Row '{title}' loaded with {tiles} tiles");
        }
        LoadReport::Failed { error, .. } => {
            tracing::debug!("Row '{title}' failed: {error}");
            app.set_status(format!("{}: {title}", t().status.row_failed));
        }
    }
}
