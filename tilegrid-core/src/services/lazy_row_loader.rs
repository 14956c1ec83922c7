//! 延迟行加载器
//!
//! 每个没有内联数据的行挂一个 watcher 任务，监听它的 [`VisibilityFeed`]。
//! 行第一次进入视口时发起且仅发起一次获取：
//!
//! ```text
//!  watcher task ──Visibility{Entered}──┐
//!                                      ▼
//!                        ┌─────────────────────────────┐
//!                        │  owner loop: handle_event   │
//!                        │  begin_fetch (check-and-set)│──▶ spawn fetch task
//!                        └─────────────────────────────┘          │
//!                                      ▲                          │
//!                                      └──────Fetched{result}─────┘
//! ```
//!
//! 任务只通过 channel 上报事件；对 [`GridModel`] 的所有修改都发生在
//! `handle_event` 内，由持有者在自己的循环中同步调用。

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use tilegrid_provider::{CatalogSource, ProviderError, RowContent};

use super::collection_preference::CollectionPreference;
use super::grid_model::GridModel;
use crate::traits::{VisibilityEvent, VisibilityFeed};
use crate::types::{RowHandle, Tile};

/// 加载器内部事件
#[derive(Debug)]
pub enum LoaderEvent {
    /// 某行的可见性变化
    Visibility {
        row: RowHandle,
        event: VisibilityEvent,
    },
    /// 某行的获取已完成
    Fetched {
        row: RowHandle,
        result: Result<RowContent, ProviderError>,
    },
}

/// 行结算结果（供表现层刷新与提示）
#[derive(Debug)]
pub enum LoadReport {
    Loaded { row: RowHandle, tiles: usize },
    Failed { row: RowHandle, error: ProviderError },
}

impl LoadReport {
    pub const fn row(&self) -> RowHandle {
        match self {
            Self::Loaded { row, .. } | Self::Failed { row, .. } => *row,
        }
    }
}

struct DeferredRow {
    ref_id: String,
    ref_type: Option<String>,
    watcher: Option<JoinHandle<()>>,
}

pub struct LazyRowLoader {
    source: Arc<dyn CatalogSource>,
    preference: CollectionPreference,
    rows: HashMap<RowHandle, DeferredRow>,
    tx: mpsc::UnboundedSender<LoaderEvent>,
    rx: mpsc::UnboundedReceiver<LoaderEvent>,
}

impl LazyRowLoader {
    pub fn new(source: Arc<dyn CatalogSource>, preference: CollectionPreference) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            preference,
            rows: HashMap::new(),
            tx,
            rx,
        }
    }

    pub fn preference(&self) -> &CollectionPreference {
        &self.preference
    }

    /// 注册一个延迟行，并开始监听它的可见性
    ///
    /// 必须在 tokio 运行时内调用。重复注册同一行会替换之前的 feed。
    pub fn attach(
        &mut self,
        row: RowHandle,
        ref_id: impl Into<String>,
        ref_type: Option<String>,
        mut feed: Box<dyn VisibilityFeed>,
    ) {
        let tx = self.tx.clone();
        let watcher = tokio::spawn(async move {
            while let Some(event) = feed.next_event().await {
                if tx.send(LoaderEvent::Visibility { row, event }).is_err() {
                    break;
                }
            }
        });

        let previous = self.rows.insert(
            row,
            DeferredRow {
                ref_id: ref_id.into(),
                ref_type,
                watcher: Some(watcher),
            },
        );
        if let Some(watcher) = previous.and_then(|p| p.watcher) {
            watcher.abort();
        }
    }

    /// 已注册的延迟行数
    pub fn attached_rows(&self) -> usize {
        self.rows.len()
    }

    /// 非阻塞地取出一个就绪事件
    pub fn try_next_event(&mut self) -> Option<LoaderEvent> {
        self.rx.try_recv().ok()
    }

    /// 等待下一个事件
    pub async fn next_event(&mut self) -> Option<LoaderEvent> {
        self.rx.recv().await
    }

    /// 应用一个事件；仅在行结算时返回报告
    pub fn handle_event(&mut self, grid: &mut GridModel, event: LoaderEvent) -> Option<LoadReport> {
        match event {
            LoaderEvent::Visibility {
                row,
                event: VisibilityEvent::Entered,
            } => {
                self.on_entered(grid, row);
                None
            }
            LoaderEvent::Visibility {
                event: VisibilityEvent::Left,
                ..
            } => None,
            LoaderEvent::Fetched { row, result } => self.on_fetched(grid, row, result),
        }
    }

    fn on_entered(&mut self, grid: &mut GridModel, row: RowHandle) {
        let Some(deferred) = self.rows.get_mut(&row) else {
            log::warn!("Visibility event for unattached row {row}");
            return;
        };
        // 检查与标记在同一个同步步骤内完成
        if !grid.begin_fetch(row) {
            return;
        }
        if let Some(watcher) = deferred.watcher.take() {
            watcher.abort();
        }

        log::debug!("Row {row} entered view, fetching set {}", deferred.ref_id);
        let source = Arc::clone(&self.source);
        let ref_id = deferred.ref_id.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_row_content(&ref_id).await;
            // 接收端已关闭说明会话已结束，结果无人关心
            let _ = tx.send(LoaderEvent::Fetched { row, result });
        });
    }

    fn on_fetched(
        &self,
        grid: &mut GridModel,
        row: RowHandle,
        result: Result<RowContent, ProviderError>,
    ) -> Option<LoadReport> {
        let hint = self.rows.get(&row).and_then(|d| d.ref_type.as_deref());
        match result {
            Ok(content) => {
                let tiles = Tile::from_records(self.preference.select(content, hint));
                let count = tiles.len();
                match grid.populate_row(row, tiles) {
                    Ok(()) => {
                        log::info!("Row {row} loaded with {count} tiles");
                        Some(LoadReport::Loaded { row, tiles: count })
                    }
                    Err(e) => {
                        log::error!("Dropping fetch result for row {row}: {e}");
                        None
                    }
                }
            }
            Err(error) => {
                if error.is_expected() {
                    log::warn!("Row {row} failed to load: {error}");
                } else {
                    log::error!("Row {row} failed to load: {error}");
                }
                if grid.mark_load_failed(row) {
                    Some(LoadReport::Failed { row, error })
                } else {
                    None
                }
            }
        }
    }
}

impl Drop for LazyRowLoader {
    fn drop(&mut self) {
        for watcher in self.rows.values_mut().filter_map(|d| d.watcher.take()) {
            watcher.abort();
        }
    }
}
