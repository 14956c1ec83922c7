//! 可见性事件源
//!
//! 每个延迟行持有一个 feed，产出"进入视口 / 离开视口"事件序列。
//! 序列无限且不可重启；返回 `None` 表示 feed 已关闭。

use std::collections::HashMap;

use async_trait::async_trait;
use futures::{Stream, StreamExt};
use tokio::sync::mpsc;

use crate::types::RowHandle;

/// 可见性变化
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityEvent {
    Entered,
    Left,
}

/// 可见性事件源 Trait
#[async_trait]
pub trait VisibilityFeed: Send {
    /// 等待下一个事件；`None` 表示不会再有事件
    async fn next_event(&mut self) -> Option<VisibilityEvent>;
}

/// 基于 channel 的 feed，由 [`VisibilityPublisher`] 创建
pub struct ChannelVisibilityFeed {
    rx: mpsc::UnboundedReceiver<VisibilityEvent>,
}

#[async_trait]
impl VisibilityFeed for ChannelVisibilityFeed {
    async fn next_event(&mut self) -> Option<VisibilityEvent> {
        self.rx.recv().await
    }
}

/// 任意 `Stream` 适配为 feed
pub struct StreamVisibilityFeed<S> {
    stream: S,
}

impl<S> StreamVisibilityFeed<S> {
    pub const fn new(stream: S) -> Self {
        Self { stream }
    }
}

#[async_trait]
impl<S> VisibilityFeed for StreamVisibilityFeed<S>
where
    S: Stream<Item = VisibilityEvent> + Unpin + Send,
{
    async fn next_event(&mut self) -> Option<VisibilityEvent> {
        self.stream.next().await
    }
}

struct Subscriber {
    tx: mpsc::UnboundedSender<VisibilityEvent>,
    visible: bool,
}

/// 边沿触发的可见性发布器
///
/// 表现层每次重新计算视口内的行后调用 [`publish`](Self::publish)；
/// 只有状态发生变化的行才会收到事件，与 intersection observer 一致。
#[derive(Default)]
pub struct VisibilityPublisher {
    subscribers: HashMap<RowHandle, Subscriber>,
}

impl VisibilityPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为行注册一个 feed（初始状态为不可见）
    ///
    /// 同一行重复注册会替换旧的 feed，旧 feed 随之关闭。
    pub fn register(&mut self, row: RowHandle) -> ChannelVisibilityFeed {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.insert(row, Subscriber { tx, visible: false });
        ChannelVisibilityFeed { rx }
    }

    /// 设置单行可见性，状态变化时发送事件
    ///
    /// 返回是否发送了事件。feed 已被丢弃的行会被移除。
    pub fn set_visible(&mut self, row: RowHandle, visible: bool) -> bool {
        let Some(sub) = self.subscribers.get_mut(&row) else {
            return false;
        };
        if sub.visible == visible {
            return false;
        }
        sub.visible = visible;
        let event = if visible {
            VisibilityEvent::Entered
        } else {
            VisibilityEvent::Left
        };
        if sub.tx.send(event).is_err() {
            self.subscribers.remove(&row);
            return false;
        }
        true
    }

    /// 以"当前视口内的行"整体更新，返回发送的事件数
    pub fn publish(&mut self, visible_rows: &[RowHandle]) -> usize {
        let rows: Vec<RowHandle> = self.subscribers.keys().copied().collect();
        rows.into_iter()
            .filter(|row| self.set_visible(*row, visible_rows.contains(row)))
            .count()
    }

    /// 仍在监听的行数
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
