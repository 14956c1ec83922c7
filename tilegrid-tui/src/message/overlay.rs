//! 应用层弹窗消息
//!
//! 瓦片详情弹窗由 core 的 `ModalController` 管理，不在这里。

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayMessage {
    /// 显示帮助
    ShowHelp,
    /// 关闭当前弹窗
    Close,
}
