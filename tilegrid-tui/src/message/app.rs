//! 应用主消息枚举

use tilegrid_core::InputAction;

use super::{CatalogMessage, OverlayMessage};

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 网格输入（方向、选择、关闭），交给 core 的 InputRouter
    Input(InputAction),

    /// 帮助 / 错误弹窗
    Overlay(OverlayMessage),

    /// 后台结果
    Catalog(CatalogMessage),

    /// 终端窗口大小改变
    Resize { width: u16, height: u16 },

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
