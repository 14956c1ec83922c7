//! 应用层弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    /// 快捷键帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct OverlayState {
    /// 当前活动的弹窗
    pub active: Option<Overlay>,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, overlay: Overlay) {
        self.active = Some(overlay);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }
}
