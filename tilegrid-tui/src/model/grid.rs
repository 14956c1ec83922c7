//! 首页加载状态

use tilegrid_core::NavigationSession;

/// 网格状态
pub enum GridState {
    /// home.json 尚未返回
    Loading,
    /// 网格已构建
    Ready(Box<NavigationSession>),
    /// 首页获取失败（错误描述）
    Failed(String),
}

impl GridState {
    pub fn session(&self) -> Option<&NavigationSession> {
        match self {
            Self::Ready(session) => Some(session),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut NavigationSession> {
        match self {
            Self::Ready(session) => Some(session),
            _ => None,
        }
    }
}
