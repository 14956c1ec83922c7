//! UI 组件

pub mod detail;
pub mod grid;
pub mod modal;
pub mod statusbar;
