//! 应用层弹窗更新逻辑

use crate::message::OverlayMessage;
use crate::model::{App, Overlay};

pub fn update(app: &mut App, msg: OverlayMessage) {
    match msg {
        OverlayMessage::ShowHelp => app.overlay.show(Overlay::Help),
        OverlayMessage::Close => app.overlay.close(),
    }
}
