//! 网格输入更新逻辑

use tilegrid_core::{InputAction, RouteOutcome};

use crate::model::App;

/// 把动作交给导航会话
pub fn update(app: &mut App, action: InputAction) {
    let Some(session) = app.grid.session_mut() else {
        return;
    };

    match session.dispatch(action) {
        RouteOutcome::Moved => {
            tracing::trace!("Focus moved to {}", session.focus());
            app.clear_status();
        }
        RouteOutcome::Opened => {
            if let Some(details) = session.modal().content() {
                tracing::debug!("Details opened for {}", details.ref_id);
            }
        }
        RouteOutcome::Suppressed => {
            tracing::trace!("{action:?} suppressed while details are open");
        }
        RouteOutcome::Dismissed | RouteOutcome::Unchanged => {}
    }
}
