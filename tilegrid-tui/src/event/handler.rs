//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tilegrid_core::InputAction;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, OverlayMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, height) => AppMessage::Resize { width, height },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 帮助 / 错误弹窗最优先
    if app.overlay.is_open() {
        return handle_overlay_keys(key);
    }

    // 瓦片详情弹窗：只响应关闭，其余按键不会到达焦点
    if app
        .grid
        .session()
        .is_some_and(|session| session.modal().is_open())
    {
        return handle_detail_keys(key);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key)
        || DefaultKeymap::QUIT.matches(&key)
        || DefaultKeymap::ALT_QUIT.matches(&key)
    {
        return AppMessage::Quit;
    }

    if is_help(&key) {
        return AppMessage::Overlay(OverlayMessage::ShowHelp);
    }

    handle_grid_keys(key)
}

/// 网格按键
fn handle_grid_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SELECT.matches(&key) {
        return AppMessage::Input(InputAction::Select);
    }
    if DefaultKeymap::is_dismiss(&key) {
        return AppMessage::Input(InputAction::Dismiss);
    }
    DefaultKeymap::movement(&key).map_or(AppMessage::Noop, AppMessage::Input)
}

/// 瓦片详情弹窗按键
fn handle_detail_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::is_dismiss(&key) {
        return AppMessage::Input(InputAction::Dismiss);
    }
    // 方向与选择照常交给 InputRouter，由它在弹窗打开时吞掉
    match handle_grid_keys(key) {
        msg @ AppMessage::Input(_) => msg,
        _ => AppMessage::Noop,
    }
}

/// 帮助 / 错误弹窗按键
fn handle_overlay_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::is_dismiss(&key) || DefaultKeymap::QUIT.matches(&key) || is_help(&key) {
        return AppMessage::Overlay(OverlayMessage::Close);
    }
    AppMessage::Noop
}

/// `?` 在部分终端上带 SHIFT 修饰
fn is_help(key: &KeyEvent) -> bool {
    DefaultKeymap::HELP.matches(key)
        || (key.code == KeyCode::Char('?') && key.modifiers == KeyModifiers::SHIFT)
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, MouseEvent, MouseEventKind};

    use super::*;
    use crate::model::{GridState, Overlay};
    use crate::test_support;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn assert_input(msg: AppMessage, expected: InputAction) {
        match msg {
            AppMessage::Input(action) => assert_eq!(action, expected),
            other => panic!("expected Input({expected:?}), got {other:?}"),
        }
    }

    #[test]
    fn test_arrows_and_vim_keys_move() {
        let app = test_support::app();
        let cases = [
            (KeyCode::Up, InputAction::MoveUp),
            (KeyCode::Down, InputAction::MoveDown),
            (KeyCode::Left, InputAction::MoveLeft),
            (KeyCode::Right, InputAction::MoveRight),
            (KeyCode::Char('k'), InputAction::MoveUp),
            (KeyCode::Char('j'), InputAction::MoveDown),
            (KeyCode::Char('h'), InputAction::MoveLeft),
            (KeyCode::Char('l'), InputAction::MoveRight),
        ];
        for (code, action) in cases {
            assert_input(handle_event(press(code), &app), action);
        }
    }

    #[test]
    fn test_enter_selects_and_backspace_dismisses() {
        let app = test_support::app();
        assert_input(handle_event(press(KeyCode::Enter), &app), InputAction::Select);
        assert_input(handle_event(press(KeyCode::Esc), &app), InputAction::Dismiss);
        assert_input(
            handle_event(press(KeyCode::Backspace), &app),
            InputAction::Dismiss,
        );
    }

    #[test]
    fn test_quit_keys() {
        let app = test_support::app();
        for event in [
            press(KeyCode::Char('q')),
            press_with(KeyCode::Char('q'), KeyModifiers::ALT),
            press_with(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            assert!(matches!(handle_event(event, &app), AppMessage::Quit));
        }
    }

    #[test]
    fn test_help_key() {
        let app = test_support::app();
        for event in [
            press(KeyCode::Char('?')),
            press_with(KeyCode::Char('?'), KeyModifiers::SHIFT),
        ] {
            assert!(matches!(
                handle_event(event, &app),
                AppMessage::Overlay(OverlayMessage::ShowHelp)
            ));
        }
    }

    #[test]
    fn test_release_ignored() {
        let app = test_support::app();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(release, &app), AppMessage::Noop));
    }

    #[test]
    fn test_resize_and_mouse() {
        let app = test_support::app();
        assert!(matches!(
            handle_event(Event::Resize(120, 40), &app),
            AppMessage::Resize {
                width: 120,
                height: 40
            }
        ));
        let mouse = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        });
        assert!(matches!(handle_event(mouse, &app), AppMessage::Noop));
    }

    #[test]
    fn test_help_overlay_gates_input() {
        let mut app = test_support::app();
        app.overlay.show(Overlay::Help);

        for code in [KeyCode::Esc, KeyCode::Backspace, KeyCode::Char('q'), KeyCode::Char('?')] {
            assert!(matches!(
                handle_event(press(code), &app),
                AppMessage::Overlay(OverlayMessage::Close)
            ));
        }
        assert!(matches!(
            handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Overlay(OverlayMessage::Close)
        ));
        for code in [KeyCode::Down, KeyCode::Enter, KeyCode::Char('x')] {
            assert!(matches!(handle_event(press(code), &app), AppMessage::Noop));
        }
    }

    #[tokio::test]
    async fn test_detail_modal_keys() {
        let mut app = test_support::app_with_rows(&[3]);
        if let GridState::Ready(session) = &mut app.grid {
            session.dispatch(InputAction::Select);
        }
        assert!(app.modal_open());

        // Ctrl+C 关闭弹窗而不是退出
        assert_input(
            handle_event(press_with(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            InputAction::Dismiss,
        );
        assert_input(
            handle_event(press(KeyCode::Backspace), &app),
            InputAction::Dismiss,
        );
        // 方向键仍然发出，由 InputRouter 吞掉
        assert_input(handle_event(press(KeyCode::Right), &app), InputAction::MoveRight);
        // q 与 ? 在弹窗内无效
        assert!(matches!(
            handle_event(press(KeyCode::Char('q')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('?')), &app),
            AppMessage::Noop
        ));
    }
}
