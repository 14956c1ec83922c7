//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tilegrid_core::InputAction;

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const ALT_QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::key(KeyCode::Char('?'));

    // 弹窗关闭
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const BACKSPACE: KeyBinding = KeyBinding::key(KeyCode::Backspace);

    // 选择
    pub const SELECT: KeyBinding = KeyBinding::key(KeyCode::Enter);

    /// 方向键与 vim 风格 hjkl
    pub const MOVES: [(KeyBinding, InputAction); 8] = [
        (KeyBinding::key(KeyCode::Up), InputAction::MoveUp),
        (KeyBinding::key(KeyCode::Down), InputAction::MoveDown),
        (KeyBinding::key(KeyCode::Left), InputAction::MoveLeft),
        (KeyBinding::key(KeyCode::Right), InputAction::MoveRight),
        (KeyBinding::key(KeyCode::Char('k')), InputAction::MoveUp),
        (KeyBinding::key(KeyCode::Char('j')), InputAction::MoveDown),
        (KeyBinding::key(KeyCode::Char('h')), InputAction::MoveLeft),
        (KeyBinding::key(KeyCode::Char('l')), InputAction::MoveRight),
    ];

    /// 按键对应的方向动作
    pub fn movement(key: &KeyEvent) -> Option<InputAction> {
        Self::MOVES
            .iter()
            .find(|(binding, _)| binding.matches(key))
            .map(|(_, action)| *action)
    }

    /// 关闭弹窗的按键
    pub fn is_dismiss(key: &KeyEvent) -> bool {
        Self::BACK.matches(key) || Self::BACKSPACE.matches(key) || Self::FORCE_QUIT.matches(key)
    }
}
