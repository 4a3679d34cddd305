//! 快捷键配置

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

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
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const CLOSE: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 历史
    pub const HISTORY_BACK: KeyBinding = KeyBinding::alt(KeyCode::Left);
    pub const HISTORY_FORWARD: KeyBinding = KeyBinding::alt(KeyCode::Right);

    // 顶栏
    pub const PROFILE: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const GO_TO: KeyBinding = KeyBinding::key(KeyCode::Char('g'));
}
