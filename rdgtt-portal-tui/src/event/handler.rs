//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rdgtt_portal_core::types::ViewId;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage, OverlayMessage};
use crate::model::{App, Overlay};

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
        // 窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    match &app.overlay {
        Overlay::GoTo { .. } => return handle_prompt_keys(key),
        Overlay::Help => return handle_help_keys(key),
        Overlay::None => {}
    }

    if app.shell.popover().is_open() {
        return handle_popover_keys(key);
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) || is_plain_char(&key, '?') {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::HISTORY_BACK.matches(&key) {
        return AppMessage::HistoryBack;
    }
    if DefaultKeymap::HISTORY_FORWARD.matches(&key) {
        return AppMessage::HistoryForward;
    }
    if DefaultKeymap::PROFILE.matches(&key) {
        return AppMessage::Overlay(OverlayMessage::OpenProfile);
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::Overlay(OverlayMessage::OpenLanguage);
    }
    if DefaultKeymap::GO_TO.matches(&key) {
        return AppMessage::Overlay(OverlayMessage::OpenGoTo);
    }
    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }
    if DefaultKeymap::CLOSE.matches(&key) {
        return AppMessage::ClearStatus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_menu() {
        handle_menu_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// `?` 之类的字符在部分终端上带 SHIFT
fn is_plain_char(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && (key.modifiers - KeyModifiers::SHIFT).is_empty()
}

/// 处理左侧菜单的按键
fn handle_menu_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => NavigationMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => NavigationMessage::SelectNext,
        KeyCode::Home => NavigationMessage::SelectFirst,
        KeyCode::End => NavigationMessage::SelectLast,
        KeyCode::Enter => NavigationMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Navigation(msg)
}

/// 处理内容区的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    let msg = match (app.shell.mounted().view_id, key.code) {
        (ViewId::Dashboard | ViewId::Settings, KeyCode::Up | KeyCode::Char('k')) => {
            ContentMessage::SelectPrevious
        }
        (ViewId::Dashboard | ViewId::Settings, KeyCode::Down | KeyCode::Char('j')) => {
            ContentMessage::SelectNext
        }
        (ViewId::Dashboard | ViewId::Settings, KeyCode::Enter) => ContentMessage::Confirm,
        (ViewId::Settings, KeyCode::Left | KeyCode::Char('h')) => ContentMessage::TogglePrev,
        (ViewId::Settings, KeyCode::Right | KeyCode::Char('l')) => ContentMessage::ToggleNext,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 弹出菜单打开时的按键
fn handle_popover_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::PROFILE.matches(&key) {
        return AppMessage::Overlay(OverlayMessage::OpenProfile);
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::Overlay(OverlayMessage::OpenLanguage);
    }
    if DefaultKeymap::CLOSE.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Overlay(OverlayMessage::Close);
    }
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => OverlayMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => OverlayMessage::SelectNext,
        KeyCode::Enter => OverlayMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Overlay(msg)
}

/// 跳转输入框打开时的按键：其余字符都作为输入
fn handle_prompt_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CLOSE.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Overlay(OverlayMessage::Close);
    }
    match key.code {
        KeyCode::Enter => AppMessage::Overlay(OverlayMessage::Confirm),
        KeyCode::Backspace => AppMessage::Overlay(OverlayMessage::Backspace),
        KeyCode::Char(c) if is_plain_char(&key, c) => {
            AppMessage::Overlay(OverlayMessage::Input(c))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_help_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::CLOSE.matches(&key)
        || DefaultKeymap::HELP.matches(&key)
        || is_plain_char(&key, '?')
        || key.code == KeyCode::Enter
    {
        return AppMessage::Overlay(OverlayMessage::Close);
    }
    AppMessage::Noop
}
