//! 左侧菜单与导航入口
//!
//! 所有导航（菜单、跳转输入、快捷操作、弹出菜单、历史）都经过这里进入 `Shell`。

use rdgtt_portal_core::MessageKey;

use super::step;
use crate::message::NavigationMessage;
use crate::model::App;

/// 处理菜单消息
pub fn update(app: &mut App, msg: NavigationMessage) {
    let len = app.menu_len();
    match msg {
        NavigationMessage::SelectPrevious => {
            app.menu_cursor = step(app.menu_cursor, len, false);
        }
        NavigationMessage::SelectNext => {
            app.menu_cursor = step(app.menu_cursor, len, true);
        }
        NavigationMessage::SelectFirst => {
            app.menu_cursor = 0;
        }
        NavigationMessage::SelectLast => {
            app.menu_cursor = len.saturating_sub(1);
        }
        NavigationMessage::Confirm => {
            let target = app
                .shell
                .routes()
                .menu_entries()
                .nth(app.menu_cursor)
                .map(|entry| entry.path.clone());
            if let Some(path) = target {
                navigate_to(app, &path);
            }
        }
    }
}

/// 导航到 `path` 并同步界面状态
pub fn navigate_to(app: &mut App, path: &str) {
    let mounted = app.shell.navigate(path);
    log::debug!("Navigated to {} ({:?})", mounted.path, mounted.view_id);
    after_remount(app);
}

pub fn history_back(app: &mut App) {
    if app.shell.back().is_some() {
        after_remount(app);
    } else {
        let text = app.shell.t(MessageKey::StatusHistoryEnd).to_string();
        app.set_status(text);
    }
}

pub fn history_forward(app: &mut App) {
    if app.shell.forward().is_some() {
        after_remount(app);
    } else {
        let text = app.shell.t(MessageKey::StatusHistoryEnd).to_string();
        app.set_status(text);
    }
}

fn after_remount(app: &mut App) {
    app.sync_menu_cursor();
    app.dashboard.selected_action = 0;
    app.settings.selected_index = 0;
}
