//! 内容区更新逻辑
//!
//! 只有看板（快捷操作）和设置页有可交互内容；其余页面忽略这些消息。

use rdgtt_portal_core::types::ViewId;

use super::navigation::navigate_to;
use super::{change_language, step};
use crate::message::ContentMessage;
use crate::model::{App, QuickAction, SettingItem};
use crate::view::theme::set_theme;

/// 处理内容区消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.shell.mounted().view_id {
        ViewId::Dashboard => update_dashboard(app, msg),
        ViewId::Settings => update_settings(app, msg),
        _ => {}
    }
}

fn update_dashboard(app: &mut App, msg: ContentMessage) {
    let len = QuickAction::ALL.len();
    match msg {
        ContentMessage::SelectPrevious => {
            app.dashboard.selected_action = step(app.dashboard.selected_action, len, false);
        }
        ContentMessage::SelectNext => {
            app.dashboard.selected_action = step(app.dashboard.selected_action, len, true);
        }
        ContentMessage::Confirm => {
            let action = app.dashboard.selected_quick_action();
            navigate_to(app, action.target_path());
        }
        ContentMessage::TogglePrev | ContentMessage::ToggleNext => {}
    }
}

fn update_settings(app: &mut App, msg: ContentMessage) {
    let len = SettingItem::ALL.len();
    match msg {
        ContentMessage::SelectPrevious => {
            app.settings.selected_index = step(app.settings.selected_index, len, false);
        }
        ContentMessage::SelectNext => {
            app.settings.selected_index = step(app.settings.selected_index, len, true);
        }
        ContentMessage::TogglePrev | ContentMessage::ToggleNext | ContentMessage::Confirm => {
            toggle_setting(app);
        }
    }
}

/// 两个设置项都只有两个取值，左右切换等价
fn toggle_setting(app: &mut App) {
    match app.settings.selected_item() {
        SettingItem::Language => {
            let next = app.shell.language().next();
            change_language(app, next);
        }
        SettingItem::Theme => {
            app.settings.theme = app.settings.theme.next();
            set_theme(app.settings.theme);
            app.mark_config_changed();
            log::info!("Theme changed to {:?}", app.settings.theme);
        }
    }
}
