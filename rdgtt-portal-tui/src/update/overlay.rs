//! 覆盖层更新逻辑：顶栏弹出菜单、跳转输入框、帮助

use rdgtt_portal_core::{Language, MessageKey, Popover, ProfileAction};

use super::navigation::navigate_to;
use super::{change_language, step};
use crate::message::OverlayMessage;
use crate::model::{App, Overlay};

/// 处理覆盖层消息
pub fn update(app: &mut App, msg: OverlayMessage) {
    match msg {
        OverlayMessage::OpenProfile => {
            app.overlay = Overlay::None;
            app.shell.open_profile();
            app.popover_cursor = 0;
        }
        OverlayMessage::OpenLanguage => {
            app.overlay = Overlay::None;
            app.shell.open_language();
            let current = app.shell.language();
            app.popover_cursor = Language::all()
                .iter()
                .position(|&language| language == current)
                .unwrap_or(0);
        }
        OverlayMessage::OpenGoTo => {
            app.shell.close_popover();
            app.overlay = Overlay::GoTo {
                input: String::new(),
            };
        }
        OverlayMessage::SelectPrevious => {
            app.popover_cursor = step(app.popover_cursor, app.popover_len(), false);
        }
        OverlayMessage::SelectNext => {
            app.popover_cursor = step(app.popover_cursor, app.popover_len(), true);
        }
        OverlayMessage::Confirm => {
            handle_confirm(app);
        }
        OverlayMessage::Close => {
            app.overlay = Overlay::None;
            app.shell.close_popover();
        }
        OverlayMessage::Input(c) => {
            if let Overlay::GoTo { input } = &mut app.overlay {
                input.push(c);
            }
        }
        OverlayMessage::Backspace => {
            if let Overlay::GoTo { input } = &mut app.overlay {
                input.pop();
            }
        }
    }
}

fn handle_confirm(app: &mut App) {
    if let Overlay::GoTo { input } = std::mem::take(&mut app.overlay) {
        let path = input.trim();
        if !path.is_empty() {
            navigate_to(app, path);
        }
        return;
    }

    match app.shell.popover() {
        Popover::Closed => {}
        Popover::ProfileOpen => {
            let Some(&action) = ProfileAction::all().get(app.popover_cursor) else {
                return;
            };
            app.shell.close_popover();
            if action == ProfileAction::Logout {
                // 认证不在外壳的职责内，这里只记录请求
                log::info!("Logout requested from {}", app.shell.navigation().active_path());
                let text = app.shell.t(MessageKey::StatusLoggedOut).to_string();
                app.set_status(text);
            }
            navigate_to(app, action.target_path());
        }
        Popover::LanguageOpen => {
            let Some(&language) = Language::all().get(app.popover_cursor) else {
                return;
            };
            app.shell.close_popover();
            change_language(app, language);
        }
    }
}

#[cfg(test)]
mod tests {
    use rdgtt_portal_core::types::ViewId;

    use super::*;
    use crate::model::test_app;

    #[test]
    fn opening_one_popover_closes_the_other() {
        let mut app = test_app();
        update(&mut app, OverlayMessage::OpenProfile);
        assert_eq!(app.shell.popover(), Popover::ProfileOpen);
        update(&mut app, OverlayMessage::OpenLanguage);
        assert_eq!(app.shell.popover(), Popover::LanguageOpen);
        update(&mut app, OverlayMessage::Close);
        assert_eq!(app.shell.popover(), Popover::Closed);
    }

    #[test]
    fn language_popover_starts_on_current_language() {
        let mut app = test_app();
        app.shell.set_language(Language::En);
        update(&mut app, OverlayMessage::OpenLanguage);
        assert_eq!(app.popover_cursor, 1);
    }

    #[test]
    fn choosing_language_switches_and_closes() {
        let mut app = test_app();
        update(&mut app, OverlayMessage::OpenLanguage);
        update(&mut app, OverlayMessage::SelectNext);
        update(&mut app, OverlayMessage::Confirm);

        assert_eq!(app.shell.language(), Language::En);
        assert_eq!(app.shell.popover(), Popover::Closed);
        assert_eq!(app.shell.menu()[0].label, "Dashboard");
        assert!(app.take_config_change());
    }

    #[test]
    fn profile_settings_navigates_to_settings() {
        let mut app = test_app();
        update(&mut app, OverlayMessage::OpenProfile);
        update(&mut app, OverlayMessage::Confirm);
        assert_eq!(app.shell.mounted().view_id, ViewId::Settings);
        assert_eq!(app.shell.popover(), Popover::Closed);
    }

    #[test]
    fn logout_navigates_to_login() {
        let mut app = test_app();
        update(&mut app, OverlayMessage::OpenProfile);
        update(&mut app, OverlayMessage::SelectNext);
        update(&mut app, OverlayMessage::Confirm);
        assert_eq!(app.shell.mounted().view_id, ViewId::Login);
        assert_eq!(app.status_message.as_deref(), Some("Session fermée"));
    }

    #[test]
    fn go_to_prompt_collects_input_and_navigates() {
        let mut app = test_app();
        update(&mut app, OverlayMessage::OpenGoTo);
        for c in "/candidats/42x".chars() {
            update(&mut app, OverlayMessage::Input(c));
        }
        update(&mut app, OverlayMessage::Backspace);
        update(&mut app, OverlayMessage::Confirm);

        assert_eq!(app.overlay, Overlay::None);
        let mounted = app.shell.mounted();
        assert_eq!(mounted.view_id, ViewId::CandidatDetails);
        assert_eq!(mounted.param("id"), Some("42"));
    }

    #[test]
    fn unknown_path_from_prompt_mounts_not_found() {
        let mut app = test_app();
        update(&mut app, OverlayMessage::OpenGoTo);
        for c in "/inspections".chars() {
            update(&mut app, OverlayMessage::Input(c));
        }
        update(&mut app, OverlayMessage::Confirm);
        assert!(app.shell.mounted().is_not_found());
        assert_eq!(app.journal.len(), 1);
    }

    #[test]
    fn empty_prompt_does_nothing() {
        let mut app = test_app();
        update(&mut app, OverlayMessage::OpenGoTo);
        update(&mut app, OverlayMessage::Confirm);
        assert_eq!(app.shell.navigation().active_path(), "/dashboard");
        assert!(!app.shell.navigation().can_go_back());
    }
}
