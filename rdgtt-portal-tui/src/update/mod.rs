//! Update 层：消息 → 状态变更
//!
//! update 只修改 `App`；需要 I/O 的动作（刷新数据、保存配置）
//! 只在 `App` 上登记请求，由 `app::run` 在本轮结束时执行。

mod content;
mod navigation;
mod overlay;

use chrono::Utc;
use rdgtt_portal_core::types::DashboardFeed;
use rdgtt_portal_core::{CoreResult, Language, MessageKey};

use crate::message::AppMessage;
use crate::model::{App, Overlay};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 有覆盖层时不切换焦点
            if !app.has_overlay() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Overlay(overlay_msg) => {
            overlay::update(app, overlay_msg);
        }

        AppMessage::HistoryBack => {
            navigation::history_back(app);
        }

        AppMessage::HistoryForward => {
            navigation::history_forward(app);
        }

        AppMessage::Refresh => {
            app.request_refresh();
            let text = app.shell.t(MessageKey::StatusRefreshing).to_string();
            app.set_status(text);
        }

        AppMessage::FeedLoaded(result) => {
            handle_feed(app, result);
        }

        AppMessage::ShowHelp => {
            app.shell.close_popover();
            app.overlay = Overlay::Help;
        }

        AppMessage::ClearStatus => {
            app.clear_status();
        }

        AppMessage::Noop => {}
    }
}

fn handle_feed(app: &mut App, result: CoreResult<DashboardFeed>) {
    match result {
        Ok(feed) => {
            log::info!(
                "Dashboard feed loaded: {} counters, {} activities, {} services",
                feed.counters.len(),
                feed.activities.len(),
                feed.services.len()
            );
            app.dashboard.apply_feed(&feed, Utc::now());
            // 卡片标题键随数据到达，启动时的检查覆盖不到
            let gaps = app.shell.audit_keys(
                app.dashboard
                    .summary
                    .cards
                    .iter()
                    .map(|card| card.title_key.as_str()),
            );
            if !gaps.is_empty() {
                log::warn!("{} card title translation(s) missing", gaps.len());
            }
            let text = app.shell.t(MessageKey::StatusFeedLoaded).to_string();
            app.set_status(text);
        }
        Err(e) => {
            if e.is_expected() {
                log::warn!("Dashboard feed unavailable: {e}");
            } else {
                log::error!("Dashboard feed failed: {e}");
            }
            app.dashboard.clear();
            let error = e.to_string();
            let text = app
                .shell
                .localizer()
                .t_with(MessageKey::StatusFeedFailed, &[("error", error.as_str())]);
            app.set_status(text);
        }
    }
}

/// 切换界面语言；语言状态单元只在这里被写入
fn change_language(app: &mut App, language: Language) {
    if app.shell.language() == language {
        return;
    }
    app.shell.set_language(language);
    app.mark_config_changed();
    let text = app.shell.t(MessageKey::StatusLanguageChanged).to_string();
    app.set_status(text);
}

/// 在 `[0, len)` 内移动光标，不循环
fn step(current: usize, len: usize, forward: bool) -> usize {
    if forward {
        (current + 1).min(len.saturating_sub(1))
    } else {
        current.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use rdgtt_portal_core::types::{ColorTag, CounterReading, CounterValue, IconId};
    use rdgtt_portal_core::{CoreError, Diagnostic};

    use super::*;
    use crate::backend::DemoFeed;
    use crate::backend::FeedSource;
    use crate::model::test_app;

    #[test]
    fn quit_sets_flag() {
        let mut app = test_app();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn toggle_focus_is_blocked_by_overlays() {
        let mut app = test_app();
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_content());

        app.shell.open_profile();
        update(&mut app, AppMessage::ToggleFocus);
        assert!(app.focus.is_content());
    }

    #[test]
    fn refresh_is_requested_from_main_loop() {
        let mut app = test_app();
        update(&mut app, AppMessage::Refresh);
        assert!(app.take_refresh_request());
        assert_eq!(app.status_message.as_deref(), Some("Actualisation…"));
    }

    #[test]
    fn loaded_feed_populates_dashboard() {
        let mut app = test_app();
        app.request_refresh();
        let feed = tokio_test::block_on(DemoFeed.fetch());
        update(&mut app, AppMessage::FeedLoaded(feed));

        assert!(!app.dashboard.loading);
        assert_eq!(app.dashboard.summary.cards.len(), 4);
        assert_eq!(app.dashboard.summary.pending_alerts(), 1);
        assert_eq!(app.dashboard.services.len(), 3);
        assert!(app.dashboard.last_updated.is_some());
    }

    #[test]
    fn demo_feed_card_titles_are_translated() {
        let mut app = test_app();
        let feed = tokio_test::block_on(DemoFeed.fetch());
        update(&mut app, AppMessage::FeedLoaded(feed));
        assert!(app.journal.is_empty(), "{:?}", app.journal.entries());
    }

    #[test]
    fn unknown_card_title_is_reported_in_every_language() {
        let mut app = test_app();
        let feed = DashboardFeed {
            counters: vec![CounterReading {
                title_key: "dashboard.inspectionsEnCours".into(),
                value: CounterValue::Count(3),
                trend_percent: 0.0,
                icon: IconId::Assessment,
                color: ColorTag::Warning,
            }],
            ..DashboardFeed::default()
        };
        update(&mut app, AppMessage::FeedLoaded(Ok(feed)));

        let entries = app.journal.entries();
        for language in [Language::Fr, Language::En] {
            let gap = Diagnostic::MissingTranslation {
                language,
                key: "dashboard.inspectionsEnCours".into(),
            };
            assert!(entries.contains(&gap), "{entries:?}");
        }
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn failed_feed_falls_back_to_empty_state() {
        let mut app = test_app();
        let feed = tokio_test::block_on(DemoFeed.fetch());
        update(&mut app, AppMessage::FeedLoaded(feed));
        update(
            &mut app,
            AppMessage::FeedLoaded(Err(CoreError::Feed("feed.json: not found".into()))),
        );

        assert!(app.dashboard.summary.is_empty());
        assert!(app.dashboard.services.is_empty());
        let status = app.status_message.unwrap();
        assert!(status.contains("feed.json: not found"), "{status}");
    }

    #[test]
    fn help_replaces_open_popover() {
        let mut app = test_app();
        app.shell.open_language();
        update(&mut app, AppMessage::ShowHelp);
        assert_eq!(app.overlay, Overlay::Help);
        assert!(!app.shell.popover().is_open());
    }

    #[test]
    fn step_is_clamped() {
        assert_eq!(step(0, 3, false), 0);
        assert_eq!(step(2, 3, true), 2);
        assert_eq!(step(1, 3, true), 2);
        assert_eq!(step(0, 0, true), 0);
    }
}
