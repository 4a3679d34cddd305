//!
//! app.rs
//! 应用主循环
//!
//! loop {
//!     取走后台刷新结果     → update(FeedLoaded)
//!     terminal.draw(...)    // 渲染 UI
//!     if should_quit { break }
//!     poll_event(100ms)     → handle_event → update
//!     执行 update 登记的副作用（刷新数据、保存配置）
//! }
//!
//! 事件按到达顺序逐个处理，每条消息处理完才渲染下一帧。

use std::time::Duration;

use anyhow::Result;

use crate::backend::{AppConfig, ConfigService, FeedService};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
///
/// `stored` 是从磁盘读取的配置，不含命令行覆盖
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    feed: &mut FeedService,
    config_service: &dyn ConfigService,
    stored: &mut AppConfig,
) -> Result<()> {
    loop {
        // 1. 后台刷新结果
        while let Some(result) = feed.try_recv() {
            update::update(app, AppMessage::FeedLoaded(result));
        }

        // 2. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 3. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 副作用
        if app.take_refresh_request() {
            feed.request_refresh();
        }
        if app.take_config_change() {
            persist_settings(app, stored, config_service);
        }
    }

    Ok(())
}

/// 把运行时修改的语言和主题写回磁盘配置；保存失败只记录日志
pub fn persist_settings(app: &App, stored: &mut AppConfig, config_service: &dyn ConfigService) {
    app.apply_to_config(stored);
    if let Err(e) = config_service.save(stored) {
        log::warn!("Failed to save settings: {e:#}");
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;
    use rdgtt_portal_core::Language;

    use super::*;
    use crate::backend::LocalConfigService;
    use crate::cli::Cli;
    use crate::model::test_app;
    use crate::view::theme::Theme;

    #[test]
    fn command_line_overrides_are_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let service = LocalConfigService::new(dir.path().join("config.json"));
        let mut stored = service.load().unwrap();

        let cli = Cli::try_parse_from(["rdgtt-portal", "-f", "/tmp/once.json", "--lang", "en"])
            .unwrap();
        let mut config = stored.clone();
        cli.apply(&mut config);
        assert_eq!(config.feed_file, Some(PathBuf::from("/tmp/once.json")));

        let mut app = test_app();
        app.settings.theme = Theme::Light;
        persist_settings(&app, &mut stored, &service);

        let saved = service.load().unwrap();
        assert_eq!(saved.feed_file, None);
        assert_eq!(saved.theme, Theme::Light);
        // 语言取自运行时状态（测试实例为法语），而不是 --lang
        assert_eq!(saved.language, Language::Fr);
    }

    #[test]
    fn save_failure_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        // 父路径是一个文件，无法创建目录
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let service = LocalConfigService::new(blocker.join("config.json"));

        let app = test_app();
        let mut stored = AppConfig::default();
        persist_settings(&app, &mut stored, &service);
        assert_eq!(stored.language, Language::Fr);
    }
}
