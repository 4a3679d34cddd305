//! 顶栏：版本、通知徽标、语言与个人菜单入口

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rdgtt_portal_core::{MessageKey, Popover};

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let version = app
        .shell
        .localizer()
        .t_with(MessageKey::AppVersion, &[("version", env!("CARGO_PKG_VERSION"))]);
    let left = Paragraph::new(Line::from(vec![
        Span::raw(" ▦ "),
        Span::styled(version, Style::default().add_modifier(Modifier::BOLD)),
    ]))
    .style(Styles::bar());
    frame.render_widget(left, area);

    let right = Paragraph::new(Line::from(right_spans(app))).alignment(Alignment::Right);
    frame.render_widget(right, area);
}

fn right_spans(app: &App) -> Vec<Span<'_>> {
    let c = colors();
    let popover = app.shell.popover();
    let open = |which: Popover| {
        if popover == which {
            Styles::bar().add_modifier(Modifier::REVERSED)
        } else {
            Styles::bar()
        }
    };

    let alerts = app.dashboard.summary.pending_alerts();
    let badge_style = if alerts > 0 {
        Style::default().bg(c.warning).fg(c.selected_fg).add_modifier(Modifier::BOLD)
    } else {
        Styles::bar()
    };

    vec![
        Span::styled(format!(" {} ", app.shell.t(MessageKey::TopbarNotifications)), Styles::bar()),
        Span::styled(format!(" {alerts} "), badge_style),
        Span::styled(" │ ", Styles::bar()),
        Span::styled(
            format!(
                "{} {} ▾",
                app.shell.t(MessageKey::TopbarLanguage),
                app.shell.language().code().to_uppercase()
            ),
            open(Popover::LanguageOpen),
        ),
        Span::styled(" │ ", Styles::bar()),
        Span::styled(
            format!("◉ {} ▾", app.shell.t(MessageKey::TopbarProfile)),
            open(Popover::ProfileOpen),
        ),
        Span::styled(" ", Styles::bar()),
    ]
}

#[cfg(test)]
mod tests {
    use rdgtt_portal_core::types::{ActivityCategory, ActivityEntry, DashboardFeed, Severity};

    use crate::model::test_app;
    use crate::view::layout::tests::{draw, row};

    #[test]
    fn shows_version_language_and_badge() {
        let mut app = test_app();
        let feed = DashboardFeed {
            activities: vec![ActivityEntry {
                id: 1,
                category: ActivityCategory::Inspection,
                message: "x".into(),
                occurred_at: chrono::Utc::now(),
                severity: Severity::Warning,
            }],
            ..DashboardFeed::default()
        };
        app.dashboard.apply_feed(&feed, chrono::Utc::now());

        let top = row(&draw(&app, 120, 20), 0);
        assert!(top.contains(&format!("R-DGTT Portail v{}", env!("CARGO_PKG_VERSION"))));
        assert!(top.contains("Notifications  1 "), "{top}");
        assert!(top.contains("Langue FR"));
        assert!(top.contains("Profil"));
    }
}
