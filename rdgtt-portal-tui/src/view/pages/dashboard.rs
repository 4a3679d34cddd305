//! 看板页面视图
//!
//! ```text
//! 欢迎语
//! ┌指标┐┌指标┐┌指标┐┌指标┐
//! ┌最近动态──────────┐┌快捷操作──┐
//! │                  │└──────────┘
//! │                  │┌系统状态──┐
//! └──────────────────┘└──────────┘
//! ```

use chrono::{DateTime, Utc};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use rdgtt_portal_core::types::{ActivityEntry, ServiceHealth, ServiceState, StatCard};
use rdgtt_portal_core::{relative_age, MessageKey};

use crate::model::{App, QuickAction};
use crate::view::theme::{colors, icon_glyph, severity_marker, Styles};

/// 指标卡片高度（含边框）
const CARD_HEIGHT: u16 = 5;
/// 系统状态进度条宽度
const BAR_WIDTH: usize = 10;

/// 渲染看板页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    render_welcome(app, frame, rows[0]);
    render_cards(app, frame, rows[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);
    render_timeline(app, frame, columns[0], Utc::now());

    let quick_height = u16::try_from(QuickAction::ALL.len() + 2).unwrap_or(u16::MAX);
    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(quick_height), Constraint::Min(0)])
        .split(columns[1]);
    render_quick_actions(app, frame, side[0]);
    render_system_status(app, frame, side[1]);
}

fn render_welcome(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {}", app.shell.t(MessageKey::DashboardWelcome)),
        Styles::muted(),
    )];
    if app.dashboard.loading {
        spans.push(Span::styled(
            format!("  {}", app.shell.t(MessageKey::StatusRefreshing)),
            Style::default().fg(colors().warning),
        ));
    } else if let Some(updated) = app.dashboard.last_updated {
        let local = updated.with_timezone(&chrono::Local);
        spans.push(Span::styled(
            format!("  ↻ {}", local.format("%H:%M")),
            Styles::muted(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(app: &App, frame: &mut Frame, area: Rect) {
    let cards = &app.dashboard.summary.cards;
    if cards.is_empty() {
        let text = Paragraph::new(format!(" {}", app.shell.t(MessageKey::DashboardNoCounters)))
            .style(Styles::muted());
        frame.render_widget(text, area);
        return;
    }

    let count = u32::try_from(cards.len()).unwrap_or(u32::MAX);
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(cards.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        render_card(app, frame, card, *slot);
    }
}

fn render_card(app: &App, frame: &mut Frame, card: &StatCard, area: Rect) {
    let c = colors();
    let accent = c.tag(card.color_tag);
    let trend_color = if card.trend_percent < 0.0 { c.error } else { c.success };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon_glyph(card.icon_id)), Style::default().fg(accent)),
            Span::styled(
                card.value.clone(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(app.shell.translate(&card.title_key)),
        Line::from(vec![
            Span::styled(card.trend_label(), Style::default().fg(trend_color)),
            Span::styled(
                format!(" {}", app.shell.t(MessageKey::DashboardVsLastMonth)),
                Styles::muted(),
            ),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_timeline(app: &App, frame: &mut Frame, area: Rect, now: DateTime<Utc>) {
    let block = Block::default()
        .title(format!(" {} ", app.shell.t(MessageKey::DashboardRecentActivities)))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let timeline = &app.dashboard.summary.timeline;
    let lines: Vec<Line> = if timeline.is_empty() {
        vec![Line::styled(app.shell.t(MessageKey::DashboardNoActivity), Styles::muted())]
    } else {
        timeline
            .iter()
            .map(|entry| timeline_line(app, entry, now))
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn timeline_line<'a>(app: &'a App, entry: &'a ActivityEntry, now: DateTime<Utc>) -> Line<'a> {
    let (key, n) = relative_age(entry.occurred_at, now).message();
    let age = match n {
        Some(n) => {
            let n = n.to_string();
            app.shell.localizer().t_with(key, &[("n", n.as_str())])
        }
        None => app.shell.t(key).to_string(),
    };

    Line::from(vec![
        Span::styled(
            format!("{} ", severity_marker(entry.severity)),
            Style::default().fg(colors().severity(entry.severity)),
        ),
        Span::raw(entry.message.as_str()),
        Span::styled(format!(" · {age}"), Styles::muted()),
    ])
}

fn render_quick_actions(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus.is_content();
    let block = Block::default()
        .title(format!(" {} ", app.shell.t(MessageKey::DashboardQuickActions)))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));

    let lines: Vec<Line> = QuickAction::ALL
        .iter()
        .enumerate()
        .map(|(i, action)| {
            let label = app.shell.t(action.label_key());
            if focused && i == app.dashboard.selected_action {
                Line::styled(format!("▶ + {label}"), Styles::selected())
            } else {
                Line::raw(format!("  + {label}"))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_system_status(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", app.shell.t(MessageKey::DashboardSystemStatus)))
        .borders(Borders::ALL)
        .border_style(Styles::border(false));

    let lines: Vec<Line> = app
        .dashboard
        .services
        .iter()
        .flat_map(|service| service_lines(app, service))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn service_lines<'a>(app: &'a App, service: &'a ServiceHealth) -> [Line<'a>; 2] {
    let color = colors().service(service.state);
    let state = app.shell.t(match service.state {
        ServiceState::Online => MessageKey::DashboardOnline,
        ServiceState::Partial => MessageKey::DashboardPartial,
        ServiceState::Offline => MessageKey::DashboardOffline,
    });

    [
        Line::from(vec![
            Span::raw(service.name.as_str()),
            Span::raw("  "),
            Span::styled(state, Style::default().fg(color)),
        ]),
        Line::from(vec![
            Span::styled(availability_bar(service.availability_percent), Style::default().fg(color)),
            Span::styled(format!(" {}%", service.availability_percent.min(100)), Styles::muted()),
        ]),
    ]
}

/// `███████░░░` 形式的可用率条
fn availability_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::backend::{DemoFeed, FeedSource};
    use crate::model::test_app;
    use crate::view::layout::tests::{draw, text};

    fn loaded_app() -> App {
        let mut app = test_app();
        let feed = tokio_test::block_on(DemoFeed.fetch()).unwrap();
        app.dashboard.apply_feed(&feed, Utc::now());
        app
    }

    #[test]
    fn renders_cards_timeline_and_status() {
        let app = loaded_app();
        let screen = text(&draw(&app, 160, 40));
        assert!(screen.contains("2,847"), "{screen}");
        assert!(screen.contains("87%"));
        assert!(screen.contains("+12%"));
        assert!(screen.contains("Taux de réussite"));
        assert!(screen.contains("Il y a 2 heures"));
        assert!(screen.contains("API Gateway"));
        assert!(screen.contains("Partiel"));
    }

    #[test]
    fn newest_activity_comes_first() {
        let app = loaded_app();
        let screen = text(&draw(&app, 160, 40));
        let newest = screen.find("Excellence").unwrap();
        let oldest = screen.find("Centre Formation").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn empty_feed_shows_empty_state() {
        let app = test_app();
        let screen = text(&draw(&app, 160, 40));
        assert!(screen.contains("Aucun indicateur disponible"), "{screen}");
        assert!(screen.contains("Aucune activité récente"));
    }

    #[test]
    fn ages_are_localized() {
        let mut app = loaded_app();
        app.shell.set_language(rdgtt_portal_core::Language::En);
        let now = Utc::now();
        let mut entry = app.dashboard.summary.timeline[0].clone();
        entry.occurred_at = now - Duration::minutes(5);
        let line = timeline_line(&app, &entry, now);
        let rendered: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(rendered.ends_with("5 minutes ago"), "{rendered}");
    }

    #[test]
    fn availability_bar_scales() {
        assert_eq!(availability_bar(100), "██████████");
        assert_eq!(availability_bar(75), "████████░░");
        assert_eq!(availability_bar(0), "░░░░░░░░░░");
        assert_eq!(availability_bar(250), "██████████");
    }
}
