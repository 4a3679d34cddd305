//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rdgtt_portal_core::MessageKey;
use unicode_width::UnicodeWidthStr;

use crate::model::{App, SettingItem};
use crate::view::theme::{colors, Theme};

/// 标签列宽（显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域宽度（含 ◀ ▶）
const VALUE_WIDTH: usize = 20;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let focused = app.focus.is_content();
    let mut lines = vec![Line::from("")];

    for (i, item) in SettingItem::ALL.iter().enumerate() {
        let (label, value) = match item {
            SettingItem::Language => (
                app.shell.t(MessageKey::SettingsLanguage),
                app.shell.language().display_name(),
            ),
            SettingItem::Theme => (
                app.shell.t(MessageKey::SettingsTheme),
                match app.settings.theme {
                    Theme::Dark => app.shell.t(MessageKey::SettingsThemeDark),
                    Theme::Light => app.shell.t(MessageKey::SettingsThemeLight),
                },
            ),
        };
        lines.push(render_setting_row(
            label,
            value,
            focused && app.settings.selected_index == i,
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled("  ↑↓", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", app.shell.t(MessageKey::HintsMove)),
            Style::default().fg(c.muted),
        ),
        Span::styled("←→", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", app.shell.t(MessageKey::HintsOpen)),
            Style::default().fg(c.muted),
        ),
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", app.shell.t(MessageKey::HintsSwitchPanel)),
            Style::default().fg(c.muted),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行设置项；选中时值两侧显示 ◀ ▶
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 按显示宽度补齐，让各行的值居中对齐
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());
    let available = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available.saturating_sub(value.width()) / 2;
    let right_padding = available
        .saturating_sub(value.width())
        .saturating_sub(left_padding);
    let (open, close) = if is_selected { ("◀ ", " ▶") } else { ("  ", "  ") };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(open, Style::default().fg(Color::Yellow)),
        Span::raw(" ".repeat(left_padding)),
        Span::styled(value, value_style),
        Span::raw(" ".repeat(right_padding)),
        Span::styled(close, Style::default().fg(Color::Yellow)),
    ])
}

#[cfg(test)]
mod tests {
    use crate::message::{AppMessage, ContentMessage};
    use crate::model::test_app;
    use crate::update::update;
    use crate::view::layout::tests::{draw, go, text};

    #[test]
    fn selected_row_shows_arrows() {
        let mut app = test_app();
        go(&mut app, "/settings");
        update(&mut app, AppMessage::ToggleFocus);
        let screen = text(&draw(&app, 100, 30));
        assert!(screen.contains("▶   Langue"), "{screen}");
        assert!(screen.contains("◀"));
        assert!(screen.contains("Français"));
    }

    #[test]
    fn toggling_language_rerenders_labels() {
        let mut app = test_app();
        go(&mut app, "/settings");
        update(&mut app, AppMessage::ToggleFocus);
        update(&mut app, AppMessage::Content(ContentMessage::ToggleNext));
        let screen = text(&draw(&app, 100, 30));
        assert!(screen.contains("Language"));
        assert!(screen.contains("English"));
        assert!(screen.contains("Dark"));
    }
}
