//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rdgtt_portal_core::MessageKey;

use crate::model::{App, Overlay};
use crate::view::theme::{colors, Styles};

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }

    // 诊断计数：导航未命中、缺失翻译
    if !app.journal.is_empty() {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(
            format!("⚠ {}", app.journal.len()),
            Style::default().fg(colors().warning),
        ));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::Gray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::bar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn hints(app: &App) -> Vec<(&'static str, &str)> {
    let shell = &app.shell;

    match app.overlay {
        Overlay::GoTo { .. } => {
            return vec![
                ("Enter", shell.t(MessageKey::HintsOpen)),
                ("Esc", shell.t(MessageKey::HintsClose)),
            ];
        }
        Overlay::Help => return vec![("Esc", shell.t(MessageKey::HintsClose))],
        Overlay::None => {}
    }

    if app.shell.popover().is_open() {
        return vec![
            ("↑↓", shell.t(MessageKey::HintsMove)),
            ("Enter", shell.t(MessageKey::HintsOpen)),
            ("Esc", shell.t(MessageKey::HintsClose)),
        ];
    }

    vec![
        ("Tab", shell.t(MessageKey::HintsSwitchPanel)),
        ("↑↓", shell.t(MessageKey::HintsMove)),
        ("Enter", shell.t(MessageKey::HintsOpen)),
        ("Alt+←→", shell.t(MessageKey::HintsHistory)),
        ("g", shell.t(MessageKey::HintsGoTo)),
        ("?", shell.t(MessageKey::HintsHelp)),
        ("Alt+q", shell.t(MessageKey::HintsQuit)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_app;
    use crate::view::layout::tests::{draw, go, row};

    #[test]
    fn shows_status_and_diagnostic_count() {
        let mut app = test_app();
        go(&mut app, "/inconnu");
        app.set_status("Session fermée");

        let buffer = draw(&app, 200, 20);
        let footer = row(&buffer, 19);
        assert!(footer.contains("⚠ 1"), "{footer}");
        assert!(footer.contains("Session fermée"));
    }

    #[test]
    fn hints_follow_overlay() {
        let mut app = test_app();
        assert_eq!(hints(&app).len(), 7);
        app.shell.open_profile();
        assert_eq!(hints(&app)[0].0, "↑↓");
        app.shell.close_popover();
        app.overlay = Overlay::Help;
        assert_eq!(hints(&app), vec![("Esc", "Fermer")]);
    }
}
