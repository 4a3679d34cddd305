//! 顶栏弹出菜单：个人菜单 / 语言选择

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use rdgtt_portal_core::{Language, MessageKey, Popover, ProfileAction};
use unicode_width::UnicodeWidthStr;

use crate::model::App;
use crate::view::theme::{colors, Styles};

const MIN_WIDTH: u16 = 18;

/// 在顶栏下方、右侧对齐绘制当前打开的弹出菜单
pub fn render(app: &App, frame: &mut Frame, top_bar: Rect) {
    let (title, labels) = match app.shell.popover() {
        Popover::Closed => return,
        Popover::ProfileOpen => (
            app.shell.t(MessageKey::TopbarProfile),
            ProfileAction::all()
                .iter()
                .map(|action| app.shell.t(action.label_key()).to_string())
                .collect::<Vec<_>>(),
        ),
        Popover::LanguageOpen => (
            app.shell.t(MessageKey::TopbarLanguage),
            Language::all()
                .iter()
                .map(|&language| {
                    let mark = if language == app.shell.language() { "✓" } else { " " };
                    format!("{mark} {}", language.display_name())
                })
                .collect(),
        ),
    };

    let widest = labels
        .iter()
        .map(|label| label.width())
        .chain([title.width()])
        .max()
        .unwrap_or(0);
    let width = u16::try_from(widest + 6).unwrap_or(u16::MAX).max(MIN_WIDTH);
    let height = u16::try_from(labels.len() + 2).unwrap_or(u16::MAX);

    let screen = frame.area();
    let x = top_bar.right().saturating_sub(width + 1);
    let area = Rect::new(x, top_bar.bottom(), width, height).intersection(screen);
    if area.is_empty() {
        return;
    }

    let lines: Vec<Line> = labels
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            if i == app.popover_cursor {
                Line::styled(format!("▶ {label}"), Styles::selected())
            } else {
                Line::raw(format!("  {label}"))
            }
        })
        .collect();

    let c = colors();
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.popup_bg).fg(c.fg));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use crate::message::{AppMessage, OverlayMessage};
    use crate::model::test_app;
    use crate::update::update;
    use crate::view::layout::tests::{draw, text};

    #[test]
    fn profile_popover_lists_actions() {
        let mut app = test_app();
        update(&mut app, AppMessage::Overlay(OverlayMessage::OpenProfile));
        let screen = text(&draw(&app, 100, 30));
        assert!(screen.contains("▶ Paramètres"));
        assert!(screen.contains("  Déconnexion"));
    }

    #[test]
    fn language_popover_marks_current_language() {
        let mut app = test_app();
        update(&mut app, AppMessage::Overlay(OverlayMessage::OpenLanguage));
        let screen = text(&draw(&app, 100, 30));
        assert!(screen.contains("▶ ✓ Français"));
        assert!(screen.contains("English"));
        assert!(!screen.contains("Déconnexion"));
    }
}
