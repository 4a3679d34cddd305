//! 左侧菜单组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};
use rdgtt_portal_core::MessageKey;

use crate::model::App;
use crate::view::theme::{colors, icon_glyph, Styles};

/// 渲染菜单：当前路由整行高亮，聚焦时光标用 ▶ 标出
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = app.focus.is_menu();

    let block = Block::default()
        .title(Line::styled(
            format!(" {} ", app.shell.t(MessageKey::AppTitle)),
            Styles::title(),
        ))
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let items: Vec<ListItem> = app
        .shell
        .menu()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let under_cursor = is_focused && i == app.menu_cursor;
            let prefix = if under_cursor { "▶ " } else { "  " };
            let content = format!("{prefix}{} {}", icon_glyph(item.entry.icon_id), item.label);

            let style = if item.selected {
                Styles::selected()
            } else if under_cursor {
                Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(c.fg)
            };
            ListItem::new(content).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

#[cfg(test)]
mod tests {
    use crate::model::test_app;
    use crate::view::layout::tests::{draw, go, text};

    #[test]
    fn lists_menu_entries_in_current_language() {
        let mut app = test_app();
        let screen = text(&draw(&app, 100, 30));
        for label in ["Tableau de bord", "Auto-écoles", "Candidats", "Paramètres"] {
            assert!(screen.contains(label), "missing {label}");
        }

        app.shell.set_language(rdgtt_portal_core::Language::En);
        go(&mut app, "/reports");
        let screen = text(&draw(&app, 100, 30));
        assert!(screen.contains("Driving schools"));
        assert!(screen.contains("▶ ▤ Reports"));
    }
}
