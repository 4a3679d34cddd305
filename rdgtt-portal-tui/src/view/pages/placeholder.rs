//! 由其他服务承担的模块：这里只显示页面标题和路由参数

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use rdgtt_portal_core::MessageKey;

use crate::model::App;
use crate::view::theme::{colors, icon_glyph, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let mounted = app.shell.mounted();
    let icon = app
        .shell
        .routes()
        .resolve(&mounted.path)
        .map_or("", |found| icon_glyph(found.entry.icon_id));

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {icon} "), Style::default().fg(c.highlight)),
            Span::styled(app.shell.translate(&mounted.label_key), Styles::title()),
        ]),
        Line::from(""),
        Line::from(format!("  {}", app.shell.t(MessageKey::PagePlaceholder))),
    ];

    if let Some(id) = mounted.param("id") {
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "  {}",
            app.shell.localizer().t_with(MessageKey::PageRecord, &[("id", id)])
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(format!("  {}", mounted.path), Styles::muted())));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use crate::model::test_app;
    use crate::view::layout::tests::{draw, go, text};

    #[test]
    fn detail_view_shows_record_id() {
        let mut app = test_app();
        go(&mut app, "/auto-ecoles/17");
        let screen = text(&draw(&app, 100, 30));
        assert!(screen.contains("Fiche auto-école"), "{screen}");
        assert!(screen.contains("Enregistrement : 17"), "{screen}");
    }

    #[test]
    fn list_view_has_no_record_line() {
        let mut app = test_app();
        go(&mut app, "/documents");
        let screen = text(&draw(&app, 100, 30));
        assert!(!screen.contains("Enregistrement"));
        assert!(screen.contains("/documents"));
    }
}
