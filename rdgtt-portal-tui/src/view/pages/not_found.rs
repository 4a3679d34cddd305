//! 未匹配路由时挂载的页面

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use rdgtt_portal_core::MessageKey;

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let path = &app.shell.mounted().path;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", app.shell.t(MessageKey::NavNotFound)),
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "  {}",
            app.shell
                .localizer()
                .t_with(MessageKey::PageNotFound, &[("path", path.as_str())])
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  g", Styles::hint_key()),
            Span::styled(format!(" {}", app.shell.t(MessageKey::HintsGoTo)), Styles::muted()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

#[cfg(test)]
mod tests {
    use crate::model::test_app;
    use crate::view::layout::tests::{draw, go, text};

    #[test]
    fn names_the_unknown_path() {
        let mut app = test_app();
        go(&mut app, "/inspections/2024?x=1");
        let screen = text(&draw(&app, 100, 30));
        assert!(screen.contains("Aucune page ne correspond à /inspections/2024"), "{screen}");
    }
}
