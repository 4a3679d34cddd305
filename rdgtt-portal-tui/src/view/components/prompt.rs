//! "跳转到" 输入框

use ratatui::{
    layout::Position,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use rdgtt_portal_core::MessageKey;
use unicode_width::UnicodeWidthStr;

use crate::model::{App, Overlay};
use crate::view::layout::centered_rect;
use crate::view::theme::{colors, Styles};

const PROMPT_WIDTH: u16 = 56;

pub fn render(app: &App, frame: &mut Frame) {
    let Overlay::GoTo { ref input } = app.overlay else {
        return;
    };

    let area = centered_rect(PROMPT_WIDTH, 3, frame.area());
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", app.shell.t(MessageKey::PromptGoTo)))
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.popup_bg).fg(c.fg));
    let inner = block.inner(area);

    let line = Line::from(vec![Span::styled("> ", Styles::hint_key()), Span::raw(input.as_str())]);
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(line).block(block), area);

    // 光标放在输入末尾
    let typed = u16::try_from(input.width()).unwrap_or(u16::MAX);
    let x = inner.x.saturating_add(2).saturating_add(typed);
    if x < inner.right() {
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use crate::message::{AppMessage, OverlayMessage};
    use crate::model::test_app;
    use crate::update::update;
    use crate::view::layout::tests::{draw, text};

    #[test]
    fn shows_typed_path() {
        let mut app = test_app();
        update(&mut app, AppMessage::Overlay(OverlayMessage::OpenGoTo));
        for c in "/permis".chars() {
            update(&mut app, AppMessage::Overlay(OverlayMessage::Input(c)));
        }
        let screen = text(&draw(&app, 100, 30));
        assert!(screen.contains("Aller à"));
        assert!(screen.contains("> /permis"));
    }
}
