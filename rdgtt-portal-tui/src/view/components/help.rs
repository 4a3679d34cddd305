//! 快捷键帮助

use ratatui::{
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use rdgtt_portal_core::MessageKey;

use crate::model::{App, Overlay};
use crate::view::layout::centered_rect;
use crate::view::theme::{colors, Styles};

/// 键位与说明
const BINDINGS: [(&str, MessageKey); 11] = [
    ("Tab", MessageKey::HintsSwitchPanel),
    ("↑↓ / j k", MessageKey::HintsMove),
    ("Enter", MessageKey::HintsOpen),
    ("Alt+← / Alt+→", MessageKey::HintsHistory),
    ("g", MessageKey::HintsGoTo),
    ("Alt+p", MessageKey::HintsProfile),
    ("Alt+l", MessageKey::HintsLanguage),
    ("Alt+r", MessageKey::HintsRefresh),
    ("Alt+h / ?", MessageKey::HintsHelp),
    ("Esc", MessageKey::HintsClose),
    ("Alt+q / Ctrl+c", MessageKey::HintsQuit),
];

const KEY_COLUMN: usize = 18;

pub fn render(app: &App, frame: &mut Frame) {
    if app.overlay != Overlay::Help {
        return;
    }

    let c = colors();
    let mut lines = vec![Line::from("")];
    lines.extend(BINDINGS.iter().map(|(key, desc)| {
        Line::from(vec![
            Span::styled(format!("  {key:<KEY_COLUMN$}"), Styles::hint_key()),
            Span::raw(app.shell.t(*desc)),
        ])
    }));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(52, height, frame.area());
    let block = Block::default()
        .title(format!(" {} ", app.shell.t(MessageKey::HelpTitle)))
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Style::default().bg(c.popup_bg).fg(c.fg));

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
