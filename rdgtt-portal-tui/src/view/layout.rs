//! 外壳布局
//!
//! 顶栏与状态栏各占固定高度，左侧菜单固定宽度，内容区占据剩余部分。
//! 布局只取决于终端大小，不取决于当前页面，切换页面时外框不会移动。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders},
    Frame,
};
use rdgtt_portal_core::types::ViewId;

use crate::model::App;

use super::components;
use super::pages;
use super::theme::Styles;

/// 顶栏高度
pub const TOP_BAR_HEIGHT: u16 = 1;
/// 状态栏高度
pub const FOOTER_HEIGHT: u16 = 1;
/// 左侧菜单宽度
pub const SIDE_MENU_WIDTH: u16 = 28;

/// 外壳的四个区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellLayout {
    pub top_bar: Rect,
    pub side_menu: Rect,
    pub content: Rect,
    pub footer: Rect,
}

impl ShellLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TOP_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDE_MENU_WIDTH), Constraint::Min(0)])
            .split(rows[1]);

        Self {
            top_bar: rows[0],
            side_menu: columns[0],
            content: columns[1],
            footer: rows[2],
        }
    }
}

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    let layout = ShellLayout::compute(frame.area());

    components::topbar::render(app, frame, layout.top_bar);
    components::sidemenu::render(app, frame, layout.side_menu);
    render_page_content(app, frame, layout.content);
    components::footer::render(app, frame, layout.footer);

    // 覆盖层在最上层
    components::popover::render(app, frame, layout.top_bar);
    components::prompt::render(app, frame);
    components::help::render(app, frame);
}

/// 内容区：边框 + 当前挂载的页面
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let mounted = app.shell.mounted();
    let title = app.shell.translate(&mounted.label_key);

    let block = Block::default()
        .title(Line::styled(format!(" {title} "), Styles::title()))
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    match mounted.view_id {
        ViewId::Dashboard => pages::dashboard::render(app, frame, inner),
        ViewId::Settings => pages::settings::render(app, frame, inner),
        ViewId::NotFound => pages::not_found::render(app, frame, inner),
        ViewId::AutoEcoleList
        | ViewId::AutoEcoleCreate
        | ViewId::AutoEcoleDetails
        | ViewId::CandidatList
        | ViewId::CandidatCreate
        | ViewId::CandidatDetails
        | ViewId::Permis
        | ViewId::CartesGrises
        | ViewId::Documents
        | ViewId::Reports
        | ViewId::Login
        | ViewId::Profile => pages::placeholder::render(app, frame, inner),
    }
}

/// 在 `area` 中居中放置 `width` x `height` 的矩形
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
