//! 主题和样式定义

use std::sync::atomic::{AtomicU8, Ordering};

use ratatui::style::{Color, Modifier, Style};
use rdgtt_portal_core::types::{ColorTag, IconId, ServiceState, Severity};
use serde::{Deserialize, Serialize};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    fn index(self) -> u8 {
        match self {
            Self::Dark => 0,
            Self::Light => 1,
        }
    }
}

/// 设置当前主题，下一次渲染生效
pub fn set_theme(theme: Theme) {
    CURRENT_THEME.store(theme.index(), Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub popup_bg: Color,
    pub primary: Color,
    pub secondary: Color,
    pub success: Color,
    pub info: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            fg: Color::Rgb(212, 212, 212),
            border: Color::Rgb(62, 62, 62),
            border_focused: Color::Rgb(25, 118, 210),
            highlight: Color::Rgb(25, 118, 210),
            selected_bg: Color::Rgb(38, 79, 120),
            selected_fg: Color::White,
            popup_bg: Color::Rgb(37, 37, 38),
            primary: Color::Rgb(66, 165, 245),
            secondary: Color::Rgb(206, 147, 216),
            success: Color::Rgb(102, 187, 106),
            info: Color::Rgb(41, 182, 246),
            warning: Color::Rgb(255, 167, 38),
            error: Color::Rgb(244, 67, 54),
            muted: Color::Rgb(128, 128, 128),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            fg: Color::Rgb(51, 51, 51),
            border: Color::Rgb(204, 204, 204),
            border_focused: Color::Rgb(25, 118, 210),
            highlight: Color::Rgb(25, 118, 210),
            selected_bg: Color::Rgb(204, 232, 255),
            selected_fg: Color::Black,
            popup_bg: Color::Rgb(250, 250, 250),
            primary: Color::Rgb(25, 118, 210),
            secondary: Color::Rgb(156, 39, 176),
            success: Color::Rgb(46, 125, 50),
            info: Color::Rgb(2, 136, 209),
            warning: Color::Rgb(237, 108, 2),
            error: Color::Rgb(211, 47, 47),
            muted: Color::Rgb(117, 117, 117),
        }
    }

    /// 指标卡片的强调色
    pub fn tag(&self, tag: ColorTag) -> Color {
        match tag {
            ColorTag::Primary => self.primary,
            ColorTag::Secondary => self.secondary,
            ColorTag::Success => self.success,
            ColorTag::Info => self.info,
            ColorTag::Warning => self.warning,
            ColorTag::Error => self.error,
        }
    }

    pub fn severity(&self, severity: Severity) -> Color {
        match severity {
            Severity::Success => self.success,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }

    pub fn service(&self, state: ServiceState) -> Color {
        match state {
            ServiceState::Online => self.success,
            ServiceState::Partial => self.warning,
            ServiceState::Offline => self.error,
        }
    }
}

/// 图标在终端里的字符（单列宽）
pub fn icon_glyph(icon: IconId) -> &'static str {
    match icon {
        IconId::Dashboard => "▦",
        IconId::School => "⌂",
        IconId::People => "☺",
        IconId::Assignment => "✎",
        IconId::CarRental => "▭",
        IconId::Description => "≡",
        IconId::Assessment => "▤",
        IconId::Settings => "✲",
        IconId::TrendingUp => "↗",
        IconId::Login => "→",
        IconId::Account => "◉",
    }
}

/// 时间线标记
pub fn severity_marker(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✔",
        Severity::Warning => "!",
        Severity::Info => "•",
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    /// 面板边框，聚焦时高亮
    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    /// 标题样式
    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    /// 选中项样式
    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// 顶栏 / 状态栏底色
    pub fn bar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(230, 230, 230))
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_cycles_and_serializes_lowercase() {
        assert_eq!(Theme::Dark.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
    }

    #[test]
    fn every_color_tag_has_a_distinct_color() {
        let c = ThemeColors::dark();
        let tags = [
            ColorTag::Primary,
            ColorTag::Secondary,
            ColorTag::Success,
            ColorTag::Info,
            ColorTag::Warning,
            ColorTag::Error,
        ];
        for (i, a) in tags.iter().enumerate() {
            for b in &tags[i + 1..] {
                assert_ne!(c.tag(*a), c.tag(*b), "{a:?} / {b:?}");
            }
        }
    }
}
