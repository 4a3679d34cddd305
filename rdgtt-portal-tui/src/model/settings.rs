//! 设置页面状态

use crate::view::theme::Theme;

/// 设置项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Language,
    Theme,
}

impl SettingItem {
    pub const ALL: [SettingItem; 2] = [SettingItem::Language, SettingItem::Theme];
}

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    pub selected_index: usize,
    pub theme: Theme,
}

impl SettingsState {
    pub fn new(theme: Theme) -> Self {
        Self {
            selected_index: 0,
            theme,
        }
    }

    pub fn selected_item(&self) -> SettingItem {
        SettingItem::ALL[self.selected_index.min(SettingItem::ALL.len() - 1)]
    }
}
