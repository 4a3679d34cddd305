//! 应用主状态结构

use std::mem;
use std::sync::Arc;

use rdgtt_portal_core::{DiagnosticJournal, Language, Popover, ProfileAction, Shell};

use super::{DashboardState, FocusPanel, Overlay, SettingsState};
use crate::backend::AppConfig;
use crate::view::theme::Theme;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 门户外壳：路由、导航历史、语言、顶栏弹出菜单
    pub shell: Shell,

    /// 导航未命中 / 缺失翻译的诊断记录
    pub journal: Arc<DiagnosticJournal>,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 左侧菜单光标（与当前路由的高亮分开）
    pub menu_cursor: usize,

    /// 弹出菜单光标
    pub popover_cursor: usize,

    pub overlay: Overlay,

    /// 状态栏消息
    pub status_message: Option<String>,

    // === 各页面状态 ===
    pub dashboard: DashboardState,
    pub settings: SettingsState,

    // === 由主循环执行的副作用 ===
    refresh_requested: bool,
    config_changed: bool,
}

impl App {
    pub fn new(shell: Shell, journal: Arc<DiagnosticJournal>, theme: Theme) -> Self {
        let mut app = Self {
            should_quit: false,
            shell,
            journal,
            focus: FocusPanel::default(),
            menu_cursor: 0,
            popover_cursor: 0,
            overlay: Overlay::None,
            status_message: None,
            dashboard: DashboardState::default(),
            settings: SettingsState::new(theme),
            refresh_requested: false,
            config_changed: false,
        };
        app.sync_menu_cursor();
        app
    }

    /// 设置状态消息
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 菜单项数量
    pub fn menu_len(&self) -> usize {
        self.shell.routes().menu_entries().count()
    }

    /// 让菜单光标跟随当前路由；当前路径不在菜单里时保持不动
    pub fn sync_menu_cursor(&mut self) {
        if let Some(index) = self.shell.menu().iter().position(|item| item.selected) {
            self.menu_cursor = index;
        }
    }

    /// 当前弹出菜单的条目数
    pub fn popover_len(&self) -> usize {
        match self.shell.popover() {
            Popover::Closed => 0,
            Popover::ProfileOpen => ProfileAction::all().len(),
            Popover::LanguageOpen => Language::all().len(),
        }
    }

    /// 是否有任何东西盖在页面上
    pub fn has_overlay(&self) -> bool {
        self.overlay.is_open() || self.shell.popover().is_open()
    }

    // ========== 副作用请求 ==========

    pub fn request_refresh(&mut self) {
        self.refresh_requested = true;
        self.dashboard.loading = true;
    }

    /// 取出刷新请求（只会返回一次 true）
    pub fn take_refresh_request(&mut self) -> bool {
        mem::take(&mut self.refresh_requested)
    }

    pub fn mark_config_changed(&mut self) {
        self.config_changed = true;
    }

    pub fn take_config_change(&mut self) -> bool {
        mem::take(&mut self.config_changed)
    }

    /// 把运行时修改过的设置写回配置
    pub fn apply_to_config(&self, config: &mut AppConfig) {
        config.language = self.shell.language();
        config.theme = self.settings.theme;
    }
}

/// 内置路由表和翻译构造的测试用实例
#[cfg(test)]
pub fn test_app() -> App {
    use rdgtt_portal_core::{Localizer, RouteTable};

    let journal = Arc::new(DiagnosticJournal::new());
    let localizer = Localizer::builtin(Language::Fr, journal.clone()).unwrap();
    let shell = Shell::new(
        RouteTable::portal_default().unwrap(),
        localizer,
        journal.clone(),
        "/dashboard",
    );
    App::new(shell, journal, Theme::Dark)
}
