//! Shell frame state
//!
//! The [`Shell`] owns the two process-wide cells (navigation and language),
//! the validated route table and the top-bar popover state machine. Readers
//! get shared references; mutation goes through the navigation intake
//! methods and [`Shell::set_language`].

use std::collections::HashSet;
use std::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::i18n::{Language, Localizer, MessageKey};
use crate::navigation::NavigationState;
use crate::route_table::{normalize_path, RouteTable};
use crate::types::{RouteEntry, ViewId};

/// Top-bar popovers; at most one is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Popover {
    #[default]
    Closed,
    ProfileOpen,
    LanguageOpen,
}

impl Popover {
    /// closed | language_open → profile_open; already open stays open
    #[must_use]
    pub fn open_profile(self) -> Self {
        match self {
            Self::Closed | Self::LanguageOpen => Self::ProfileOpen,
            Self::ProfileOpen => self,
        }
    }

    /// closed | profile_open → language_open; already open stays open
    #[must_use]
    pub fn open_language(self) -> Self {
        match self {
            Self::Closed | Self::ProfileOpen => Self::LanguageOpen,
            Self::LanguageOpen => self,
        }
    }

    /// profile_open | language_open → closed
    #[must_use]
    pub fn close_any(self) -> Self {
        match self {
            Self::ProfileOpen | Self::LanguageOpen => Self::Closed,
            Self::Closed => self,
        }
    }

    pub fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Entries of the profile popover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileAction {
    Settings,
    Logout,
}

impl ProfileAction {
    pub fn all() -> &'static [ProfileAction] {
        &[ProfileAction::Settings, ProfileAction::Logout]
    }

    pub fn label_key(self) -> MessageKey {
        match self {
            Self::Settings => MessageKey::TopbarSettings,
            Self::Logout => MessageKey::TopbarLogout,
        }
    }

    /// Path the action navigates to
    pub fn target_path(self) -> &'static str {
        match self {
            Self::Settings => "/settings",
            Self::Logout => "/login",
        }
    }
}

/// View currently occupying the content slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedView {
    pub view_id: ViewId,
    /// Normalised active path
    pub path: String,
    /// Translation key of the page title
    pub label_key: String,
    /// Captured route parameters
    pub params: Vec<(String, String)>,
}

impl MountedView {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_not_found(&self) -> bool {
        self.view_id == ViewId::NotFound
    }
}

/// One line of the side menu as the renderer needs it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<'a> {
    pub entry: &'a RouteEntry,
    pub label: &'a str,
    pub selected: bool,
}

/// Persistent application frame
pub struct Shell {
    routes: RouteTable,
    navigation: NavigationState,
    localizer: Localizer,
    popover: Popover,
    mounted: MountedView,
    sink: Arc<dyn DiagnosticSink>,
}

impl Shell {
    /// Build the shell and mount the view for `initial_path`
    pub fn new(
        routes: RouteTable,
        localizer: Localizer,
        sink: Arc<dyn DiagnosticSink>,
        initial_path: &str,
    ) -> Self {
        let path = normalize_path(initial_path);
        let mounted = mount(&routes, &path, sink.as_ref());
        Self {
            routes,
            navigation: NavigationState::new(path),
            localizer,
            popover: Popover::Closed,
            mounted,
            sink,
        }
    }

    // ========== Navigation intake ==========

    /// Link click or direct path entry; the popover closes even when the
    /// path is already active
    pub fn navigate(&mut self, raw_path: &str) -> &MountedView {
        let path = normalize_path(raw_path);
        if self.navigation.visit(path) {
            self.remount();
        } else {
            self.popover = self.popover.close_any();
        }
        &self.mounted
    }

    /// History back; `None` at the start of history
    pub fn back(&mut self) -> Option<&MountedView> {
        self.navigation.back()?;
        self.remount();
        Some(&self.mounted)
    }

    /// History forward; `None` at the end of history
    pub fn forward(&mut self) -> Option<&MountedView> {
        self.navigation.forward()?;
        self.remount();
        Some(&self.mounted)
    }

    fn remount(&mut self) {
        self.popover = self.popover.close_any();
        self.mounted = mount(&self.routes, self.navigation.active_path(), self.sink.as_ref());
    }

    pub fn mounted(&self) -> &MountedView {
        &self.mounted
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Side-menu entries with translated labels and selection marks
    pub fn menu(&self) -> Vec<MenuItem<'_>> {
        self.routes
            .menu_entries()
            .map(|entry| MenuItem {
                entry,
                label: self.localizer.translate(&entry.label_key),
                selected: self.navigation.is_selected(entry),
            })
            .collect()
    }

    // ========== Localization ==========

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn language(&self) -> Language {
        self.localizer.language()
    }

    /// Language-change intake
    pub fn set_language(&mut self, language: Language) {
        self.localizer.set_language(language);
    }

    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.localizer.translate(key)
    }

    pub fn t(&self, key: MessageKey) -> &str {
        self.localizer.t(key)
    }

    /// Keys that do not resolve in every language: route labels and the
    /// shell's own message keys
    pub fn audit_translations(&self) -> Vec<(Language, String)> {
        let route_keys = self.routes.entries().iter().map(|e| e.label_key.as_str());
        let own_keys = MessageKey::ALL.iter().map(|k| k.as_str());
        self.audit_keys(route_keys.chain(own_keys))
    }

    /// Check keys that arrive after startup (e.g. dashboard card titles) in
    /// every language. Gaps go to the diagnostic sink, once per pair.
    pub fn audit_keys<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Vec<(Language, String)> {
        let mut seen = HashSet::new();
        let mut missing = self.localizer.audit(keys);
        missing.retain(|gap| seen.insert(gap.clone()));
        missing
    }

    // ========== Popovers ==========

    pub fn popover(&self) -> Popover {
        self.popover
    }

    pub fn open_profile(&mut self) {
        self.popover = self.popover.open_profile();
    }

    pub fn open_language(&mut self) {
        self.popover = self.popover.open_language();
    }

    pub fn close_popover(&mut self) {
        self.popover = self.popover.close_any();
    }
}

fn mount(routes: &RouteTable, path: &str, sink: &dyn DiagnosticSink) -> MountedView {
    if let Some(found) = routes.resolve(path) {
        log::debug!("Mounted {:?} for {path}", found.entry.view_id);
        return MountedView {
            view_id: found.entry.view_id,
            path: path.to_string(),
            label_key: found.entry.label_key.clone(),
            params: found.params,
        };
    }

    sink.report(Diagnostic::NavigationMiss {
        path: path.to_string(),
    });
    MountedView {
        view_id: ViewId::NotFound,
        path: path.to_string(),
        label_key: MessageKey::NavNotFound.as_str().to_string(),
        params: Vec::new(),
    }
}
