//! Message keys used by the shell itself
//!
//! Keys are grouped by the UI element they appear in:
//! `app.*` shell chrome, `nav.*` menu labels and page titles, `topbar.*`
//! popovers, `dashboard.*` the dashboard view, `time.*` relative ages,
//! `page.*` generic page bodies, `settings.*`, `prompt.*`, `hints.*` key
//! hints, `status.*` status bar messages, `help.*` the help overlay.

macro_rules! message_keys {
    ($($variant:ident => $key:literal,)+) => {
        /// Compile-checked translation key
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum MessageKey {
            $($variant,)+
        }

        impl MessageKey {
            /// Every key, in declaration order
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$variant,)+];

            /// Catalog key string
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(MessageKey::$variant => $key,)+
                }
            }
        }
    };
}

message_keys! {
    AppTitle => "app.title",
    AppVersion => "app.version",

    NavDashboard => "nav.dashboard",
    NavAutoEcoles => "nav.autoEcoles",
    NavNewAutoEcole => "nav.newAutoEcole",
    NavAutoEcoleDetails => "nav.autoEcoleDetails",
    NavCandidats => "nav.candidats",
    NavNewCandidat => "nav.newCandidat",
    NavCandidatDetails => "nav.candidatDetails",
    NavPermis => "nav.permis",
    NavCartesGrises => "nav.cartesGrises",
    NavDocuments => "nav.documents",
    NavReports => "nav.reports",
    NavSettings => "nav.settings",
    NavLogin => "nav.login",
    NavProfile => "nav.profile",
    NavNotFound => "nav.notFound",

    TopbarNotifications => "topbar.notifications",
    TopbarLanguage => "topbar.language",
    TopbarProfile => "topbar.profile",
    TopbarSettings => "topbar.settings",
    TopbarLogout => "topbar.logout",

    DashboardWelcome => "dashboard.welcome",
    DashboardTotalAutoEcoles => "dashboard.totalAutoEcoles",
    DashboardTotalCandidats => "dashboard.totalCandidats",
    DashboardPermisDelivres => "dashboard.permisDelivres",
    DashboardTauxReussite => "dashboard.tauxReussite",
    DashboardVsLastMonth => "dashboard.vsLastMonth",
    DashboardRecentActivities => "dashboard.recentActivities",
    DashboardNoActivity => "dashboard.noActivity",
    DashboardNoCounters => "dashboard.noCounters",
    DashboardQuickActions => "dashboard.quickActions",
    DashboardNewAutoEcole => "dashboard.newAutoEcole",
    DashboardNewCandidat => "dashboard.newCandidat",
    DashboardSystemStatus => "dashboard.systemStatus",
    DashboardOnline => "dashboard.online",
    DashboardPartial => "dashboard.partial",
    DashboardOffline => "dashboard.offline",

    TimeJustNow => "time.justNow",
    TimeMinutesAgo => "time.minutesAgo",
    TimeHoursAgo => "time.hoursAgo",
    TimeDaysAgo => "time.daysAgo",

    PagePlaceholder => "page.placeholder",
    PageRecord => "page.record",
    PageNotFound => "page.notFound",

    SettingsLanguage => "settings.language",
    SettingsTheme => "settings.theme",
    SettingsThemeDark => "settings.themeDark",
    SettingsThemeLight => "settings.themeLight",

    PromptGoTo => "prompt.goTo",

    HintsSwitchPanel => "hints.switchPanel",
    HintsMove => "hints.move",
    HintsOpen => "hints.open",
    HintsHistory => "hints.history",
    HintsGoTo => "hints.goTo",
    HintsProfile => "hints.profile",
    HintsLanguage => "hints.language",
    HintsRefresh => "hints.refresh",
    HintsHelp => "hints.help",
    HintsClose => "hints.close",
    HintsQuit => "hints.quit",

    StatusRefreshing => "status.refreshing",
    StatusFeedLoaded => "status.feedLoaded",
    StatusFeedFailed => "status.feedFailed",
    StatusLanguageChanged => "status.languageChanged",
    StatusLoggedOut => "status.loggedOut",
    StatusHistoryEnd => "status.historyEnd",

    HelpTitle => "help.title",
}
