//! R-DGTT 门户终端界面
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置与看板数据 (`backend/`)
//!
//! 路由、导航历史、语言和弹出菜单状态机都在 `rdgtt-portal-core` 的 `Shell` 中。
//!
//! 启动顺序：
//!     解析参数 → 读取配置 → 初始化日志 → 构建路由表与翻译 → 构建 Shell
//!     → 启动 tokio 运行时并发起首次刷新 → init_terminal → app::run → restore_terminal

mod app;
mod backend;
mod cli;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rdgtt_portal_core::route_table::DASHBOARD_PATH;
use rdgtt_portal_core::{
    Catalog, DiagnosticJournal, DiagnosticSink, Language, Localizer, RouteTable, Shell,
};

use backend::{
    AppConfig, ConfigService, DemoFeed, FeedService, FeedSource, JsonFileFeed, LocalConfigService,
};
use cli::Cli;
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 配置：读不出来时用默认值，日志就绪后再报告
    let config_service = cli
        .config
        .clone()
        .map(LocalConfigService::new)
        .or_else(LocalConfigService::default_location)
        .unwrap_or_else(|| LocalConfigService::new("rdgtt-portal.json"));
    let (mut stored, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    // 命令行参数只作用于本次运行；保存时用 `stored`
    let mut config = stored.clone();
    cli.apply(&mut config);

    // 2. 日志
    init_logging(&config.resolved_log_file())?;
    log::info!("Starting R-DGTT portal v{}", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_error {
        log::warn!(
            "Config {} unreadable, using defaults: {e:#}",
            config_service.path().display()
        );
    }

    // 3. 外壳：路由表错误属于配置错误，直接终止
    let journal = Arc::new(DiagnosticJournal::new());
    let routes = match &config.route_table {
        Some(path) => RouteTable::load(path)
            .with_context(|| format!("loading route table {}", path.display()))?,
        None => RouteTable::portal_default().context("building default route table")?,
    };
    let localizer = build_localizer(&config, journal.clone())?;
    let initial_path = cli.path.as_deref().unwrap_or(DASHBOARD_PATH);
    let shell = Shell::new(routes, localizer, journal.clone(), initial_path);

    // 缺口逐条进入诊断记录（并写入日志）
    let gaps = shell.audit_translations();
    if !gaps.is_empty() {
        log::warn!("{} translation gap(s) found at startup", gaps.len());
    }

    view::theme::set_theme(config.theme);
    let mut app = model::App::new(shell, journal, config.theme);

    // 4. 看板数据源
    let runtime = tokio::runtime::Runtime::new().context("starting async runtime")?;
    let source: Arc<dyn FeedSource> = match &config.feed_file {
        Some(path) => Arc::new(JsonFileFeed::new(path)),
        None => Arc::new(DemoFeed),
    };
    let mut feed = FeedService::new(source, runtime.handle().clone());
    app.request_refresh();

    // 5. 终端
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &mut feed, &config_service, &mut stored);
    restore_terminal(&mut terminal)?;

    log::info!("Portal closed");
    result
}

/// 内置翻译；配置了目录时逐个语言覆盖，读取失败的语言退回内置版本
fn build_localizer(config: &AppConfig, sink: Arc<dyn DiagnosticSink>) -> Result<Localizer> {
    let Some(dir) = &config.catalog_dir else {
        return Localizer::builtin(config.language, sink).context("loading built-in catalogs");
    };

    let load = |language: Language| -> Result<Catalog> {
        match Catalog::load(dir, language) {
            Ok(catalog) => {
                log::info!("Loaded {} catalog from {}", language, dir.display());
                Ok(catalog)
            }
            Err(e) => {
                log::warn!("{e}; falling back to built-in {language} catalog");
                Catalog::builtin(language).context("loading built-in catalog")
            }
        }
    };

    Ok(Localizer::new(
        load(Language::Fr)?,
        load(Language::En)?,
        config.language,
        sink,
    ))
}
