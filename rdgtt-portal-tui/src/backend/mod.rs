//! Backend 层：与外部世界打交道的服务
//!
//! - `config_service`: 配置文件读写
//! - `feed_service`: 看板数据源，在 tokio 运行时上拉取，结果经 channel 回到主循环

mod config_service;
mod feed_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use feed_service::{DemoFeed, FeedService, FeedSource, JsonFileFeed};
