//! 看板数据源
//!
//! `FeedSource` 是异步 trait；`FeedService` 把拉取任务丢到 tokio 运行时，
//! 结果通过 mpsc channel 回到主循环，由 `app::run` 在两次事件之间取走。

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rdgtt_portal_core::types::{
    ActivityCategory, ActivityEntry, ColorTag, CounterReading, CounterValue, DashboardFeed,
    IconId, ServiceHealth, ServiceState, Severity,
};
use rdgtt_portal_core::{CoreError, CoreResult};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// 看板数据来源
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// 用于日志
    fn name(&self) -> String;

    async fn fetch(&self) -> CoreResult<DashboardFeed>;
}

/// 内置演示数据
pub struct DemoFeed;

#[async_trait]
impl FeedSource for DemoFeed {
    fn name(&self) -> String {
        "demo".to_string()
    }

    async fn fetch(&self) -> CoreResult<DashboardFeed> {
        Ok(demo_feed(Utc::now()))
    }
}

/// 从 JSON 文件读取
pub struct JsonFileFeed {
    path: PathBuf,
}

impl JsonFileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for JsonFileFeed {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> CoreResult<DashboardFeed> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CoreError::Feed(format!("{}: {e}", self.path.display())))?;
        serde_json::from_str(&raw)
            .map_err(|e| CoreError::Feed(format!("{}: {e}", self.path.display())))
    }
}

/// 演示数据：四个指标、四条动态、三项服务状态
pub fn demo_feed(now: DateTime<Utc>) -> DashboardFeed {
    let counter = |title_key: &str, value, trend_percent, icon, color| CounterReading {
        title_key: title_key.to_string(),
        value,
        trend_percent,
        icon,
        color,
    };
    let activity = |id, category, message: &str, hours_ago, severity| ActivityEntry {
        id,
        category,
        message: message.to_string(),
        occurred_at: now - Duration::hours(hours_ago),
        severity,
    };
    let service = |name: &str, state, availability_percent| ServiceHealth {
        name: name.to_string(),
        state,
        availability_percent,
    };

    DashboardFeed {
        counters: vec![
            counter(
                "dashboard.totalAutoEcoles",
                CounterValue::Count(156),
                12.0,
                IconId::School,
                ColorTag::Primary,
            ),
            counter(
                "dashboard.totalCandidats",
                CounterValue::Count(2847),
                8.0,
                IconId::People,
                ColorTag::Secondary,
            ),
            counter(
                "dashboard.permisDelivres",
                CounterValue::Count(1234),
                15.0,
                IconId::Assignment,
                ColorTag::Success,
            ),
            counter(
                "dashboard.tauxReussite",
                CounterValue::Percent(87.0),
                3.0,
                IconId::TrendingUp,
                ColorTag::Info,
            ),
        ],
        activities: vec![
            activity(
                1,
                ActivityCategory::School,
                "Nouvelle auto-école \"Excellence\" enregistrée",
                2,
                Severity::Success,
            ),
            activity(
                2,
                ActivityCategory::Candidate,
                "Candidat Amadou DIOUF a réussi son examen",
                4,
                Severity::Success,
            ),
            activity(
                3,
                ActivityCategory::Payment,
                "Paiement validé pour Auto-École Moderne",
                6,
                Severity::Info,
            ),
            activity(
                4,
                ActivityCategory::Inspection,
                "Inspection programmée pour Centre Formation",
                8,
                Severity::Warning,
            ),
        ],
        services: vec![
            service("API Gateway", ServiceState::Online, 100),
            service("Base de données", ServiceState::Online, 100),
            service("Services externes", ServiceState::Partial, 75),
        ],
    }
}

/// 在后台拉取数据，结果经 channel 交回主循环
pub struct FeedService {
    source: Arc<dyn FeedSource>,
    runtime: Handle,
    tx: UnboundedSender<CoreResult<DashboardFeed>>,
    rx: UnboundedReceiver<CoreResult<DashboardFeed>>,
}

impl FeedService {
    pub fn new(source: Arc<dyn FeedSource>, runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            runtime,
            tx,
            rx,
        }
    }

    /// 发起一次刷新，不阻塞
    pub fn request_refresh(&self) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        log::info!("Refreshing dashboard feed from {}", source.name());
        self.runtime.spawn(async move {
            let result = source.fetch().await;
            if tx.send(result).is_err() {
                log::debug!("Feed result dropped: main loop is gone");
            }
        });
    }

    /// 取走已完成的刷新结果
    pub fn try_recv(&mut self) -> Option<CoreResult<DashboardFeed>> {
        self.rx.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn demo_feed_matches_dashboard_shape() {
        let now = Utc::now();
        let feed = tokio_test::block_on(DemoFeed.fetch()).unwrap();
        assert_eq!(feed.counters.len(), 4);
        assert_eq!(feed.activities.len(), 4);
        assert_eq!(feed.services.len(), 3);
        assert!(feed.activities.iter().all(|a| a.occurred_at <= now + Duration::seconds(5)));
        assert_eq!(
            feed.activities
                .iter()
                .filter(|a| a.severity == Severity::Warning)
                .count(),
            1
        );
    }

    #[test]
    fn json_feed_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        let feed = demo_feed(Utc::now());
        fs::write(&path, serde_json::to_string(&feed).unwrap()).unwrap();

        let loaded = tokio_test::block_on(JsonFileFeed::new(&path).fetch()).unwrap();
        assert_eq!(loaded, feed);
    }

    #[test]
    fn json_feed_accepts_partial_documents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.json");
        fs::write(
            &path,
            r#"{ "activities": [ { "id": 7, "category": "payment", "message": "ok",
                 "occurredAt": "2024-03-01T10:00:00Z", "severity": "info" } ] }"#,
        )
        .unwrap();

        let loaded = tokio_test::block_on(JsonFileFeed::new(&path).fetch()).unwrap();
        assert!(loaded.counters.is_empty());
        assert_eq!(loaded.activities[0].id, 7);
    }

    #[test]
    fn missing_or_malformed_file_is_a_feed_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = tokio_test::block_on(JsonFileFeed::new(dir.path().join("none.json")).fetch());
        assert!(matches!(missing, Err(CoreError::Feed(_))));

        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "activities": [ { "severity": "critical" } ] }"#).unwrap();
        let bad = tokio_test::block_on(JsonFileFeed::new(&path).fetch());
        assert!(matches!(bad, Err(CoreError::Feed(_))));
    }

    #[test]
    fn service_delivers_results_through_channel() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut service = FeedService::new(Arc::new(DemoFeed), runtime.handle().clone());
        service.request_refresh();

        let mut received = None;
        for _ in 0..200 {
            if let Some(result) = service.try_recv() {
                received = Some(result);
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert_eq!(received.unwrap().unwrap().counters.len(), 4);
    }
}
