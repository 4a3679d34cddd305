//! 看板页面状态

use chrono::{DateTime, Utc};
use rdgtt_portal_core::types::{DashboardFeed, ServiceHealth};
use rdgtt_portal_core::{summarize, DashboardSummary, MessageKey};

/// 看板右侧的快捷操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    NewAutoEcole,
    NewCandidat,
}

impl QuickAction {
    pub const ALL: [QuickAction; 2] = [QuickAction::NewAutoEcole, QuickAction::NewCandidat];

    pub fn label_key(self) -> MessageKey {
        match self {
            Self::NewAutoEcole => MessageKey::DashboardNewAutoEcole,
            Self::NewCandidat => MessageKey::DashboardNewCandidat,
        }
    }

    pub fn target_path(self) -> &'static str {
        match self {
            Self::NewAutoEcole => "/auto-ecoles/nouveau",
            Self::NewCandidat => "/candidats/nouveau",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub summary: DashboardSummary,
    pub services: Vec<ServiceHealth>,
    /// 刷新进行中
    pub loading: bool,
    pub last_updated: Option<DateTime<Utc>>,
    /// 快捷操作光标
    pub selected_action: usize,
}

impl DashboardState {
    /// 用新数据重建展示模型
    pub fn apply_feed(&mut self, feed: &DashboardFeed, now: DateTime<Utc>) {
        self.summary = summarize(&feed.counters, &feed.activities);
        self.services.clone_from(&feed.services);
        self.loading = false;
        self.last_updated = Some(now);
    }

    /// 数据源不可用：回到空状态
    pub fn clear(&mut self) {
        self.summary = DashboardSummary::default();
        self.services.clear();
        self.loading = false;
    }

    pub fn selected_quick_action(&self) -> QuickAction {
        QuickAction::ALL[self.selected_action.min(QuickAction::ALL.len() - 1)]
    }
}
