//! Dashboard feed and presentation types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::IconId;

/// Theme color of a dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    #[default]
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Error,
}

/// Raw counter value as delivered by the feed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CounterValue {
    Count(u64),
    Percent(f64),
}

impl CounterValue {
    /// Deterministic display form: `2847 → "2,847"`, `87.4 → "87%"`
    pub fn display(self) -> String {
        match self {
            Self::Count(n) => group_thousands(n),
            Self::Percent(p) => format!("{}%", p.round()),
        }
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One domain counter of the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterReading {
    pub title_key: String,
    pub value: CounterValue,
    /// Change versus the previous period, in percent (may be negative)
    #[serde(default)]
    pub trend_percent: f64,
    pub icon: IconId,
    #[serde(default)]
    pub color: ColorTag,
}

/// Presentation card produced by the aggregator
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub title_key: String,
    pub value: String,
    pub trend_percent: f64,
    pub icon_id: IconId,
    pub color_tag: ColorTag,
}

impl StatCard {
    /// Trend label with explicit sign, e.g. `+12%` or `-3%`
    pub fn trend_label(&self) -> String {
        let rounded = self.trend_percent.round();
        if rounded > 0.0 {
            format!("+{rounded}%")
        } else if rounded == 0.0 {
            "0%".to_string()
        } else {
            format!("{rounded}%")
        }
    }
}

/// Domain an activity relates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityCategory {
    School,
    Candidate,
    Payment,
    Inspection,
}

/// Severity of an activity, drives the timeline marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Info,
}

/// Recent domain event shown in the dashboard timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub id: u64,
    pub category: ActivityCategory,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
    pub severity: Severity,
}

/// Availability of a backend service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    Online,
    Partial,
    Offline,
}

/// System status line of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceHealth {
    pub name: String,
    pub state: ServiceState,
    pub availability_percent: u8,
}

/// Everything the external data feed delivers in one refresh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFeed {
    #[serde(default)]
    pub counters: Vec<CounterReading>,
    #[serde(default)]
    pub activities: Vec<ActivityEntry>,
    #[serde(default)]
    pub services: Vec<ServiceHealth>,
}
