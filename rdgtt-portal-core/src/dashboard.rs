//! Dashboard aggregator
//!
//! Pure transform from the external feed to the dashboard presentation
//! model. No clock is read here; ages are computed by [`relative_age`] with
//! an explicit `now`.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::i18n::MessageKey;
use crate::types::{ActivityEntry, CounterReading, Severity, StatCard};

/// Presentation model of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    /// Same order as the counter feed
    pub cards: Vec<StatCard>,
    /// Newest first, ties broken by descending id
    pub timeline: Vec<ActivityEntry>,
}

impl DashboardSummary {
    /// Number of timeline entries needing attention (top bar badge)
    pub fn pending_alerts(&self) -> usize {
        self.timeline
            .iter()
            .filter(|entry| entry.severity == Severity::Warning)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.timeline.is_empty()
    }
}

/// Build the dashboard presentation model.
///
/// Identical inputs always give identical output. Empty inputs give empty
/// sequences.
pub fn summarize(counters: &[CounterReading], activities: &[ActivityEntry]) -> DashboardSummary {
    let cards = counters
        .iter()
        .map(|reading| StatCard {
            title_key: reading.title_key.clone(),
            value: reading.value.display(),
            trend_percent: reading.trend_percent,
            icon_id: reading.icon,
            color_tag: reading.color,
        })
        .collect();

    let mut timeline = activities.to_vec();
    timeline.sort_by_key(|entry| Reverse((entry.occurred_at, entry.id)));

    DashboardSummary { cards, timeline }
}

/// Age of an activity, bucketed for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeAge {
    /// Less than a minute, or in the future
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
}

impl RelativeAge {
    /// Message key and `{n}` value used to render the age
    pub fn message(self) -> (MessageKey, Option<i64>) {
        match self {
            Self::JustNow => (MessageKey::TimeJustNow, None),
            Self::Minutes(n) => (MessageKey::TimeMinutesAgo, Some(n)),
            Self::Hours(n) => (MessageKey::TimeHoursAgo, Some(n)),
            Self::Days(n) => (MessageKey::TimeDaysAgo, Some(n)),
        }
    }
}

pub fn relative_age(occurred_at: DateTime<Utc>, now: DateTime<Utc>) -> RelativeAge {
    let elapsed = now.signed_duration_since(occurred_at);
    if elapsed.num_minutes() < 1 {
        RelativeAge::JustNow
    } else if elapsed.num_hours() < 1 {
        RelativeAge::Minutes(elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        RelativeAge::Hours(elapsed.num_hours())
    } else {
        RelativeAge::Days(elapsed.num_days())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::types::{ActivityCategory, ColorTag, CounterValue, IconId};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    fn activity(id: u64, secs: i64, severity: Severity) -> ActivityEntry {
        ActivityEntry {
            id,
            category: ActivityCategory::School,
            message: format!("activity {id}"),
            occurred_at: at(secs),
            severity,
        }
    }

    fn counter(key: &str, value: CounterValue) -> CounterReading {
        CounterReading {
            title_key: key.to_string(),
            value,
            trend_percent: 5.0,
            icon: IconId::School,
            color: ColorTag::Primary,
        }
    }

    #[test]
    fn cards_keep_feed_order_and_format_values() {
        let counters = vec![
            counter("b", CounterValue::Count(2847)),
            counter("a", CounterValue::Percent(87.0)),
        ];
        let summary = summarize(&counters, &[]);
        let titles: Vec<_> = summary.cards.iter().map(|c| c.title_key.as_str()).collect();
        assert_eq!(titles, ["b", "a"]);
        assert_eq!(summary.cards[0].value, "2,847");
        assert_eq!(summary.cards[1].value, "87%");
    }

    #[test]
    fn timeline_is_newest_first() {
        let activities = vec![
            activity(1, 10, Severity::Info),
            activity(2, 30, Severity::Info),
            activity(3, 20, Severity::Info),
        ];
        let ids: Vec<_> = summarize(&[], &activities)
            .timeline
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, [2, 3, 1]);
    }

    #[test]
    fn equal_timestamps_break_ties_by_descending_id() {
        let activities = vec![
            activity(5, 10, Severity::Info),
            activity(9, 10, Severity::Info),
            activity(7, 10, Severity::Info),
        ];
        let ids: Vec<_> = summarize(&[], &activities)
            .timeline
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(ids, [9, 7, 5]);
    }

    #[test]
    fn empty_feed_gives_empty_summary() {
        let summary = summarize(&[], &[]);
        assert!(summary.cards.is_empty());
        assert!(summary.timeline.is_empty());
        assert!(summary.is_empty());
        assert_eq!(summary.pending_alerts(), 0);
    }

    #[test]
    fn pending_alerts_counts_warnings() {
        let activities = vec![
            activity(1, 10, Severity::Warning),
            activity(2, 20, Severity::Success),
            activity(3, 30, Severity::Warning),
        ];
        assert_eq!(summarize(&[], &activities).pending_alerts(), 2);
    }

    #[test]
    fn relative_age_buckets() {
        let now = at(100_000);
        assert_eq!(relative_age(now, now), RelativeAge::JustNow);
        assert_eq!(relative_age(now + Duration::hours(1), now), RelativeAge::JustNow);
        assert_eq!(relative_age(now - Duration::seconds(59), now), RelativeAge::JustNow);
        assert_eq!(relative_age(now - Duration::minutes(5), now), RelativeAge::Minutes(5));
        assert_eq!(relative_age(now - Duration::hours(2), now), RelativeAge::Hours(2));
        assert_eq!(relative_age(now - Duration::days(3), now), RelativeAge::Days(3));
    }

    #[test]
    fn relative_age_maps_to_message_keys() {
        assert_eq!(RelativeAge::JustNow.message(), (MessageKey::TimeJustNow, None));
        assert_eq!(
            RelativeAge::Hours(2).message(),
            (MessageKey::TimeHoursAgo, Some(2))
        );
    }
}
