//! Type definition module

mod dashboard;
mod route;

pub use dashboard::{
    ActivityCategory, ActivityEntry, ColorTag, CounterReading, CounterValue, DashboardFeed,
    ServiceHealth, ServiceState, Severity, StatCard,
};
pub use route::{IconId, RouteEntry, ViewId};
