//! R-DGTT Portal Core Library
//!
//! Presentation-agnostic model of the administration portal shell:
//! - Route table and path resolution
//! - Navigation state with back/forward history
//! - Shell frame (mounted view, side menu, top-bar popovers)
//! - Localization resolver over `fr` / `en` catalogs
//! - Dashboard aggregator (stat cards + activity timeline)
//!
//! Recoverable conditions are reported through a [`DiagnosticSink`];
//! only route table faults are returned as errors.

pub mod dashboard;
pub mod diagnostics;
pub mod error;
pub mod i18n;
pub mod navigation;
pub mod route_table;
pub mod shell;
pub mod types;

// Re-export common types
pub use dashboard::{relative_age, summarize, DashboardSummary, RelativeAge};
pub use diagnostics::{Diagnostic, DiagnosticJournal, DiagnosticSink};
pub use error::{CoreError, CoreResult};
pub use i18n::{Catalog, Language, Localizer, MessageKey};
pub use navigation::NavigationState;
pub use route_table::{normalize_path, RouteMatch, RouteTable};
pub use shell::{MenuItem, MountedView, Popover, ProfileAction, Shell};
