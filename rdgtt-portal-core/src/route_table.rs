//! Route table
//!
//! Ordered list of [`RouteEntry`] validated once at startup. A table that
//! fails validation is a configuration fault and must abort initialization.

use std::collections::HashMap;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::types::{IconId, RouteEntry, ViewId};

/// Path of the landing route
pub const ROOT_PATH: &str = "/";
/// Path of the dashboard route
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Result of resolving a path against the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub entry: &'a RouteEntry,
    /// Captured `:name` segments, in path order
    pub params: Vec<(String, String)>,
}

impl RouteMatch<'_> {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Validated, immutable route table
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validate and build a table.
    ///
    /// Fails on invalid paths, duplicate paths, parameterised paths that
    /// collide, or a missing `/` or `/dashboard` entry.
    pub fn new(entries: Vec<RouteEntry>) -> CoreResult<Self> {
        let mut shapes: HashMap<String, &str> = HashMap::with_capacity(entries.len());

        for entry in &entries {
            validate_path(&entry.path)?;

            if let Some(previous) = shapes.insert(route_shape(&entry.path), &entry.path) {
                return Err(if previous == entry.path {
                    CoreError::DuplicateRoute(entry.path.clone())
                } else {
                    CoreError::CollidingRoute {
                        first: previous.to_string(),
                        second: entry.path.clone(),
                    }
                });
            }
        }

        for required in [ROOT_PATH, DASHBOARD_PATH] {
            if !entries.iter().any(|e| e.path == required) {
                return Err(CoreError::MissingRoute(required.to_string()));
            }
        }

        log::debug!("Route table built with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Route table of the R-DGTT portal
    pub fn portal_default() -> CoreResult<Self> {
        Self::new(default_entries())
    }

    /// Parse a JSON array of route entries
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let entries: Vec<RouteEntry> =
            serde_json::from_str(json).map_err(|e| CoreError::RouteTable(e.to_string()))?;
        Self::new(entries)
    }

    /// Load a JSON route table from disk
    pub fn load(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoreError::RouteTable(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Entries listed in the side menu, in table order
    pub fn menu_entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter().filter(|e| e.in_menu)
    }

    /// Entry whose path is exactly `path`
    pub fn find_exact(&self, path: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// Resolve a normalised path.
    ///
    /// Exact matches win; otherwise parameterised entries are tried in
    /// table order.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch<'_>> {
        if let Some(entry) = self.find_exact(path) {
            return Some(RouteMatch {
                entry,
                params: Vec::new(),
            });
        }

        self.entries
            .iter()
            .filter(|e| e.is_parameterised())
            .find_map(|entry| {
                match_pattern(&entry.path, path).map(|params| RouteMatch { entry, params })
            })
    }
}

/// Canonical form of a path coming from a navigation event.
///
/// Drops query string and fragment, trailing `/` and repeated `/`;
/// an empty path becomes `/`.
pub fn normalize_path(raw: &str) -> String {
    let without_query = raw.split(['?', '#']).next().unwrap_or_default().trim();
    let segments: Vec<&str> = without_query.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        ROOT_PATH.to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

fn validate_path(path: &str) -> CoreResult<()> {
    if path == ROOT_PATH {
        return Ok(());
    }
    let invalid = || CoreError::InvalidRoutePath(path.to_string());
    let rest = path.strip_prefix('/').ok_or_else(invalid)?;
    for segment in rest.split('/') {
        if segment.is_empty() || segment == ":" || segment.contains(['?', '#']) {
            return Err(invalid());
        }
    }
    Ok(())
}

/// Path with every `:name` segment replaced by `:`; equal shapes match the same paths
fn route_shape(path: &str) -> String {
    path.split('/')
        .map(|segment| if segment.starts_with(':') { ":" } else { segment })
        .collect::<Vec<_>>()
        .join("/")
}

fn match_pattern(pattern: &str, path: &str) -> Option<Vec<(String, String)>> {
    let pattern_segments: Vec<&str> = pattern.split('/').collect();
    let path_segments: Vec<&str> = path.split('/').collect();
    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern_segments.iter().zip(&path_segments) {
        if let Some(name) = expected.strip_prefix(':') {
            if actual.is_empty() {
                return None;
            }
            params.push((name.to_string(), (*actual).to_string()));
        } else if expected != actual {
            return None;
        }
    }
    Some(params)
}

fn default_entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new(ROOT_PATH, ViewId::Dashboard, "nav.dashboard", IconId::Dashboard),
        RouteEntry::new(DASHBOARD_PATH, ViewId::Dashboard, "nav.dashboard", IconId::Dashboard)
            .in_menu(),
        RouteEntry::new("/auto-ecoles", ViewId::AutoEcoleList, "nav.autoEcoles", IconId::School)
            .in_menu(),
        RouteEntry::new(
            "/auto-ecoles/nouveau",
            ViewId::AutoEcoleCreate,
            "nav.newAutoEcole",
            IconId::School,
        ),
        RouteEntry::new(
            "/auto-ecoles/:id",
            ViewId::AutoEcoleDetails,
            "nav.autoEcoleDetails",
            IconId::School,
        ),
        RouteEntry::new("/candidats", ViewId::CandidatList, "nav.candidats", IconId::People)
            .in_menu(),
        RouteEntry::new(
            "/candidats/nouveau",
            ViewId::CandidatCreate,
            "nav.newCandidat",
            IconId::People,
        ),
        RouteEntry::new(
            "/candidats/:id",
            ViewId::CandidatDetails,
            "nav.candidatDetails",
            IconId::People,
        ),
        RouteEntry::new("/permis", ViewId::Permis, "nav.permis", IconId::Assignment).in_menu(),
        RouteEntry::new(
            "/cartes-grises",
            ViewId::CartesGrises,
            "nav.cartesGrises",
            IconId::CarRental,
        )
        .in_menu(),
        RouteEntry::new("/documents", ViewId::Documents, "nav.documents", IconId::Description)
            .in_menu(),
        RouteEntry::new("/reports", ViewId::Reports, "nav.reports", IconId::Assessment).in_menu(),
        RouteEntry::new("/settings", ViewId::Settings, "nav.settings", IconId::Settings).in_menu(),
        RouteEntry::new("/login", ViewId::Login, "nav.login", IconId::Login),
        RouteEntry::new("/profile", ViewId::Profile, "nav.profile", IconId::Account),
    ]
}
