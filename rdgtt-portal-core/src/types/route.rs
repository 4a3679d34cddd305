//! Route table entry types

use serde::{Deserialize, Serialize};

/// Identifier of a view that can occupy the shell's content slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewId {
    Dashboard,
    AutoEcoleList,
    AutoEcoleCreate,
    AutoEcoleDetails,
    CandidatList,
    CandidatCreate,
    CandidatDetails,
    Permis,
    CartesGrises,
    Documents,
    Reports,
    Settings,
    Login,
    Profile,
    /// Mounted whenever the active path matches no route
    NotFound,
}

impl ViewId {
    /// Whether the view shows a single record selected through a route parameter
    pub fn is_detail_view(self) -> bool {
        matches!(self, Self::AutoEcoleDetails | Self::CandidatDetails)
    }
}

/// Icon shown next to a menu entry or a dashboard card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconId {
    Dashboard,
    School,
    People,
    Assignment,
    CarRental,
    Description,
    Assessment,
    Settings,
    TrendingUp,
    Login,
    Account,
}

/// One row of the route table
///
/// Immutable once the table is built. `path` may contain `:name` segments
/// which capture the matching segment of the active path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    /// Absolute path, e.g. `/auto-ecoles` or `/candidats/:id`
    pub path: String,
    /// View mounted when this entry is resolved
    pub view_id: ViewId,
    /// Translation key of the menu label / page title
    pub label_key: String,
    /// Menu icon
    pub icon_id: IconId,
    /// Listed in the side menu (menu order follows table order)
    #[serde(default)]
    pub in_menu: bool,
}

impl RouteEntry {
    pub fn new(
        path: impl Into<String>,
        view_id: ViewId,
        label_key: impl Into<String>,
        icon_id: IconId,
    ) -> Self {
        Self {
            path: path.into(),
            view_id,
            label_key: label_key.into(),
            icon_id,
            in_menu: false,
        }
    }

    /// Mark the entry as a side-menu item
    #[must_use]
    pub fn in_menu(mut self) -> Self {
        self.in_menu = true;
        self
    }

    /// Whether the path contains at least one `:name` segment
    pub fn is_parameterised(&self) -> bool {
        self.path.split('/').any(|segment| segment.starts_with(':'))
    }
}
