//! Navigation tree node and sibling ordering.

use std::cmp::Ordering;

use comet_config::NavEntry;
use serde::Serialize;

/// Navigation item with children for UI tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Link target path (base path included, locale stripped).
    pub path: String,
    /// Sort key; absent sorts after every present value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    /// Child navigation items; empty for documents.
    pub children: Vec<NavItem>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_folder: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl NavItem {
    /// Create a document leaf.
    #[must_use]
    pub fn leaf(title: impl Into<String>, path: impl Into<String>, position: Option<i64>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            position,
            ..Self::default()
        }
    }

    /// Create a folder node.
    #[must_use]
    pub fn folder(
        title: impl Into<String>,
        path: impl Into<String>,
        position: Option<i64>,
        children: Vec<NavItem>,
    ) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            position,
            children,
            is_folder: true,
            collapsed: None,
        }
    }
}

impl From<&NavEntry> for NavItem {
    fn from(entry: &NavEntry) -> Self {
        let children: Vec<NavItem> = entry.children.iter().map(NavItem::from).collect();
        Self {
            title: entry.title.clone(),
            path: entry.path.clone().unwrap_or_default(),
            position: entry.position,
            is_folder: !children.is_empty(),
            children,
            collapsed: entry.collapsed,
        }
    }
}

/// Sibling order: positioned before unpositioned, positions ascending,
/// then case-insensitive title.
#[must_use]
pub fn compare_siblings(a: &NavItem, b: &NavItem) -> Ordering {
    match (a.position, b.position) {
        (Some(pa), Some(pb)) => pa.cmp(&pb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
    }
}

/// Stable sort by [`compare_siblings`]; ties keep their current order.
pub fn sort_siblings(items: &mut [NavItem]) {
    items.sort_by(compare_siblings);
}
