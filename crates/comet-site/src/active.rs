//! Active path state over a navigation tree.

use serde::Serialize;

use crate::nav::NavItem;
use crate::paths::same_path;

/// Breadcrumb item for navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Display title.
    pub title: String,
    /// Link target path.
    pub path: String,
}

impl NavItem {
    /// True if this node or one of its descendants has the current path.
    ///
    /// Used by the sidebar to expand the branch leading to the active page.
    #[must_use]
    pub fn is_active_branch(&self, current: &str) -> bool {
        same_path(&self.path, current) || self.children.iter().any(|c| c.is_active_branch(current))
    }
}

/// Chain of nodes from the top level down to the node with the current path.
///
/// Trailing slashes are ignored. Empty when no node matches.
#[must_use]
pub fn active_trail<'a>(items: &'a [NavItem], current: &str) -> Vec<&'a NavItem> {
    let mut trail = Vec::new();
    find(items, current, &mut trail);
    trail
}

fn find<'a>(items: &'a [NavItem], current: &str, trail: &mut Vec<&'a NavItem>) -> bool {
    for item in items {
        trail.push(item);
        if same_path(&item.path, current) || find(&item.children, current, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

/// Breadcrumbs for the current path.
#[must_use]
pub fn breadcrumbs(items: &[NavItem], current: &str) -> Vec<Breadcrumb> {
    active_trail(items, current)
        .into_iter()
        .map(|item| Breadcrumb {
            title: item.title.clone(),
            path: item.path.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tree() -> Vec<NavItem> {
        vec![
            NavItem::leaf("Intro", "/docs/intro", Some(1)),
            NavItem::folder(
                "Guides",
                "/docs/guides",
                Some(2),
                vec![
                    NavItem::leaf("Overview", "/docs/guides", None),
                    NavItem::folder(
                        "Advanced",
                        "/docs/guides/advanced",
                        None,
                        vec![NavItem::leaf("Tuning", "/docs/guides/advanced/tuning", None)],
                    ),
                ],
            ),
        ]
    }

    #[test]
    fn test_active_trail_nested() {
        let nav = tree();

        let trail: Vec<_> = active_trail(&nav, "/docs/guides/advanced/tuning/")
            .into_iter()
            .map(|i| i.title.as_str())
            .collect();

        assert_eq!(trail, vec!["Guides", "Advanced", "Tuning"]);
    }

    #[test]
    fn test_active_trail_folder_path() {
        let nav = tree();

        let trail = active_trail(&nav, "/docs/guides");

        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].title, "Guides");
    }

    #[test]
    fn test_active_trail_no_match() {
        assert!(active_trail(&tree(), "/docs/missing").is_empty());
    }

    #[test]
    fn test_is_active_branch() {
        let nav = tree();

        assert!(nav[1].is_active_branch("/docs/guides/advanced/tuning"));
        assert!(!nav[0].is_active_branch("/docs/guides/advanced/tuning"));
        assert!(nav[0].is_active_branch("/docs/intro/"));
    }

    #[test]
    fn test_breadcrumbs() {
        let crumbs = breadcrumbs(&tree(), "/docs/guides/advanced");

        assert_eq!(
            crumbs,
            vec![
                Breadcrumb {
                    title: "Guides".to_owned(),
                    path: "/docs/guides".to_owned(),
                },
                Breadcrumb {
                    title: "Advanced".to_owned(),
                    path: "/docs/guides/advanced".to_owned(),
                },
            ]
        );
    }
}
