//! Sidebar navigation model.
//!
//! A sidebar is a list of [`NavigationNode`] trees keyed by the base path of
//! the locale that owns it. Nodes are either links or named groups; a node
//! that declares both `link` and `items`, or neither, is rejected while
//! parsing.
//!
//! # Example
//!
//! ```
//! use hb_site::{NavigationNode, SidebarTree};
//!
//! let mut sidebar = SidebarTree::default();
//! sidebar.insert(
//!     "/en/",
//!     vec![
//!         NavigationNode::link("Preface", "/en/00-Preface/README"),
//!         NavigationNode::group(
//!             "Part 1",
//!             vec![NavigationNode::link("Chapter 1", "/en/01/README")],
//!         ),
//!     ],
//! );
//!
//! assert_eq!(sidebar.leaf_count("/en/"), 2);
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Entry of the top navigation bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    /// Display text.
    pub text: String,
    /// Link target.
    pub link: String,
}

/// One entry of a sidebar tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub enum NavigationNode {
    /// Leaf entry pointing at a page.
    Link {
        /// Display text.
        text: String,
        /// Link target.
        link: String,
    },
    /// Named group of child entries.
    Group {
        /// Display text.
        text: String,
        /// Ordered children.
        items: Vec<NavigationNode>,
        /// Whether the group starts collapsed. `None` means not collapsible.
        collapsed: Option<bool>,
    },
}

impl NavigationNode {
    /// Create a leaf entry.
    #[must_use]
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self::Link {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Create a group entry.
    #[must_use]
    pub fn group(text: impl Into<String>, items: Vec<NavigationNode>) -> Self {
        Self::Group {
            text: text.into(),
            items,
            collapsed: None,
        }
    }

    /// Number of leaf entries in this subtree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Link { .. } => 1,
            Self::Group { items, .. } => items.iter().map(Self::leaf_count).sum(),
        }
    }
}

/// Sidebar trees keyed by locale base path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SidebarTree(BTreeMap<String, Vec<NavigationNode>>);

impl SidebarTree {
    /// Set the tree for a base path, replacing any previous one.
    pub fn insert(&mut self, prefix: impl Into<String>, nodes: Vec<NavigationNode>) {
        self.0.insert(prefix.into(), nodes);
    }

    /// Tree for a base path.
    #[must_use]
    pub fn get(&self, prefix: &str) -> Option<&[NavigationNode]> {
        self.0.get(prefix).map(Vec::as_slice)
    }

    /// Iterate over `(prefix, nodes)` pairs in prefix order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[NavigationNode])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Whether no sidebar is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of leaf entries under a base path (0 when absent).
    #[must_use]
    pub fn leaf_count(&self, prefix: &str) -> usize {
        self.get(prefix)
            .map_or(0, |nodes| nodes.iter().map(NavigationNode::leaf_count).sum())
    }
}

/// Node shape rejected while parsing.
#[derive(Debug, thiserror::Error)]
pub enum NodeShapeError {
    /// Node has both a link and children.
    #[error("sidebar entry '{0}' has both link and items")]
    Both(String),
    /// Node has neither a link nor children.
    #[error("sidebar entry '{0}' has neither link nor items")]
    Neither(String),
}

/// Wire shape of a node as written in configuration files.
#[derive(Clone, Serialize, Deserialize)]
struct RawNode {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    items: Option<Vec<NavigationNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
}

impl TryFrom<RawNode> for NavigationNode {
    type Error = NodeShapeError;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        match (raw.link, raw.items) {
            (Some(_), Some(_)) => Err(NodeShapeError::Both(raw.text)),
            (None, None) => Err(NodeShapeError::Neither(raw.text)),
            (Some(link), None) => Ok(Self::Link {
                text: raw.text,
                link,
            }),
            (None, Some(items)) => Ok(Self::Group {
                text: raw.text,
                items,
                collapsed: raw.collapsed,
            }),
        }
    }
}

impl From<NavigationNode> for RawNode {
    fn from(node: NavigationNode) -> Self {
        match node {
            NavigationNode::Link { text, link } => Self {
                text,
                link: Some(link),
                items: None,
                collapsed: None,
            },
            NavigationNode::Group {
                text,
                items,
                collapsed,
            } => Self {
                text,
                link: None,
                items: Some(items),
                collapsed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_leaf() {
        let node: NavigationNode =
            serde_json::from_str(r#"{"text":"序言","link":"/zh/00-序言/README"}"#).unwrap();
        assert_eq!(node, NavigationNode::link("序言", "/zh/00-序言/README"));
    }

    #[test]
    fn test_parse_nested_group() {
        let json = r#"{
            "text": "Part 1",
            "collapsed": false,
            "items": [
                {"text": "Chapter 1", "link": "/en/01/"},
                {"text": "Sub", "items": [{"text": "Deep", "link": "/en/01/deep"}]}
            ]
        }"#;
        let node: NavigationNode = serde_json::from_str(json).unwrap();

        assert_eq!(node.leaf_count(), 2);
        let NavigationNode::Group {
            text,
            items,
            collapsed,
        } = node
        else {
            panic!("expected group");
        };
        assert_eq!(text, "Part 1");
        assert_eq!(items.len(), 2);
        assert_eq!(collapsed, Some(false));
    }

    #[test]
    fn test_parse_empty_group_is_allowed() {
        let node: NavigationNode = serde_json::from_str(r#"{"text":"Empty","items":[]}"#).unwrap();
        assert!(matches!(node, NavigationNode::Group { ref items, .. } if items.is_empty()));
        assert_eq!(node.leaf_count(), 0);
    }

    #[test]
    fn test_reject_link_and_items() {
        let err = serde_json::from_str::<NavigationNode>(
            r#"{"text":"Bad","link":"/a","items":[{"text":"x","link":"/b"}]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("both link and items"));
    }

    #[test]
    fn test_reject_neither_link_nor_items() {
        let err = serde_json::from_str::<NavigationNode>(r#"{"text":"Bad"}"#).unwrap_err();
        assert!(err.to_string().contains("neither link nor items"));
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let node = NavigationNode::group("Part", vec![NavigationNode::link("Ch", "/ch")]);
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"text":"Part","items":[{"text":"Ch","link":"/ch"}]}"#
        );
    }

    #[test]
    fn test_sidebar_leaf_count_missing_prefix() {
        let sidebar = SidebarTree::default();
        assert!(sidebar.is_empty());
        assert_eq!(sidebar.leaf_count("/"), 0);
    }

    #[test]
    fn test_sidebar_iterates_in_prefix_order() {
        let mut sidebar = SidebarTree::default();
        sidebar.insert("/en/", vec![NavigationNode::link("A", "/en/a")]);
        sidebar.insert("/", vec![NavigationNode::link("B", "/b")]);

        let prefixes: Vec<_> = sidebar.iter().map(|(prefix, _)| prefix).collect();
        assert_eq!(prefixes, vec!["/", "/en/"]);
    }
}
