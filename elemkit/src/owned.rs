//! Owned types that use standard heap allocation.
//!
//! Bump-allocated trees borrow their arena, so they can neither outlive it nor be
//! sent to another thread. These types can: they are `Send + Sync`, deserializable
//! with the `serde` feature, and convert to and from the bump-allocated types with
//! `into_bump` and `From<&Node>`.

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{Attribute, Attributes, Node};

/// An owned attribute using standard heap allocation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedAttribute {
    /// The key of the attribute.
    pub key: String,
    /// The value of the attribute.
    pub value: String,
}
impl OwnedAttribute {
    /// Create a new owned attribute with a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        OwnedAttribute {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a boolean attribute, stored as `"true"` or `"false"`.
    pub fn boolean(key: impl Into<String>, value: bool) -> Self {
        OwnedAttribute::new(key, if value { "true" } else { "false" })
    }

    /// Convert this owned attribute into a bump-allocated attribute.
    pub fn into_bump<'bump>(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, &self.key, &self.value)
    }
}
impl From<&str> for OwnedAttribute {
    fn from(s: &str) -> Self {
        OwnedAttribute::boolean(s, true)
    }
}
impl From<(&str, &str)> for OwnedAttribute {
    fn from((key, value): (&str, &str)) -> Self {
        OwnedAttribute::new(key, value)
    }
}
impl From<(String, String)> for OwnedAttribute {
    fn from((key, value): (String, String)) -> Self {
        OwnedAttribute::new(key, value)
    }
}
impl From<(&str, bool)> for OwnedAttribute {
    fn from((key, value): (&str, bool)) -> Self {
        OwnedAttribute::boolean(key, value)
    }
}
impl From<&Attribute<'_>> for OwnedAttribute {
    fn from(attribute: &Attribute<'_>) -> Self {
        OwnedAttribute::new(attribute.key.as_str(), attribute.value.as_str())
    }
}

/// An owned node using standard heap allocation. Mirrors [Node].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum OwnedNode {
    #[default]
    /// A node that renders nothing.
    None,
    /// A tag element.
    Element {
        /// The name of the tag.
        tag: String,
        /// The attributes of the tag.
        #[cfg_attr(feature = "serde", serde(default))]
        attributes: Vec<OwnedAttribute>,
        /// The children of the tag.
        #[cfg_attr(feature = "serde", serde(default))]
        children: Vec<OwnedNode>,
    },
    /// A group of nodes spliced into the parent.
    Fragment {
        /// The children of the fragment.
        children: Vec<OwnedNode>,
    },
    /// Text, escaped when rendered.
    Text {
        /// The text of the node.
        text: String,
    },
    /// Raw HTML, written verbatim.
    Raw {
        /// The raw HTML of the node.
        html: String,
    },
    /// A comment.
    Comment {
        /// The text of the comment.
        text: String,
    },
    /// A CDATA section.
    Cdata {
        /// The text of the section.
        text: String,
    },
}
impl OwnedNode {
    /// Convert this owned node into a bump-allocated node.
    ///
    /// Attributes go through [Attributes], so a repeated key keeps its last value.
    pub fn into_bump<'bump>(self, bump: &'bump Bump) -> Node<'bump> {
        match self {
            OwnedNode::None => Node::None,
            OwnedNode::Element {
                tag,
                attributes,
                children,
            } => Node::Element {
                tag: BumpString::from_str_in(&tag, bump),
                attributes: Attributes::from_iter_in(
                    attributes.into_iter().map(|a| a.into_bump(bump)),
                    bump,
                ),
                children: BumpVec::from_iter_in(
                    children.into_iter().map(|c| c.into_bump(bump)),
                    bump,
                ),
            },
            OwnedNode::Fragment { children } => Node::Fragment {
                children: BumpVec::from_iter_in(
                    children.into_iter().map(|c| c.into_bump(bump)),
                    bump,
                ),
            },
            OwnedNode::Text { text } => Node::text(bump, &text),
            OwnedNode::Raw { html } => Node::raw(bump, &html),
            OwnedNode::Comment { text } => Node::comment(bump, &text),
            OwnedNode::Cdata { text } => Node::cdata(bump, &text),
        }
    }
}
impl From<&Node<'_>> for OwnedNode {
    fn from(node: &Node<'_>) -> Self {
        match node {
            Node::None => OwnedNode::None,
            Node::Element {
                tag,
                attributes,
                children,
            } => OwnedNode::Element {
                tag: tag.to_string(),
                attributes: attributes.iter().map(OwnedAttribute::from).collect(),
                children: children.iter().map(OwnedNode::from).collect(),
            },
            Node::Fragment { children } => OwnedNode::Fragment {
                children: children.iter().map(OwnedNode::from).collect(),
            },
            Node::Text { text } => OwnedNode::Text {
                text: text.to_string(),
            },
            Node::Raw { html } => OwnedNode::Raw {
                html: html.to_string(),
            },
            Node::Comment { text } => OwnedNode::Comment {
                text: text.to_string(),
            },
            Node::Cdata { text } => OwnedNode::Cdata {
                text: text.to_string(),
            },
        }
    }
}
impl From<String> for OwnedNode {
    fn from(s: String) -> Self {
        OwnedNode::Text { text: s }
    }
}
impl From<&str> for OwnedNode {
    fn from(s: &str) -> Self {
        OwnedNode::Text {
            text: s.to_string(),
        }
    }
}
impl From<Vec<OwnedNode>> for OwnedNode {
    fn from(mut children: Vec<OwnedNode>) -> Self {
        match children.len() {
            0 => OwnedNode::None,
            1 => children.pop().unwrap_or_default(),
            _ => OwnedNode::Fragment { children },
        }
    }
}
impl FromIterator<OwnedNode> for OwnedNode {
    fn from_iter<I: IntoIterator<Item = OwnedNode>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;

    #[test]
    fn round_trips_through_the_arena() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let node = b.div([b.attr(("class", "card")), b.attr(("hidden", false))])([
            b.comment("note"),
            b.text("a < b"),
            b.cdata("x"),
        ]);
        let owned = OwnedNode::from(&node);
        assert_eq!(owned.clone().into_bump(&bump), node);

        let other = Bump::new();
        assert_eq!(owned.into_bump(&other).render(), node.render());
    }

    #[test]
    fn owned_nodes_cross_threads() {
        let owned = OwnedNode::Element {
            tag: "p".into(),
            attributes: vec![("id", "x").into()],
            children: vec!["hi".into()],
        };
        let html = std::thread::spawn(move || {
            let bump = Bump::new();
            let html = owned.into_bump(&bump).render();
            html
        })
        .join()
        .unwrap();
        assert_eq!(html, r#"<p id="x">hi</p>"#);
    }

    #[test]
    fn collecting_collapses_like_the_arena_form() {
        assert_eq!(OwnedNode::from_iter([]), OwnedNode::None);
        assert_eq!(
            OwnedNode::from_iter(["only".into()]),
            OwnedNode::from("only")
        );
        assert!(matches!(
            OwnedNode::from_iter(["a".into(), "b".into()]),
            OwnedNode::Fragment { .. }
        ));
    }
}
