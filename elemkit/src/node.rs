use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::{Attribute, Attributes};

/// A node in an HTML tree.
///
/// Trees are built once and are read-only afterwards; rendering them (see
/// [Node::render]) can happen any number of times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Node<'bump> {
    /// A node that renders nothing.
    #[default]
    None,
    /// A tag element.
    Element {
        /// The name of the tag.
        tag: BumpString<'bump>,
        /// The attributes of the tag.
        attributes: Attributes<'bump>,
        /// The children of the tag.
        children: BumpVec<'bump, Node<'bump>>,
    },
    /// A group of nodes that are spliced into the parent without a wrapping tag.
    Fragment {
        /// The children of the fragment.
        children: BumpVec<'bump, Node<'bump>>,
    },
    /// Text, escaped when rendered.
    Text {
        /// The text of the node.
        text: BumpString<'bump>,
    },
    /// Raw HTML, written verbatim.
    ///
    /// Nothing is escaped: never put untrusted content in a raw node.
    Raw {
        /// The raw HTML of the node.
        html: BumpString<'bump>,
    },
    /// A comment (`<!-- ... -->`).
    Comment {
        /// The text of the comment.
        text: BumpString<'bump>,
    },
    /// A CDATA section (`<![CDATA[...]]>`).
    Cdata {
        /// The text of the section.
        text: BumpString<'bump>,
    },
}

/// Trait for types that can be converted into a Node with a bump allocator.
pub trait IntoNode<'bump> {
    /// Convert this value into a Node using the given bump allocator.
    fn into_node(self, bump: &'bump Bump) -> Node<'bump>;
}
impl<'bump> IntoNode<'bump> for Node<'bump> {
    fn into_node(self, _bump: &'bump Bump) -> Node<'bump> {
        self
    }
}
impl<'bump> IntoNode<'bump> for &str {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        Node::text(bump, self)
    }
}
impl<'bump> IntoNode<'bump> for String {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        Node::text(bump, &self)
    }
}
impl<'bump> IntoNode<'bump> for &String {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        Node::text(bump, self)
    }
}
impl<'bump, T: IntoNode<'bump>> IntoNode<'bump> for Option<T> {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        match self {
            Some(n) => n.into_node(bump),
            None => Node::None,
        }
    }
}
impl<'bump, const N: usize> IntoNode<'bump> for [Node<'bump>; N] {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        Node::from_iter(bump, self)
    }
}
impl<'bump> IntoNode<'bump> for Vec<Node<'bump>> {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        Node::from_iter(bump, self)
    }
}
impl<'bump> IntoNode<'bump> for BumpVec<'bump, Node<'bump>> {
    fn into_node(self, bump: &'bump Bump) -> Node<'bump> {
        Node::from_iter(bump, self)
    }
}

impl<'bump> Node<'bump> {
    /// Create a node from an iterator of nodes.
    ///
    /// No nodes gives [Node::None], a single node is returned as-is, and anything
    /// more is wrapped in a [Node::Fragment].
    pub fn from_iter(bump: &'bump Bump, iter: impl IntoIterator<Item = Node<'bump>>) -> Node<'bump> {
        let mut children: BumpVec<'bump, Node<'bump>> = BumpVec::from_iter_in(iter, bump);
        match children.len() {
            0 => Node::None,
            1 => children.pop().unwrap_or_default(),
            _ => Node::Fragment { children },
        }
    }

    /// Create an element node.
    pub fn element(
        bump: &'bump Bump,
        tag: &str,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
        children: impl IntoIterator<Item = Node<'bump>>,
    ) -> Node<'bump> {
        Node::Element {
            tag: BumpString::from_str_in(tag, bump),
            attributes: Attributes::from_iter_in(attributes, bump),
            children: BumpVec::from_iter_in(children, bump),
        }
    }

    /// Create a fragment node. Unlike [Node::from_iter], this always produces a
    /// [Node::Fragment].
    pub fn fragment(bump: &'bump Bump, children: impl IntoIterator<Item = Node<'bump>>) -> Node<'bump> {
        Node::Fragment {
            children: BumpVec::from_iter_in(children, bump),
        }
    }

    /// Create a text node.
    pub fn text(bump: &'bump Bump, text: &str) -> Node<'bump> {
        Node::Text {
            text: BumpString::from_str_in(text, bump),
        }
    }

    /// Create a raw HTML node.
    pub fn raw(bump: &'bump Bump, html: &str) -> Node<'bump> {
        Node::Raw {
            html: BumpString::from_str_in(html, bump),
        }
    }

    /// Create a comment node.
    pub fn comment(bump: &'bump Bump, text: &str) -> Node<'bump> {
        Node::Comment {
            text: BumpString::from_str_in(text, bump),
        }
    }

    /// Create a CDATA node.
    pub fn cdata(bump: &'bump Bump, text: &str) -> Node<'bump> {
        Node::Cdata {
            text: BumpString::from_str_in(text, bump),
        }
    }

    /// Get the tag name of the node if it is an [`Element`].
    ///
    /// [`Element`]: Node::Element
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    /// Get the attributes of the node if it is an [`Element`].
    ///
    /// [`Element`]: Node::Element
    pub fn attrs(&self) -> Option<&Attributes<'bump>> {
        match self {
            Node::Element { attributes, .. } => Some(attributes),
            _ => None,
        }
    }

    /// Get the children of an element or fragment. Other nodes have none.
    pub fn children(&self) -> &[Node<'bump>] {
        match self {
            Node::Element { children, .. } | Node::Fragment { children } => children.as_slice(),
            _ => &[],
        }
    }

    /// Get the inner text of the node.
    ///
    /// This will return an empty string if no inner text exists. Raw HTML and comments
    /// do not contribute.
    pub fn inner_text(&self, bump: &'bump Bump) -> BumpString<'bump> {
        let mut result = BumpString::new_in(bump);
        self.push_inner_text(&mut result);
        result
    }

    fn push_inner_text(&self, result: &mut BumpString<'bump>) {
        match self {
            Node::Element { children, .. } | Node::Fragment { children } => {
                for child in children.iter() {
                    child.push_inner_text(result);
                }
            }
            Node::Text { text } | Node::Cdata { text } => result.push_str(text.as_str()),
            Node::None | Node::Raw { .. } | Node::Comment { .. } => {}
        }
    }

    /// Returns `true` if the node is [`None`].
    ///
    /// [`None`]: Node::None
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns `true` if the node is [`Element`].
    ///
    /// [`Element`]: Node::Element
    #[must_use]
    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }

    /// Returns `true` if the node is [`Fragment`].
    ///
    /// [`Fragment`]: Node::Fragment
    #[must_use]
    pub fn is_fragment(&self) -> bool {
        matches!(self, Self::Fragment { .. })
    }

    /// Returns `true` if the node is [`Text`].
    ///
    /// [`Text`]: Node::Text
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Returns `true` if the node is [`Raw`].
    ///
    /// [`Raw`]: Node::Raw
    #[must_use]
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw { .. })
    }

    /// Returns `true` if the node is [`Comment`].
    ///
    /// [`Comment`]: Node::Comment
    #[must_use]
    pub fn is_comment(&self) -> bool {
        matches!(self, Self::Comment { .. })
    }

    /// Returns `true` if the node is [`Cdata`].
    ///
    /// [`Cdata`]: Node::Cdata
    #[must_use]
    pub fn is_cdata(&self) -> bool {
        matches!(self, Self::Cdata { .. })
    }
}
