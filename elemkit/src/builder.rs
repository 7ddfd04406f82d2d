//! Implements a builder DSL for creating HTML trees through a series of methods.

use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::escape::{escape_script_contents, escape_style_contents};
use crate::{Attribute, Attributes, Document, IntoAttribute, IntoNode, Node, Style};

/// A builder for creating HTML nodes using a bump allocator.
///
/// # Example
///
/// ```
/// use elemkit::{bumpalo::Bump, builder::Builder};
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let page = b.div([b.attr(("class", "container"))])(
///     b.h1([])(b.text("Hello, World!"))
/// );
/// assert_eq!(page.render(), r#"<div class="container"><h1>Hello, World!</h1></div>"#);
/// ```
#[derive(Clone, Copy)]
pub struct Builder<'bump> {
    bump: &'bump Bump,
}
impl<'bump> Builder<'bump> {
    /// Create a new builder with the given bump allocator.
    pub fn new(bump: &'bump Bump) -> Self {
        Self { bump }
    }

    /// Get a reference to the bump allocator.
    pub fn bump(&self) -> &'bump Bump {
        self.bump
    }

    /// Create an attribute from a value that implements [IntoAttribute].
    pub fn attr(&self, value: impl IntoAttribute<'bump>) -> Attribute<'bump> {
        value.into_attribute(self.bump)
    }

    /// Create a `style` attribute holding the inline form of `style`.
    pub fn style_attr(&self, style: &Style) -> Attribute<'bump> {
        Attribute::new(self.bump, "style", &style.to_inline())
    }

    /// Create a text node from a string.
    pub fn text(&self, text: &str) -> Node<'bump> {
        Node::text(self.bump, text)
    }

    /// Create a raw HTML node from a string.
    pub fn raw(&self, html: &str) -> Node<'bump> {
        Node::raw(self.bump, html)
    }

    /// Create a comment node.
    pub fn comment(&self, text: &str) -> Node<'bump> {
        Node::comment(self.bump, text)
    }

    /// Create a CDATA node.
    pub fn cdata(&self, text: &str) -> Node<'bump> {
        Node::cdata(self.bump, text)
    }

    /// A node that renders nothing.
    pub fn none(&self) -> Node<'bump> {
        Node::None
    }

    /// Create a tag element from a name and attributes.
    ///
    /// The children are passed in as a single argument to the returned function.
    pub fn tag<E: IntoNode<'bump>>(
        &self,
        name: &str,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
    ) -> impl FnOnce(E) -> Node<'bump> {
        let bump = self.bump;
        let tag = BumpString::from_str_in(name, bump);
        let attributes = Attributes::from_iter_in(attributes, bump);

        move |children: E| {
            let children = match children.into_node(bump) {
                Node::Fragment { children } => children,
                Node::None => BumpVec::new_in(bump),
                other => {
                    let mut v = BumpVec::with_capacity_in(1, bump);
                    v.push(other);
                    v
                }
            };
            Node::Element {
                tag,
                attributes,
                children,
            }
        }
    }

    /// Create an inline `<script>` element. The code is escaped with
    /// [escape_script_contents] so that it cannot close the element early.
    pub fn script_inline(
        &self,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
        code: &str,
    ) -> Node<'bump> {
        self.tag("script", attributes)(self.raw(&escape_script_contents(code)))
    }

    /// Create an inline `<style>` element. The CSS is escaped with
    /// [escape_style_contents] so that it cannot close the element early.
    pub fn style_inline(
        &self,
        attributes: impl IntoIterator<Item = Attribute<'bump>>,
        css: &str,
    ) -> Node<'bump> {
        self.tag("style", attributes)(self.raw(&escape_style_contents(css)))
    }

    /// Create a node from an iterator of nodes.
    ///
    /// This is a convenience wrapper around [`Node::from_iter`].
    pub fn fragment(&self, children: impl IntoIterator<Item = Node<'bump>>) -> Node<'bump> {
        Node::from_iter(self.bump, children)
    }

    /// Create a document from an iterator of nodes.
    ///
    /// This is a convenience wrapper around [`Document::new`].
    pub fn document(&self, children: impl IntoIterator<Item = Node<'bump>>) -> Document<'bump> {
        Document::new(self.bump, children)
    }
}

macro_rules! non_void_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a non-void element with the tag name `", stringify!($tag_ident), "` and a list of attributes.\n\nThe children are passed in as a single argument to the returned function.")]
                pub fn $tag_ident<E: IntoNode<'bump>>(
                    &self,
                    attributes: impl IntoIterator<Item = Attribute<'bump>>,
                ) -> impl FnOnce(E) -> Node<'bump> {
                    self.tag(stringify!($tag_ident), attributes)
                }
            )*
        }
    };
}
non_void_builders! {
    html, head, body, title, style, script, noscript, template,
    main, header, footer, nav, section, article, aside, address,
    h1, h2, h3, h4, h5, h6, p, div, span, pre, code, blockquote,
    a, b, i, u, s, q, em, strong, small, sub, sup, mark, abbr, cite, dfn, kbd, samp, var,
    del, ins, time, data,
    ul, ol, li, dl, dt, dd, menu,
    form, label, button, select, option, optgroup, textarea, fieldset, legend,
    datalist, output, progress, meter,
    table, caption, colgroup, thead, tbody, tfoot, tr, th, td,
    figure, figcaption, picture, audio, video, canvas, iframe, object, svg,
    details, summary, dialog, slot
}

macro_rules! void_builders {
    ($($tag_ident:ident),*) => {
        impl<'bump> Builder<'bump> {
            $(
                #[doc = concat!("Create a void element with the tag name `", stringify!($tag_ident), "` and a list of attributes.")]
                pub fn $tag_ident(
                    &self,
                    attributes: impl IntoIterator<Item = Attribute<'bump>>,
                ) -> Node<'bump> {
                    self.tag(stringify!($tag_ident), attributes)(Node::None)
                }
            )*
        }
    };
}
void_builders! {
    area, base, br, col, command, embed, hr, img, input, keygen, link, meta,
    param, source, track, wbr
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_flattens_fragment_argument() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let node = b.ul([])([b.li([])(b.text("a")), b.li([])(b.text("b"))]);
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.render(), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn duplicate_attributes_keep_the_last_value() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let node = b.div([b.attr(("id", "first")), b.attr(("id", "second"))])(b.none());
        assert_eq!(node.render(), r#"<div id="second"></div>"#);
    }

    #[test]
    fn style_attr_uses_inline_form() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let style = Style::from([("font-size", "16px"), ("color", "white")]);
        let node = b.p([b.style_attr(&style)])(b.text("hi"));
        assert_eq!(
            node.render(),
            r#"<p style="color: white; font-size: 16px;">hi</p>"#
        );
    }

    #[test]
    fn script_inline_escapes_closing_tag() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let node = b.script_inline([], "let s = '</script>';");
        assert_eq!(node.render(), "<script>let s = '\\x3C/script>';</script>");
    }

    #[test]
    fn style_inline_escapes_closing_tag() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let node = b.style_inline(
            [b.attr(("media", "print"))],
            "a::after { content: '</style><script>'; }",
        );
        assert_eq!(
            node.render(),
            r#"<style media="print">a::after { content: '<\/style><script>'; }</style>"#
        );
        assert_eq!(node.render().matches("</style").count(), 1);
    }
}
