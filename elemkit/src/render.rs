use std::fmt;
use std::io::Write;
use std::sync::Arc;

use crate::attribute::is_boolean_attribute;
use crate::escape::{escape_cdata, escape_comment, escape_style_contents, escape_text};
use crate::{Attribute, Node};

/// HTML5 void elements. These never have content or a closing tag; any children
/// supplied to them are ignored when rendering.
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Elements with this tag name render their children only, without a tag or attributes.
pub const FRAGMENT_TAG: &str = "fragment";

const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "b", "bdo", "big", "br", "button", "cite", "code", "dfn", "em", "i",
    "img", "input", "kbd", "label", "map", "pre", "object", "output", "q", "samp", "script",
    "select", "small", "span", "strong", "sub", "sup", "textarea", "time", "tt", "var",
];

/// Elements whose whitespace is significant. Pretty mode leaves their contents alone.
const PREFORMATTED_ELEMENTS: &[&str] = &["pre", "textarea"];

/// Returns `true` if `tag` is one of the [VOID_ELEMENTS].
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Something that can produce a stylesheet to be injected into rendered documents.
///
/// [crate::StyleManager] is the main implementor.
pub trait CssGenerator {
    /// Generate the CSS text.
    fn generate_css(&self) -> String;
}
impl<T: CssGenerator + ?Sized> CssGenerator for &T {
    fn generate_css(&self) -> String {
        (**self).generate_css()
    }
}
impl<T: CssGenerator + ?Sized> CssGenerator for Arc<T> {
    fn generate_css(&self) -> String {
        (**self).generate_css()
    }
}

/// Options controlling how nodes are rendered.
#[derive(Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Don't write `<!DOCTYPE html>` before `html` elements.
    pub disable_doctype_preamble: bool,
    /// Put block-level children on their own, indented lines.
    pub pretty: bool,
    /// When set, the generated stylesheet is injected into the document head.
    pub style_manager: Option<&'a dyn CssGenerator>,
}
impl<'a> RenderOptions<'a> {
    /// The default options: doctype on, compact output, no stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`Self::disable_doctype_preamble`].
    pub fn with_disable_doctype_preamble(mut self, disable: bool) -> Self {
        self.disable_doctype_preamble = disable;
        self
    }

    /// Set [`Self::pretty`].
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set [`Self::style_manager`].
    pub fn with_style_manager(mut self, style_manager: &'a dyn CssGenerator) -> Self {
        self.style_manager = Some(style_manager);
        self
    }
}
impl fmt::Debug for RenderOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("disable_doctype_preamble", &self.disable_doctype_preamble)
            .field("pretty", &self.pretty)
            .field("style_manager", &self.style_manager.is_some())
            .finish()
    }
}

impl<'bump> Node<'bump> {
    /// Render the node to a string with the default options.
    pub fn render(&self) -> String {
        self.render_with_options(&RenderOptions::default())
    }

    /// Render the node to a string.
    ///
    /// If a style manager is attached to `options`, its stylesheet is placed right before
    /// the `</head>` of the first `head` element. Without one, a `<head>` holding it is
    /// added right after the first `html` start tag. Output with neither is unchanged.
    pub fn render_with_options(&self, options: &RenderOptions) -> String {
        let mut output = String::new();
        let mut writer = Writer::new(&mut output, options);
        writer.node(self, 0);
        let landmarks = writer.finish();
        inject_stylesheet(output, options, landmarks)
    }

    /// Append the rendered node to `output`.
    ///
    /// This never injects a stylesheet; that only happens on the outermost render.
    pub fn render_to(&self, output: &mut String, options: &RenderOptions) {
        Writer::new(output, options).node(self, 0);
    }

    /// Write the rendered node to a writer.
    pub fn write(&self, writer: &mut dyn Write, options: &RenderOptions) -> std::io::Result<()> {
        writer.write_all(self.render_with_options(options).as_bytes())
    }

    /// Returns `true` if the node is an element with an inline tag.
    pub fn is_inline_element(&self) -> bool {
        self.tag().is_some_and(|t| INLINE_ELEMENTS.contains(&t))
    }
}

/// Byte offsets into the output where a stylesheet can go.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Landmarks {
    /// Just past the `>` of the first `html` start tag.
    html_start_end: Option<usize>,
    /// The `</head>` of the first `head` element to close.
    head_close: Option<usize>,
}

/// Serializes nodes into an output string, noting the [Landmarks] it writes.
pub(crate) struct Writer<'w, 'a> {
    output: &'w mut String,
    options: &'w RenderOptions<'a>,
    landmarks: Landmarks,
    /// How many whitespace-significant elements enclose the current node.
    preformatted: usize,
}

impl<'w, 'a> Writer<'w, 'a> {
    pub(crate) fn new(output: &'w mut String, options: &'w RenderOptions<'a>) -> Self {
        Writer {
            output,
            options,
            landmarks: Landmarks::default(),
            preformatted: 0,
        }
    }

    pub(crate) fn finish(self) -> Landmarks {
        self.landmarks
    }

    fn node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::None => {}
            Node::Element {
                tag,
                attributes,
                children,
            } => {
                let tag = tag.as_str();
                if tag == "html" && !self.options.disable_doctype_preamble {
                    self.output.push_str("<!DOCTYPE html>");
                }
                if tag == FRAGMENT_TAG {
                    self.children(children, depth);
                    return;
                }

                // start tag
                self.output.push('<');
                self.output.push_str(tag);
                for attribute in attributes.sorted() {
                    write_attribute(self.output, attribute);
                }
                self.output.push('>');
                if tag == "html" && self.landmarks.html_start_end.is_none() {
                    self.landmarks.html_start_end = Some(self.output.len());
                }

                if is_void_element(tag) {
                    return;
                }

                let preformatted = PREFORMATTED_ELEMENTS.contains(&tag);
                if preformatted {
                    self.preformatted += 1;
                }
                let did_indent = self.children(children, depth + 1);
                if preformatted {
                    self.preformatted -= 1;
                }

                // end tag
                if did_indent {
                    self.indent(depth);
                }
                if tag == "head" && self.landmarks.head_close.is_none() {
                    self.landmarks.head_close = Some(self.output.len());
                }
                self.output.push_str("</");
                self.output.push_str(tag);
                self.output.push('>');
            }
            Node::Fragment { children } => {
                self.children(children, depth);
            }
            Node::Text { text } => self.output.push_str(&escape_text(text)),
            Node::Raw { html } => self.output.push_str(html),
            Node::Comment { text } => {
                self.output.push_str("<!-- ");
                self.output.push_str(&escape_comment(text));
                self.output.push_str(" -->");
            }
            Node::Cdata { text } => {
                self.output.push_str("<![CDATA[");
                self.output.push_str(&escape_cdata(text));
                self.output.push_str("]]>");
            }
        }
    }

    /// Write a list of sibling nodes.
    ///
    /// Returns whether or not the result was indented.
    pub(crate) fn children(&mut self, children: &[Node], depth: usize) -> bool {
        if !self.options.pretty || self.preformatted > 0 {
            for child in children {
                self.node(child, depth);
            }
            return false;
        }

        let mut flattened = Vec::with_capacity(children.len());
        flatten(children, &mut flattened);

        let mut did_indent = false;
        let mut encountered_text = false;
        for child in flattened {
            encountered_text |= child.is_text() || child.is_cdata();
            let should_indent = !encountered_text && !child.is_inline_element() && !child.is_raw();
            if should_indent && depth > 0 {
                self.indent(depth);
                did_indent = true;
            }
            self.node(child, depth);
        }
        did_indent
    }

    fn indent(&mut self, depth: usize) {
        self.output.push('\n');
        for _ in 0..depth {
            self.output.push_str("  ");
        }
    }
}

fn write_attribute(output: &mut String, attribute: &Attribute) {
    let key = attribute.key.as_str();
    let value = attribute.value.as_str();
    if is_boolean_attribute(key) {
        if value == "true" {
            output.push(' ');
            output.push_str(key);
        }
    } else if attribute.is_single_quoted() {
        output.push(' ');
        output.push_str(key);
        output.push('=');
        output.push_str(value);
    } else {
        output.push(' ');
        output.push_str(key);
        output.push_str("=\"");
        output.push_str(value);
        output.push('"');
    }
}

/// Collect the nodes that actually produce output, splicing in fragments.
fn flatten<'a, 'bump>(children: &'a [Node<'bump>], out: &mut Vec<&'a Node<'bump>>) {
    for child in children {
        match child {
            Node::None => {}
            Node::Fragment { children } => flatten(children, out),
            Node::Element { tag, children, .. } if tag.as_str() == FRAGMENT_TAG => {
                flatten(children, out)
            }
            other => out.push(other),
        }
    }
}

/// Splice the stylesheet from `options.style_manager` into rendered markup at the
/// positions recorded while writing it.
pub(crate) fn inject_stylesheet(
    mut html: String,
    options: &RenderOptions,
    landmarks: Landmarks,
) -> String {
    let Some(style_manager) = options.style_manager else {
        return html;
    };
    if landmarks.head_close.is_none() && landmarks.html_start_end.is_none() {
        tracing::trace!("no html element to inject the stylesheet into");
        return html;
    }

    let css = style_manager.generate_css();
    let style_element = format!("<style>{}</style>", escape_style_contents(&css));
    if let Some(head_close) = landmarks.head_close {
        tracing::trace!(bytes = css.len(), "injecting stylesheet into existing head");
        html.insert_str(head_close, &style_element);
    } else if let Some(html_start_end) = landmarks.html_start_end {
        tracing::trace!(bytes = css.len(), "injecting stylesheet into new head");
        html.insert_str(html_start_end, &format!("<head>{style_element}</head>"));
    }
    html
}
