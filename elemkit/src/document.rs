use std::io::Write;

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

use crate::render::{inject_stylesheet, Landmarks, Writer};
use crate::{Node, RenderOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A document is a sequence of top-level nodes that are rendered together.
pub struct Document<'bump> {
    /// The top-level nodes of the document.
    pub children: BumpVec<'bump, Node<'bump>>,
}
impl<'bump> Document<'bump> {
    /// Create a new document with a list of children.
    pub fn new(bump: &'bump Bump, children: impl IntoIterator<Item = Node<'bump>>) -> Self {
        Document {
            children: BumpVec::from_iter_in(children, bump),
        }
    }

    /// Render the document to a string with the default options.
    pub fn render(&self) -> String {
        self.render_with_options(&RenderOptions::default())
    }

    /// Render the document to a string, injecting the stylesheet of
    /// `options.style_manager` if there is one (see [Node::render_with_options]).
    pub fn render_with_options(&self, options: &RenderOptions) -> String {
        let mut output = String::new();
        let landmarks = self.write_children(&mut output, options);
        inject_stylesheet(output, options, landmarks)
    }

    /// Append the rendered document to `output`, without stylesheet injection.
    pub fn render_to(&self, output: &mut String, options: &RenderOptions) {
        self.write_children(output, options);
    }

    fn write_children(&self, output: &mut String, options: &RenderOptions) -> Landmarks {
        let mut writer = Writer::new(output, options);
        writer.children(self.children.as_slice(), 0);
        writer.finish()
    }

    /// Write the document to a writer.
    pub fn write(&self, writer: &mut dyn Write, options: &RenderOptions) -> std::io::Result<()> {
        writer.write_all(self.render_with_options(options).as_bytes())
    }

    /// Write the document to a string.
    pub fn write_to_string(&self) -> String {
        self.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::Builder;

    #[test]
    fn test_inline_code() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.p([])([
            b.text("This is an example of "),
            b.code([])(b.text("inline code")),
            b.text(" in a paragraph."),
        ])]);

        let output = input.write_to_string();
        assert_eq!(
            output,
            "<p>This is an example of <code>inline code</code> in a paragraph.</p>"
        );
    }

    #[test]
    fn test_empty_ul_with_tags_class() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.ul([b.attr(("class", "tags"))])([])]);
        assert_eq!(input.render(), "<ul class=\"tags\"></ul>");
    }

    #[test]
    fn test_void_element() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.br([])]);
        assert_eq!(input.render(), "<br>");
    }

    #[test]
    fn should_indent_successive_p_tags() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.div([])([
            b.p([])(b.text("Hello")),
            b.p([])(b.text("World")),
        ])]);
        let output = input.render_with_options(&RenderOptions::new().with_pretty(true));
        assert_eq!(output, "<div>\n  <p>Hello</p>\n  <p>World</p>\n</div>");
    }

    #[test]
    fn test_doctype_preamble() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.html([])(b.body([])(b.text("Hello")))]);
        assert_eq!(
            input.render_with_options(&RenderOptions::new().with_pretty(true)),
            "<!DOCTYPE html><html>\n  <body>Hello</body>\n</html>"
        );
        assert_eq!(
            input.render_with_options(&RenderOptions::new().with_disable_doctype_preamble(true)),
            "<html><body>Hello</body></html>"
        );
    }

    #[test]
    fn write_streams_rendered_output() {
        let bump = Bump::new();
        let b = Builder::new(&bump);
        let input = b.document([b.comment("top"), b.hr([])]);
        let mut output = vec![];
        input.write(&mut output, &RenderOptions::default()).unwrap();
        assert_eq!(output, b"<!-- top --><hr>");
    }
}
