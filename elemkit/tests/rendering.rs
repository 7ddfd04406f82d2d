use elemkit::{
    attrs, bumpalo::Bump, builder::Builder, if_else, map_each, try_map_each, Attribute, Node,
    RenderOptions, BOOLEAN_ATTRIBUTES, VOID_ELEMENTS,
};
use pretty_assertions::assert_eq;

#[test]
fn test_text_is_escaped_inside_element() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let node = b.div([b.attr(("class", "container"))])(b.text("Hello, <b>"));
    assert_eq!(node.render(), r#"<div class="container">Hello, &lt;b&gt;</div>"#);
}

#[test]
fn test_attributes_are_sorted_by_key() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let first = b.img([b.attr(("src", "a.jpg")), b.attr(("alt", "A"))]);
    let second = b.img([b.attr(("alt", "A")), b.attr(("src", "a.jpg"))]);
    assert_eq!(first.render(), r#"<img alt="A" src="a.jpg">"#);
    assert_eq!(first.render(), second.render());
}

#[test]
fn test_boolean_attributes() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let checked = b.input([b.attr(("type", "checkbox")), b.attr(("checked", "true"))]);
    let unchecked = b.input([b.attr(("type", "checkbox")), b.attr(("checked", "false"))]);
    assert_eq!(checked.render(), r#"<input checked type="checkbox">"#);
    assert_eq!(unchecked.render(), r#"<input type="checkbox">"#);

    // Anything but "true" drops the attribute.
    let button = b.button([b.attr(("disabled", "yes"))])(b.text("Go"));
    assert_eq!(button.render(), "<button>Go</button>");

    // Unknown names with a "true" value keep it.
    let div = b.div([b.attr(("data-open", true))])(b.none());
    assert_eq!(div.render(), r#"<div data-open="true"></div>"#);
}

#[test]
fn test_every_boolean_attribute_needs_exactly_true() {
    let bump = Bump::new();
    for &name in BOOLEAN_ATTRIBUTES {
        for value in ["", "1", "false", "TRUE"] {
            let node = Node::element(&bump, "div", [Attribute::new(&bump, name, value)], []);
            assert_eq!(node.render(), "<div></div>", "{name}={value:?}");
        }
        let node = Node::element(&bump, "div", [Attribute::new(&bump, name, "true")], []);
        assert_eq!(node.render(), format!("<div {name}></div>"));
    }
}

#[test]
fn test_hidden_false_is_dropped() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    assert_eq!(
        b.div([b.attr((attrs::HIDDEN, false))])(b.text("shown")).render(),
        "<div>shown</div>"
    );
    assert_eq!(
        b.div([b.attr((attrs::HIDDEN, true))])(b.none()).render(),
        "<div hidden></div>"
    );
}

#[test]
fn test_single_quoted_value_is_kept_verbatim() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let node = b.div([b.attr(("data-values", r#"'{"quantity": 5}'"#))])(b.none());
    assert_eq!(node.render(), r#"<div data-values='{"quantity": 5}'></div>"#);

    let lone_quote = b.div([b.attr(("title", "'"))])(b.none());
    assert_eq!(lone_quote.render(), r#"<div title="'"></div>"#);
}

#[test]
fn test_void_elements_ignore_children() {
    let bump = Bump::new();
    let br = Node::element(&bump, "br", [], [Node::text(&bump, "x")]);
    assert_eq!(br.render(), "<br>");

    for &tag in VOID_ELEMENTS {
        let node = Node::element(
            &bump,
            tag,
            [Attribute::new(&bump, "id", "v")],
            [
                Node::text(&bump, "child text"),
                Node::element(&bump, "span", [], [Node::text(&bump, "nested")]),
            ],
        );
        let html = node.render();
        assert_eq!(html, format!(r#"<{tag} id="v">"#));
        assert!(!html.contains(&format!("</{tag}>")));
        assert!(!html.contains("child text") && !html.contains("nested"));
    }
}

#[test]
fn test_fragments_are_transparent() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let node = b.div([])(Node::fragment(&bump, [b.text("a"), b.span([])(b.text("b"))]));
    assert_eq!(node.render(), "<div>a<span>b</span></div>");

    let marker = b.tag("fragment", [b.attr(("id", "ignored"))])([
        b.li([])(b.text("1")),
        b.li([])(b.text("2")),
    ]);
    assert_eq!(marker.render(), "<li>1</li><li>2</li>");
    assert_eq!(b.ul([])(marker).render(), "<ul><li>1</li><li>2</li></ul>");
}

#[test]
fn test_fragments_do_not_affect_sibling_order() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let (a, bb, c) = (b.text("A"), b.em([])(b.text("B")), b.text("C"));
    let grouped = Node::element(
        &bump,
        "div",
        [],
        [
            Node::fragment(&bump, [a.clone(), bb.clone()]),
            Node::fragment(&bump, [c.clone()]),
        ],
    );
    let flat = Node::element(&bump, "div", [], [a, bb, c]);
    assert_eq!(grouped.render(), flat.render());
    assert_eq!(flat.render(), "<div>A<em>B</em>C</div>");
}

#[test]
fn test_none_renders_nothing() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    assert_eq!(Node::None.render(), "");
    assert_eq!(b.p([])([b.none(), b.text("x"), b.none()]).render(), "<p>x</p>");
}

#[test]
fn test_comment_boundaries() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    assert!(b.comment(">x").render().starts_with("<!-- &gt;x"));
    assert!(b.comment("x<!-").render().ends_with("x&lt;!- -->"));
    assert_eq!(
        b.comment("a --> b").render(),
        "<!-- a --&gt; b -->"
    );
}

#[test]
fn test_cdata_and_raw() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    assert_eq!(
        b.cdata("a < b ]]> c").render(),
        "<![CDATA[a < b ]]&gt; c]]>"
    );
    assert_eq!(
        b.div([])(b.raw("<b>bold</b>")).render(),
        "<div><b>bold</b></div>"
    );
}

#[test]
fn test_doctype_preamble() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let page = b.html([b.attr(("lang", "en"))])(b.body([])(b.text("Hi")));
    assert_eq!(
        page.render(),
        r#"<!DOCTYPE html><html lang="en"><body>Hi</body></html>"#
    );
    assert_eq!(
        page.render_with_options(&RenderOptions::new().with_disable_doctype_preamble(true)),
        r#"<html lang="en"><body>Hi</body></html>"#
    );
}

#[test]
fn test_pretty_page() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let page = b.html([])([
        b.head([])(b.title([])(b.text("T"))),
        b.body([])(b.div([])(b.p([])(b.text("x")))),
    ]);
    assert_eq!(
        page.render_with_options(&RenderOptions::new().with_pretty(true)),
        "<!DOCTYPE html><html>\n  <head>\n    <title>T</title>\n  </head>\n  <body>\n    <div>\n      <p>x</p>\n    </div>\n  </body>\n</html>"
    );
}

#[test]
fn test_rendering_is_repeatable() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let node = b.section([b.attr(("id", "s")), b.attr(("class", "c"))])([
        b.h2([])(b.text("Title & more")),
        b.comment("note"),
    ]);
    let first = node.render();
    assert_eq!(first, node.render());

    let mut buffer = String::from("prefix:");
    node.render_to(&mut buffer, &RenderOptions::default());
    assert_eq!(buffer, format!("prefix:{first}"));
}

#[derive(Default)]
struct CardProps<'a> {
    title: &'a str,
    highlighted: bool,
    tags: Vec<&'a str>,
}

#[allow(non_snake_case)]
fn Card<'bump>(b: Builder<'bump>, props: CardProps) -> Node<'bump> {
    b.article([b.attr((
        "class",
        if_else(props.highlighted, "card highlighted", "card"),
    ))])([
        b.h3([])(b.text(props.title)),
        if_else(
            props.tags.is_empty(),
            b.none(),
            b.ul([])(map_each(props.tags, |tag| b.li([])(b.text(tag)))),
        ),
    ])
}

#[test]
fn test_component_functions() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let plain = Card(
        b,
        CardProps {
            title: "Plain",
            ..Default::default()
        },
    );
    assert_eq!(
        plain.render(),
        r#"<article class="card"><h3>Plain</h3></article>"#
    );

    let tagged = Card(
        b,
        CardProps {
            title: "Tagged",
            highlighted: true,
            tags: vec!["rust", "html"],
        },
    );
    assert_eq!(
        tagged.render(),
        r#"<article class="card highlighted"><h3>Tagged</h3><ul><li>rust</li><li>html</li></ul></article>"#
    );
}

fn cell<'bump>(b: Builder<'bump>, text: &str) -> Result<Node<'bump>, String> {
    if text.is_empty() {
        Err("empty cell".to_string())
    } else {
        Ok(b.td([])(b.text(text)))
    }
}

#[test]
fn test_try_map_each_builds_or_fails() {
    let bump = Bump::new();
    let b = Builder::new(&bump);

    let cells = try_map_each(["a", "b"], |text| cell(b, text)).unwrap();
    assert_eq!(b.tr([])(cells).render(), "<tr><td>a</td><td>b</td></tr>");
    assert_eq!(
        try_map_each(["a", ""], |text| cell(b, text)),
        Err("empty cell".to_string())
    );
}
