#![cfg(feature = "serde")]

use elemkit::{bumpalo::Bump, builder::Builder, CompositeStyle, OwnedNode, Style, StyleManager};
use pretty_assertions::assert_eq;

#[test]
fn test_owned_node_from_json() {
    let json = r#"{
        "type": "Element",
        "tag": "ul",
        "attributes": [{ "key": "class", "value": "tags" }],
        "children": [
            { "type": "Element", "tag": "li", "children": [{ "type": "Text", "text": "a & b" }] },
            { "type": "Comment", "text": "end" }
        ]
    }"#;
    let owned: OwnedNode = serde_json::from_str(json).unwrap();

    let bump = Bump::new();
    assert_eq!(
        owned.into_bump(&bump).render(),
        r#"<ul class="tags"><li>a &amp; b</li><!-- end --></ul>"#
    );
}

#[test]
fn test_node_serializes_like_its_owned_form() {
    let bump = Bump::new();
    let b = Builder::new(&bump);
    let node = b.p([b.attr(("id", "x"))])([b.text("hi"), b.raw("<br>")]);

    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        serde_json::to_value(OwnedNode::from(&node)).unwrap()
    );
}

#[test]
fn test_styles_deserialize_to_the_same_class() {
    let style: Style = serde_json::from_str(r#"{ "margin": "0", "color": "red" }"#).unwrap();
    let composite: CompositeStyle = serde_json::from_str(
        r#"{ "default": { "color": "red" }, "pseudo_classes": { "hover": { "color": "blue" } } }"#,
    )
    .unwrap();

    let styles = StyleManager::new();
    assert_eq!(
        styles.add_style(style),
        styles.add_style([("color", "red"), ("margin", "0")])
    );
    assert_eq!(
        styles.add_composite_style(composite),
        styles.add_composite_style(
            CompositeStyle::new([("color", "red")]).with_pseudo_class("hover", [("color", "blue")])
        )
    );
}
