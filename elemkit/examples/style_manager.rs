//! Builds a small page with registered styles and prints it.
//!
//! Run with `RUST_LOG=elemkit=trace` to see the style registrations.

use elemkit::{
    attrs,
    bumpalo::Bump,
    builder::Builder,
    htmx, map_each,
    style::{props, units},
    CompositeStyle, Node, RenderOptions, StyleManager,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let styles = StyleManager::new();
    let fade_in = styles.add_animation([
        ("from", [(props::OPACITY, "0")]),
        ("to", [(props::OPACITY, "1")]),
    ]);
    let button = styles.add_composite_style(
        CompositeStyle::new([
            (props::BACKGROUND_COLOR, units::rgb(40, 90, 200)),
            (props::COLOR, "white".to_string()),
            (props::PADDING, format!("{} {}", units::rem(0.5), units::rem(1))),
            (props::ANIMATION, format!("{fade_in} {}", units::milliseconds(300))),
        ])
        .with_pseudo_class("hover", [(props::BACKGROUND_COLOR, units::rgb(20, 60, 160))])
        .with_media_query(
            format!("(max-width: {})", units::px(600)),
            [(props::WIDTH, units::percent(100))],
        ),
    );
    let list = styles.add_style([(props::DISPLAY, "flex"), (props::GAP, "8px")]);

    let bump = Bump::new();
    let b = Builder::new(&bump);
    let items = ["Alpha", "Beta", "Gamma"];
    let page = b.html([b.attr(("lang", "en"))])([
        b.head([])([
            b.meta([b.attr(("charset", "utf-8"))]),
            b.title([])(b.text("Style manager demo")),
        ]),
        b.body([])([
            b.h1([])(b.text("Items")),
            b.ul([b.attr((attrs::CLASS, list.as_str()))])(map_each(items, |item| {
                b.li([])(b.text(item))
            })),
            b.button([
                b.attr((attrs::CLASS, button.as_str())),
                b.attr((htmx::HX_POST, "/items")),
                b.attr((htmx::HX_TARGET, "closest ul")),
            ])(b.text("Add")),
            Node::comment(&bump, "rendered by elemkit"),
        ]),
    ]);

    println!(
        "{}",
        page.render_with_options(
            &RenderOptions::new()
                .with_pretty(true)
                .with_style_manager(&styles)
        )
    );
}
