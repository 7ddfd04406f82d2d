//! Helpers for formatting CSS values.
//!
//! ```
//! use elemkit::{style::{props, units::*}, Style};
//!
//! let style = Style::new()
//!     .with(props::WIDTH, percent(50))
//!     .with(props::PADDING, format!("{} {}", rem(0.5), px(12)))
//!     .with(props::COLOR, rgba(0, 0, 0, 0.8));
//! assert_eq!(style.to_inline(), "color: rgba(0, 0, 0, 0.8); padding: 0.5rem 12px; width: 50%;");
//! ```

use std::fmt::Display;

/// A length in pixels, e.g. `12px`.
pub fn px(value: impl Display) -> String {
    format!("{value}px")
}

/// A length relative to the element's font size, e.g. `1.5em`.
pub fn em(value: impl Display) -> String {
    format!("{value}em")
}

/// A length relative to the root font size, e.g. `2rem`.
pub fn rem(value: impl Display) -> String {
    format!("{value}rem")
}

/// A percentage, e.g. `50%`.
pub fn percent(value: impl Display) -> String {
    format!("{value}%")
}

/// A percentage of the viewport height, e.g. `100vh`.
pub fn vh(value: impl Display) -> String {
    format!("{value}vh")
}

/// A percentage of the viewport width, e.g. `100vw`.
pub fn vw(value: impl Display) -> String {
    format!("{value}vw")
}

/// A duration in seconds, e.g. `2s`.
pub fn seconds(value: impl Display) -> String {
    format!("{value}s")
}

/// A duration in milliseconds, e.g. `250ms`.
pub fn milliseconds(value: impl Display) -> String {
    format!("{value}ms")
}

/// An opaque colour, e.g. `rgb(255, 0, 0)`.
pub fn rgb(red: u8, green: u8, blue: u8) -> String {
    format!("rgb({red}, {green}, {blue})")
}

/// A colour with alpha, e.g. `rgba(255, 0, 0, 0.5)`.
pub fn rgba(red: u8, green: u8, blue: u8, alpha: f64) -> String {
    format!("rgba({red}, {green}, {blue}, {alpha})")
}

/// A colour from hue (degrees), saturation and lightness (percentages), e.g. `hsl(120, 100%, 50%)`.
pub fn hsl(hue: u16, saturation: u8, lightness: u8) -> String {
    format!("hsl({hue}, {saturation}%, {lightness}%)")
}

/// [hsl] with alpha, e.g. `hsla(120, 100%, 50%, 0.3)`.
pub fn hsla(hue: u16, saturation: u8, lightness: u8, alpha: f64) -> String {
    format!("hsla({hue}, {saturation}%, {lightness}%, {alpha})")
}

/// A URL value, e.g. `url('/img/bg.png')`.
pub fn url(target: &str) -> String {
    format!("url('{target}')")
}

/// A custom property reference, e.g. `var(--accent)`. The `--` is added when missing.
pub fn var(name: &str) -> String {
    if name.starts_with("--") {
        format!("var({name})")
    } else {
        format!("var(--{name})")
    }
}
