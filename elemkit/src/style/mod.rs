//! CSS declaration sets and the [StyleManager] that turns them into class names and a
//! stylesheet.

use std::collections::BTreeMap;
use std::fmt;

mod manager;
pub use manager::StyleManager;

pub mod props;
pub mod units;

/// A set of CSS declarations, keyed by property name.
///
/// Iteration is always in property order, so two styles with the same declarations
/// compare, hash and serialize identically no matter how they were built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Style(BTreeMap<String, String>);

impl Style {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration, returning the updated style.
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Add a declaration, returning the previous value for `property` if there was one.
    pub fn insert(
        &mut self,
        property: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(property.into(), value.into())
    }

    /// Get the value of `property`.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// The number of declarations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no declarations.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the declarations in property order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Combine styles into one. Later styles override earlier ones.
    pub fn merge<'a>(styles: impl IntoIterator<Item = &'a Style>) -> Style {
        let mut merged = Style::new();
        for style in styles {
            merged
                .0
                .extend(style.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        merged
    }

    /// The inline form used for `style="..."` attributes: `key: value;` pairs sorted by
    /// key and separated by a space, e.g. `color: white; font-size: 16px;`.
    pub fn to_inline(&self) -> String {
        let mut inline = String::new();
        self.write_declarations(&mut inline);
        if inline.ends_with(' ') {
            inline.pop();
        }
        inline
    }

    /// Write each declaration as `key: value; `.
    pub(crate) fn write_declarations(&self, output: &mut String) {
        for (property, value) in self.iter() {
            output.push_str(property);
            output.push_str(": ");
            output.push_str(value);
            output.push_str("; ");
        }
    }
}
impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_inline())
    }
}
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Style(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Style {
    fn from(declarations: [(K, V); N]) -> Self {
        declarations.into_iter().collect()
    }
}

/// The frames of a CSS animation, keyed by selector (`from`, `50%`, `to`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Keyframes(BTreeMap<String, Style>);

impl Keyframes {
    /// Create an animation with no frames.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a frame, returning the updated animation.
    pub fn with(mut self, selector: impl Into<String>, style: impl Into<Style>) -> Self {
        self.insert(selector, style);
        self
    }

    /// Add a frame, returning the previous style for `selector` if there was one.
    pub fn insert(&mut self, selector: impl Into<String>, style: impl Into<Style>) -> Option<Style> {
        self.0.insert(selector.into(), style.into())
    }

    /// Get the style of the frame at `selector`.
    pub fn get(&self, selector: &str) -> Option<&Style> {
        self.0.get(selector)
    }

    /// The number of frames.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no frames.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the frames, sorted by selector.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Style)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}
impl<K: Into<String>, S: Into<Style>> FromIterator<(K, S)> for Keyframes {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        Keyframes(
            iter.into_iter()
                .map(|(k, s)| (k.into(), s.into()))
                .collect(),
        )
    }
}
impl<K: Into<String>, S: Into<Style>, const N: usize> From<[(K, S); N]> for Keyframes {
    fn from(frames: [(K, S); N]) -> Self {
        frames.into_iter().collect()
    }
}

/// A default style together with variants for pseudo-classes, pseudo-elements and media
/// queries, all registered under a single class name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompositeStyle {
    /// The declarations applied to the class itself.
    pub default: Style,
    /// Variants keyed by pseudo-class, with or without the leading `:` (e.g. `hover`).
    pub pseudo_classes: BTreeMap<String, Style>,
    /// Variants keyed by pseudo-element, with or without the leading `::` (e.g. `before`).
    pub pseudo_elements: BTreeMap<String, Style>,
    /// Variants keyed by media query, with or without the leading `@media`.
    pub media_queries: BTreeMap<String, Style>,
}

impl CompositeStyle {
    /// Create a composite style with only default declarations.
    pub fn new(default: impl Into<Style>) -> Self {
        CompositeStyle {
            default: default.into(),
            ..Default::default()
        }
    }

    /// Add a pseudo-class variant.
    pub fn with_pseudo_class(mut self, pseudo_class: impl Into<String>, style: impl Into<Style>) -> Self {
        self.pseudo_classes.insert(pseudo_class.into(), style.into());
        self
    }

    /// Add a pseudo-element variant.
    pub fn with_pseudo_element(
        mut self,
        pseudo_element: impl Into<String>,
        style: impl Into<Style>,
    ) -> Self {
        self.pseudo_elements
            .insert(pseudo_element.into(), style.into());
        self
    }

    /// Add a media query variant.
    pub fn with_media_query(mut self, media_query: impl Into<String>, style: impl Into<Style>) -> Self {
        self.media_queries.insert(media_query.into(), style.into());
        self
    }
}
impl From<Style> for CompositeStyle {
    fn from(default: Style) -> Self {
        CompositeStyle::new(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_is_sorted_and_trimmed() {
        let style = Style::from([
            ("font-size", "16px"),
            ("background-color", "blue"),
            ("color", "white"),
        ]);
        assert_eq!(
            style.to_inline(),
            "background-color: blue; color: white; font-size: 16px;"
        );
        assert_eq!(style.to_string(), style.to_inline());
    }

    #[test]
    fn inline_of_empty_style_is_empty() {
        assert_eq!(Style::new().to_inline(), "");
        assert_eq!(Style::new().with("color", "red").to_inline(), "color: red;");
    }

    #[test]
    fn merge_prefers_later_styles() {
        let base = Style::from([("color", "red"), ("margin", "0")]);
        let accent = Style::from([("color", "blue"), ("padding", "4px")]);
        let third = Style::from([("padding", "8px")]);
        let merged = Style::merge([&base, &accent, &third]);
        assert_eq!(merged.get("color"), Some("blue"));
        assert_eq!(merged.get("margin"), Some("0"));
        assert_eq!(merged.get("padding"), Some("8px"));
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let a = Style::new().with("a", "1").with("b", "2");
        let b = Style::new().with("b", "2").with("a", "1");
        assert_eq!(a, b);
    }
}
