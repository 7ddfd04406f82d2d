use std::collections::btree_map::{BTreeMap, Entry};
use std::fmt::Write;

use parking_lot::Mutex;
use sha2::{Digest, Sha256};

use super::{CompositeStyle, Keyframes, Style};
use crate::CssGenerator;

const CLASS_PREFIX: &str = "cls_";
const ANIMATION_PREFIX: &str = "anim_";
/// Bytes of the content hash kept in generated names.
const NAME_HASH_BYTES: usize = 5;

/// A registry of styles that hands out class and animation names and produces the
/// matching stylesheet.
///
/// Names are derived from a hash of the registered content, so registering the same
/// declarations twice returns the same name and only produces one rule. The manager
/// can be shared between threads; all methods take `&self`.
///
/// # Example
///
/// ```
/// use elemkit::{Style, StyleManager};
///
/// let styles = StyleManager::new();
/// let class = styles.add_style(Style::from([("color", "red")]));
/// assert_eq!(class, styles.add_style(Style::new().with("color", "red")));
/// assert!(styles.generate_css().contains(&format!(".{class} {{ color: red; }}")));
/// ```
#[derive(Debug, Default)]
pub struct StyleManager {
    registry: Mutex<Registry>,
}

#[derive(Debug, Default)]
struct Registry {
    styles: BTreeMap<String, Style>,
    animations: BTreeMap<String, Keyframes>,
    composites: BTreeMap<String, CompositeStyle>,
}

impl StyleManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style and return its class name (without the leading `.`).
    pub fn add_style(&self, style: impl Into<Style>) -> String {
        let style = style.into();
        let name = content_name(CLASS_PREFIX, &canonical_style(&style));
        register(&mut self.registry.lock().styles, name, style, "style")
    }

    /// Register a keyframes animation and return its name.
    pub fn add_animation(&self, keyframes: impl Into<Keyframes>) -> String {
        let keyframes = keyframes.into();
        let name = content_name(ANIMATION_PREFIX, &canonical_keyframes(&keyframes));
        register(
            &mut self.registry.lock().animations,
            name,
            keyframes,
            "animation",
        )
    }

    /// Register a composite style and return its class name (without the leading `.`).
    pub fn add_composite_style(&self, composite: impl Into<CompositeStyle>) -> String {
        let composite = composite.into();
        let name = content_name(CLASS_PREFIX, &canonical_composite(&composite));
        register(
            &mut self.registry.lock().composites,
            name,
            composite,
            "composite style",
        )
    }

    /// The number of distinct plain styles registered.
    pub fn style_count(&self) -> usize {
        self.registry.lock().styles.len()
    }

    /// The number of distinct animations registered.
    pub fn animation_count(&self) -> usize {
        self.registry.lock().animations.len()
    }

    /// The number of distinct composite styles registered.
    pub fn composite_count(&self) -> usize {
        self.registry.lock().composites.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        let registry = self.registry.lock();
        registry.styles.is_empty()
            && registry.animations.is_empty()
            && registry.composites.is_empty()
    }

    /// Returns `true` if `class_name` was handed out by [Self::add_style] or
    /// [Self::add_composite_style].
    pub fn contains_class(&self, class_name: &str) -> bool {
        let registry = self.registry.lock();
        registry.styles.contains_key(class_name) || registry.composites.contains_key(class_name)
    }

    /// Forget everything that has been registered.
    pub fn clear(&self) {
        let mut registry = self.registry.lock();
        registry.styles.clear();
        registry.animations.clear();
        registry.composites.clear();
    }

    /// Generate the stylesheet for everything registered so far.
    ///
    /// Plain styles come first, then animations, then composite styles; each group is
    /// ordered by name and every rule lists its declarations by property, so the output
    /// only depends on what was registered.
    pub fn generate_css(&self) -> String {
        let registry = self.registry.lock();
        let mut css = String::new();

        for (class_name, style) in &registry.styles {
            write_rule(&mut css, &format!(".{class_name}"), style);
        }

        for (animation_name, keyframes) in &registry.animations {
            css.push_str("@keyframes ");
            css.push_str(animation_name);
            css.push_str(" { ");
            for (selector, style) in keyframes.iter() {
                write_rule(&mut css, selector, style);
            }
            css.push_str("} ");
        }

        for (class_name, composite) in &registry.composites {
            write_rule(&mut css, &format!(".{class_name}"), &composite.default);
            for (pseudo_class, style) in &composite.pseudo_classes {
                let selector = format!(".{class_name}{}", pseudo_class_suffix(pseudo_class));
                write_rule(&mut css, &selector, style);
            }
            for (pseudo_element, style) in &composite.pseudo_elements {
                let selector = format!(".{class_name}{}", pseudo_element_suffix(pseudo_element));
                write_rule(&mut css, &selector, style);
            }
            for (media_query, style) in &composite.media_queries {
                css.push_str(&media_prefixed(media_query));
                css.push_str(" { ");
                write_rule(&mut css, &format!(".{class_name}"), style);
                css.push_str("} ");
            }
        }

        tracing::trace!(
            styles = registry.styles.len(),
            animations = registry.animations.len(),
            composites = registry.composites.len(),
            bytes = css.len(),
            "generated stylesheet"
        );
        css
    }
}

impl CssGenerator for StyleManager {
    fn generate_css(&self) -> String {
        StyleManager::generate_css(self)
    }
}

fn register<T>(store: &mut BTreeMap<String, T>, name: String, value: T, kind: &str) -> String {
    match store.entry(name) {
        Entry::Vacant(entry) => {
            tracing::debug!(kind, name = entry.key().as_str(), "registered");
            let name = entry.key().clone();
            entry.insert(value);
            name
        }
        Entry::Occupied(entry) => {
            tracing::trace!(kind, name = entry.key().as_str(), "already registered");
            entry.key().clone()
        }
    }
}

fn write_rule(css: &mut String, selector: &str, style: &Style) {
    css.push_str(selector);
    css.push_str(" { ");
    style.write_declarations(css);
    css.push_str("} ");
}

fn pseudo_class_suffix(pseudo_class: &str) -> String {
    if pseudo_class.starts_with(':') {
        pseudo_class.to_string()
    } else {
        format!(":{pseudo_class}")
    }
}

fn pseudo_element_suffix(pseudo_element: &str) -> String {
    format!("::{}", pseudo_element.trim_start_matches(':'))
}

fn media_prefixed(media_query: &str) -> String {
    if media_query.starts_with("@media") {
        media_query.to_string()
    } else {
        format!("@media {media_query}")
    }
}

/// `prefix` followed by the hex of the first bytes of the SHA-256 of `canonical`.
fn content_name(prefix: &str, canonical: &str) -> String {
    let digest = Sha256::digest(canonical.as_bytes());
    format!("{prefix}{}", hex::encode(&digest[..NAME_HASH_BYTES]))
}

// Canonical forms are length-prefixed so that no two different contents serialize
// the same way, whatever characters the keys and values contain. Each form starts
// with its kind, keeping plain and composite class names apart.

fn canonical_style(style: &Style) -> String {
    let mut canonical = String::from("style;");
    push_declarations(&mut canonical, style);
    canonical
}

fn canonical_keyframes(keyframes: &Keyframes) -> String {
    let mut canonical = String::from("keyframes;");
    push_count(&mut canonical, keyframes.len());
    for (selector, style) in keyframes.iter() {
        push_field(&mut canonical, selector);
        push_declarations(&mut canonical, style);
    }
    canonical
}

fn canonical_composite(composite: &CompositeStyle) -> String {
    let mut canonical = String::from("composite;");
    push_declarations(&mut canonical, &composite.default);
    for variants in [
        &composite.pseudo_classes,
        &composite.pseudo_elements,
        &composite.media_queries,
    ] {
        push_count(&mut canonical, variants.len());
        for (key, style) in variants {
            push_field(&mut canonical, key);
            push_declarations(&mut canonical, style);
        }
    }
    canonical
}

fn push_declarations(canonical: &mut String, style: &Style) {
    push_count(canonical, style.len());
    for (property, value) in style.iter() {
        push_field(canonical, property);
        push_field(canonical, value);
    }
}

fn push_count(canonical: &mut String, count: usize) {
    let _ = write!(canonical, "{count}#");
}

fn push_field(canonical: &mut String, field: &str) {
    let _ = write!(canonical, "{}:{field}", field.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_stable_across_runs() {
        assert_eq!(canonical_style(&Style::from([("color", "red")])), "style;1#5:color3:red");
        let styles = StyleManager::new();
        assert_eq!(styles.add_style([("color", "red")]), "cls_e1241e89a1");
    }

    #[test]
    fn canonical_form_is_unambiguous() {
        let joined = Style::from([("a", "b;c:d")]);
        let split = Style::from([("a", "b"), ("c", "d")]);
        assert_ne!(canonical_style(&joined), canonical_style(&split));
    }

    #[test]
    fn composite_with_only_default_gets_its_own_class() {
        let styles = StyleManager::new();
        let plain = styles.add_style([("color", "red")]);
        let composite = styles.add_composite_style(CompositeStyle::new([("color", "red")]));
        assert_ne!(plain, composite);
        assert!(styles.contains_class(&plain));
        assert!(styles.contains_class(&composite));
    }

    #[test]
    fn selector_prefixes_are_normalized() {
        assert_eq!(pseudo_class_suffix("hover"), ":hover");
        assert_eq!(pseudo_class_suffix(":focus"), ":focus");
        assert_eq!(pseudo_element_suffix("before"), "::before");
        assert_eq!(pseudo_element_suffix(":after"), "::after");
        assert_eq!(pseudo_element_suffix("::marker"), "::marker");
        assert_eq!(media_prefixed("(max-width: 600px)"), "@media (max-width: 600px)");
        assert_eq!(
            media_prefixed("@media screen and (min-width: 768px)"),
            "@media screen and (min-width: 768px)"
        );
    }

    #[test]
    fn clear_empties_every_store() {
        let styles = StyleManager::new();
        styles.add_style([("color", "red")]);
        styles.add_animation([("from", [("opacity", "0")])]);
        styles.add_composite_style(CompositeStyle::new([("margin", "0")]));
        assert!(!styles.is_empty());
        styles.clear();
        assert!(styles.is_empty());
        assert_eq!(styles.generate_css(), "");
    }
}
