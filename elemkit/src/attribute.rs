use bumpalo::collections::String as BumpString;
use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

/// HTML5 boolean attributes. These are rendered as a bare name when their value is
/// exactly `"true"`, and omitted entirely otherwise.
///
/// `hidden` is included, so `hidden="until-found"` cannot be expressed through an
/// attribute; use a raw node for that.
///
/// See <https://html.spec.whatwg.org/multipage/indices.html#attributes-3>.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "playsinline",
    "readonly",
    "required",
    "reversed",
    "selected",
];

/// Returns `true` if `name` is one of the [BOOLEAN_ATTRIBUTES].
pub fn is_boolean_attribute(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES.contains(&name)
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
/// A key-value pair for an HTML attribute.
pub struct Attribute<'bump> {
    /// The key of the attribute.
    pub key: BumpString<'bump>,
    /// The value of the attribute.
    pub value: BumpString<'bump>,
}

impl<'bump> Attribute<'bump> {
    /// Create a new attribute with a string key and value.
    pub fn new(bump: &'bump Bump, key: &str, value: &str) -> Self {
        Attribute {
            key: BumpString::from_str_in(key, bump),
            value: BumpString::from_str_in(value, bump),
        }
    }

    /// Create a boolean attribute. The value is stored as `"true"` or `"false"`.
    pub fn boolean(bump: &'bump Bump, key: &str, value: bool) -> Self {
        Self::new(bump, key, if value { "true" } else { "false" })
    }

    /// Get the value as a string slice.
    pub fn value_as_str(&self) -> &str {
        self.value.as_str()
    }

    /// Returns `true` if the value is wrapped in single quotes (e.g. `'{"quantity": 5}'`),
    /// in which case it is written verbatim instead of being wrapped in double quotes.
    pub fn is_single_quoted(&self) -> bool {
        let value = self.value.as_str();
        value.len() >= 2 && value.starts_with('\'') && value.ends_with('\'')
    }
}

/// Trait for types that can be converted into an Attribute with a bump allocator.
pub trait IntoAttribute<'bump> {
    /// Convert this value into an Attribute using the given bump allocator.
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump>;
}
impl<'bump> IntoAttribute<'bump> for Attribute<'bump> {
    fn into_attribute(self, _bump: &'bump Bump) -> Attribute<'bump> {
        self
    }
}
impl<'bump> IntoAttribute<'bump> for &str {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::boolean(bump, self, true)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, &str) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, &self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, &String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, self.0, self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (String, &str) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, &self.0, self.1)
    }
}
impl<'bump> IntoAttribute<'bump> for (String, String) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::new(bump, &self.0, &self.1)
    }
}
/// The value is stored as `"true"` or `"false"`. Only names in [BOOLEAN_ATTRIBUTES] are
/// dropped for `false`; any other name renders as `name="false"`.
impl<'bump> IntoAttribute<'bump> for (&str, bool) {
    fn into_attribute(self, bump: &'bump Bump) -> Attribute<'bump> {
        Attribute::boolean(bump, self.0, self.1)
    }
}

/// The attributes of an element.
///
/// This behaves like a map: keys are unique, and inserting an existing key replaces
/// its value. Insertion order is kept for inspection, but rendering always walks the
/// keys in sorted order (see [Attributes::sorted]).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Attributes<'bump> {
    entries: BumpVec<'bump, Attribute<'bump>>,
}

impl<'bump> Attributes<'bump> {
    /// Create an empty attribute map.
    pub fn new_in(bump: &'bump Bump) -> Self {
        Attributes {
            entries: BumpVec::new_in(bump),
        }
    }

    /// Create an attribute map from an iterator. Later duplicates override earlier ones.
    pub fn from_iter_in(
        iter: impl IntoIterator<Item = Attribute<'bump>>,
        bump: &'bump Bump,
    ) -> Self {
        let mut attributes = Self::new_in(bump);
        for attribute in iter {
            attributes.insert(attribute);
        }
        attributes
    }

    /// Insert an attribute, returning the previous value for its key if there was one.
    pub fn insert(&mut self, attribute: Attribute<'bump>) -> Option<BumpString<'bump>> {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.key == attribute.key)
        {
            Some(existing) => Some(std::mem::replace(&mut existing.value, attribute.value)),
            None => {
                self.entries.push(attribute);
                None
            }
        }
    }

    /// Get the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|a| a.key.as_str() == key)
            .map(|a| a.value.as_str())
    }

    /// Returns `true` if an attribute named `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute<'bump>> {
        self.entries.iter()
    }

    /// The attributes sorted lexicographically by key.
    pub fn sorted(&self) -> Vec<&Attribute<'bump>> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_unstable_by(|a, b| a.key.as_str().cmp(b.key.as_str()));
        sorted
    }
}

impl PartialEq for Attributes<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|a| other.get(a.key.as_str()) == Some(a.value.as_str()))
    }
}
impl Eq for Attributes<'_> {}
