//! Combinators for building trees with expressions.

/// Pick `when_true` or `when_false` depending on `condition`.
///
/// Combined with [crate::Node::None] this lets a branch render nothing:
///
/// ```
/// use elemkit::{bumpalo::Bump, builder::Builder, util::if_else};
///
/// let bump = Bump::new();
/// let b = Builder::new(&bump);
/// let logged_in = false;
/// let nav = b.nav([])(if_else(logged_in, b.a([])(b.text("Log out")), b.none()));
/// assert_eq!(nav.render(), "<nav></nav>");
/// ```
pub fn if_else<T>(condition: bool, when_true: T, when_false: T) -> T {
    if condition {
        when_true
    } else {
        when_false
    }
}

/// Map every item to a node (or anything else), keeping the input order.
pub fn map_each<T, N>(items: impl IntoIterator<Item = T>, f: impl FnMut(T) -> N) -> Vec<N> {
    items.into_iter().map(f).collect()
}

/// Like [map_each], but for fallible mappings. Stops at and returns the first error.
pub fn try_map_each<T, N, E>(
    items: impl IntoIterator<Item = T>,
    f: impl FnMut(T) -> Result<N, E>,
) -> Result<Vec<N>, E> {
    items.into_iter().map(f).collect()
}
