//! Slug derivation for records that have no stored slug.
//!
//! Subcollections are addressed by a slug computed from their name. Route
//! generation and lookups both go through [`derive_slug`], so a generated
//! route always resolves back to the record it came from.

use catalog_store::Subcollection;

/// Lowercase `name` and replace each run of whitespace with a single `-`.
///
/// Leading and trailing whitespace is not trimmed; it becomes a leading or
/// trailing `-` like any other run.
///
/// ```
/// use catalog_core::derive_slug;
///
/// assert_eq!(derive_slug("Hand Tools"), "hand-tools");
/// assert_eq!(derive_slug("Power \t  Saws"), "power-saws");
/// ```
pub fn derive_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

/// The route slug of a subcollection.
pub fn subcollection_slug(subcollection: &Subcollection) -> String {
    derive_slug(&subcollection.name)
}
