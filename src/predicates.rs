//! Predicates for selecting links by their optional attributes
//!
//! Used with [`Links::link_by_matching`](crate::links::Links::link_by_matching)
//! and [`Links::links_by_matching`](crate::links::Links::links_by_matching)
//! to pick among several links sharing a link-relation type. Any
//! `Fn(&Link) -> bool` works as a predicate; these helpers cover the
//! common selections and compose via [`and`] and [`or`].

use crate::link::Link;

/// Match links having the given media type
pub fn having_type(media_type: impl Into<String>) -> impl Fn(&Link) -> bool {
    let media_type = media_type.into();
    move |link: &Link| link.media_type() == Some(media_type.as_str())
}

/// Match links having the given profile
pub fn having_profile(profile: impl Into<String>) -> impl Fn(&Link) -> bool {
    let profile = profile.into();
    move |link: &Link| link.profile() == Some(profile.as_str())
}

/// Match links having the given name
pub fn having_name(name: impl Into<String>) -> impl Fn(&Link) -> bool {
    let name = name.into();
    move |link: &Link| link.name() == Some(name.as_str())
}

/// Match links having the given name, or no name at all
pub fn optionally_having_name(name: impl Into<String>) -> impl Fn(&Link) -> bool {
    let name = name.into();
    move |link: &Link| link.name().is_none() || link.name() == Some(name.as_str())
}

/// Combine two predicates, matching links that satisfy both
pub fn and<A, B>(a: A, b: B) -> impl Fn(&Link) -> bool
where
    A: Fn(&Link) -> bool,
    B: Fn(&Link) -> bool,
{
    move |link: &Link| a(link) && b(link)
}

/// Combine two predicates, matching links that satisfy either
pub fn or<A, B>(a: A, b: B) -> impl Fn(&Link) -> bool
where
    A: Fn(&Link) -> bool,
    B: Fn(&Link) -> bool,
{
    move |link: &Link| a(link) || b(link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::Link;

    fn sample() -> Link {
        Link::builder("item", "http://example.org/items/42")
            .with_name("Foo")
            .with_media_type("text/html")
            .with_profile("http://example.org/profiles/item")
            .build()
    }

    #[test]
    fn test_having_type() {
        assert!(having_type("text/html")(&sample()));
        assert!(!having_type("text/plain")(&sample()));
    }

    #[test]
    fn test_having_profile() {
        assert!(having_profile("http://example.org/profiles/item")(&sample()));
        assert!(!having_profile("http://example.org/profiles/other")(&sample()));
    }

    #[test]
    fn test_having_name() {
        assert!(having_name("Foo")(&sample()));
        assert!(!having_name("Bar")(&sample()));
    }

    #[test]
    fn test_optionally_having_name() {
        let nameless = Link::builder("item", "http://example.org/items/41").build();
        assert!(optionally_having_name("Foo")(&nameless));
        assert!(optionally_having_name("Foo")(&sample()));
        assert!(!optionally_having_name("Bar")(&sample()));
    }

    #[test]
    fn test_and_or_combinators() {
        let both = and(having_name("Foo"), having_type("text/html"));
        assert!(both(&sample()));

        let neither = and(having_name("Bar"), having_type("text/html"));
        assert!(!neither(&sample()));

        let either = or(having_name("Bar"), having_type("text/html"));
        assert!(either(&sample()));
    }
}
