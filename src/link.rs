//! The Link value object
//!
//! Immutable representation of a single hypermedia link as specified by
//! [draft-kelly-json-hal-08](https://tools.ietf.org/html/draft-kelly-json-hal-08#section-5),
//! created via the factory functions or a [`LinkBuilder`].

use crate::rels::{COLLECTION_REL, CURIES_REL, ITEM_REL, PROFILE_REL, SELF_REL};

/// A single hypermedia link
///
/// Two links are *equivalent* if they share `rel`, `href` and `name`;
/// equivalence is what the [`LinksBuilder`](crate::links::LinksBuilder)
/// uses to drop duplicates on insert. Full equality (`==`) compares
/// every attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link {
    rel: String,
    href: String,
    name: Option<String>,
    title: Option<String>,
    media_type: Option<String>,
    hreflang: Option<String>,
    profile: Option<String>,
    deprecation: Option<String>,
}

impl Link {
    /// Create a builder for a link with the given relation type and href
    pub fn builder(rel: impl Into<String>, href: impl Into<String>) -> LinkBuilder {
        LinkBuilder {
            link: Link {
                rel: rel.into(),
                href: href.into(),
                name: None,
                title: None,
                media_type: None,
                hreflang: None,
                profile: None,
                deprecation: None,
            },
        }
    }

    /// The link-relation type of this link
    pub fn rel(&self) -> &str {
        &self.rel
    }

    /// The href of this link, possibly containing RFC 6570 placeholders
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Whether the href is a URI template
    ///
    /// Derived from the href, never stored separately.
    pub fn templated(&self) -> bool {
        self.href.contains('{')
    }

    /// The secondary key used to select between links sharing a rel
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Human-readable title of the link
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Media type hint of the target resource (wire field `type`)
    pub fn media_type(&self) -> Option<&str> {
        self.media_type.as_deref()
    }

    /// Language of the target resource
    pub fn hreflang(&self) -> Option<&str> {
        self.hreflang.as_deref()
    }

    /// URI of a profile the target resource conforms to
    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    /// URL with information about the deprecation of the link
    pub fn deprecation(&self) -> Option<&str> {
        self.deprecation.as_deref()
    }

    /// Check whether two links are equivalent
    ///
    /// Only `rel`, `href` and `name` take part in the comparison; all
    /// other attributes are ignored.
    pub fn is_equivalent_to(&self, other: &Link) -> bool {
        self.rel == other.rel && self.href == other.href && self.name == other.name
    }
}

/// Create a link with the given relation type and href
pub fn link(rel: impl Into<String>, href: impl Into<String>) -> Link {
    Link::builder(rel, href).build()
}

/// Create a `self` link
pub fn self_link(href: impl Into<String>) -> Link {
    Link::builder(SELF_REL, href).build()
}

/// Create a `collection` link
pub fn collection(href: impl Into<String>) -> Link {
    Link::builder(COLLECTION_REL, href).build()
}

/// Create an `item` link
pub fn item(href: impl Into<String>) -> Link {
    Link::builder(ITEM_REL, href).build()
}

/// Create a `profile` link
pub fn profile_link(href: impl Into<String>) -> Link {
    Link::builder(PROFILE_REL, href).build()
}

/// Create a CURI definition link
///
/// `name` is the curie prefix, `template` the URI template containing
/// the `{rel}` placeholder, e.g. `curi("x", "http://example.com/rels/{rel}")`.
pub fn curi(name: impl Into<String>, template: impl Into<String>) -> Link {
    Link::builder(CURIES_REL, template).with_name(name).build()
}

/// Builder for [`Link`] instances
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    link: Link,
}

impl LinkBuilder {
    /// Set the name of the link
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.link.name = Some(name.into());
        self
    }

    /// Set the title of the link
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.link.title = Some(title.into());
        self
    }

    /// Set the media type of the linked resource
    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.link.media_type = Some(media_type.into());
        self
    }

    /// Set the language of the linked resource
    pub fn with_hreflang(mut self, hreflang: impl Into<String>) -> Self {
        self.link.hreflang = Some(hreflang.into());
        self
    }

    /// Set the profile of the linked resource
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.link.profile = Some(profile.into());
        self
    }

    /// Set the deprecation information URL of the link
    pub fn with_deprecation(mut self, deprecation: impl Into<String>) -> Self {
        self.link.deprecation = Some(deprecation.into());
        self
    }

    /// Build the immutable link
    pub fn build(self) -> Link {
        self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_factories() {
        let self_l = self_link("http://example.org/items/42");
        assert_eq!(self_l.rel(), "self");
        assert_eq!(self_l.href(), "http://example.org/items/42");

        assert_eq!(item("http://example.org/items/1").rel(), "item");
        assert_eq!(collection("http://example.org/items").rel(), "collection");
        assert_eq!(profile_link("http://example.org/profile").rel(), "profile");
        assert_eq!(link("about", "http://example.org/about").rel(), "about");
    }

    #[test]
    fn test_curi_factory() {
        let definition = curi("x", "http://example.com/rels/{rel}");
        assert_eq!(definition.rel(), "curies");
        assert_eq!(definition.name(), Some("x"));
        assert_eq!(definition.href(), "http://example.com/rels/{rel}");
        assert!(definition.templated());
    }

    #[test]
    fn test_templated_is_derived_from_href() {
        assert!(link("search", "http://example.org/items{?q}").templated());
        assert!(!link("search", "http://example.org/items").templated());
    }

    #[test]
    fn test_builder_sets_all_attributes() {
        let link = Link::builder("item", "http://example.org/items/42")
            .with_name("Foo")
            .with_title("The answer")
            .with_media_type("text/html")
            .with_hreflang("de")
            .with_profile("http://example.org/profiles/item")
            .with_deprecation("http://example.org/deprecations/item")
            .build();

        assert_eq!(link.name(), Some("Foo"));
        assert_eq!(link.title(), Some("The answer"));
        assert_eq!(link.media_type(), Some("text/html"));
        assert_eq!(link.hreflang(), Some("de"));
        assert_eq!(link.profile(), Some("http://example.org/profiles/item"));
        assert_eq!(link.deprecation(), Some("http://example.org/deprecations/item"));
    }

    #[test]
    fn test_equivalence_ignores_secondary_attributes() {
        let a = Link::builder("item", "http://example.org/items/42")
            .with_media_type("text/html")
            .build();
        let b = Link::builder("item", "http://example.org/items/42")
            .with_media_type("text/plain")
            .with_title("different")
            .build();

        assert!(a.is_equivalent_to(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_equivalence_compares_rel_href_and_name() {
        let a = link("item", "http://example.org/items/42");

        let other_rel = link("related", "http://example.org/items/42");
        let other_href = link("item", "http://example.org/items/44");
        let other_name = Link::builder("item", "http://example.org/items/42")
            .with_name("Foo")
            .build();

        assert!(!a.is_equivalent_to(&other_rel));
        assert!(!a.is_equivalent_to(&other_href));
        assert!(!a.is_equivalent_to(&other_name));
    }
}
