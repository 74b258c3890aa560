//! The Links collection
//!
//! An insertion-ordered multi-map from link-relation type to links, with
//! curie-aware lookup and an incremental builder. Collections are
//! immutable once built; `curies` registration and key canonicalization
//! happen atomically at construction time.

use indexmap::{IndexMap, IndexSet};

use crate::link::Link;
use crate::registry::RelRegistry;
use crate::rels::{default_array_rels, CURIES_REL};

/// The `_links` section of a HAL+JSON document
///
/// Keys are canonical (already-curied) relation types in insertion
/// order; links sharing a relation type keep their insertion order.
/// Lookup runs the requested relation type through the collection's
/// [`RelRegistry`], so links can be retrieved by their curied or their
/// expanded form.
#[derive(Debug, Clone)]
pub struct Links {
    links: IndexMap<String, Vec<Link>>,
    array_rels: IndexSet<String>,
    rel_registry: RelRegistry,
}

impl PartialEq for Links {
    /// Equality compares the links only, not the array-rel rendering
    /// policy or the registry
    fn eq(&self, other: &Self) -> bool {
        self.links == other.links
    }
}

impl Eq for Links {}

impl Default for Links {
    fn default() -> Self {
        Links::empty()
    }
}

impl Links {
    /// The canonical empty collection
    pub fn empty() -> Links {
        Links {
            links: IndexMap::new(),
            array_rels: default_array_rels(),
            rel_registry: RelRegistry::new(),
        }
    }

    /// Create a collection from a sequence of links
    ///
    /// Links are grouped by relation type in insertion order. Any
    /// `curies` links are registered and all relation types are replaced
    /// with their curied form where a template matches.
    pub fn linking_to(links: impl IntoIterator<Item = Link>) -> Links {
        Links::linking_to_with_array_rels(links, default_array_rels())
    }

    /// Create a collection from a sequence of links with an explicit set
    /// of array relation types
    pub fn linking_to_with_array_rels(
        links: impl IntoIterator<Item = Link>,
        array_rels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Links {
        Links::with_registry(
            group_by_rel(links),
            array_rels.into_iter().map(|rel| rel.into()).collect(),
            RelRegistry::new(),
        )
    }

    /// Create a builder for incremental accumulation of links
    pub fn builder() -> LinksBuilder {
        LinksBuilder::new()
    }

    /// Create a builder initialized from a prototype collection,
    /// including its array relation types
    pub fn copy_of(prototype: &Links) -> LinksBuilder {
        Links::builder()
            .with_array_rels(prototype.array_rels.iter().cloned())
            .with_links(prototype)
    }

    /// Shared constructor behind direct construction, `build()` and
    /// `using()`: registers the `curies` links into the registry, then
    /// canonicalizes every key through it.
    fn with_registry(
        grouped: IndexMap<String, Vec<Link>>,
        array_rels: IndexSet<String>,
        mut registry: RelRegistry,
    ) -> Links {
        if let Some(curies) = grouped.get(CURIES_REL) {
            for curi in curies {
                // invalid curie definitions are skipped; their rels keep
                // resolving to the literal form
                let _ = registry.register(curi);
            }
        }
        let mut links: IndexMap<String, Vec<Link>> = IndexMap::new();
        for (rel, group) in grouped {
            links
                .entry(registry.resolve(&rel))
                .or_default()
                .extend(group);
        }
        Links {
            links,
            array_rels,
            rel_registry: registry,
        }
    }

    /// Re-derive this collection against a shared registry
    ///
    /// Registers any local `curies` links into the given registry, so an
    /// enclosing document can propagate curie names down into nested
    /// collections, and returns a new collection whose keys are
    /// canonicalized against the combined registry.
    pub fn using(&self, registry: &mut RelRegistry) -> Links {
        if let Some(curies) = self.links.get(CURIES_REL) {
            for curi in curies {
                let _ = registry.register(curi);
            }
        }
        Links::with_registry(
            self.links.clone(),
            self.array_rels.clone(),
            registry.clone(),
        )
    }

    /// The first link having the given relation type
    ///
    /// The relation type may be given in curied or expanded form. "First"
    /// means first inserted. Absence is a normal empty result.
    pub fn link_by(&self, rel: &str) -> Option<&Link> {
        self.links_by(rel).first()
    }

    /// The first link having the given relation type and matching the
    /// predicate
    pub fn link_by_matching<P>(&self, rel: &str, predicate: P) -> Option<&Link>
    where
        P: Fn(&Link) -> bool,
    {
        self.links_by(rel).iter().find(|&link| predicate(link))
    }

    /// All links having the given relation type, in insertion order
    ///
    /// Returns an empty slice when there is no match.
    pub fn links_by(&self, rel: &str) -> &[Link] {
        let curied = self.rel_registry.resolve(rel);
        self.links.get(&curied).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All links having the given relation type and matching the
    /// predicate, in insertion order
    pub fn links_by_matching<P>(&self, rel: &str, predicate: P) -> Vec<&Link>
    where
        P: Fn(&Link) -> bool,
    {
        self.links_by(rel)
            .iter()
            .filter(|&link| predicate(link))
            .collect()
    }

    /// The canonical relation types of this collection, in insertion order
    pub fn rels(&self) -> impl Iterator<Item = &str> + '_ {
        self.links.keys().map(String::as_str)
    }

    /// All links of this collection, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Link> + '_ {
        self.links.values().flatten()
    }

    /// The relation types that are always serialized as an array of
    /// link-objects, even with a single link
    pub fn array_rels(&self) -> &IndexSet<String> {
        &self.array_rels
    }

    /// Re-derive a collection with a different array-rel rendering policy
    pub fn with_array_rels(
        mut self,
        rels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Links {
        self.array_rels = rels.into_iter().map(|rel| rel.into()).collect();
        self
    }

    /// Whether this collection contains no links
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub(crate) fn link_map(&self) -> &IndexMap<String, Vec<Link>> {
        &self.links
    }
}

fn group_by_rel(links: impl IntoIterator<Item = Link>) -> IndexMap<String, Vec<Link>> {
    let mut grouped: IndexMap<String, Vec<Link>> = IndexMap::new();
    for link in links {
        grouped.entry(link.rel().to_string()).or_default().push(link);
    }
    grouped
}

/// Builder for [`Links`] instances
///
/// Inserted links are checked for equivalence against links already
/// present under the same relation type; equivalent duplicates are
/// silently skipped.
#[derive(Debug)]
pub struct LinksBuilder {
    links: IndexMap<String, Vec<Link>>,
    array_rels: IndexSet<String>,
    rel_registry: RelRegistry,
}

impl LinksBuilder {
    fn new() -> LinksBuilder {
        LinksBuilder {
            links: IndexMap::new(),
            array_rels: default_array_rels(),
            rel_registry: RelRegistry::new(),
        }
    }

    /// Add a single link, skipping it if an equivalent link is already
    /// present
    pub fn with(mut self, link: Link) -> Self {
        self.insert(link);
        self
    }

    /// Add a sequence of links, skipping equivalent duplicates
    pub fn with_all(mut self, links: impl IntoIterator<Item = Link>) -> Self {
        for link in links {
            self.insert(link);
        }
        self
    }

    /// Add all links of another collection, skipping equivalent
    /// duplicates
    ///
    /// The other collection's array relation types are not copied.
    pub fn with_links(mut self, other: &Links) -> Self {
        for link in other.iter() {
            self.insert(link.clone());
        }
        self
    }

    fn insert(&mut self, link: Link) {
        let group = self.links.entry(link.rel().to_string()).or_default();
        if !group.iter().any(|existing| existing.is_equivalent_to(&link)) {
            group.push(link);
        }
    }

    /// Configure the relation types that are always rendered as an array
    /// of link-objects
    pub fn with_array_rels(
        mut self,
        rels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.array_rels = rels.into_iter().map(|rel| rel.into()).collect();
        self
    }

    /// Use the given registry for key canonicalization at build time
    pub fn using(mut self, registry: RelRegistry) -> Self {
        self.rel_registry = registry;
        self
    }

    /// Build the immutable collection
    ///
    /// Runs the same curie-registration and key-canonicalization pass as
    /// direct construction.
    pub fn build(self) -> Links {
        Links::with_registry(self.links, self.array_rels, self.rel_registry)
    }
}
