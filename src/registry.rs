//! Link-relation resolution and CURI registration
//!
//! A [`RelRegistry`] holds the CURI templates of a document and rewrites
//! link-relation types between their full-URI and curied forms. It also
//! tracks which relation types are rendered as arrays of link-objects.
//!
//! Resolution is deliberately tolerant: identifiers that do not match any
//! registered template pass through unchanged, because most relation-type
//! strings (`self`, `item`, ...) are plain keywords that are never curied.

use indexmap::{IndexMap, IndexSet};
use url::Url;

use crate::error::HalError;
use crate::link::Link;
use crate::links::Links;
use crate::rels::{default_array_rels, CURIES_REL, REL_PLACEHOLDER};

/// A named CURI template, e.g. `x` -> `http://example.com/rels/{rel}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurieTemplate {
    name: String,
    template: String,
}

impl CurieTemplate {
    /// Build a template from a `curies` link
    ///
    /// The link must have rel `curies`, a name, and an href containing
    /// the `{rel}` placeholder exactly once.
    fn from_link(link: &Link) -> Result<CurieTemplate, HalError> {
        if link.rel() != CURIES_REL {
            return Err(HalError::NotACurie {
                rel: link.rel().to_string(),
            });
        }
        let name = link.name().ok_or_else(|| HalError::MissingCurieName {
            href: link.href().to_string(),
        })?;
        if link.href().matches(REL_PLACEHOLDER).count() != 1 {
            return Err(HalError::InvalidCurieTemplate {
                template: link.href().to_string(),
            });
        }
        Ok(CurieTemplate {
            name: name.to_string(),
            template: link.href().to_string(),
        })
    }

    /// The curie prefix, e.g. `x` in `x:foo`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The URI template containing the `{rel}` placeholder
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Match a full URI against the literal parts surrounding the
    /// placeholder, returning the captured `{rel}` value
    fn capture<'a>(&self, uri: &'a str) -> Option<&'a str> {
        let (prefix, suffix) = self.template.split_once(REL_PLACEHOLDER)?;
        let captured = uri.strip_prefix(prefix)?.strip_suffix(suffix)?;
        if captured.is_empty() {
            None
        } else {
            Some(captured)
        }
    }

    /// Substitute a relation name into the placeholder
    fn expand_rel(&self, rel: &str) -> String {
        self.template.replacen(REL_PLACEHOLDER, rel, 1)
    }
}

/// Registry of CURI templates and array relation types
///
/// Created empty via [`RelRegistry::new`] or pre-seeded from a
/// [`Links`] collection. `register` mutates the registry in place;
/// [`RelRegistry::merge_with`] combines two registries without
/// modifying either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelRegistry {
    curies: IndexMap<String, CurieTemplate>,
    array_rels: IndexSet<String>,
}

impl Default for RelRegistry {
    fn default() -> Self {
        RelRegistry::new()
    }
}

impl RelRegistry {
    /// Create an empty registry with the default array relation types
    /// (`curies`, `item`, `items`)
    pub fn new() -> RelRegistry {
        RelRegistry {
            curies: IndexMap::new(),
            array_rels: default_array_rels(),
        }
    }

    /// Create an empty registry with an explicit set of array relation
    /// types, replacing the defaults
    pub fn with_array_rels(rels: impl IntoIterator<Item = impl Into<String>>) -> RelRegistry {
        RelRegistry {
            curies: IndexMap::new(),
            array_rels: rels.into_iter().map(|rel| rel.into()).collect(),
        }
    }

    /// Create a registry pre-seeded with the `curies` links of a collection
    pub fn from_links(links: &Links) -> RelRegistry {
        let mut registry = RelRegistry::new();
        registry.register_curies(links);
        registry
    }

    /// Create a registry pre-seeded with the `curies` links of a collection
    /// and an explicit set of array relation types
    pub fn from_links_with_array_rels(
        links: &Links,
        rels: impl IntoIterator<Item = impl Into<String>>,
    ) -> RelRegistry {
        let mut registry = RelRegistry::with_array_rels(rels);
        registry.register_curies(links);
        registry
    }

    fn register_curies(&mut self, links: &Links) {
        for curi in links.links_by(CURIES_REL) {
            // invalid curie definitions are skipped; their rels keep
            // resolving to the literal form
            let _ = self.register(curi);
        }
    }

    /// Register a CURI definition link
    ///
    /// Stores or overwrites the template under its name and marks both
    /// the curie name and `curies` itself as array relation types. A
    /// rejected registration leaves the registry unchanged.
    pub fn register(&mut self, link: &Link) -> Result<(), HalError> {
        let curie = CurieTemplate::from_link(link)?;
        self.array_rels.insert(CURIES_REL.to_string());
        self.array_rels.insert(curie.name.clone());
        self.curies.insert(curie.name.clone(), curie);
        Ok(())
    }

    /// Resolve a relation-type identifier to its canonical curied form
    ///
    /// Already-curied identifiers with a known prefix pass through
    /// unchanged. Full URIs are matched against every registered template
    /// in registration order; the first match wins. Anything else is
    /// returned unchanged.
    pub fn resolve(&self, rel: &str) -> String {
        if let Some((prefix, _)) = rel.split_once(':') {
            if self.curies.contains_key(prefix) {
                return rel.to_string();
            }
        }
        if Url::parse(rel).is_ok() {
            for curie in self.curies.values() {
                if let Some(captured) = curie.capture(rel) {
                    return format!("{}:{}", curie.name, captured);
                }
            }
        }
        rel.to_string()
    }

    /// Expand a curied relation-type identifier back to its full URI
    ///
    /// Identifiers without a recognizable curie form, or with an unknown
    /// prefix, are returned unchanged.
    pub fn expand(&self, rel: &str) -> String {
        if let Some((prefix, suffix)) = rel.split_once(':') {
            if let Some(curie) = self.curies.get(prefix) {
                return curie.expand_rel(suffix);
            }
        }
        rel.to_string()
    }

    /// Whether the identifier names a relation type that is always
    /// rendered as an array of link-objects
    pub fn is_array_rel(&self, rel: &str) -> bool {
        self.array_rels.contains(rel) || self.array_rels.contains(self.resolve(rel).as_str())
    }

    /// The configured array relation types
    ///
    /// Does not include relation types that merely happen to carry more
    /// than one link at serialization time.
    pub fn array_rels(&self) -> &IndexSet<String> {
        &self.array_rels
    }

    /// Combine two registries into a new one
    ///
    /// Curie templates are unioned with `other` taking precedence on
    /// name collisions; array relation types are unioned. Neither
    /// registry is modified.
    pub fn merge_with(&self, other: &RelRegistry) -> RelRegistry {
        let mut merged = self.clone();
        for (name, curie) in &other.curies {
            merged.curies.insert(name.clone(), curie.clone());
        }
        for rel in &other.array_rels {
            merged.array_rels.insert(rel.clone());
        }
        merged
    }
}
