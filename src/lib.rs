//! HAL+JSON `_links` Library
//!
//! This library models the `_links` section of a HAL+JSON hypermedia
//! document: a collection of typed, named link relations, together with
//! a registry for compacting verbose link-relation-type URIs into short
//! "CURIed" names and expanding them back.
//!
//! # Overview
//!
//! A HAL document carries its links as a JSON object mapping
//! link-relation types to one or more link-objects. This library covers:
//!
//! 1. The [`Link`] value object describing one hypermedia link
//! 2. The [`Links`] collection, an insertion-ordered multi-map from
//!    relation type to links, with curie-aware lookup and an incremental
//!    builder with dedup-on-insert
//! 3. The [`RelRegistry`], which registers CURI templates and resolves
//!    relation types between their full-URI and curied forms
//! 4. The wire adapter translating collections from and to the JSON
//!    `_links` object, including the single-object vs array rendering
//!    policy
//!
//! # Usage
//!
//! ## Build and query a collection
//!
//! ```
//! use hal_links::{item, self_link, Links};
//!
//! let links = Links::linking_to(vec![
//!     self_link("http://example.org/items"),
//!     item("http://example.org/items/1"),
//!     item("http://example.org/items/2"),
//! ]);
//!
//! assert_eq!(
//!     links.link_by("self").map(|link| link.href()),
//!     Some("http://example.org/items")
//! );
//! assert_eq!(links.links_by("item").len(), 2);
//! ```
//!
//! ## CURIed link-relation types
//!
//! ```
//! use hal_links::{curi, link, Links};
//!
//! let links = Links::linking_to(vec![
//!     curi("o", "http://spec.example.com/rels/{rel}"),
//!     link("o:product", "http://example.org/products/42"),
//! ]);
//!
//! // lookup works with the curied or the expanded form
//! assert!(links.link_by("o:product").is_some());
//! assert!(links.link_by("http://spec.example.com/rels/product").is_some());
//! ```
//!
//! ## Wire format
//!
//! ```
//! use hal_links::{links_from_json, links_to_json, self_link, Links};
//! use serde_json::json;
//!
//! let links = Links::linking_to(vec![self_link("http://example.org")]);
//! assert_eq!(
//!     links_to_json(&links),
//!     json!({"self": {"href": "http://example.org"}})
//! );
//!
//! let parsed = links_from_json(&json!({
//!     "item": [{"href": "http://example.org/items/1"}]
//! })).unwrap();
//! assert_eq!(parsed.links_by("item").len(), 1);
//! ```

pub mod codec;
pub mod error;
pub mod link;
pub mod links;
pub mod predicates;
pub mod registry;
pub mod rels;

// Re-export main types for convenience
pub use crate::codec::{
    link_from_json, link_to_json, links_from_json, links_to_json, to_json_string,
};
pub use crate::error::HalError;
pub use crate::link::{collection, curi, item, link, profile_link, self_link, Link, LinkBuilder};
pub use crate::links::{Links, LinksBuilder};
pub use crate::registry::{CurieTemplate, RelRegistry};
pub use crate::rels::{default_array_rels, CURIES_REL, REL_PLACEHOLDER};
