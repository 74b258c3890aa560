//! Well-known link-relation types
//!
//! Defines the relation-type constants used by the link factories and
//! the default set of relation types that are rendered as arrays.

use indexmap::IndexSet;

/// Relation type of CURI definition links
pub const CURIES_REL: &str = "curies";

/// Placeholder token inside a CURI template
pub const REL_PLACEHOLDER: &str = "{rel}";

/// Relation type of a resource's self link
pub const SELF_REL: &str = "self";

/// Relation type pointing from an item to its collection
pub const COLLECTION_REL: &str = "collection";

/// Relation type pointing from a collection to one of its items
pub const ITEM_REL: &str = "item";

/// Relation type of a profile link
pub const PROFILE_REL: &str = "profile";

/// Relation type of the next page in a paged collection
pub const NEXT_REL: &str = "next";

/// Relation type of the previous page in a paged collection
pub const PREV_REL: &str = "prev";

/// Relation types that are serialized as an array of link-objects even
/// when only a single link is present
pub fn default_array_rels() -> IndexSet<String> {
    [CURIES_REL, ITEM_REL, "items"]
        .iter()
        .map(|rel| rel.to_string())
        .collect()
}
