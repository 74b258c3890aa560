//! JSON wire adapter for the links collection
//!
//! Translates between [`Links`] and the `_links` object of a HAL+JSON
//! document. A relation type is written as an array of link-objects iff
//! it carries more than one link or is a configured array rel; on read,
//! both shapes are accepted and `curies` entries are registered before
//! any other relation type is resolved.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::HalError;
use crate::link::Link;
use crate::links::Links;

/// Render a collection as a `_links` JSON object
pub fn links_to_json(links: &Links) -> Value {
    let mut object = Map::new();
    for (rel, group) in links.link_map() {
        if group.len() > 1 || links.array_rels().contains(rel) {
            let array = group.iter().map(link_to_json).collect();
            object.insert(rel.clone(), Value::Array(array));
        } else if let Some(single) = group.first() {
            object.insert(rel.clone(), link_to_json(single));
        }
    }
    Value::Object(object)
}

/// Render a single link as a link-object
///
/// The rel is not part of the link-object (it is the enclosing map key);
/// `templated` is emitted only when the href is a template.
pub fn link_to_json(link: &Link) -> Value {
    let mut object = Map::new();
    object.insert("href".to_string(), Value::String(link.href().to_string()));
    if link.templated() {
        object.insert("templated".to_string(), Value::Bool(true));
    }
    let optional_fields = [
        ("type", link.media_type()),
        ("hreflang", link.hreflang()),
        ("title", link.title()),
        ("name", link.name()),
        ("profile", link.profile()),
        ("deprecation", link.deprecation()),
    ];
    for (field, value) in optional_fields {
        if let Some(value) = value {
            object.insert(field.to_string(), Value::String(value.to_string()));
        }
    }
    Value::Object(object)
}

/// Parse a `_links` JSON object into a collection
///
/// Every key's value must be a single link-object or an array of
/// link-objects; anything else is a format violation. Document key order
/// is preserved.
pub fn links_from_json(value: &Value) -> Result<Links, HalError> {
    let object = value.as_object().ok_or_else(|| HalError::FormatViolation {
        rel: "_links".to_string(),
        value: value.clone(),
    })?;

    let mut links = Vec::new();
    for (rel, entry) in object {
        match entry {
            Value::Object(_) => links.push(link_from_json(rel, entry)?),
            Value::Array(items) => {
                for item in items {
                    links.push(link_from_json(rel, item)?);
                }
            }
            _ => {
                return Err(HalError::FormatViolation {
                    rel: rel.clone(),
                    value: entry.clone(),
                });
            }
        }
    }
    Ok(Links::linking_to(links))
}

/// Parse a single link-object, taking the rel from the enclosing map key
pub fn link_from_json(rel: &str, value: &Value) -> Result<Link, HalError> {
    let object = value.as_object().ok_or_else(|| HalError::FormatViolation {
        rel: rel.to_string(),
        value: value.clone(),
    })?;
    let href = object
        .get("href")
        .and_then(Value::as_str)
        .ok_or_else(|| HalError::FormatViolation {
            rel: rel.to_string(),
            value: value.clone(),
        })?;

    let mut builder = Link::builder(rel, href);
    if let Some(name) = object.get("name").and_then(Value::as_str) {
        builder = builder.with_name(name);
    }
    if let Some(title) = object.get("title").and_then(Value::as_str) {
        builder = builder.with_title(title);
    }
    if let Some(media_type) = object.get("type").and_then(Value::as_str) {
        builder = builder.with_media_type(media_type);
    }
    if let Some(hreflang) = object.get("hreflang").and_then(Value::as_str) {
        builder = builder.with_hreflang(hreflang);
    }
    if let Some(profile) = object.get("profile").and_then(Value::as_str) {
        builder = builder.with_profile(profile);
    }
    if let Some(deprecation) = object.get("deprecation").and_then(Value::as_str) {
        builder = builder.with_deprecation(deprecation);
    }
    Ok(builder.build())
}

/// Serialize a collection to a JSON string
pub fn to_json_string(links: &Links, pretty: bool) -> Result<String, HalError> {
    let value = links_to_json(links);
    if pretty {
        Ok(serde_json::to_string_pretty(&value)?)
    } else {
        Ok(serde_json::to_string(&value)?)
    }
}

impl Serialize for Links {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        links_to_json(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D>(deserializer: D) -> Result<Links, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        links_from_json(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::{curi, item, link, self_link, Link};
    use serde_json::json;

    #[test]
    fn test_single_link_is_written_as_object() {
        let links = Links::linking_to(vec![self_link("http://example.org/items/42")]);
        assert_eq!(
            links_to_json(&links),
            json!({"self": {"href": "http://example.org/items/42"}})
        );
    }

    #[test]
    fn test_multiple_links_are_written_as_array() {
        let links = Links::linking_to(vec![
            link("foo", "http://example.org/foo/1"),
            link("foo", "http://example.org/foo/2"),
        ]);
        assert_eq!(
            links_to_json(&links),
            json!({"foo": [
                {"href": "http://example.org/foo/1"},
                {"href": "http://example.org/foo/2"}
            ]})
        );
    }

    #[test]
    fn test_array_rel_is_written_as_array_with_single_link() {
        let links = Links::linking_to(vec![item("http://example.org/items/1")]);
        assert_eq!(
            links_to_json(&links),
            json!({"item": [{"href": "http://example.org/items/1"}]})
        );
    }

    #[test]
    fn test_configured_array_rel_overrides_single_rendering() {
        let links = Links::linking_to(vec![link("foo", "http://example.org/foo")])
            .with_array_rels(["foo"]);
        assert_eq!(
            links_to_json(&links),
            json!({"foo": [{"href": "http://example.org/foo"}]})
        );
    }

    #[test]
    fn test_templated_is_emitted_for_templated_href() {
        let links = Links::linking_to(vec![link("search", "http://example.org/items{?q}")]);
        assert_eq!(
            links_to_json(&links),
            json!({"search": {"href": "http://example.org/items{?q}", "templated": true}})
        );
    }

    #[test]
    fn test_link_object_carries_optional_attributes() {
        let links = Links::linking_to(vec![Link::builder("about", "http://example.org/about")
            .with_name("Foo")
            .with_title("About")
            .with_media_type("text/html")
            .with_hreflang("de")
            .with_profile("http://example.org/profiles/about")
            .with_deprecation("http://example.org/deprecations/about")
            .build()]);

        assert_eq!(
            links_to_json(&links),
            json!({"about": {
                "href": "http://example.org/about",
                "type": "text/html",
                "hreflang": "de",
                "title": "About",
                "name": "Foo",
                "profile": "http://example.org/profiles/about",
                "deprecation": "http://example.org/deprecations/about"
            }})
        );
    }

    #[test]
    fn test_read_single_object_and_array() {
        let links = links_from_json(&json!({
            "self": {"href": "http://example.org/items"},
            "item": [
                {"href": "http://example.org/items/1"},
                {"href": "http://example.org/items/2"}
            ]
        }))
        .unwrap();

        assert_eq!(
            links.link_by("self").map(|l| l.href()),
            Some("http://example.org/items")
        );
        assert_eq!(links.links_by("item").len(), 2);
        assert_eq!(links.rels().collect::<Vec<_>>(), vec!["self", "item"]);
    }

    #[test]
    fn test_read_registers_curies() {
        let links = links_from_json(&json!({
            "curies": [
                {"name": "o", "href": "http://spec.example.com/rels/{rel}", "templated": true}
            ],
            "o:product": {"href": "http://example.org/products/42"}
        }))
        .unwrap();

        assert!(links
            .link_by("http://spec.example.com/rels/product")
            .is_some());
    }

    #[test]
    fn test_read_curies_canonicalize_full_rels() {
        let links = links_from_json(&json!({
            "curies": [
                {"name": "o", "href": "http://spec.example.com/rels/{rel}", "templated": true}
            ],
            "http://spec.example.com/rels/product": {"href": "http://example.org/products/42"}
        }))
        .unwrap();

        assert_eq!(links.rels().collect::<Vec<_>>(), vec!["curies", "o:product"]);
    }

    #[test]
    fn test_read_rejects_scalar_rel_value() {
        let result = links_from_json(&json!({"self": "http://example.org"}));
        assert!(matches!(result, Err(HalError::FormatViolation { .. })));
    }

    #[test]
    fn test_read_rejects_missing_href() {
        let result = links_from_json(&json!({"self": {"title": "no href"}}));
        assert!(matches!(result, Err(HalError::FormatViolation { .. })));
    }

    #[test]
    fn test_read_rejects_non_object_document() {
        let result = links_from_json(&json!(["not", "an", "object"]));
        assert!(matches!(result, Err(HalError::FormatViolation { .. })));
    }

    #[test]
    fn test_templated_is_derived_on_read() {
        // the stored flag is ignored, the href decides
        let links = links_from_json(&json!({
            "search": {"href": "http://example.org/items{?q}", "templated": false},
            "self": {"href": "http://example.org/items", "templated": true}
        }))
        .unwrap();

        assert!(links.link_by("search").unwrap().templated());
        assert!(!links.link_by("self").unwrap().templated());
    }

    #[test]
    fn test_wire_round_trip() {
        let document = json!({
            "curies": [
                {"name": "o", "href": "http://spec.example.com/rels/{rel}", "templated": true}
            ],
            "self": {"href": "http://example.org/products"},
            "o:product": [
                {"href": "http://example.org/products/42", "name": "First"},
                {"href": "http://example.org/products/44", "name": "Second"}
            ]
        });

        let links = links_from_json(&document).unwrap();
        assert_eq!(links_to_json(&links), document);
    }

    #[test]
    fn test_serde_integration() {
        let links = Links::linking_to(vec![
            self_link("http://example.org/items"),
            item("http://example.org/items/1"),
        ]);

        let value = serde_json::to_value(&links).unwrap();
        assert_eq!(value, links_to_json(&links));

        let parsed: Links = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, links);
    }

    #[test]
    fn test_serde_rejects_malformed_document() {
        let result: Result<Links, _> =
            serde_json::from_value(json!({"self": 42}));
        assert!(result.is_err());
    }

    #[test]
    fn test_to_json_string() {
        let links = Links::linking_to(vec![curi("o", "http://spec.example.com/rels/{rel}")]);
        let compact = to_json_string(&links, false).unwrap();
        assert_eq!(
            compact,
            r#"{"curies":[{"href":"http://spec.example.com/rels/{rel}","templated":true,"name":"o"}]}"#
        );
    }
}
