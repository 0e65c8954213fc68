//! Display tree for parsed entities.
//!
//! Rendering classifies every value once (link, image, date-time, text) and
//! records nesting, so a UI layer can map the tree to its own widgets by
//! matching on [`RenderedValue`] and [`Scalar`] without re-inspecting strings.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

use crate::config::DATETIME_MARKERS;
use crate::turtle::{ParsedEntity, PropertyValue};
use crate::url::{has_image_extension, is_absolute_url};

/// A single displayable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Plain text.
    Text(String),
    /// External link, opened in a new browsing context.
    Link { href: String },
    /// Embedded image. `alt` is the property key it was found under.
    Image { src: String, alt: String },
    /// XML Schema dateTime literal.
    DateTime {
        raw: String,
        value: DateTime<FixedOffset>,
    },
}

impl Scalar {
    /// Plain-text rendering, used outside the browser.
    pub fn display(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Link { href } => href.clone(),
            Self::Image { src, .. } => src.clone(),
            Self::DateTime { value, .. } => value.format("%Y-%m-%d %H:%M:%S %:z").to_string(),
        }
    }
}

/// Rendered form of a property value.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedValue {
    Scalar(Scalar),
    /// Ordered list of scalars.
    List(Vec<Scalar>),
    /// Nested entities, one indentation level deeper.
    Nested(Vec<RenderedEntity>),
}

/// A property key with its rendered value.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedProperty {
    pub key: String,
    pub value: RenderedValue,
}

/// A rendered entity: type line followed by its properties.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedEntity {
    /// Subject IRI, empty for blank nodes.
    pub subject: String,
    /// Types shortened to their last path segment.
    pub types: Vec<String>,
    pub properties: Vec<RenderedProperty>,
    /// 0 for top-level entities.
    pub depth: usize,
}

impl RenderedEntity {
    /// `"Type"` or `"Types"`, or `None` when the entity has no types.
    pub fn type_label(&self) -> Option<&'static str> {
        type_label(self.types.len())
    }

    /// Stable key for list rendering: the subject, or the position when blank.
    pub fn key(&self, index: usize) -> String {
        if self.subject.is_empty() {
            index.to_string()
        } else {
            self.subject.clone()
        }
    }
}

/// Label for a type line with `count` types.
pub fn type_label(count: usize) -> Option<&'static str> {
    match count {
        0 => None,
        1 => Some("Type"),
        _ => Some("Types"),
    }
}

/// Shorten a type IRI to its last `/` segment.
pub fn short_type(uri: &str) -> &str {
    uri.rsplit('/').next().unwrap_or(uri)
}

/// Render a top-level entity.
pub fn render_entity(entity: &ParsedEntity) -> RenderedEntity {
    render_entity_at(entity, 0)
}

fn render_entity_at(entity: &ParsedEntity, depth: usize) -> RenderedEntity {
    RenderedEntity {
        subject: entity.subject.clone(),
        types: entity
            .types
            .iter()
            .map(|t| short_type(t).to_string())
            .collect(),
        properties: entity
            .properties
            .iter()
            .map(|(key, value)| render_property_at(key, value, depth))
            .collect(),
        depth,
    }
}

/// Render one property of a top-level entity.
pub fn render_property(key: &str, value: &PropertyValue) -> RenderedProperty {
    render_property_at(key, value, 0)
}

fn render_property_at(key: &str, value: &PropertyValue, depth: usize) -> RenderedProperty {
    let value = match value {
        PropertyValue::Entities(entities) => RenderedValue::Nested(
            entities
                .iter()
                .map(|e| render_entity_at(e, depth + 1))
                .collect(),
        ),
        PropertyValue::List(values) => {
            RenderedValue::List(values.iter().map(|v| classify_scalar(key, v)).collect())
        }
        PropertyValue::Single(value) => RenderedValue::Scalar(classify_scalar(key, value)),
    };
    RenderedProperty {
        key: key.to_string(),
        value,
    }
}

/// Classify a string value found under `key`.
pub fn classify_scalar(key: &str, value: &str) -> Scalar {
    if is_absolute_url(value) {
        if has_image_extension(value) {
            return Scalar::Image {
                src: value.to_string(),
                alt: key.to_string(),
            };
        }
        return Scalar::Link {
            href: value.to_string(),
        };
    }

    if DATETIME_MARKERS.iter().any(|m| value.contains(m)) {
        return match parse_datetime_literal(value) {
            Some(parsed) => Scalar::DateTime {
                raw: value.to_string(),
                value: parsed,
            },
            None => Scalar::Text(value.to_string()),
        };
    }

    Scalar::Text(value.to_string())
}

/// Extract the quoted lexical form of a dateTime literal and parse it.
///
/// Accepts RFC 3339 and offset-less `YYYY-MM-DDTHH:MM:SS[.f]`, the latter
/// taken as UTC.
pub fn parse_datetime_literal(literal: &str) -> Option<DateTime<FixedOffset>> {
    let lexical = literal.split('"').nth(1)?.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(lexical) {
        return Some(parsed);
    }
    let naive = NaiveDateTime::parse_from_str(lexical, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    Some(Utc.from_utc_datetime(&naive).fixed_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle::parse;

    #[test]
    fn test_classify_links_and_images() {
        assert_eq!(
            classify_scalar("schema:url", "https://alice.example/"),
            Scalar::Link {
                href: "https://alice.example/".into()
            }
        );
        assert_eq!(
            classify_scalar("schema:image", "https://pod.example/me.PNG"),
            Scalar::Image {
                src: "https://pod.example/me.PNG".into(),
                alt: "schema:image".into()
            }
        );
        assert_eq!(
            classify_scalar("schema:name", "Alice"),
            Scalar::Text("Alice".into())
        );
    }

    #[test]
    fn test_classify_datetime() {
        let raw = "\"2024-03-01T10:00:00Z\"^^<http://www.w3.org/2001/XMLSchema#dateTime>";
        let Scalar::DateTime { value, .. } = classify_scalar("schema:dateCreated", raw) else {
            panic!("expected a date-time");
        };
        assert_eq!(value.to_rfc3339(), "2024-03-01T10:00:00+00:00");

        let naive = "\"2024-03-01T10:00:00\"^^xsd:dateTime";
        assert!(matches!(
            classify_scalar("k", naive),
            Scalar::DateTime { .. }
        ));
    }

    #[test]
    fn test_bad_datetime_falls_back_to_raw() {
        let raw = "\"yesterday\"^^xsd:dateTime";
        assert_eq!(classify_scalar("k", raw), Scalar::Text(raw.into()));
        let unquoted = "xsd:dateTime";
        assert_eq!(classify_scalar("k", unquoted), Scalar::Link { href: unquoted.into() });
    }

    #[test]
    fn test_short_type_and_label() {
        assert_eq!(short_type("http://schema.org/Person"), "Person");
        assert_eq!(short_type("schema:Person"), "schema:Person");
        assert_eq!(type_label(0), None);
        assert_eq!(type_label(1), Some("Type"));
        assert_eq!(type_label(3), Some("Types"));
    }

    #[test]
    fn test_render_entity_tree() {
        let entities = parse(
            "<urn:x> a <http://schema.org/Order> ;\n schema:tag \"a\", \"b\" ;\n schema:item [ a <http://schema.org/Product>, <http://schema.org/Thing> ; schema:name \"Pen\" ] .",
        );
        let rendered = render_entity(&entities[0]);

        assert_eq!(rendered.depth, 0);
        assert_eq!(rendered.types, vec!["Order"]);
        assert_eq!(rendered.type_label(), Some("Type"));
        assert_eq!(rendered.key(0), "urn:x");

        assert_eq!(rendered.properties[0].key, "schema:tag");
        assert_eq!(
            rendered.properties[0].value,
            RenderedValue::List(vec![Scalar::Text("a".into()), Scalar::Text("b".into())])
        );

        let RenderedValue::Nested(items) = &rendered.properties[1].value else {
            panic!("expected nested value");
        };
        assert_eq!(items[0].depth, 1);
        assert_eq!(items[0].type_label(), Some("Types"));
        assert_eq!(items[0].types, vec!["Product", "Thing"]);
        assert_eq!(items[0].key(4), "4");
    }

    #[test]
    fn test_render_single_property() {
        let rendered = render_property(
            "schema:url",
            &PropertyValue::Single("https://x.example/doc".into()),
        );
        assert!(matches!(
            rendered.value,
            RenderedValue::Scalar(Scalar::Link { .. })
        ));
    }

    #[test]
    fn test_scalar_display() {
        let raw = "\"2024-03-01T10:00:00+02:00\"^^xsd:dateTime";
        assert_eq!(
            classify_scalar("k", raw).display(),
            "2024-03-01 10:00:00 +02:00"
        );
        assert_eq!(Scalar::Text("x".into()).display(), "x");
    }
}
