//! Best-effort parser for a textual subset of Turtle.
//!
//! Turns a document into one [`ParsedEntity`] per subject block:
//!
//! ```text
//! <https://pod.example/card#me>
//!     a schema:Person, foaf:Agent ;
//!     schema:name "Alice" ;
//!     schema:knows <https://pod.example/bob#me> ;
//!     schema:address [ a schema:PostalAddress ; schema:city "Lisbon" ] .
//! ```
//!
//! This is a line-oriented scan, not a grammar. Blocks without a leading
//! `<subject>` and statements that do not look like `predicate object` are
//! dropped silently. [`parse`] never fails and never panics.

mod block;
pub(crate) mod scanner;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::config::{MAX_NESTING_DEPTH, TYPE_TOKEN};
use scanner::Object;

pub use block::split_blocks;

/// `predicate objects` where predicate is `prefix:local` or `<IRI>`.
static STATEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(<[^<>]+>|[A-Za-z0-9_.\-]*:[^ \t\r\n"<>\[\]]*)[ \t\r\n]+(.+)$"#)
        .expect("statement pattern is valid")
});

// =============================================================================
// Data Model
// =============================================================================

/// One subject and everything stated about it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedEntity {
    /// Subject IRI. Empty for nested blank nodes.
    pub subject: String,
    /// Values of the `a` statement, in document order.
    pub types: Vec<String>,
    /// Remaining statements, in first-seen key order.
    pub properties: Properties,
}

impl ParsedEntity {
    /// Whether this entity came from a nested blank node.
    pub fn is_blank(&self) -> bool {
        self.subject.is_empty()
    }
}

/// Value of a property: one string, repeated strings, or nested entities.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Single(String),
    List(Vec<String>),
    Entities(Vec<ParsedEntity>),
}

impl PropertyValue {
    /// Number of values held.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::List(items) => items.len(),
            Self::Entities(items) => items.len(),
        }
    }

    /// Whether the value holds no items (an empty list or entity list).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Insertion-ordered property map.
///
/// Keys keep the order in which they were first seen; repeated keys merge
/// into the existing entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(Vec<(String, PropertyValue)>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    /// Add a string value, promoting a single value to a list on repeat.
    ///
    /// Returns `false` when the key already holds nested entities.
    pub fn insert_text(&mut self, key: &str, value: String) -> bool {
        let Some(existing) = self.entry_mut(key) else {
            self.0.push((key.to_string(), PropertyValue::Single(value)));
            return true;
        };
        match existing {
            PropertyValue::Single(first) => {
                let first = std::mem::take(first);
                *existing = PropertyValue::List(vec![first, value]);
                true
            }
            PropertyValue::List(values) => {
                values.push(value);
                true
            }
            PropertyValue::Entities(_) => false,
        }
    }

    /// Add a nested entity. Returns `false` when the key already holds strings.
    pub fn insert_entity(&mut self, key: &str, entity: ParsedEntity) -> bool {
        let Some(existing) = self.entry_mut(key) else {
            self.0
                .push((key.to_string(), PropertyValue::Entities(vec![entity])));
            return true;
        };
        match existing {
            PropertyValue::Entities(entities) => {
                entities.push(entity);
                true
            }
            _ => false,
        }
    }

    fn entry_mut(&mut self, key: &str) -> Option<&mut PropertyValue> {
        self.0.iter_mut().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl Serialize for Properties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Parse every subject block of a document.
pub fn parse(content: &str) -> Vec<ParsedEntity> {
    let entities: Vec<ParsedEntity> = split_blocks(content)
        .into_iter()
        .filter_map(parse_block)
        .collect();
    tracing::debug!(
        bytes = content.len(),
        entities = entities.len(),
        "parsed turtle content"
    );
    entities
}

/// Parse a single block, or `None` if it has no leading `<subject>`.
fn parse_block(block: &str) -> Option<ParsedEntity> {
    let lines = block::block_lines(block);
    let first = lines.first()?;
    let Some((subject, rest)) = block::leading_subject(first) else {
        tracing::trace!(line = %first, "skipping block without subject");
        return None;
    };

    let mut body = String::from(rest.trim());
    for line in &lines[1..] {
        body.push(' ');
        body.push_str(line);
    }

    let mut entity = parse_body(&body, 0);
    entity.subject = subject.to_string();
    Some(entity)
}

/// Parse the statements following a subject (or inside a blank node).
fn parse_body(body: &str, depth: usize) -> ParsedEntity {
    let mut entity = ParsedEntity::default();
    let mut has_types = false;

    for statement in scanner::split_top_level(scanner::until_terminator(body), ';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }

        if let Some(types) = type_statement(statement) {
            if !has_types {
                entity.types = types;
                has_types = true;
            }
            continue;
        }

        let Some(caps) = STATEMENT.captures(statement) else {
            tracing::trace!(%statement, "skipping unrecognized statement");
            continue;
        };
        let (Some(predicate), Some(objects)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let key = strip_brackets(predicate.as_str());

        for object in scanner::split_top_level(objects.as_str(), ',') {
            insert_object(&mut entity.properties, key, object, depth);
        }
    }

    entity
}

fn insert_object(properties: &mut Properties, key: &str, object: &str, depth: usize) {
    let inserted = match scanner::parse_object(object) {
        Some(Object::Literal(value)) => properties.insert_text(key, value),
        Some(Object::Iri(iri)) => properties.insert_text(key, iri.to_string()),
        Some(Object::BlankNode(inner)) if depth < MAX_NESTING_DEPTH => {
            properties.insert_entity(key, parse_body(inner, depth + 1))
        }
        Some(Object::BlankNode(_)) | None => {
            tracing::trace!(key, object = object.trim(), "skipping object");
            return;
        }
    };
    if !inserted {
        tracing::trace!(key, "dropping value of a different kind than existing values");
    }
}

/// Recognize `a T1, T2` and return its types.
fn type_statement(statement: &str) -> Option<Vec<String>> {
    let rest = statement.strip_prefix(TYPE_TOKEN)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let types = scanner::split_top_level(rest.replace(';', " ").trim(), ',')
        .into_iter()
        .map(|t| strip_brackets(t.trim()).to_string())
        .filter(|t| !t.is_empty())
        .collect();
    Some(types)
}

fn strip_brackets(value: &str) -> &str {
    value
        .strip_prefix('<')
        .and_then(|v| v.strip_suffix('>'))
        .unwrap_or(value)
}
