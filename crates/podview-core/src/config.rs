//! Constants shared by the parser, renderer and navigator.

// =============================================================================
// Parser
// =============================================================================

/// Deepest blank-node nesting the parser descends into.
///
/// Anything nested deeper is skipped like any other unrecognized value.
pub const MAX_NESTING_DEPTH: usize = 32;

/// The rdf:type shorthand token.
pub const TYPE_TOKEN: &str = "a";

// =============================================================================
// Content Classification
// =============================================================================

/// File extensions rendered as images (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Substrings that mark a text body as structured linked data.
pub const STRUCTURED_MARKERS: &[&str] = &["@prefix", "schema:", "<http"];

/// Substrings that mark a literal as an XML Schema dateTime.
pub const DATETIME_MARKERS: &[&str] = &["XMLSchema#dateTime", "xsd:dateTime"];

// =============================================================================
// Navigation
// =============================================================================

/// Name used for a URL without any non-empty path segment.
pub const ROOT_LABEL: &str = "Root";

// =============================================================================
// Vocabulary
// =============================================================================

/// Predicate local names that point from a WebID to its storage root.
pub const STORAGE_PREDICATES: &[&str] = &["storage", "storageSpace"];

/// Full IRI of `ldp:contains`.
pub const LDP_CONTAINS: &str = "http://www.w3.org/ns/ldp#contains";

/// Predicate used for the body of newly created files.
pub const FILE_TEXT_PREDICATE: &str = "http://schema.org/text";
