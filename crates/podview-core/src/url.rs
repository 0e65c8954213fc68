//! URL inspection helpers.
//!
//! These work on plain strings: the navigator classifies resources and the
//! renderer detects links purely from the text, without network access.

use crate::config::IMAGE_EXTENSIONS;

/// Schemes that require a `//host` authority to be considered well-formed.
const HIERARCHICAL_SCHEMES: &[&str] = &["http", "https", "ws", "wss", "ftp"];

/// Return the scheme of an absolute URL (`https` for `https://x`).
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`,
/// terminated by `:`.
pub fn scheme(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let candidate = &url[..colon];
    let mut chars = candidate.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some(candidate)
    } else {
        None
    }
}

/// Check whether a string is a well-formed absolute URL.
///
/// Checks:
/// 1. A syntactically valid scheme
/// 2. A non-empty remainder without whitespace or control characters
/// 3. A non-empty host for `http`-like schemes
pub fn is_absolute_url(value: &str) -> bool {
    let Some(scheme) = scheme(value) else {
        return false;
    };
    let rest = &value[scheme.len() + 1..];
    if rest.is_empty() || rest.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }

    if HIERARCHICAL_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str()) {
        return authority(value).is_some_and(|a| !host_of_authority(a).is_empty());
    }

    true
}

/// Authority component (`user@host:port`) of a `scheme://` URL.
fn authority(url: &str) -> Option<&str> {
    let start = url.find("://")? + 3;
    let rest = &url[start..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

fn host_of_authority(authority: &str) -> &str {
    let host_port = authority.rsplit('@').next().unwrap_or(authority);
    host_port.split(':').next().unwrap_or(host_port)
}

/// Extract the lowercase host of a `scheme://` URL.
pub fn extract_host(url: &str) -> Option<String> {
    let host = host_of_authority(authority(url)?);
    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

/// Path component of a URL, without query or fragment.
///
/// For `scheme://authority/path` this is `/path`; for other absolute URLs it
/// is everything after the scheme.
pub fn path_of(url: &str) -> &str {
    let without_suffix = strip_query_and_fragment(url);
    if let Some(start) = without_suffix.find("://") {
        let rest = &without_suffix[start + 3..];
        return rest.find('/').map(|i| &rest[i..]).unwrap_or("");
    }
    match scheme(without_suffix) {
        Some(s) => &without_suffix[s.len() + 1..],
        None => without_suffix,
    }
}

fn strip_query_and_fragment(url: &str) -> &str {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    &url[..end]
}

/// Check whether the URL's path ends in one of the image extensions.
pub fn has_image_extension(url: &str) -> bool {
    let path = path_of(url);
    let Some((_, ext)) = path.rsplit_once('.') else {
        return false;
    };
    IMAGE_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
}

/// `scheme://authority/` of a URL, used as a fallback pod root.
pub fn origin(url: &str) -> Option<String> {
    let scheme = scheme(url)?;
    let authority = authority(url)?;
    if host_of_authority(authority).is_empty() {
        return None;
    }
    Some(format!("{}://{}/", scheme, authority))
}

/// Resolve a reference found in a document against the document URL.
///
/// Handles absolute URLs, scheme-relative (`//host/x`), root-relative
/// (`/x`) and path-relative (`x`, `./x`, `../x`) references.
pub fn resolve(base: &str, reference: &str) -> Option<String> {
    if reference.is_empty() {
        return Some(base.to_string());
    }
    if scheme(reference).is_some() {
        return Some(reference.to_string());
    }
    if reference.starts_with('#') {
        let document = base.split('#').next().unwrap_or(base);
        return Some(format!("{document}{reference}"));
    }
    if let Some(rest) = reference.strip_prefix("//") {
        return Some(format!("{}://{}", scheme(base)?, rest));
    }

    let root = origin(base)?;
    if reference.starts_with('/') {
        return Some(format!("{}{}", root.trim_end_matches('/'), reference));
    }

    // Directory of the base path, as segments
    let base_path = path_of(base);
    let dir = match base_path.rfind('/') {
        Some(i) => &base_path[..=i],
        None => "/",
    };
    let mut segments: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();

    let mut rest = reference;
    loop {
        if let Some(r) = rest.strip_prefix("./") {
            rest = r;
        } else if let Some(r) = rest.strip_prefix("../") {
            segments.pop();
            rest = r;
        } else {
            break;
        }
    }

    let mut resolved = root;
    for segment in segments {
        resolved.push_str(segment);
        resolved.push('/');
    }
    resolved.push_str(rest);
    Some(resolved)
}
