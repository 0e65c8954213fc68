//! Formatting utilities for display values.

use podview_core::render::type_label;
use podview_core::{PodInfo, ResourceNode};

/// Format a UTC timestamp (milliseconds) in the user's locale.
pub fn format_locale_datetime(millis: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(millis as f64));
    String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
}

/// `"Type: Person"` / `"Types: Order, Thing"`, or `None` without types.
pub fn type_line(types: &[String]) -> Option<String> {
    let label = type_label(types.len())?;
    Some(format!("{}: {}", label, types.join(", ")))
}

/// Entry name with a trailing `/` for folders.
pub fn display_name(node: &ResourceNode) -> String {
    if node.is_folder {
        format!("{}/", node.name)
    } else {
        node.name.clone()
    }
}

/// One-line pod summary for the status bar.
pub fn pod_summary(info: &PodInfo) -> String {
    if info.provider == "unknown" {
        info.username.clone()
    } else {
        format!("{} @ {}", info.username, info.provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_line() {
        assert_eq!(type_line(&[]), None);
        assert_eq!(
            type_line(&["Person".to_string()]).as_deref(),
            Some("Type: Person")
        );
        assert_eq!(
            type_line(&["Order".to_string(), "Thing".to_string()]).as_deref(),
            Some("Types: Order, Thing")
        );
    }

    #[test]
    fn test_display_name() {
        let folder = ResourceNode::from_url("https://pod.example/docs/").unwrap();
        let file = ResourceNode::from_url("https://pod.example/a.ttl").unwrap();
        assert_eq!(display_name(&folder), "docs/");
        assert_eq!(display_name(&file), "a.ttl");
    }

    #[test]
    fn test_pod_summary() {
        let info = PodInfo::from_root("https://alice.inrupt.com/").unwrap();
        assert_eq!(pod_summary(&info), "alice @ Inrupt");
        let info = PodInfo::from_root("https://pod.example/").unwrap();
        assert_eq!(pod_summary(&info), "pod");
    }
}
