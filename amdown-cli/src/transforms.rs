//! Inspect transforms
//!
//! Each transform is a stage + format combination. The only stage is the
//! parsed element tree (`ast`):
//!
//! - `ast-treeviz`: tree visualization with Unicode icons (default)
//! - `ast-json`: the element tree and metadata as JSON
//!
//! ## Extra Parameters
//!
//! - `show-inlines`: expand text runs into inline nodes (treeviz only)
//!
//! Example: `amdown inspect page.md ast-treeviz --extra-show-inlines`

use amdown::inspect::treeviz;
use amdown::Document;
use std::collections::HashMap;

/// All available inspect transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["ast-treeviz", "ast-json"];

/// Runs a named transform over a parsed document.
pub fn execute_transform(
    doc: &Document,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "ast-treeviz" => {
            let show_inlines = extra_params
                .get("show-inlines")
                .is_some_and(|v| v == "true");
            Ok(treeviz(doc, show_inlines))
        }
        "ast-json" => serde_json::to_string_pretty(doc)
            .map(|json| format!("{json}\n"))
            .map_err(|e| format!("JSON serialization failed: {e}")),
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}
