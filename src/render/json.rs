//! JSON renderer — structured catalogue output for tooling integration.
//!
//! Serializes the whole catalogue (`statements`, `dependencies`, `docs`)
//! so downstream pipelines can consume the analysis without re-parsing.

use crate::model::Catalogue;
use crate::render::Renderer;

#[derive(Debug)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, catalogue: &Catalogue) -> String {
        let mut out =
            serde_json::to_string_pretty(catalogue).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}
