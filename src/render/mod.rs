//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod latex;

use crate::model::Catalogue;
use anyhow::{anyhow, Result};

/// Trait for rendering the catalogue into a specific output format.
pub trait Renderer: std::fmt::Debug {
    fn render(&self, catalogue: &Catalogue) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "latex" | "tex" => Ok(Box::new(latex::LatexRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use latex or json", format)),
    }
}
