//! leandoc — generate dependency-aware blueprint documentation from Lean
//! source trees.
//!
//! Scans a project for `.lean` files, extracts theorem/definition/lemma
//! declarations with their namespaces, doc comments and `sorry` status,
//! infers textual dependencies between declarations, and renders the
//! catalogue as a LaTeX blueprint or a JSON dump.

mod model;
mod parser;
mod project;
mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(
    name = "leandoc",
    about = "Generate blueprint documentation from Lean source trees"
)]
struct Cli {
    /// Project root directory to scan for .lean files
    project: PathBuf,

    /// Output file (default: blueprint/src/demo.<format extension>)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: latex (default), json
    #[arg(short = 'f', long, default_value = "latex")]
    format: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let renderer = render::create_renderer(&cli.format)?;

    let files = find_lean_files(&cli.project)?;

    let mut analyses = Vec::new();
    for path in &files {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let analysis = parser::FileAnalysis::analyze(path.clone(), content);
        for warning in &analysis.warnings {
            eprintln!("warning: {}: {}", path.display(), warning);
        }
        analyses.push(analysis);
    }

    let catalogue = project::aggregate(&analyses);
    let rendered = renderer.render(&catalogue);

    let out_path = cli
        .output
        .unwrap_or_else(|| default_output(renderer.file_extension()));
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }
    }
    fs::write(&out_path, rendered)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok(())
}

/// Where the rendered artifact lands when -o is not given.
fn default_output(extension: &str) -> PathBuf {
    Path::new("blueprint")
        .join("src")
        .join(format!("demo.{extension}"))
}

/// Find all .lean files under the given root, sorted so catalogue
/// construction is deterministic.
fn find_lean_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        bail!("project root is not a directory: {}", root.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry =
            entry.with_context(|| format!("failed to scan {}", root.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == "lean")
        {
            files.push(entry.path().to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
