//! Per-file lexical analysis pipeline.
//!
//! The stages run leaf-first over the raw text: namespace spans and
//! declaration offsets are found independently, the slicer partitions the
//! file around the declarations, the qualifier folds enclosing namespaces
//! into full names, and doc binding and `sorry` detection work on the
//! resulting slices. Everything here is per-file and immutable once built;
//! cross-file work happens in the project aggregator.

pub mod decl;
pub mod docs;
pub mod namespace;
pub mod qualify;
pub mod slice;

use crate::model::{Declaration, NamespaceSpan, Slice};
use std::collections::HashMap;
use std::path::PathBuf;

/// Everything extracted from a single `.lean` file.
pub struct FileAnalysis {
    pub path: PathBuf,
    pub content: String,
    /// Namespace spans in opener order.
    #[allow(dead_code)]
    pub namespaces: Vec<NamespaceSpan>,
    pub decls: Vec<Declaration>,
    pub slices: Vec<Slice>,
    /// Local declaration name to slice index.
    pub decl_slice: HashMap<String, usize>,
    /// Local declaration name to fully-qualified name.
    pub full_names: HashMap<String, String>,
    /// Fully-qualified name to bound documentation text.
    pub docs: HashMap<String, String>,
    /// Recoverable anomalies found while analyzing, for stderr reporting.
    pub warnings: Vec<String>,
}

impl FileAnalysis {
    /// Run the full analysis pipeline over one file's content.
    pub fn analyze(path: impl Into<PathBuf>, content: String) -> FileAnalysis {
        let namespaces = namespace::scan_namespaces(&content);
        let mut decls = decl::locate_declarations(&content);
        let slices = slice::slice_file(content.len(), &decls);

        // slice 0 is the prologue; declaration i owns slice i + 1
        let decl_slice: HashMap<String, usize> = decls
            .iter()
            .enumerate()
            .map(|(i, d)| (d.name.clone(), i + 1))
            .collect();

        slice::detect_incomplete(&content, &slices, &mut decls);
        let full_names = qualify::qualify(&decls, &namespaces);
        let (docs, warnings) =
            docs::bind_docs(&content, &decls, &slices, &decl_slice, &full_names);

        FileAnalysis {
            path: path.into(),
            content,
            namespaces,
            decls,
            slices,
            decl_slice,
            full_names,
            docs,
            warnings,
        }
    }

    /// Text of the slice at `idx`, empty when out of range.
    pub fn slice_text(&self, idx: usize) -> &str {
        self.slices
            .get(idx)
            .map(|s| &self.content[s.start..s.end])
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeclKind;

    #[test]
    fn pipeline_on_namespaced_theorem() {
        let src = "namespace Foo\ntheorem bar : True := trivial\nend Foo\n";
        let file = FileAnalysis::analyze("Foo.lean", src.to_string());

        assert_eq!(file.full_names["bar"], "Foo.bar");
        let bar = file
            .decls
            .iter()
            .find(|d| d.name == "bar")
            .expect("bar located");
        assert_eq!(bar.kind, DeclKind::Theorem);
        assert!(bar.complete);
    }

    #[test]
    fn slice_lookup_matches_declaration() {
        let src = "def a := 1\ndef b := 2\n";
        let file = FileAnalysis::analyze("t.lean", src.to_string());
        assert_eq!(file.slice_text(file.decl_slice["a"]), "def a := 1\n");
        assert_eq!(file.slice_text(file.decl_slice["b"]), "def b := 2\n");
    }

    #[test]
    fn slice_text_out_of_range_is_empty() {
        let file = FileAnalysis::analyze("t.lean", String::new());
        assert_eq!(file.slice_text(99), "");
    }

    #[test]
    fn empty_file_has_no_declarations() {
        let file = FileAnalysis::analyze("t.lean", String::new());
        assert!(file.decls.is_empty());
        assert!(file.namespaces.is_empty());
        assert_eq!(file.slices.len(), 1);
    }
}
