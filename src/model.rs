//! Data model for the declaration catalogue — format-agnostic.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Recognized leading keyword of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Theorem,
    Def,
    Lemma,
    DocComment,
    Class,
    Structure,
    Inductive,
}

impl DeclKind {
    /// Map a matched keyword back to its kind.
    pub fn from_keyword(keyword: &str) -> Option<DeclKind> {
        match keyword {
            "theorem" => Some(DeclKind::Theorem),
            "def" => Some(DeclKind::Def),
            "lemma" => Some(DeclKind::Lemma),
            "/--" => Some(DeclKind::DocComment),
            "class" => Some(DeclKind::Class),
            "structure" => Some(DeclKind::Structure),
            "inductive" => Some(DeclKind::Inductive),
            _ => None,
        }
    }

    /// Coarse category used by the renderers.
    pub fn category(self) -> Category {
        match self {
            DeclKind::Theorem => Category::Theorem,
            DeclKind::Lemma => Category::Lemma,
            DeclKind::Def | DeclKind::Class | DeclKind::Structure | DeclKind::Inductive => {
                Category::Definition
            }
            DeclKind::DocComment => Category::Documentation,
        }
    }

    pub fn is_doc(self) -> bool {
        self == DeclKind::DocComment
    }
}

/// Semantic category tag attached to each catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Theorem,
    Definition,
    Lemma,
    Documentation,
}

/// A named lexical scope: `namespace Foo` .. `end Foo`.
///
/// `end` is the offset one past the scope terminator, or the file length
/// when the scope is unterminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceSpan {
    pub name: String,
    pub start: usize,
    pub end: usize,
}

/// One recognized declaration within a file.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Byte offset of the leading keyword.
    pub start: usize,
    pub kind: DeclKind,
    /// The token following the keyword, truncated at the first `:`.
    /// Synthesized (`doc0`, `doc1`, ..) for documentation blocks.
    pub name: String,
    /// False once the declaration's slice contains `sorry`.
    pub complete: bool,
}

/// Half-open `[start, end)` span of a file's text owned by one declaration
/// (or by the file prologue before the first declaration).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub start: usize,
    pub end: usize,
}

/// One catalogue entry: everything a renderer needs about a declaration.
#[derive(Debug, Clone, Serialize)]
pub struct Statement {
    pub text: String,
    pub category: Category,
    pub complete: bool,
}

/// Project-wide result keyed by fully-qualified name — the sole input of
/// the document renderers.
#[derive(Debug, Default, Serialize)]
pub struct Catalogue {
    pub statements: BTreeMap<String, Statement>,
    pub dependencies: BTreeMap<String, BTreeSet<String>>,
    pub docs: BTreeMap<String, String>,
}
