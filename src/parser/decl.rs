//! Declaration locator.
//!
//! Scans raw text for the recognized declaration keywords. A keyword only
//! counts at the start of a line, which keeps keyword-like substrings inside
//! comments and identifiers from producing false positives. Documentation
//! blocks (`/--`) carry no declared name, so each gets a synthesized
//! per-file ordinal (`doc0`, `doc1`, ..) used purely as an internal key.

use crate::model::{DeclKind, Declaration};
use regex::Regex;
use std::sync::LazyLock;

static RE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(theorem\b|def\b|lemma\b|class\b|structure\b|inductive\b|/--)").unwrap()
});

/// Locate every declaration in the file, ordered by start offset.
pub fn locate_declarations(content: &str) -> Vec<Declaration> {
    let mut decls = Vec::new();
    let mut doc_count = 0usize;

    for caps in RE_KEYWORD.captures_iter(content) {
        let m = match caps.get(1) {
            Some(m) => m,
            None => continue,
        };
        let kind = match DeclKind::from_keyword(m.as_str()) {
            Some(k) => k,
            None => continue,
        };

        let name = if kind.is_doc() {
            let name = format!("doc{doc_count}");
            doc_count += 1;
            name
        } else {
            match declared_name(&content[m.end()..]) {
                Some(name) => name,
                // keyword with nothing nameable after it, e.g. at EOF
                None => continue,
            }
        };

        decls.push(Declaration {
            start: m.start(),
            kind,
            name,
            complete: true,
        });
    }

    decls
}

/// Extract the declared name from the text following a keyword: the first
/// whitespace-delimited token, truncated at the first type-annotation colon.
fn declared_name(rest: &str) -> Option<String> {
    let token = rest.split_whitespace().next()?;
    let name = match token.find(':') {
        Some(pos) => &token[..pos],
        None => token,
    };
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeclKind;

    #[test]
    fn locates_theorem_with_name() {
        let decls = locate_declarations("theorem foo : True := trivial\n");
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].kind, DeclKind::Theorem);
        assert_eq!(decls[0].name, "foo");
        assert_eq!(decls[0].start, 0);
        assert!(decls[0].complete);
    }

    #[test]
    fn mid_line_keyword_ignored() {
        let decls = locate_declarations("-- see the def of foo\nx theorem y\n");
        assert!(decls.is_empty());
    }

    #[test]
    fn keyword_prefix_of_identifier_ignored() {
        let decls = locate_declarations("defs foo := 1\nstructures := 2\n");
        assert!(decls.is_empty());
    }

    #[test]
    fn name_truncated_at_colon() {
        let decls = locate_declarations("def double: Nat -> Nat := fun n => n + n\n");
        assert_eq!(decls[0].name, "double");
    }

    #[test]
    fn doc_blocks_get_ordinal_names() {
        let src = "/-- one -/\ndef a := 1\n/-- two -/\ndef b := 2\n";
        let decls = locate_declarations(src);
        let docs: Vec<&str> = decls
            .iter()
            .filter(|d| d.kind.is_doc())
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(docs, vec!["doc0", "doc1"]);
    }

    #[test]
    fn ordered_by_offset() {
        let src = "structure P where\n  x : Nat\n\ntheorem t : True := trivial\n\nlemma l : True := trivial\n";
        let decls = locate_declarations(src);
        assert_eq!(decls.len(), 3);
        assert!(decls.windows(2).all(|w| w[0].start < w[1].start));
        assert_eq!(decls[0].name, "P");
        assert_eq!(decls[1].name, "t");
        assert_eq!(decls[2].name, "l");
    }

    #[test]
    fn all_keywords_recognized() {
        let src = "theorem a := x\ndef b := x\nlemma c := x\nclass D where\nstructure E where\ninductive F where\n";
        let decls = locate_declarations(src);
        assert_eq!(decls.len(), 6);
    }

    #[test]
    fn nameless_keyword_skipped() {
        let decls = locate_declarations("def");
        assert!(decls.is_empty());
    }
}
