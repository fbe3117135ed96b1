//! Qualifier — computes fully-qualified declaration names.
//!
//! A declaration picks up every namespace whose span strictly contains its
//! start offset, outermost first (openers of enclosing scopes appear earlier
//! in the text), joined with `.`. Documentation blocks are never qualified:
//! their synthesized names are not bindable identifiers.

use crate::model::{Declaration, NamespaceSpan};
use std::collections::HashMap;

/// Separator between namespace components and the local name.
const QUALIFIER_SEP: &str = ".";

/// Map each declaration's local name to its fully-qualified name.
pub fn qualify(
    decls: &[Declaration],
    namespaces: &[NamespaceSpan],
) -> HashMap<String, String> {
    let mut full_names = HashMap::new();

    for decl in decls {
        if decl.kind.is_doc() {
            full_names.insert(decl.name.clone(), decl.name.clone());
            continue;
        }

        let mut enclosing: Vec<&NamespaceSpan> = namespaces
            .iter()
            .filter(|ns| ns.start < decl.start && decl.start < ns.end)
            .collect();
        enclosing.sort_by_key(|ns| ns.start);

        let mut parts: Vec<&str> = enclosing.iter().map(|ns| ns.name.as_str()).collect();
        parts.push(&decl.name);
        full_names.insert(decl.name.clone(), parts.join(QUALIFIER_SEP));
    }

    full_names
}
