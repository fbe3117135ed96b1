//! Doc binder — attaches `/--` blocks to the declaration that follows.
//!
//! The comment body is stripped of its delimiters and surrounding
//! whitespace and recorded under the *next* declaration's fully-qualified
//! name. A block with no following declaration binds nothing, and a block
//! followed by another block is dropped so the synthesized placeholder
//! names never leak out of the parser.

use crate::model::{Declaration, Slice};
use std::collections::HashMap;

const DOC_OPEN: &str = "/--";
const DOC_CLOSE: &str = "-/";

/// Extract and bind documentation blocks.
///
/// Returns the map of fully-qualified name to documentation text, plus one
/// warning per malformed block (missing delimiters). Malformed blocks are
/// skipped; everything else keeps going.
pub fn bind_docs(
    content: &str,
    decls: &[Declaration],
    slices: &[Slice],
    decl_slice: &HashMap<String, usize>,
    full_names: &HashMap<String, String>,
) -> (HashMap<String, String>, Vec<String>) {
    let mut docs = HashMap::new();
    let mut warnings = Vec::new();

    for (i, decl) in decls.iter().enumerate() {
        if !decl.kind.is_doc() || i + 1 >= decls.len() {
            continue;
        }
        let next = &decls[i + 1];
        if next.kind.is_doc() {
            continue;
        }

        let slice_text = decl_slice
            .get(&decl.name)
            .and_then(|&idx| slices.get(idx))
            .map(|s| &content[s.start..s.end])
            .unwrap_or("");

        match extract_body(slice_text) {
            Some(body) => {
                if let Some(fqn) = full_names.get(&next.name) {
                    docs.insert(fqn.clone(), body);
                }
            }
            None => warnings.push(format!(
                "malformed documentation block before `{}`",
                next.name
            )),
        }
    }

    (docs, warnings)
}

/// Strip the `/--` .. `-/` delimiters from a documentation slice.
fn extract_body(slice_text: &str) -> Option<String> {
    let open = slice_text.find(DOC_OPEN)?;
    let after = &slice_text[open + DOC_OPEN.len()..];
    let close = after.find(DOC_CLOSE)?;
    Some(after[..close].trim().to_string())
}
