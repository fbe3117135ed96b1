//! Namespace span scanner.
//!
//! Pairs every `namespace <ident>` opener with the first `end <ident>`
//! that follows it in the text. No nesting-depth counting is performed, so
//! deeply nested same-named scopes can mis-pair; an opener with no matching
//! terminator extends to end of file.

use crate::model::NamespaceSpan;
use regex::Regex;
use std::sync::LazyLock;

static RE_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"namespace\s+(\w+)").unwrap());

/// Scan raw file text for namespace scopes, in opener order.
///
/// Same-named scopes at different offsets each get their own span; they are
/// distinguished only by offset.
pub fn scan_namespaces(content: &str) -> Vec<NamespaceSpan> {
    let mut spans = Vec::new();

    for caps in RE_NAMESPACE.captures_iter(content) {
        let opener = caps.get(0).map(|m| m.start()).unwrap_or(0);
        let name = caps[1].to_string();

        let close = format!(r"end\s+{}\b", regex::escape(&name));
        let end = Regex::new(&close)
            .ok()
            .and_then(|re| re.find(&content[opener..]))
            .map(|m| opener + m.end())
            .unwrap_or(content.len());

        spans.push(NamespaceSpan { name, start: opener, end });
    }

    spans
}
