//! Project aggregation — catalogue merge, dependency inference and
//! completeness propagation.
//!
//! Per-file analyses merge into one catalogue keyed by fully-qualified
//! name. Dependency detection is purely lexical: B is recorded as a
//! dependency of A when B's local name token occurs as a substring of A's
//! slice text. Incompleteness then propagates to a fixed point, so a
//! `sorry` anywhere in a dependency chain marks every transitive dependent.

use crate::model::{Catalogue, Statement};
use crate::parser::FileAnalysis;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Merge per-file results into the project catalogue.
///
/// Files are processed in the order given; on a fully-qualified name
/// collision the last declaration wins and a warning names the loser.
/// Documentation placeholders never reach the catalogue.
pub fn aggregate(files: &[FileAnalysis]) -> Catalogue {
    let mut catalogue = Catalogue::default();
    // local name token -> fully-qualified name, the search index for
    // dependency inference
    let mut names: HashMap<String, String> = HashMap::new();

    for file in files {
        for (fqn, doc) in &file.docs {
            catalogue.docs.insert(fqn.clone(), doc.clone());
        }

        for decl in &file.decls {
            if decl.kind.is_doc() {
                continue;
            }
            let fqn = match file.full_names.get(&decl.name) {
                Some(f) => f.clone(),
                None => continue,
            };
            let idx = match file.decl_slice.get(&decl.name) {
                Some(&i) => i,
                None => continue,
            };

            let statement = Statement {
                text: file.slice_text(idx).to_string(),
                category: decl.kind.category(),
                complete: decl.complete,
            };
            if catalogue.statements.insert(fqn.clone(), statement).is_some() {
                eprintln!(
                    "warning: {}: duplicate declaration {}; keeping the latest",
                    file.path.display(),
                    fqn
                );
            }
            names.insert(decl.name.clone(), fqn);
        }
    }

    catalogue.dependencies = infer_dependencies(&catalogue.statements, &names);
    propagate_incompleteness(&mut catalogue);
    catalogue
}

/// Record, for every statement, each other known name whose token appears
/// in its slice text. Self-references are excluded.
fn infer_dependencies(
    statements: &BTreeMap<String, Statement>,
    names: &HashMap<String, String>,
) -> BTreeMap<String, BTreeSet<String>> {
    let mut dependencies = BTreeMap::new();
    for (fqn, statement) in statements {
        let deps: BTreeSet<String> = names
            .iter()
            .filter(|&(local, dep_fqn)| dep_fqn != fqn && statement.text.contains(local.as_str()))
            .map(|(_, dep_fqn)| dep_fqn.clone())
            .collect();
        dependencies.insert(fqn.clone(), deps);
    }
    dependencies
}

/// Iterate to a fixed point: an entry goes incomplete when any recorded
/// dependency is incomplete. Flags only ever move complete -> incomplete,
/// so the loop terminates within the longest dependency chain even when
/// the graph has cycles.
fn propagate_incompleteness(catalogue: &mut Catalogue) {
    loop {
        let incomplete: BTreeSet<&str> = catalogue
            .statements
            .iter()
            .filter(|(_, s)| !s.complete)
            .map(|(name, _)| name.as_str())
            .collect();

        let mut flip: Vec<String> = Vec::new();
        for (fqn, deps) in &catalogue.dependencies {
            if incomplete.contains(fqn.as_str()) {
                continue;
            }
            if deps.iter().any(|d| incomplete.contains(d.as_str())) {
                flip.push(fqn.clone());
            }
        }

        if flip.is_empty() {
            break;
        }
        for fqn in flip {
            if let Some(statement) = catalogue.statements.get_mut(&fqn) {
                statement.complete = false;
            }
        }
    }
}
