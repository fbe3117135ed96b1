//! LaTeX blueprint renderer.
//!
//! Emits one theorem/definition/lemma environment per catalogue entry with
//! the `\label`, `\lean`, `\leanok` and `\uses` markers understood by the
//! blueprint toolchain. Entries come out in sorted name order; the bound
//! documentation text, TeX-escaped, forms the environment body.

use crate::model::{Catalogue, Category, Statement};
use crate::render::Renderer;

#[derive(Debug)]
pub struct LatexRenderer;

impl Renderer for LatexRenderer {
    fn render(&self, catalogue: &Catalogue) -> String {
        let mut output = String::new();
        output.push_str("% Generated by leandoc. Do not edit by hand.\n");

        for (name, statement) in &catalogue.statements {
            output.push('\n');
            output.push_str(&render_statement(name, statement, catalogue));
        }

        output
    }

    fn file_extension(&self) -> &str {
        "tex"
    }
}

fn render_statement(name: &str, statement: &Statement, catalogue: &Catalogue) -> String {
    let env = environment(statement.category);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("\\begin{{{env}}}\\label{{{name}}}"));
    lines.push(format!("  \\lean{{{name}}}"));
    if statement.complete {
        lines.push("  \\leanok".to_string());
    }
    if let Some(deps) = catalogue.dependencies.get(name) {
        if !deps.is_empty() {
            let list: Vec<&str> = deps.iter().map(|d| d.as_str()).collect();
            lines.push(format!("  \\uses{{{}}}", list.join(", ")));
        }
    }
    if let Some(doc) = catalogue.docs.get(name) {
        lines.push(format!("  {}", tex_escape(doc)));
    }
    lines.push(format!("\\end{{{env}}}\n"));

    lines.join("\n")
}

fn environment(category: Category) -> &'static str {
    match category {
        Category::Theorem => "theorem",
        Category::Lemma => "lemma",
        Category::Definition | Category::Documentation => "definition",
    }
}

/// Escape characters LaTeX treats specially in running text.
fn tex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}
