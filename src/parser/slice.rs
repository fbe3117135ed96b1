//! Slicer — partitions a file into per-declaration text spans.
//!
//! Slice 0 is the file prologue (everything before the first declaration,
//! imports and the like); slice `i + 1` belongs to declaration `i` and runs
//! from its keyword to the next declaration's keyword, or to end of file.
//! Together the slices cover the file exactly, with no gaps or overlaps.

use crate::model::{Declaration, Slice};

/// The literal token marking an unfinished proof.
pub const INCOMPLETE_MARKER: &str = "sorry";

/// Partition a file of `len` bytes into slices for the given declarations.
pub fn slice_file(len: usize, decls: &[Declaration]) -> Vec<Slice> {
    let mut slices = Vec::with_capacity(decls.len() + 1);
    let mut start = 0;
    for decl in decls {
        slices.push(Slice { start, end: decl.start });
        start = decl.start;
    }
    slices.push(Slice { start, end: len });
    slices
}

/// Flag declarations whose slice contains the incomplete-proof marker.
///
/// Documentation blocks are left untouched; the marker only means anything
/// inside a proof body.
pub fn detect_incomplete(content: &str, slices: &[Slice], decls: &mut [Declaration]) {
    for (i, decl) in decls.iter_mut().enumerate() {
        if decl.kind.is_doc() {
            continue;
        }
        if let Some(slice) = slices.get(i + 1) {
            decl.complete = !content[slice.start..slice.end].contains(INCOMPLETE_MARKER);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::decl::locate_declarations;

    const SRC: &str = "import Mathlib\n\ntheorem a : True := trivial\n\ndef b := 1\n\nlemma c : True := trivial\n";

    #[test]
    fn slices_partition_the_file() {
        let decls = locate_declarations(SRC);
        let slices = slice_file(SRC.len(), &decls);
        assert_eq!(slices.len(), decls.len() + 1);

        let rebuilt: String = slices
            .iter()
            .map(|s| &SRC[s.start..s.end])
            .collect();
        assert_eq!(rebuilt, SRC);

        for w in slices.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        assert_eq!(slices[0].start, 0);
        assert_eq!(slices.last().map(|s| s.end), Some(SRC.len()));
    }

    #[test]
    fn prologue_holds_preamble() {
        let decls = locate_declarations(SRC);
        let slices = slice_file(SRC.len(), &decls);
        assert_eq!(&SRC[slices[0].start..slices[0].end], "import Mathlib\n\n");
    }

    #[test]
    fn empty_file_is_one_prologue_slice() {
        let slices = slice_file(0, &[]);
        assert_eq!(slices, vec![Slice { start: 0, end: 0 }]);
    }

    #[test]
    fn sorry_marks_incomplete() {
        let src = "theorem a : True := by\n  sorry\n\ntheorem b : True := trivial\n";
        let mut decls = locate_declarations(src);
        let slices = slice_file(src.len(), &decls);
        detect_incomplete(src, &slices, &mut decls);
        assert!(!decls[0].complete);
        assert!(decls[1].complete);
    }

    #[test]
    fn sorry_in_doc_block_does_not_flag_it() {
        let src = "/-- we are sorry about this -/\ndef a := 1\n";
        let mut decls = locate_declarations(src);
        let slices = slice_file(src.len(), &decls);
        detect_incomplete(src, &slices, &mut decls);
        assert!(decls[0].kind.is_doc());
        assert!(decls[0].complete);
        assert!(decls[1].complete);
    }
}
