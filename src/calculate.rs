//! Houses the `exec` function
//!

use anyhow::Result;
use bstr::ByteSlice;
use memchr::memchr;
use std::path::Path;

use crate::operands::{self, Operands};
use crate::set::ReferenceSet;

/// Reads the three input files from `dir` and writes to `out` the lines of
/// `total.txt` whose trimmed form appears in neither `north.txt` nor
/// `south.txt`. The result is written as one bracketed sequence in
/// `total.txt` order, not one line per surviving line.
///
/// A candidate line is trimmed of leading and trailing whitespace before
/// the membership test but kept raw, terminator included, in the result.
/// Reference lines are never trimmed, so a reference line stored with stray
/// whitespace matches nothing but itself.
pub fn exec(dir: &Path, out: impl std::io::Write) -> Result<()> {
    let Operands { north, south, total } = operands::load(dir)?;
    let reference = ReferenceSet::new(&north, &south);
    let unique = unique_lines(&reference, &total);
    return output_to(&unique, out);
}

/// Returns the lines of `total` that are not members of `reference`, in
/// order, duplicates and all. Each returned line is raw: whatever bytes it
/// had in `total`, terminator included.
fn unique_lines<'data>(reference: &ReferenceSet<'_>, total: &'data [u8]) -> Vec<&'data [u8]> {
    let mut unique = Vec::new();
    let mut rest = total;
    while let Some(end) = memchr(b'\n', rest) {
        let (line, tail) = rest.split_at(end + 1);
        rest = tail;
        if !reference.contains(line.trim()) {
            unique.push(line);
        }
    }
    if !rest.is_empty() && !reference.contains(rest.trim()) {
        unique.push(rest);
    }
    unique
}

/// Writes `lines` as a single `["…", "…"]` rendering, escapes and all, the
/// way a vector of strings debug-prints, followed by a newline.
fn output_to(lines: &[&[u8]], mut out: impl std::io::Write) -> Result<()> {
    let printable: Vec<&bstr::BStr> = lines.iter().copied().map(ByteSlice::as_bstr).collect();
    writeln!(out, "{printable:?}")?;
    out.flush()?;
    Ok(())
}
