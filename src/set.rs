//! Provides the `ReferenceSet` structure, built from the contents of the
//! two reference files.

use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use memchr::memchr;

/// A `ReferenceSet` is the union of the reference files' lines.
/// * Members are `&[u8]` slices borrowed from the files' contents, with
///   their `\n` or `\r\n` terminator stripped.
/// * Duplicate lines collapse; membership is exact byte equality, so a
///   reference line keeps whatever leading and trailing whitespace it was
///   stored with.
pub(crate) struct ReferenceSet<'data> {
    set: SliceSet<'data>,
}
type SliceSet<'data> = IndexSet<&'data [u8], FxBuildHasher>;

impl<'data> ReferenceSet<'data> {
    /// Creates a `ReferenceSet` holding every line of `north` followed by
    /// every line of `south`.
    pub(crate) fn new(north: &'data [u8], south: &'data [u8]) -> Self {
        let mut reference = ReferenceSet { set: SliceSet::default() };
        reference.insert_lines(north);
        reference.insert_lines(south);
        reference
    }

    /// Insert every line of `slice`, terminator stripped. A final line
    /// without a terminator counts; the empty tail after a final `\n`
    /// doesn't.
    fn insert_lines(&mut self, mut slice: &'data [u8]) {
        while let Some(end) = memchr(b'\n', slice) {
            let (mut line, rest) = slice.split_at(end);
            slice = &rest[1..];
            if let Some(&maybe_cr) = line.last() {
                if maybe_cr == b'\r' {
                    line = &line[..line.len() - 1];
                }
            }
            self.set.insert(line);
        }
        if !slice.is_empty() {
            self.set.insert(slice);
        }
    }

    /// Is `line` a member?
    pub(crate) fn contains(&self, line: &[u8]) -> bool {
        self.set.contains(line)
    }
}
