//! Provides the `load` function, which reads the three input files into
//! memory. Each file is read in full, and its handle released, before the
//! next one is opened. Failures carry the offending path, so a missing or
//! undecodable file is reported by name before any filtering starts.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// File holding the first half of the reference lines.
pub const NORTH: &str = "north.txt";
/// File holding the second half of the reference lines.
pub const SOUTH: &str = "south.txt";
/// File whose lines are filtered against the other two.
pub const TOTAL: &str = "total.txt";

/// The contents of the three input files, read in full.
#[derive(Debug)]
pub struct Operands {
    /// Contents of `north.txt`
    pub north: Vec<u8>,
    /// Contents of `south.txt`
    pub south: Vec<u8>,
    /// Contents of `total.txt`
    pub total: Vec<u8>,
}

/// Reads `north.txt`, `south.txt`, and `total.txt` from `dir`, in that
/// order. Fails if any of the three can't be read or isn't valid UTF-8.
pub fn load(dir: &Path) -> Result<Operands> {
    let north = contents_of(dir, NORTH)?;
    let south = contents_of(dir, SOUTH)?;
    let total = contents_of(dir, TOTAL)?;
    Ok(Operands { north, south, total })
}

fn contents_of(dir: &Path, name: &str) -> Result<Vec<u8>> {
    let path = dir.join(name);
    let contents =
        fs::read(&path).with_context(|| format!("Can't read file: {}", path.display()))?;
    std::str::from_utf8(&contents)
        .with_context(|| format!("File {} isn't valid UTF-8", path.display()))?;
    Ok(contents)
}
