//! `hemidiff` answers one question about three text files in the current
//! directory: which lines of `total.txt` appear in neither `north.txt` nor
//! `south.txt`?  The `calculate` module is the kernel of the application, the
//! `operands` module reads the three files, and the `args` module checks the
//! command line (there's nothing to parse, since the file names are fixed).
//!
//! Current Limitations:
//! * Every file is read into memory in its entirety, so very large inputs
//!   are not our use case.
//! * A "line" is zero or more non-newline bytes followed by a newline,
//!   optionally preceded by a carriage return. Files must be valid UTF-8;
//!   we don't sniff for UTF-16.

#![cfg_attr(debug_assertions, allow(dead_code, unused_imports))]
#![deny(unused_must_use)]
#![deny(clippy::all)]
#![allow(clippy::needless_return)]
#![deny(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![deny(missing_docs)]

pub mod args;
pub mod calculate;
pub mod operands;
mod set;
