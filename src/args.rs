//! Code to check the command line using `clap`. There is nothing to parse:
//! the input file names are fixed, so the only arguments we accept are
//! `--help` and `--version`.

use clap::Parser;

/// Checks the command line. `hemidiff` takes no operands and no options, so
/// `clap`'s job here is to honor `--help` and `--version` and to exit with a
/// usage error on anything else.
pub fn validated() {
    let CliArgs {} = CliArgs::parse();
}

#[derive(Debug, Parser)]
#[command(name = "hemidiff", version)]
/// Print the lines of total.txt found in neither north.txt nor south.txt
struct CliArgs {}
