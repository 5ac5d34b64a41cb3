use anyhow::Result;
use std::io;
use std::path::Path;

fn main() -> Result<()> {
    hemidiff::args::validated();
    hemidiff::calculate::exec(Path::new("."), io::stdout().lock())
}
