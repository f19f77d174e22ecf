use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use cpy_rewrite::translate_source;

const CPP_EXT: &str = ".cpp";
const PY_EXT: &str = ".py";

#[derive(Parser)]
#[command(name = "cppy", about = "cppy — translate a C++ exercise solution into Python")]
struct Cli {
    /// Input .cpp file; the translation lands next to it as a .py file.
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.input.is_file() {
        bail!("not a file: {}", cli.input.display());
    }

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let output = output_path(&cli.input);
    std::fs::write(&output, translate_source(&source))
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(())
}

/// Cut the input path at the first `.cpp` occurrence and append `.py`.
fn output_path(input: &Path) -> PathBuf {
    let name = input.to_string_lossy();
    let stem = match name.split_once(CPP_EXT) {
        Some((stem, _)) => stem.to_string(),
        None => name.into_owned(),
    };
    PathBuf::from(stem + PY_EXT)
}
