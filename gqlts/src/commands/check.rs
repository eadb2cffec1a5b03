use std::{fs, io, path::Path, path::PathBuf};

use clap::Args;
use eyre::{Result, WrapErr};
use gqlts_typescript::generate_server_types;

use super::{InputArgs, UnwrapOrExit};

#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Generated file to compare against
    #[arg(short, long)]
    pub output: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let schema = self.input.read_schema()?;
        let options = self.input.options()?;
        let expected = generate_server_types(&schema, &options).unwrap_or_exit();

        if is_stale(&self.output, &expected)? {
            eprintln!("error: {} is out of date", self.output.display());
            eprintln!("  Run `gqlts generate` to update it.");
            std::process::exit(1);
        }

        println!("✓ {} is up to date", self.output.display());
        Ok(())
    }
}

/// Whether the file at `path` is missing or differs from `expected`.
fn is_stale(path: &Path, expected: &str) -> Result<bool> {
    match fs::read_to_string(path) {
        Ok(current) => Ok(current != expected),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(err) => Err(err).wrap_err_with(|| format!("failed to read '{}'", path.display())),
    }
}
