mod check;
mod completions;
mod generate;

use std::{
    env, fs,
    io::{self, IsTerminal, Read},
    path::PathBuf,
};

use check::CheckCommand;
use clap::{Args, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::{Result, WrapErr, bail};
use generate::GenerateCommand;
use gqlts_core::{DEFAULT_CONTEXT_IMPORT_PATH, DEFAULT_SCALARS_IMPORT_PATH, GenerationOptions};

use crate::{config, logging};

/// Extension trait for exiting on generator errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for gqlts_typescript::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gqlts")]
#[command(version)]
#[command(about = "Generate TypeScript resolver types from a GraphQL schema")]
pub(crate) struct Cli {
    /// Log generation steps to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose);

        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate resolver types from a schema
    Generate(GenerateCommand),

    /// Verify a generated file is up to date with its schema
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Schema input and generation options shared by `generate` and `check`.
#[derive(Args, Debug)]
pub(crate) struct InputArgs {
    /// GraphQL schema file (reads stdin when omitted)
    #[arg(short, long)]
    pub schema: Option<PathBuf>,

    /// Formatter config file (defaults to the nearest .prettierrc)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Module the Context and Info types are imported from
    #[arg(long, default_value = DEFAULT_CONTEXT_IMPORT_PATH)]
    pub context_import: String,

    /// Module custom scalar types are imported from
    #[arg(long, default_value = DEFAULT_SCALARS_IMPORT_PATH)]
    pub scalars_import: String,

    /// Map a scalar to a TypeScript type (repeatable)
    #[arg(long = "scalar", value_name = "NAME=TYPE", value_parser = parse_scalar)]
    pub scalars: Vec<(String, String)>,
}

impl InputArgs {
    /// Read the schema from the file, or from stdin when it is piped.
    pub fn read_schema(&self) -> Result<String> {
        if let Some(path) = &self.schema {
            return fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to read schema '{}'", path.display()));
        }

        let stdin = io::stdin();
        read_piped(stdin.is_terminal(), stdin)
    }

    /// Build the generation options from the arguments and formatter config.
    pub fn options(&self) -> Result<GenerationOptions> {
        let cwd = env::current_dir().wrap_err("failed to resolve the working directory")?;
        let format = config::resolve_format_options(self.config.as_deref(), &cwd)?;

        Ok(GenerationOptions::new()
            .with_format(format)
            .with_context_import_path(&self.context_import)
            .with_scalars_import_path(&self.scalars_import)
            .with_type_map(
                self.scalars
                    .iter()
                    .map(|(name, ty)| (name.as_str(), ty.as_str())),
            ))
    }
}

/// Read a schema from standard input unless it is an interactive terminal.
fn read_piped(is_terminal: bool, mut reader: impl Read) -> Result<String> {
    if is_terminal {
        bail!("No input schema provided");
    }

    let mut schema = String::new();
    reader
        .read_to_string(&mut schema)
        .wrap_err("failed to read schema from stdin")?;
    Ok(schema)
}

fn parse_scalar(value: &str) -> std::result::Result<(String, String), String> {
    match value.split_once('=') {
        Some((name, ty)) if !name.trim().is_empty() && !ty.trim().is_empty() => {
            Ok((name.trim().to_string(), ty.trim().to_string()))
        }
        _ => Err(format!("expected NAME=TYPE, got '{value}'")),
    }
}
