use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::mpsc,
};

use clap::Args;
use eyre::{Result, WrapErr, eyre};
use gqlts_typescript::generate_server_types;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, error, info};

use super::{InputArgs, UnwrapOrExit};

#[derive(Args, Debug)]
pub struct GenerateCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (writes to stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Regenerate whenever the schema file changes
    #[arg(long, requires_all = ["schema", "output"])]
    pub watch: bool,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        if self.watch {
            return self.watch();
        }

        let schema = self.input.read_schema()?;
        let options = self.input.options()?;
        let output = generate_server_types(&schema, &options).unwrap_or_exit();

        match &self.output {
            Some(path) => write_output(path, &output),
            None => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(output.as_bytes())
                    .wrap_err("failed to write to stdout")
            }
        }
    }

    fn watch(&self) -> Result<()> {
        let (Some(schema), Some(output)) = (&self.input.schema, &self.output) else {
            return Err(eyre!("--watch requires --schema and --output"));
        };

        let schema = schema
            .canonicalize()
            .wrap_err_with(|| format!("failed to resolve schema '{}'", schema.display()))?;
        let dir = schema
            .parent()
            .ok_or_else(|| eyre!("schema '{}' has no parent directory", schema.display()))?;

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |result| {
            let _ = tx.send(result);
        })
        .wrap_err("failed to create file watcher")?;
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .wrap_err_with(|| format!("failed to watch '{}'", dir.display()))?;

        self.regenerate(output);
        eprintln!("Watching {} for changes...", schema.display());

        for result in rx {
            match result {
                Ok(event) if touches(&event, &schema) => {
                    debug!(kind = ?event.kind, "schema changed");
                    self.regenerate(output);
                }
                Ok(_) => {}
                Err(err) => error!(%err, "file watcher error"),
            }
        }

        Ok(())
    }

    /// Generate once, reporting failures without stopping the watch loop.
    fn regenerate(&self, output: &Path) {
        let generated = self.input.read_schema().and_then(|schema| {
            let options = self.input.options()?;
            Ok(generate_server_types(&schema, &options))
        });

        match generated {
            Ok(Ok(content)) => match write_output(output, &content) {
                Ok(()) => info!(path = %output.display(), "regenerated"),
                Err(err) => error!("{err:#}"),
            },
            Ok(Err(err)) => eprintln!("{:?}", miette::Report::new(err)),
            Err(err) => error!("{err:#}"),
        }
    }
}

/// Whether a watcher event creates or modifies the schema file.
fn touches(event: &Event, schema: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event.paths.iter().any(|path| path == schema)
}

/// Write generated output, creating parent directories as needed.
pub(crate) fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(path, content).wrap_err_with(|| format!("failed to write '{}'", path.display()))
}
