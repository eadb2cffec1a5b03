//! Formatter configuration discovery.

use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};
use gqlts_core::FormatOptions;
use tracing::debug;

/// Config file names, in lookup order within one directory.
pub(crate) const CONFIG_FILE_NAMES: [&str; 3] =
    [".prettierrc", ".prettierrc.json", ".prettierrc.toml"];

/// Find the nearest formatter config, walking up from `start`.
pub(crate) fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Load formatter options from a config file.
///
/// `.toml` files are read as TOML, everything else as JSON.
pub(crate) fn load_format_options(path: &Path) -> Result<FormatOptions> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read formatter config '{}'", path.display()))?;

    let options = if path.extension().is_some_and(|ext| ext == "toml") {
        toml::from_str(&content)
            .wrap_err_with(|| format!("invalid formatter config '{}'", path.display()))?
    } else {
        serde_json::from_str(&content)
            .wrap_err_with(|| format!("invalid formatter config '{}'", path.display()))?
    };

    debug!(path = %path.display(), "loaded formatter config");
    Ok(options)
}

/// Resolve formatter options: an explicit file, else the nearest config
/// above `cwd`, else the defaults.
pub(crate) fn resolve_format_options(
    explicit: Option<&Path>,
    cwd: &Path,
) -> Result<FormatOptions> {
    match explicit.map(Path::to_path_buf).or_else(|| find_config(cwd)) {
        Some(path) => load_format_options(&path),
        None => Ok(FormatOptions::default()),
    }
}
