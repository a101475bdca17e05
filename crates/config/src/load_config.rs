// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

/// Where the YAML configuration is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed in with `--config`. Must exist.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// The per-user location under the OS config dir. May be absent.
    Fallback(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(path)
            | ConfigSource::Discovered(path)
            | ConfigSource::Fallback(path) => path,
        }
    }

    /// A missing file is only an error when the user asked for it by name.
    pub fn is_required(&self) -> bool {
        matches!(self, ConfigSource::Explicit(_))
    }
}

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Returns the first `filename` found in `start` or any of its ancestors.
pub fn find_in_parent(start: &Path, filename: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.is_file())
}

pub fn resolve_config_source(
    find_in_parent: FindInParent,
    cwd: &Path,
    fallback_dir: &Path,
    filename: &str,
    cli_file: Option<&Path>,
) -> ConfigSource {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return ConfigSource::Explicit(cli_file.to_path_buf());
        }
        return ConfigSource::Explicit(clean(cwd.join(cli_file)));
    }

    if let Some(found) = find_in_parent(cwd, filename) {
        return ConfigSource::Discovered(found);
    }

    ConfigSource::Fallback(clean(fallback_dir.join(filename)))
}
