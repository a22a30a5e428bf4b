// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first source that yields a non-blank path wins:
//!
//! 1. an explicit override (tests, `config::load_with_override`)
//! 2. `--config-dir`, recorded once by [`init_cli_overrides`]
//! 3. the `ICED_GALLERY_CONFIG_DIR` environment variable
//! 4. the platform config dir joined with `IcedGallery`

use std::path::PathBuf;
use std::sync::OnceLock;

const APP_DIR_NAME: &str = "IcedGallery";

pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Which source a config directory was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigDirOrigin {
    Override,
    Cli,
    Environment,
    Platform,
}

/// Records `--config-dir`. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let dir = config_dir.and_then(non_blank);
    if CLI_CONFIG_DIR.set(dir).is_err() {
        tracing::warn!("--config-dir was already recorded; ignoring");
    }
}

/// Resolves the config directory and reports where it came from.
///
/// `None` only when no override is given and the platform has no config
/// directory (e.g. `$HOME` unset).
pub fn resolve_config_dir(override_path: Option<PathBuf>) -> Option<(PathBuf, ConfigDirOrigin)> {
    if let Some(path) = override_path {
        return Some((path, ConfigDirOrigin::Override));
    }
    if let Some(path) = CLI_CONFIG_DIR.get().cloned().flatten() {
        return Some((path, ConfigDirOrigin::Cli));
    }
    if let Some(path) = std::env::var(ENV_CONFIG_DIR).ok().and_then(non_blank) {
        return Some((path, ConfigDirOrigin::Environment));
    }
    dirs::config_dir().map(|dir| (dir.join(APP_DIR_NAME), ConfigDirOrigin::Platform))
}

pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    let (dir, origin) = resolve_config_dir(override_path)?;
    tracing::trace!(dir = %dir.display(), ?origin, "config directory");
    Some(dir)
}

fn non_blank(value: String) -> Option<PathBuf> {
    (!value.trim().is_empty()).then(|| PathBuf::from(value))
}
