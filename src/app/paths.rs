// SPDX-License-Identifier: MPL-2.0
//! Location of the gallery's settings directory.
//!
//! `settings.toml` lives in a single directory, picked from the first source
//! that yields one:
//! 1. a path handed to [`config_dir`] directly (tests, `*_with_override`)
//! 2. `--config-dir`, recorded once at startup by [`init_cli_overrides`]
//! 3. `DEX_GALLERY_CONFIG_DIR`, ignored when empty
//! 4. `DexGallery/` under the platform config directory
//!
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! let dir = paths::config_dir(None);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Directory name under the platform config directory.
const APP_DIR_NAME: &str = "DexGallery";

/// Environment variable naming the settings directory.
pub const ENV_CONFIG_DIR: &str = "DEX_GALLERY_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call has an effect; returns `false` if an override was
/// already recorded.
pub fn init_cli_overrides(config_dir: Option<String>) -> bool {
    CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_ok()
}

/// Resolves the settings directory, `explicit` first.
///
/// Returns `None` only when no source applies and the platform has no config
/// directory (e.g. `$HOME` unset on Linux).
pub fn config_dir(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit
        .or_else(cli_config_dir)
        .or_else(env_config_dir)
        .or_else(platform_config_dir)
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().cloned().flatten()
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn platform_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME))
}
