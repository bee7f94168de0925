//! CLI configuration loading

use anyhow::{Context, Result};
use rota_core::PortalConfig;
use std::path::{Path, PathBuf};

/// Load the portal configuration.
///
/// Sources, later ones winning: built-in defaults, the optional TOML file,
/// `ROTA__SECTION__KEY` environment variables, then the `--timeout` flag
/// (0 disables the timeout). The result is validated after all of them.
pub fn load_config(path: Option<&Path>, timeout: Option<u64>) -> Result<PortalConfig> {
    let mut builder = config::Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path));
    }

    let settings = builder
        .add_source(
            config::Environment::with_prefix("ROTA")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to read configuration")?;

    let mut portal: PortalConfig = settings
        .try_deserialize()
        .context("Failed to parse configuration")?;
    if let Some(timeout) = timeout {
        portal.api.timeout_secs = (timeout > 0).then_some(timeout);
    }
    portal.validate().context("Invalid configuration")?;

    Ok(portal)
}

/// Directory the session file lives in
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        // Check environment variable first, then fall back to system data dir
        if let Ok(dir) = std::env::var("ROTA_STATE_DIR") {
            PathBuf::from(dir)
        } else {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rota")
        }
    })
}
