use std::path::Path;

use lifegrid_core::config::AppConfig;

/// Loads `path` as TOML, falling back to defaults when the file is missing
/// or invalid.
pub fn load_config(path: impl AsRef<Path>) -> AppConfig {
    let path = path.as_ref();
    match std::fs::read_to_string(path) {
        Ok(content) => match AppConfig::from_toml(&content) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "Loaded configuration");
                return config;
            }
            Err(e) => {
                tracing::warn!("Failed to load {}: {:#}", path.display(), e);
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
        }
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", path.display(), e);
        }
    }
    AppConfig::default()
}
