use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;
use toml::{map::Map, Value};

/// Root of the cargo workspace, falling back to the current directory when
/// the binary runs outside of cargo.
pub fn workspace_dir() -> PathBuf {
    let located = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok());

    match located {
        Some(path) => Path::new(path.trim())
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
        None => PathBuf::from("."),
    }
}

pub fn load_config<T: DeserializeOwned>(
    config_name: &str,
) -> anyhow::Result<T> {
    load_config_from(&workspace_dir().join(config_name))
}

pub fn load_config_from<T: DeserializeOwned>(
    path: &Path,
) -> anyhow::Result<T> {
    let config = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<T>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn load_env() -> anyhow::Result<Map<String, Value>> {
    let workspace_dir = workspace_dir();
    let secrets =
        std::fs::read_to_string(workspace_dir.join("Secrets.dev.toml"))
            .context("failed to read Secrets.dev.toml")?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .context("failed to parse Secrets.dev.toml")
}
