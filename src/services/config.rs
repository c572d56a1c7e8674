use crate::cli::Cli;
use crate::domain::constants::{DEFAULT_AUTH_FILE, DEFAULT_CONFIG_FILE};
use crate::graph::DEFAULT_GRAPH_URL;
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional `entraperm.toml`; every key falls back to the built-in default.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub graph_url: Option<String>,
    #[serde(default)]
    pub auth_file: Option<PathBuf>,
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub color: Option<bool>,
}

/// Resolved run configuration handed to every operation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub graph_url: String,
    pub auth_file: PathBuf,
    pub output_dir: PathBuf,
    pub data_dir: PathBuf,
    pub color: bool,
}

pub fn load_settings_file(path: &Path) -> anyhow::Result<SettingsFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid settings {}", path.display()))
}

impl Settings {
    /// Flags win over the settings file, which wins over defaults. An explicit
    /// `--config` must exist; the implicit one is optional.
    pub fn resolve(cli: &Cli) -> anyhow::Result<Self> {
        let file = match &cli.config {
            Some(path) => load_settings_file(path)?,
            None => {
                let implicit = Path::new(DEFAULT_CONFIG_FILE);
                if implicit.exists() {
                    load_settings_file(implicit)?
                } else {
                    SettingsFile::default()
                }
            }
        };
        Ok(Self::merge(cli, file))
    }

    pub fn merge(cli: &Cli, file: SettingsFile) -> Self {
        Self {
            graph_url: cli
                .graph_url
                .clone()
                .or(file.graph_url)
                .unwrap_or_else(|| DEFAULT_GRAPH_URL.to_string()),
            auth_file: cli
                .auth_file
                .clone()
                .or(file.auth_file)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_AUTH_FILE)),
            output_dir: cli
                .output_dir
                .clone()
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            data_dir: cli
                .data_dir
                .clone()
                .or(file.data_dir)
                .unwrap_or_else(default_data_dir),
            color: !cli.no_color && file.color.unwrap_or(true),
        }
    }
}

/// `data/` next to the installed binary, where the bundled reference files live.
fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("data")))
        .unwrap_or_else(|| PathBuf::from("data"))
}
