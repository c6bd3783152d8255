//! Configuration with layered hierarchy

use serde::Deserialize;
use std::path::PathBuf;

/// DPR configuration, merged from defaults, the user config file, and
/// environment variables (later layers win).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Author stamped on exported documents
    pub author: Option<String>,

    /// Default path for exported documents
    pub export_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (already in Default impl)

        // 2. User config (~/.config/dpr/config.yaml)
        if let Some(path) = Self::config_path() {
            if path.exists() {
                if let Ok(contents) = std::fs::read_to_string(&path) {
                    if let Ok(user) = serde_yml::from_str::<Config>(&contents) {
                        config.merge(user);
                    }
                }
            }
        }

        // 3. Environment variables
        if let Ok(author) = std::env::var("DPR_AUTHOR") {
            config.author = Some(author);
        }
        if let Ok(dir) = std::env::var("DPR_EXPORT_DIR") {
            config.export_dir = Some(PathBuf::from(dir));
        }

        config
    }

    fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "dpr")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    fn merge(&mut self, other: Config) {
        if other.author.is_some() {
            self.author = other.author;
        }
        if other.export_dir.is_some() {
            self.export_dir = other.export_dir;
        }
    }

    /// Get the author name, falling back to git config or username
    pub fn author(&self) -> String {
        if let Some(ref author) = self.author {
            return author.clone();
        }

        if let Ok(output) = std::process::Command::new("git")
            .args(["config", "user.name"])
            .output()
        {
            if output.status.success() {
                let name = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if !name.is_empty() {
                    return name;
                }
            }
        }

        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string())
    }
}
