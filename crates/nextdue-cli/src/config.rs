//! CLI configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/nextdue/config.toml` by default. Every setting has a working
//! default; the file is optional and CLI flags override it.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the nextdue CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default calendar export path, used when no positional argument is given.
    pub calendar_path: Option<PathBuf>,

    /// Display settings.
    #[serde(default)]
    pub display: DisplaySettings,

    /// Filter settings.
    #[serde(default)]
    pub filters: FilterSettings,
}

/// Display settings for output rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Text to show when no assignments survive classification.
    pub no_assignments_text: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            no_assignments_text: "No assignments found.".to_string(),
        }
    }
}

/// Filter settings for assignment classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Whether the built-in exclusion terms apply.
    pub use_builtin_excludes: bool,

    /// Additional exclusion terms.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            use_builtin_excludes: true,
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| format!("failed to read config: {}", e))?;
            toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &PathBuf) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        toml::from_str(&content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("nextdue")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.calendar_path.is_none());
        assert_eq!(config.display.no_assignments_text, "No assignments found.");
        assert!(config.filters.use_builtin_excludes);
        assert!(config.filters.exclude.is_empty());
    }

    #[test]
    fn load_from_parses_partial_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "calendar_path = \"spring.ics\"\n\n\
             [filters]\n\
             exclude = [\"Recitation\"]"
        )
        .unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.calendar_path, Some(PathBuf::from("spring.ics")));
        assert_eq!(config.filters.exclude, vec!["Recitation".to_string()]);
        // Untouched sections keep their defaults.
        assert!(config.filters.use_builtin_excludes);
        assert_eq!(config.display.no_assignments_text, "No assignments found.");
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "calendar_path = [not toml").unwrap();

        let err = Config::load_from(&file.path().to_path_buf()).unwrap_err();
        assert!(err.contains("failed to parse config"));
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("no_assignments_text"));
        assert!(toml_str.contains("use_builtin_excludes"));
    }

    #[test]
    fn default_path_ends_with_app_config() {
        let path = Config::default_path();
        assert!(path.ends_with("nextdue/config.toml"));
    }
}
