// Adapter configuration: a small TOML file with environment overrides.
// Environment wins over the file, matching the rest of the pipeline tooling.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::{env, fs};

use crate::errors::ConfigError;

const ENV_RULESETS: &str = "PMD_RULESETS";
const ENV_SHOW_DETAILS: &str = "PMD_SHOW_VIOLATION_DETAILS";

const RULESET_SEPARATOR: char = ',';
const CONFIG_DIR: &str = "pmd-review";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Options for one PMD adapter instance. Passed explicitly at construction;
/// the adapter never reaches into globals.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PmdOptions {
    /// Rule set identifiers, in configuration order.
    pub rulesets: Vec<String>,
    /// Append rule rationale and reference URL to each violation message.
    pub show_violation_details: bool,
    /// Extensions the file selector keeps for this adapter.
    pub extensions: Vec<String>,
}

impl Default for PmdOptions {
    fn default() -> Self {
        Self {
            rulesets: Vec::new(),
            show_violation_details: false,
            extensions: vec!["java".to_string()],
        }
    }
}

impl PmdOptions {
    /// Splits one comma-separated configuration value into rule set
    /// identifiers. Absent means no rules configured, which is not an
    /// error. Identifiers are not validated here; bad ones surface when
    /// the analyzer rejects them.
    pub fn rulesets_from_value(value: Option<&str>) -> Vec<String> {
        match value {
            None => Vec::new(),
            Some(raw) => raw.split(RULESET_SEPARATOR).map(str::to_string).collect(),
        }
    }

    /// Boolean-as-string: "true" in any case enables details, anything
    /// else disables them.
    pub fn show_details_from_value(value: Option<&str>) -> bool {
        matches!(value, Some(v) if v.eq_ignore_ascii_case("true"))
    }

    /// Loads from `path`, or from the user config file when present, then
    /// applies `PMD_RULESETS` and `PMD_SHOW_VIOLATION_DETAILS` overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut options = match path {
            Some(explicit) => Self::from_file(explicit)?,
            None => match user_config_path() {
                Some(default) if default.exists() => Self::from_file(&default)?,
                _ => Self::default(),
            },
        };

        if let Ok(raw) = env::var(ENV_RULESETS) {
            options.rulesets = Self::rulesets_from_value(Some(&raw));
        }
        if let Ok(raw) = env::var(ENV_SHOW_DETAILS) {
            options.show_violation_details = Self::show_details_from_value(Some(&raw));
        }
        Ok(options)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.display().to_string(), e))?;
        toml::from_str(&raw).map_err(|e| ConfigError::TomlParse(path.display().to_string(), e))
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE_NAME))
}
