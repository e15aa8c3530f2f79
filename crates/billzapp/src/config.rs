//! # Configuration
//!
//! Settings live in `config.json` next to `items.json` in the data directory.
//! Every field is optional in the file; missing fields take their defaults.
//!
//! | Key           | Default        | Description                                  |
//! |---------------|----------------|----------------------------------------------|
//! | `company`     | (none)         | Sender name printed above the invoice        |
//! | `iban`        | (none)         | Bank account printed above the invoice       |
//! | `currency`    | `€`            | Currency label for prices                    |
//! | `export-file` | `Rechnung.pdf` | File name used when exporting to a directory |

use crate::error::{BillzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "€";
const DEFAULT_EXPORT_FILE: &str = "Rechnung.pdf";

pub const CONFIG_KEYS: &[&str] = &["company", "iban", "currency", "export-file"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BillzConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(
        default = "default_export_file",
        rename = "export-file",
        alias = "export_file"
    )]
    pub export_file: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for BillzConfig {
    fn default() -> Self {
        Self {
            company: None,
            iban: None,
            currency: default_currency(),
            export_file: default_export_file(),
        }
    }
}

impl BillzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(BillzError::Io)?;
        let config: BillzConfig =
            serde_json::from_str(&content).map_err(BillzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BillzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BillzError::Serialization)?;
        fs::write(config_path, content).map_err(BillzError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        match key {
            "company" => Ok(self.company.clone()),
            "iban" => Ok(self.iban.clone()),
            "currency" => Ok(Some(self.currency.clone())),
            "export-file" => Ok(Some(self.export_file.clone())),
            other => Err(unknown_key(other)),
        }
    }

    /// Sets a value. An empty value clears optional keys and restores the default
    /// for the others.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "company" => self.company = non_empty(value),
            "iban" => self.iban = non_empty(value),
            "currency" => {
                self.currency = non_empty(value).unwrap_or_else(default_currency);
            }
            "export-file" => {
                self.export_file = non_empty(value)
                    .map(|name| with_pdf_extension(&name))
                    .unwrap_or_else(default_export_file);
            }
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }

    /// `(key, value)` pairs for display, unset optional keys included as empty.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("company", self.company.clone().unwrap_or_default()),
            ("iban", self.iban.clone().unwrap_or_default()),
            ("currency", self.currency.clone()),
            ("export-file", self.export_file.clone()),
        ]
    }
}

fn unknown_key(key: &str) -> BillzError {
    BillzError::Api(format!(
        "Unknown config key: {} (known keys: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn with_pdf_extension(name: &str) -> String {
    if name.to_lowercase().ends_with(".pdf") {
        name.to_string()
    } else {
        format!("{}.pdf", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BillzConfig::default();
        assert_eq!(config.currency, "€");
        assert_eq!(config.export_file, "Rechnung.pdf");
        assert!(config.company.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = BillzConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, BillzConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = BillzConfig::default();
        config.set("company", "Muster GmbH").unwrap();
        config.save(&dir).unwrap();

        let loaded = BillzConfig::load(&dir).unwrap();
        assert_eq!(loaded.company.as_deref(), Some("Muster GmbH"));
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: BillzConfig = serde_json::from_str(r#"{"iban": "DE00 1234"}"#).unwrap();
        assert_eq!(config.iban.as_deref(), Some("DE00 1234"));
        assert_eq!(config.currency, "€");
    }

    #[test]
    fn test_file_keys_match_config_keys() {
        let json = serde_json::to_value(BillzConfig::default()).unwrap();
        assert_eq!(json["export-file"], "Rechnung.pdf");
        assert!(json.get("export_file").is_none());

        let legacy: BillzConfig =
            serde_json::from_str(r#"{"export_file": "Alt.pdf"}"#).unwrap();
        assert_eq!(legacy.export_file, "Alt.pdf");
    }

    #[test]
    fn test_set_export_file_adds_extension() {
        let mut config = BillzConfig::default();
        config.set("export-file", "invoice-march").unwrap();
        assert_eq!(config.export_file, "invoice-march.pdf");
        config.set("export-file", "Final.PDF").unwrap();
        assert_eq!(config.export_file, "Final.PDF");
    }

    #[test]
    fn test_empty_value_resets() {
        let mut config = BillzConfig::default();
        config.set("currency", "CHF").unwrap();
        config.set("company", "X").unwrap();
        config.set("currency", "").unwrap();
        config.set("company", " ").unwrap();
        assert_eq!(config, BillzConfig::default());
    }

    #[test]
    fn test_unknown_key() {
        let mut config = BillzConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }
}
