use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub db_path: Option<String>,
    pub locale: Option<String>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/school-evaluator/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(db_path) = overrides.db_path {
            self.storage.db_path = db_path;
        }
        if let Some(locale) = overrides.locale {
            self.display.locale = locale;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }

    pub fn locale(&self) -> Result<Locale> {
        Ok(Locale::from_str(&self.display.locale)?)
    }

    pub fn default_template() -> String {
        let template = r#"[storage]
db_path = "~/.local/share/school-evaluator/evaluator.db"

[display]
# one of: en, zh, ja, es, fr
locale = "en"

[server]
host = "127.0.0.1"
port = 3002
"#;
        template.to_string()
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_db_path() -> String {
    "~/.local/share/school-evaluator/evaluator.db".to_string()
}

fn default_locale() -> String {
    Locale::default().code().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3002
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, ConfigOverrides};
    use crate::i18n::Locale;

    #[test]
    fn template_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::default_template()).expect("parse template");
        let defaults = Config::default();
        assert_eq!(parsed.storage.db_path, defaults.storage.db_path);
        assert_eq!(parsed.display.locale, "en");
        assert_eq!(parsed.server.port, 3002);
    }

    #[test]
    fn partial_file_fills_missing_sections() {
        let parsed: Config = toml::from_str("[display]\nlocale = \"ja\"\n").expect("parse");
        assert_eq!(parsed.locale().expect("locale"), Locale::Ja);
        assert_eq!(parsed.server.host, "127.0.0.1");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = Config::load(Some(&dir.path().join("absent.toml"))).expect("load");
        assert_eq!(config.display.locale, "en");
    }

    #[test]
    fn written_template_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cfg/config.toml");
        Config::write_template(&path).expect("write template");
        let config = Config::load(Some(&path)).expect("load");
        assert_eq!(config.server.port, 3002);
    }

    #[test]
    fn overrides_replace_values() {
        let mut config = Config::default();
        config.apply_overrides(ConfigOverrides {
            db_path: Some("/tmp/eval.db".to_string()),
            locale: Some("fr".to_string()),
        });
        assert_eq!(config.resolved_db_path().to_string_lossy(), "/tmp/eval.db");
        assert_eq!(config.locale().expect("locale"), Locale::Fr);
    }

    #[test]
    fn unknown_locale_is_an_error() {
        let mut config = Config::default();
        config.display.locale = "klingon".to_string();
        assert!(config.locale().is_err());
    }

    #[test]
    fn bad_locale_still_loads_for_show_and_init() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[display]\nlocale = \"klingon\"\n").expect("write config");
        let config = Config::load(Some(&path)).expect("load is locale-agnostic");
        assert_eq!(config.display.locale, "klingon");
        assert!(config.locale().is_err());
    }
}
