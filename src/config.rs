use crate::error::{FarmOpsError, Result};
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub baseline: BaselineConfig,
    #[serde(default)]
    pub relay: Option<RelayConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Delay before a submitted recommendation is delivered.
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
}

fn default_analysis_delay_ms() -> u64 {
    3000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: default_analysis_delay_ms(),
        }
    }
}

/// Values substituted for measurements the farmer did not supply.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BaselineConfig {
    pub ph: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub temperature: f64,
    pub land_area: f64,
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            ph: 7.0,
            humidity: 65.0,
            rainfall: 100.0,
            temperature: 25.0,
            land_area: 1.0,
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct RelayConfig {
    /// Conversation endpoint; the session id is appended as a path segment.
    pub url: String,
    pub api_key: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("url", &self.url)
            .field("api_key", &"[REDACTED]")
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(FarmOpsError::Config(format!(
                "Config file not found at {:?}. Run `farmops init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FarmOpsError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&config_str)
    }

    /// Load the config if one can be found, otherwise fall back to defaults.
    pub fn load_or_default(config_override: Option<PathBuf>) -> Result<Self> {
        if config_override.is_some() || Self::exists(None) {
            Self::load(config_override)
        } else {
            tracing::info!("No config file found, using built-in defaults");
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| FarmOpsError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let b = &self.baseline;
        if !(1.0..=14.0).contains(&b.ph) {
            return Err(FarmOpsError::Config(format!(
                "baseline.ph must be between 1 and 14, got {}",
                b.ph
            )));
        }
        if !(0.0..=100.0).contains(&b.humidity) {
            return Err(FarmOpsError::Config(format!(
                "baseline.humidity must be between 0 and 100, got {}",
                b.humidity
            )));
        }
        if b.rainfall < 0.0 {
            return Err(FarmOpsError::Config(format!(
                "baseline.rainfall must not be negative, got {}",
                b.rainfall
            )));
        }
        if b.land_area <= 0.0 {
            return Err(FarmOpsError::Config(format!(
                "baseline.land_area must be greater than zero, got {}",
                b.land_area
            )));
        }
        if let Some(relay) = &self.relay {
            if relay.enabled && relay.url.trim().is_empty() {
                return Err(FarmOpsError::Config(
                    "relay.url is required when the relay is enabled".into(),
                ));
            }
        }
        Ok(())
    }

    /// The relay settings, if configured, enabled and carrying a key.
    pub fn active_relay(&self) -> Option<&RelayConfig> {
        self.relay
            .as_ref()
            .filter(|r| r.enabled && !r.api_key.is_empty())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("farmops").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        Self::default_config_path()
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/farmops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FarmOpsError::Config("Cannot determine config directory".into()))?
            .join("farmops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up FarmOps!");
        println!();

        println!("Engine");
        let analysis_delay_ms: u64 = Input::new()
            .with_prompt("  Analysis delay (ms)")
            .default(default_analysis_delay_ms())
            .interact_text()
            .map_err(|e| FarmOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Baseline for missing measurements");
        let defaults = BaselineConfig::default();
        let land_area: f64 = Input::new()
            .with_prompt("  Land area (hectares)")
            .default(defaults.land_area)
            .interact_text()
            .map_err(|e| FarmOpsError::Config(format!("Input error: {}", e)))?;

        let rainfall: f64 = Input::new()
            .with_prompt("  Typical rainfall (mm)")
            .default(defaults.rainfall)
            .interact_text()
            .map_err(|e| FarmOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        // --- Chat relay (optional) ---
        println!("Chat relay (leave URL blank to skip)");
        let relay_url: String = Input::new()
            .with_prompt("  Conversation URL")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| FarmOpsError::Config(format!("Input error: {}", e)))?;

        let relay = if relay_url.is_empty() {
            None
        } else {
            let api_key: String = Password::new()
                .with_prompt("  API key")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| FarmOpsError::Config(format!("Input error: {}", e)))?;

            Some(RelayConfig {
                url: relay_url,
                api_key,
                enabled: true,
            })
        };

        println!();

        let config = Config {
            engine: EngineConfig { analysis_delay_ms },
            baseline: BaselineConfig {
                land_area,
                rainfall,
                ..defaults
            },
            relay,
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| FarmOpsError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# FarmOps Configuration\n# Generated by `farmops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| FarmOpsError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config.engine.analysis_delay_ms, 3000);
        assert_eq!(config.baseline, BaselineConfig::default());
        assert!(config.relay.is_none());
    }

    #[test]
    fn partial_baseline_keeps_other_defaults() {
        let config = Config::from_yaml("baseline:\n  ph: 6.2\n").unwrap();
        assert_eq!(config.baseline.ph, 6.2);
        assert_eq!(config.baseline.humidity, 65.0);
        assert_eq!(config.baseline.land_area, 1.0);
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("FARMOPS_TEST_RELAY_KEY", "secret-key");
        let yaml = "relay:\n  url: http://localhost/converse\n  api_key: ${FARMOPS_TEST_RELAY_KEY}\n";
        let config = Config::from_yaml(yaml).unwrap();
        let relay = config.active_relay().unwrap();
        assert_eq!(relay.api_key, "secret-key");
        assert!(relay.enabled);
    }

    #[test]
    fn relay_debug_redacts_key() {
        let relay = RelayConfig {
            url: "http://localhost".into(),
            api_key: "secret-key".into(),
            enabled: true,
        };
        let debug = format!("{:?}", relay);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret-key"));
    }

    #[test]
    fn disabled_relay_is_inactive() {
        let yaml = "relay:\n  url: http://localhost\n  api_key: k\n  enabled: false\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert!(config.active_relay().is_none());
    }

    #[test]
    fn invalid_baseline_rejected() {
        let err = Config::from_yaml("baseline:\n  land_area: 0\n").unwrap_err();
        assert!(matches!(err, FarmOpsError::Config(_)));
        let err = Config::from_yaml("baseline:\n  ph: 15\n").unwrap_err();
        assert!(matches!(err, FarmOpsError::Config(_)));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "engine:\n  analysis_delay_ms: 10").unwrap();
        let config = Config::load(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.engine.analysis_delay_ms, 10);
    }

    #[test]
    fn missing_override_is_an_error() {
        let path = PathBuf::from("/nonexistent/farmops/config.yaml");
        assert!(matches!(
            Config::load_or_default(Some(path)),
            Err(FarmOpsError::Config(_))
        ));
    }
}
