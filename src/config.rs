use crate::error::{CropWiseError, Result};
use crate::models::{Language, SoilType, WeatherType};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub defaults: AdviceDefaults,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Fallback soil/weather for `advise` when no profile is active.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdviceDefaults {
    #[serde(default = "default_soil")]
    pub soil_type: SoilType,
    #[serde(default = "default_weather")]
    pub weather_type: WeatherType,
}

fn default_soil() -> SoilType {
    SoilType::Loamy
}

fn default_weather() -> WeatherType {
    WeatherType::Moderate
}

impl Default for AdviceDefaults {
    fn default() -> Self {
        Self {
            soil_type: default_soil(),
            weather_type: default_weather(),
        }
    }
}

impl Config {
    /// Load from an explicit path, or from the first standard location that
    /// exists. With no file anywhere, defaults are used.
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) if !p.exists() => {
                return Err(CropWiseError::Config(format!(
                    "Config file not found at {:?}",
                    p
                )));
            }
            Some(p) => p,
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropWiseError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| CropWiseError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        let xdg_config = dirs::config_dir()?.join("cropwise").join("config.yaml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Default path for writing new config files (~/.config/cropwise/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropWiseError::Config("Cannot determine config directory".into()))?
            .join("cropwise");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up CropWise!");
        println!();

        let languages = Language::all();
        let language = Select::new()
            .with_prompt("Tip language")
            .items(languages)
            .default(0)
            .interact()
            .map_err(|e| CropWiseError::Config(format!("Input error: {}", e)))?;

        let soils = SoilType::all();
        let soil = Select::new()
            .with_prompt("Default soil type")
            .items(soils)
            .default(2)
            .interact()
            .map_err(|e| CropWiseError::Config(format!("Input error: {}", e)))?;

        let weathers = WeatherType::all();
        let weather = Select::new()
            .with_prompt("Default weather")
            .items(weathers)
            .default(2)
            .interact()
            .map_err(|e| CropWiseError::Config(format!("Input error: {}", e)))?;

        let data_dir: String = Input::new()
            .with_prompt("Data directory (leave blank for the default)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| CropWiseError::Config(format!("Input error: {}", e)))?;

        let config = Config {
            language: languages[language],
            defaults: AdviceDefaults {
                soil_type: soils[soil],
                weather_type: weathers[weather],
            },
            data_dir: (!data_dir.trim().is_empty()).then(|| PathBuf::from(data_dir.trim())),
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| CropWiseError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# CropWise Configuration\n# Generated by `cropwise init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!();
        println!("Configuration saved to {}", config_path.display());

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| CropWiseError::Config(format!("Invalid substitution pattern: {}", e)))?;

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }

    /// CLI flag, then `CROPWISE_DATA_DIR`, then config, then the XDG data dir.
    pub fn data_dir(&self, data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        let dir = if let Some(dir) = data_dir_override {
            dir.clone()
        } else if let Ok(dir) = std::env::var("CROPWISE_DATA_DIR") {
            PathBuf::from(dir)
        } else if let Some(dir) = &self.data_dir {
            dir.clone()
        } else {
            dirs::data_dir()
                .ok_or_else(|| CropWiseError::Config("Cannot determine data directory".into()))?
                .join("cropwise")
        };

        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub fn db_path(&self, data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        Ok(self.data_dir(data_dir_override)?.join("cropwise.db"))
    }
}
