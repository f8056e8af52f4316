// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::{bail, Context};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::instrument;

pub(crate) const DEFAULT_LOCATION: &str = "London";
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub(crate) const DEFAULT_SIMULATED_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
  pub widget: WidgetConfig,
  pub random: RandomConfig,
  pub presentation: PresentationSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
  pub default_location: String,
  pub request_timeout_secs: u64,
  pub provider: ProviderKind,
}

impl Default for WidgetConfig {
  fn default() -> Self {
    Self {
      default_location: DEFAULT_LOCATION.to_string(),
      request_timeout_secs: DEFAULT_TIMEOUT_SECS,
      provider: ProviderKind::default(),
    }
  }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
  #[default]
  Random,
  OpenWeather,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RandomConfig {
  pub simulated_delay_ms: u64,
}

impl Default for RandomConfig {
  fn default() -> Self {
    Self {
      simulated_delay_ms: DEFAULT_SIMULATED_DELAY_MS,
    }
  }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresentationSettings {
  pub drizzle: DrizzleSetting,
}

/// Whether drizzle borrows the rain background or gets a lighter one of its own.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DrizzleSetting {
  #[default]
  WithRain,
  Distinct,
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let content = fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    config.validate()?;
    tracing::debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Reads `path` if it exists, otherwise falls back to the defaults.
  pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      tracing::info!("No config at {}, using defaults", path.display());
      return Ok(Self::default());
    }
    Self::from_file(path).with_context(|| format!("Failed to load config from {}", path.display()))
  }

  pub fn request_timeout(&self) -> Duration {
    Duration::from_secs(self.widget.request_timeout_secs)
  }

  pub fn simulated_delay(&self) -> Duration {
    Duration::from_millis(self.random.simulated_delay_ms)
  }

  fn validate(&self) -> anyhow::Result<()> {
    if self.widget.default_location.trim().is_empty() {
      bail!("widget.default_location must not be empty");
    }
    if self.widget.request_timeout_secs == 0 {
      bail!("widget.request_timeout_secs must be greater than zero");
    }
    Ok(())
  }
}

impl std::fmt::Display for ProviderKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let kind = match self {
      ProviderKind::Random => "random",
      ProviderKind::OpenWeather => "open_weather",
    };
    write!(f, "{}", kind)
  }
}

impl std::fmt::Display for DrizzleSetting {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let setting = match self {
      DrizzleSetting::WithRain => "with_rain",
      DrizzleSetting::Distinct => "distinct",
    };
    write!(f, "{}", setting)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.widget.default_location, "London");
    assert_eq!(config.request_timeout(), Duration::from_secs(10));
    assert_eq!(config.simulated_delay(), Duration::from_millis(1000));
    assert_eq!(config.presentation.drizzle, DrizzleSetting::WithRain);
  }

  #[test]
  fn parses_all_sections() {
    let config: Config = toml::from_str(
      r#"
        [widget]
        default_location = "Tokyo"
        request_timeout_secs = 3
        provider = "open_weather"

        [random]
        simulated_delay_ms = 0

        [presentation]
        drizzle = "distinct"
      "#,
    )
    .unwrap();

    assert_eq!(config.widget.default_location, "Tokyo");
    assert_eq!(config.widget.provider, ProviderKind::OpenWeather);
    assert_eq!(config.simulated_delay(), Duration::ZERO);
    assert_eq!(config.presentation.drizzle, DrizzleSetting::Distinct);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn rejects_blank_default_location() {
    let config: Config = toml::from_str("[widget]\ndefault_location = \"  \"").unwrap();
    assert!(config.validate().is_err());
  }

  #[test]
  fn rejects_zero_timeout() {
    let config: Config = toml::from_str("[widget]\nrequest_timeout_secs = 0").unwrap();
    assert!(config.validate().is_err());
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let config = Config::load_or_default("definitely/not/here.toml").unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn provider_kind_display_matches_toml_names() {
    assert_eq!(ProviderKind::Random.to_string(), "random");
    assert_eq!(ProviderKind::OpenWeather.to_string(), "open_weather");
    assert_eq!(DrizzleSetting::Distinct.to_string(), "distinct");
  }
}
