//! Application configuration file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hedgefolio_core::Symbol;

use crate::analytics::AnalyticsConfig;
use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::universe::UniverseConfig;

/// Default directory for per-symbol price files.
pub const DEFAULT_PRICES_DIR: &str = "data/prices";

/// `[data]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `<SYMBOL>.csv` price files.
    pub prices_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            prices_dir: PathBuf::from(DEFAULT_PRICES_DIR),
        }
    }
}

/// Complete configuration. Every section is optional in the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Analytics settings.
    pub analytics: AnalyticsConfig,
    /// Data locations.
    pub data: DataConfig,
    /// Instrument universes.
    pub universe: UniverseConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let io_err = |e: std::io::Error| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(io_err)
    }

    /// Returns true if `symbol` can be hedged.
    pub fn is_hedge_base(&self, symbol: &Symbol) -> bool {
        self.universe.hedging.base.contains(symbol)
    }

    /// Returns true if `symbol` can be used as a hedge.
    pub fn is_hedge_instrument(&self, symbol: &Symbol) -> bool {
        self.universe.hedging.hedge.contains(symbol)
    }

    /// Returns true if `symbol` is offered for either portfolio leg.
    pub fn is_portfolio_asset(&self, symbol: &Symbol) -> bool {
        self.universe.portfolio.first.contains(symbol)
            || self.universe.portfolio.second.contains(symbol)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = self.analytics.validate();
        if self.data.prices_dir.as_os_str().is_empty() {
            errors.push(ValidationError::new(
                "data.prices_dir",
                "Prices directory cannot be empty",
            ));
        }
        errors.extend(self.universe.validate());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hedgefolio_analytics::portfolio::MinVariancePolicy;
    use hedgefolio_core::Lookback;

    const SAMPLE: &str = r#"
[analytics]
periods_per_year = 252
frontier_steps = 50
min_variance_policy = "unconstrained"

[data]
prices_dir = "/var/lib/prices"

[universe.hedging]
base = ["aapl", "MSFT"]
hedge = ["KO"]
start = "2020-01-01"
end = "2020-12-31"

[universe.portfolio]
first = ["AAPL"]
second = ["JNJ"]
periods = ["1y", "6mo"]
default_weight = 0.6
"#;

    #[test]
    fn test_parse_full() {
        let config = AppConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.analytics.frontier_steps, 50);
        assert_eq!(
            config.analytics.min_variance_policy,
            MinVariancePolicy::Unconstrained
        );
        assert_eq!(config.data.prices_dir, PathBuf::from("/var/lib/prices"));
        assert_eq!(config.universe.hedging.base[0], Symbol::new("AAPL"));
        assert_eq!(
            config.universe.portfolio.periods,
            vec![Lookback::Years(1), Lookback::Months(6)]
        );
        assert!(config.is_valid());
    }

    #[test]
    fn test_partial_uses_defaults() {
        let config = AppConfig::from_toml_str("[analytics]\nfrontier_steps = 20\n").unwrap();
        assert_eq!(config.analytics.frontier_steps, 20);
        assert_eq!(config.analytics.periods_per_year, 252);
        assert_eq!(config.universe, UniverseConfig::default());
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_round_trip() {
        let config = AppConfig::default();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("min_variance_policy = \"clamp\""));
        assert_eq!(AppConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_bad_values_are_deserialization_errors() {
        for text in [
            "[universe.portfolio]\nperiods = [\"2 years\"]\n",
            "[analytics]\nmin_variance_policy = \"short\"\n",
            "[universe.hedging]\nstart = \"2021-13-01\"\n",
        ] {
            assert!(matches!(
                AppConfig::from_toml_str(text),
                Err(ConfigError::Parse(_))
            ));
        }
    }

    #[test]
    fn test_validate_or_error() {
        let mut config = AppConfig::default();
        config.analytics.periods_per_year = 0;
        assert!(matches!(
            config.validate_or_error(),
            Err(ConfigError::Invalid(_))
        ));

        config.universe.portfolio.default_weight = -0.1;
        let err = config.validate_or_error().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSettings(ref e) if e.len() == 2));
        assert!(err.to_string().contains("default_weight"));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig::default();
        config.write_to_file(&path).unwrap();
        assert_eq!(AppConfig::from_file(&path).unwrap(), config);

        assert!(matches!(
            AppConfig::from_file(dir.path().join("missing.toml")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_universe_membership() {
        let config = AppConfig::default();
        assert!(config.is_hedge_base(&Symbol::new("aapl")));
        assert!(config.is_hedge_instrument(&Symbol::new("KO")));
        assert!(!config.is_hedge_instrument(&Symbol::new("AAPL")));
        assert!(config.is_portfolio_asset(&Symbol::new("PYPL")));
    }
}
