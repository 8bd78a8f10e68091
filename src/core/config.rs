use crate::core::calculator::{CalculatorState, Frequency, RATE_DEFAULT, RATE_MAX, RATE_MIN};
use crate::core::currency::Currency;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Session defaults for the calculator. Every field is optional; a missing
/// or absent config file means the built-in defaults (EUR, monthly, 4%).
///
/// Currency and frequency are kept as raw strings so that out-of-set values
/// fall back to the default instead of failing deserialization.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    frequency: Option<String>,
    #[serde(default)]
    return_rate: Option<f64>,
}

impl AppConfig {
    /// Loads the config from the default location, or falls back to the
    /// built-in defaults when no file exists. The calculator must work
    /// with zero setup.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from_path(&config_path)
        } else {
            debug!("No config file at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "nestegg")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn currency(&self) -> Currency {
        self.currency
            .as_deref()
            .map(Currency::parse_lenient)
            .unwrap_or_default()
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
            .as_deref()
            .map(Frequency::parse_lenient)
            .unwrap_or_default()
    }

    /// The configured return rate, snapped to the integer steps of the
    /// interactive control. Values outside the control bounds clamp.
    pub fn control_rate(&self) -> u8 {
        let rate = self.return_rate.unwrap_or(f64::from(RATE_DEFAULT));
        if !rate.is_finite() {
            debug!("Non-finite return_rate in config, using default");
            return RATE_DEFAULT;
        }
        rate.round()
            .clamp(f64::from(RATE_MIN), f64::from(RATE_MAX)) as u8
    }

    /// The initial input tuple for a session: empty income, configured
    /// defaults for everything else.
    pub fn initial_state(&self) -> CalculatorState {
        CalculatorState {
            income: String::new(),
            frequency: self.frequency(),
            currency: self.currency(),
            return_rate: f64::from(self.control_rate()),
        }
    }
}
