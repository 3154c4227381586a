use std::path::PathBuf;

use crate::cli::Cli;

pub const DEFAULT_DATA_PATH: &str = "part-data.csv";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "model_rf_data.json";
pub const DEFAULT_LIFETIME_MODEL: &str = "lifetime_model.json";
pub const DEFAULT_LOG_FILTER: &str = "off";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_path: PathBuf,
    pub classifier_model: PathBuf,
    pub lifetime_model: PathBuf,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            classifier_model: PathBuf::from(DEFAULT_CLASSIFIER_MODEL),
            lifetime_model: PathBuf::from(DEFAULT_LIFETIME_MODEL),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str, default: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            data_path: PathBuf::from(read("RAILRISK_DATA_PATH", DEFAULT_DATA_PATH)),
            classifier_model: PathBuf::from(read(
                "RAILRISK_CLASSIFIER_MODEL",
                DEFAULT_CLASSIFIER_MODEL,
            )),
            lifetime_model: PathBuf::from(read("RAILRISK_LIFETIME_MODEL", DEFAULT_LIFETIME_MODEL)),
            log_filter: read("RAILRISK_LOG", DEFAULT_LOG_FILTER),
        }
    }

    /// Flags given on the command line win over the environment.
    #[must_use]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.data {
            self.data_path.clone_from(path);
        }
        if let Some(path) = &cli.classifier_model {
            self.classifier_model.clone_from(path);
        }
        if let Some(path) = &cli.lifetime_model {
            self.lifetime_model.clone_from(path);
        }
        match cli.verbose {
            0 => {}
            1 => self.log_filter = "info".to_string(),
            2 => self.log_filter = "debug".to_string(),
            _ => self.log_filter = "trace".to_string(),
        }
        self
    }
}
