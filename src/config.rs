//! configuration, read from the environment.
//!
//! the refresh interval and the sampled filesystem are fixed. only the log output can be
//! configured.

use {std::path::PathBuf, tracing_subscriber::EnvFilter};

/// the environment variable naming the file that logs are appended to.
pub const LOG_FILE_VAR: &str = "VITALS_LOG_FILE";

/// the environment variable holding log filter directives.
pub const LOG_FILTER_VAR: &str = "VITALS_LOG";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// where logs are written. logging is disabled if this is `None`, since the dashboard owns
    /// the terminal.
    pub log_file: Option<PathBuf>,
    /// which logs are written, in `EnvFilter` syntax.
    pub log_filter: String,
}

// === impl Config ===

impl Default for Config {
    fn default() -> Self {
        Self {
            log_file: None,
            log_filter: Self::DEFAULT_FILTER.to_owned(),
        }
    }
}

impl Config {
    const DEFAULT_FILTER: &str = "info";

    /// reads the configuration from the process environment.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// reads the configuration using `lookup` to find each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let log_file = lookup(LOG_FILE_VAR).map(PathBuf::from);
        let log_filter = lookup(LOG_FILTER_VAR).unwrap_or_else(|| Self::DEFAULT_FILTER.to_owned());

        let config = Self {
            log_file,
            log_filter,
        };
        config.validate()?;
        Ok(config)
    }

    /// returns the log filter.
    pub fn filter(&self) -> anyhow::Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter).map_err(|error| {
            anyhow::anyhow!("{LOG_FILTER_VAR} is not a valid filter ({error}): {}", self.log_filter)
        })
    }

    fn validate(&self) -> anyhow::Result<()> {
        if let Some(path) = &self.log_file {
            anyhow::ensure!(
                !path.as_os_str().is_empty(),
                "{LOG_FILE_VAR} must be non-empty when set"
            );
            anyhow::ensure!(
                !path.is_dir(),
                "{LOG_FILE_VAR} must name a file, got directory {}",
                path.display()
            );
        }
        anyhow::ensure!(
            !self.log_filter.trim().is_empty(),
            "{LOG_FILTER_VAR} must be non-empty when set"
        );
        self.filter().map(drop)
    }
}
