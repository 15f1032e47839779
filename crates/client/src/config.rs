//! Client-side configuration for the console frontend.
use std::env;
use std::path::PathBuf;

/// Console client configuration.
///
/// Battle setup (seed, enemy) lives in [`gladiator_runtime::RuntimeConfig`];
/// this only covers what the terminal frontend itself needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Session identifier used to name the log directory.
    pub session_id: Option<String>,
    /// Overrides the platform cache directory for logs.
    pub log_dir: Option<PathBuf>,
    /// Number of cells in the HP bar.
    pub health_bar_width: usize,
}

impl ClientConfig {
    pub const DEFAULT_HEALTH_BAR_WIDTH: usize = 20;
    pub const MIN_HEALTH_BAR_WIDTH: usize = 5;

    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `GLADIATOR_SESSION_ID` - Log session name (default: `session_<unix time>`)
    /// - `GLADIATOR_LOG_DIR` - Log root directory (default: platform cache dir)
    /// - `GLADIATOR_HEALTH_BAR_WIDTH` - HP bar width in cells (default: 20, min: 5)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct client configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self {
            session_id: lookup("GLADIATOR_SESSION_ID").filter(|id| !id.trim().is_empty()),
            log_dir: lookup("GLADIATOR_LOG_DIR").map(PathBuf::from),
            ..Self::default()
        };

        if let Some(width) = read_value::<usize>(&lookup, "GLADIATOR_HEALTH_BAR_WIDTH") {
            config.health_bar_width = width.max(Self::MIN_HEALTH_BAR_WIDTH);
        }

        config
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            session_id: None,
            log_dir: None,
            health_bar_width: Self::DEFAULT_HEALTH_BAR_WIDTH,
        }
    }
}

fn read_value<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
