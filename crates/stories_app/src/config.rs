use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use log::LevelFilter;
use stories_engine::FetchSettings;
use stories_logging::stories_warn;

pub const ENV_ENDPOINT: &str = "STORIES_ENDPOINT";
pub const ENV_STATE_DIR: &str = "STORIES_STATE_DIR";
pub const ENV_DEBOUNCE_MS: &str = "STORIES_DEBOUNCE_MS";
pub const ENV_SIMULATED: &str = "STORIES_SIMULATED";
pub const ENV_LOG: &str = "STORIES_LOG";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding the preference file.
    pub state_dir: PathBuf,
    /// Preference key for the last search term.
    pub search_key: String,
    /// Search term used when nothing has been stored yet.
    pub default_search: String,
    /// Quiet period after the last edit before a search fires.
    pub debounce: Duration,
    pub fetch: FetchSettings,
    /// Serve built-in sample stories instead of calling the endpoint.
    pub simulated: bool,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            search_key: "search".to_string(),
            default_search: "React".to_string(),
            debounce: Duration::from_millis(500),
            fetch: FetchSettings::default(),
            simulated: false,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns. Unparsable values are
    /// logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config.fetch.endpoint = endpoint;
        }
        if let Some(dir) = lookup(ENV_STATE_DIR) {
            config.state_dir = PathBuf::from(dir);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, ENV_DEBOUNCE_MS) {
            config.debounce = Duration::from_millis(ms);
        }
        if let Some(simulated) = parse_var::<bool>(&lookup, ENV_SIMULATED) {
            config.simulated = simulated;
        }
        if let Some(level) = parse_var::<LevelFilter>(&lookup, ENV_LOG) {
            config.log_level = level;
        }
        config
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            stories_warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
