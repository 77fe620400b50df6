use crate::validate::Host;
use std::env;

/// Public key substituted when no credential is configured.
pub const DEMO_KEY: &str = "DEMO_KEY";

/// Runtime configuration for the API clients.
/// Values are sourced from environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub ssd_api_url: String,
    pub images_api_url: String,
    pub genelab_url: String,
    pub exoplanet_url: String,
    pub tle_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: DEMO_KEY.to_string(),
            api_url: "https://api.nasa.gov".into(),
            ssd_api_url: "https://ssd-api.jpl.nasa.gov".into(),
            images_api_url: "https://images-api.nasa.gov".into(),
            genelab_url: "https://genelab-data.ndc.nasa.gov".into(),
            exoplanet_url: "https://exoplanetarchive.ipac.caltech.edu".into(),
            tle_url: "https://tle.ivanstanojevic.me".into(),
            user_agent: default_user_agent(),
            timeout_secs: 30,
        }
    }
}

fn default_user_agent() -> String {
    format!("nasa-api/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Defaults with the given key; `None` falls back to [`DEMO_KEY`].
    pub fn new(api_key: Option<String>) -> Self {
        Config {
            api_key: api_key
                .filter(|k| !k.trim().is_empty())
                .unwrap_or_else(|| DEMO_KEY.to_string()),
            ..Config::default()
        }
    }

    /// Load configuration from environment.
    ///
    /// Env vars:
    /// - NASA_API_KEY (default: DEMO_KEY)
    /// - NASA_API_URL (default: https://api.nasa.gov)
    /// - NASA_SSD_API_URL (default: https://ssd-api.jpl.nasa.gov)
    /// - NASA_IMAGES_API_URL (default: https://images-api.nasa.gov)
    /// - NASA_GENELAB_URL (default: https://genelab-data.ndc.nasa.gov)
    /// - NASA_EXOPLANET_URL (default: https://exoplanetarchive.ipac.caltech.edu)
    /// - NASA_TLE_URL (default: https://tle.ivanstanojevic.me)
    /// - NASA_HTTP_TIMEOUT_SECS (default: 30)
    /// - NASA_USER_AGENT (default: nasa-api/<version>)
    pub fn from_env() -> Self {
        let defaults = Config::default();
        let var = |key: &str, fallback: String| {
            env::var(key)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(fallback)
        };
        let timeout_secs = env::var("NASA_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.timeout_secs);

        Config {
            api_key: var("NASA_API_KEY", defaults.api_key),
            api_url: var("NASA_API_URL", defaults.api_url),
            ssd_api_url: var("NASA_SSD_API_URL", defaults.ssd_api_url),
            images_api_url: var("NASA_IMAGES_API_URL", defaults.images_api_url),
            genelab_url: var("NASA_GENELAB_URL", defaults.genelab_url),
            exoplanet_url: var("NASA_EXOPLANET_URL", defaults.exoplanet_url),
            tle_url: var("NASA_TLE_URL", defaults.tle_url),
            user_agent: var("NASA_USER_AGENT", defaults.user_agent),
            timeout_secs,
        }
    }

    /// Point every host at one base URL (handy for mock servers).
    pub fn with_base_url(self, base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Config {
            api_url: base.clone(),
            ssd_api_url: base.clone(),
            images_api_url: base.clone(),
            genelab_url: base.clone(),
            exoplanet_url: base.clone(),
            tle_url: base,
            ..self
        }
    }

    pub fn base_url(&self, host: Host) -> &str {
        let url = match host {
            Host::Api => &self.api_url,
            Host::Ssd => &self.ssd_api_url,
            Host::Images => &self.images_api_url,
            Host::Genelab => &self.genelab_url,
            Host::Exoplanet => &self.exoplanet_url,
            Host::Tle => &self.tle_url,
        };
        url.trim_end_matches('/')
    }
}
