use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

pub const DEFAULT_RATINGS_BASE_URL: &str = "https://api.nhtsa.gov/SafetyRatings";
pub const DEFAULT_VPIC_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/vehicles";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub nhtsa: NhtsaConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let ratings_base_url = url_var("NHTSA_RATINGS_BASE_URL", DEFAULT_RATINGS_BASE_URL)?;
        let vpic_base_url = url_var("NHTSA_VPIC_BASE_URL", DEFAULT_VPIC_BASE_URL)?;
        let timeout_secs = match env::var("NHTSA_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout)?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        let user_agent = env::var("NHTSA_USER_AGENT")
            .unwrap_or_else(|_| concat!("safequote/", env!("CARGO_PKG_VERSION")).to_string());

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            nhtsa: NhtsaConfig {
                ratings_base_url,
                vpic_base_url,
                timeout: Duration::from_secs(timeout_secs),
                user_agent,
            },
        })
    }
}

/// Endpoints and transport settings for the two NHTSA services.
#[derive(Debug, Clone)]
pub struct NhtsaConfig {
    pub ratings_base_url: Url,
    pub vpic_base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl NhtsaConfig {
    /// Points both services at `base`, as used against local mock servers.
    pub fn with_base(base: &Url) -> Result<Self, ConfigError> {
        let join = |path: &str| {
            base.join(path).map_err(|source| ConfigError::InvalidUrl {
                name: "base",
                source,
            })
        };

        Ok(Self {
            ratings_base_url: join("SafetyRatings")?,
            vpic_base_url: join("api/vehicles")?,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: concat!("safequote/", env!("CARGO_PKG_VERSION")).to_string(),
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn url_var(name: &'static str, default: &str) -> Result<Url, ConfigError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { name, source })
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTimeout,
    InvalidUrl {
        name: &'static str,
        source: url::ParseError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTimeout => {
                write!(f, "NHTSA_TIMEOUT_SECS must be a positive number of seconds")
            }
            ConfigError::InvalidUrl { name, .. } => write!(f, "{name} must be an absolute URL"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidTimeout => None,
            ConfigError::InvalidUrl { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("NHTSA_RATINGS_BASE_URL");
        env::remove_var("NHTSA_VPIC_BASE_URL");
        env::remove_var("NHTSA_TIMEOUT_SECS");
        env::remove_var("NHTSA_USER_AGENT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.nhtsa.ratings_base_url.as_str(), DEFAULT_RATINGS_BASE_URL);
        assert_eq!(config.nhtsa.vpic_base_url.as_str(), DEFAULT_VPIC_BASE_URL);
        assert_eq!(config.nhtsa.timeout, Duration::from_secs(15));
        assert!(config.nhtsa.user_agent.starts_with("safequote/"));
    }

    #[test]
    fn rejects_relative_ratings_url() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("NHTSA_RATINGS_BASE_URL", "/SafetyRatings");
        let error = AppConfig::load().expect_err("relative url rejected");
        reset_env();
        assert!(matches!(
            error,
            ConfigError::InvalidUrl {
                name: "NHTSA_RATINGS_BASE_URL",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("NHTSA_TIMEOUT_SECS", "0");
        let error = AppConfig::load().expect_err("zero timeout rejected");
        reset_env();
        assert!(matches!(error, ConfigError::InvalidTimeout));
    }

    #[test]
    fn production_aliases_are_recognised() {
        assert_eq!(AppEnvironment::from_str(" PROD "), AppEnvironment::Production);
        assert_eq!(AppEnvironment::from_str("ci"), AppEnvironment::Test);
        assert_eq!(AppEnvironment::from_str("staging"), AppEnvironment::Development);
    }

    #[test]
    fn with_base_nests_both_services_under_one_host() {
        let base = Url::parse("http://127.0.0.1:9000/").expect("url");
        let config = NhtsaConfig::with_base(&base).expect("config");
        assert_eq!(
            config.ratings_base_url.as_str(),
            "http://127.0.0.1:9000/SafetyRatings"
        );
        assert_eq!(
            config.vpic_base_url.as_str(),
            "http://127.0.0.1:9000/api/vehicles"
        );
    }
}
