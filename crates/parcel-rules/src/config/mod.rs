use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::classification::{AdvisoryTolerance, ProgramId};

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
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub classifier: ClassifierConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            classifier: ClassifierConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Classifier defaults: fallback program and advisory windows.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifierConfig {
    pub default_program: ProgramId,
    pub tolerance: AdvisoryTolerance,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            default_program: ProgramId::UsFbm,
            tolerance: AdvisoryTolerance::default(),
        }
    }
}

impl ClassifierConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let default_program = match env::var("APP_DEFAULT_PROGRAM") {
            Ok(value) => value
                .parse::<ProgramId>()
                .map_err(|_| ConfigError::InvalidProgram { value })?,
            Err(_) => defaults.default_program,
        };

        Ok(Self {
            default_program,
            tolerance: AdvisoryTolerance {
                length_cm: tolerance_var(
                    "APP_ADVISORY_LENGTH_TOLERANCE_CM",
                    defaults.tolerance.length_cm,
                )?,
                weight_kg: tolerance_var(
                    "APP_ADVISORY_WEIGHT_TOLERANCE_KG",
                    defaults.tolerance.weight_kg,
                )?,
                volume_ratio: tolerance_var(
                    "APP_ADVISORY_VOLUME_RATIO",
                    defaults.tolerance.volume_ratio,
                )?,
            },
        })
    }
}

fn tolerance_var(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Ok(raw) = env::var(key) else {
        return Ok(default);
    };
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(ConfigError::InvalidTolerance { key, value: raw }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidProgram { value: String },
    InvalidTolerance { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidProgram { value } => {
                write!(f, "APP_DEFAULT_PROGRAM '{}' is not a known program", value)
            }
            ConfigError::InvalidTolerance { key, value } => {
                write!(f, "{} must be a non-negative number (got '{}')", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidProgram { .. }
            | ConfigError::InvalidTolerance { .. } => None,
        }
    }
}
