use std::path::{Path, PathBuf};

use rust_decimal::Decimal;

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/qr-dine | Working directory (database, logs) |
/// | PORT | 3000 | HTTP port |
/// | FRONTEND_URL | http://localhost:3000 | Base URL embedded in table ordering links |
/// | DELIVERY_FEE | 5.00 | Flat home-delivery fee |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout (milliseconds) |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | JWT_SECRET | (generated in dev) | Admin token signing secret |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/qr-dine PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Frontend base URL used when building table ordering links
    pub frontend_url: String,
    /// Flat delivery fee added to home-delivery orders
    pub delivery_fee: Decimal,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// JWT configuration for admin sessions
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// anything unset
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/qr-dine".into()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into()),
            delivery_fee: std::env::var("DELIVERY_FEE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| Decimal::new(500, 2)),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the filesystem and port settings, for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory holding the embedded database files
    pub fn database_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("db")
    }

    /// Directory holding the rolling log files
    pub fn log_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("logs")
    }

    /// Create the working directory layout if missing
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_the_filesystem_and_port_settings() {
        let config = Config::with_overrides("/tmp/qr-dine-test", 0);
        assert_eq!(config.work_dir, "/tmp/qr-dine-test");
        assert_eq!(config.http_port, 0);
        assert_eq!(
            config.database_dir(),
            Path::new("/tmp/qr-dine-test").join("db")
        );
        assert_eq!(config.log_dir(), Path::new("/tmp/qr-dine-test").join("logs"));
    }

    #[test]
    fn environment_helpers_are_mutually_exclusive() {
        let mut config = Config::with_overrides("/tmp/qr-dine-test", 0);
        config.environment = "production".to_string();
        assert!(config.is_production());
        assert!(!config.is_development());

        config.environment = "development".to_string();
        assert!(config.is_development());
        assert!(!config.is_production());
    }
}
