use anyhow::Context;
use chrono_tz::Tz;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Notes |
/// |----------|---------|-------|
/// | DATABASE_URL | — | required; startup fails fast when absent |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | TIMEZONE | UTC | business timezone for clock dates |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_DIR | — | optional directory for rotating file logs |
/// | SESSION_USER | Sarah Johnson | current-session actor name |
/// | SESSION_EMAIL | sarah.johnson@company.com | actor email |
/// | SESSION_ROLE | admin | admin \| manager \| employee |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite://roster.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (e.g. "sqlite://roster.db")
    pub database_url: String,
    /// HTTP API port
    pub http_port: u16,
    /// Business timezone used to resolve "today" for the time clock
    pub timezone: Tz,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Optional directory for rotating file logs
    pub log_dir: Option<String>,
    /// Current-session actor
    pub session_user: String,
    pub session_email: String,
    pub session_role: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` is the connection credential of the data store and
    /// has no sensible default; everything else falls back.
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        Ok(Self {
            database_url,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::UTC),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            session_user: std::env::var("SESSION_USER")
                .unwrap_or_else(|_| "Sarah Johnson".into()),
            session_email: std::env::var("SESSION_EMAIL")
                .unwrap_or_else(|_| "sarah.johnson@company.com".into()),
            session_role: std::env::var("SESSION_ROLE").unwrap_or_else(|_| "admin".into()),
        })
    }

    /// Overrides for test setups
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        Self {
            database_url: database_url.into(),
            http_port,
            timezone: chrono_tz::UTC,
            environment: "development".into(),
            log_dir: None,
            session_user: "Sarah Johnson".into(),
            session_email: "sarah.johnson@company.com".into(),
            session_role: "admin".into(),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
