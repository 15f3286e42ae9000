use std::sync::Arc;

use shared::models::{DEFAULT_EMPLOYEE_PERMISSIONS, Role, User};
use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::services::TimeClockService;
use crate::utils::AppError;

/// Server state — shared handles passed to every handler
///
/// Cloning is shallow (pool and user are reference-counted); every
/// handler gets its own copy through the axum `State` extractor.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Current-session actor
    pub current_user: Arc<User>,
}

impl ServerState {
    /// Initialize server state: open the database, apply migrations and
    /// resolve the session actor from configuration.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db = DbService::new(&config.database_url).await?;
        let current_user = Arc::new(session_user(config));

        Ok(Self {
            config: config.clone(),
            pool: db.pool,
            current_user,
        })
    }

    /// Time-clock service bound to this state's pool and business timezone
    pub fn time_clock(&self) -> TimeClockService {
        TimeClockService::new(self.pool.clone(), self.config.timezone)
    }
}

/// Build the session actor from configuration.
///
/// Non-admin roles start with the default employee grants; the admin
/// variant needs no grant list at all.
fn session_user(config: &Config) -> User {
    let role = match config.session_role.as_str() {
        "manager" => Role::Manager {
            permissions: DEFAULT_EMPLOYEE_PERMISSIONS.into_iter().collect(),
        },
        "employee" => Role::Employee {
            permissions: DEFAULT_EMPLOYEE_PERMISSIONS.into_iter().collect(),
        },
        _ => Role::Admin,
    };

    User {
        id: 1,
        name: config.session_user.clone(),
        email: config.session_email.clone(),
        role,
    }
}
