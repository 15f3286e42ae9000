//! Roster Server - workforce-scheduling administration backend
//!
//! # Architecture overview
//!
//! - **Database** (`db`): SQLite storage with read-time joins for all
//!   denormalized fields
//! - **Services** (`services`): time-clock lifecycle and the notification
//!   side-effect policy
//! - **Reports** (`reports`): pure derived-metric functions
//! - **HTTP API** (`api`): RESTful routers per resource area
//!
//! # Module structure
//!
//! ```text
//! roster-server/src/
//! ├── core/          # Config, state, server lifecycle
//! ├── auth/          # Session actor, permission guards
//! ├── api/           # HTTP routes and handlers
//! ├── services/      # Time clock, notifier
//! ├── reports/       # Derived metrics
//! ├── db/            # Pool, migrations, repositories
//! └── utils/         # Error, time, validation, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod reports;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::CurrentUser;
pub use core::{Config, Server, ServerState};
pub use services::{ClockInOutcome, ClockOutOutcome, TimeClockService};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____             __
   / __ \____  _____/ /____  _____
  / /_/ / __ \/ ___/ __/ _ \/ ___/
 / _, _/ /_/ (__  ) /_/  __/ /
/_/ |_|\____/____/\__/\___/_/
    "#
    );
}
