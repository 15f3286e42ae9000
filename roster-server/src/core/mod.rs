//! Core module — server configuration, state and lifecycle
//!
//! - [`Config`] — environment-driven configuration
//! - [`ServerState`] — shared handles passed to every handler
//! - [`Server`] — HTTP server startup and shutdown

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
