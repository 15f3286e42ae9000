use roster_server::core::{Config, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Fail fast on missing store credentials before any service starts
    let config = Config::from_env()?;

    let log_level = if config.is_production() { "info" } else { "debug" };
    roster_server::init_logger_with_file(
        log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;

    roster_server::print_banner();
    tracing::info!(
        environment = %config.environment,
        timezone = %config.timezone,
        "Starting Roster server"
    );

    Server::new(config).run().await
}
