//! Calculator server entry point.
//!
//! Loads configuration, initializes logging, and starts the server with the
//! configured transport.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use calc_server::core::{CalculatorServer, Config, TransportService};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.logging.level, config.logging.with_timestamps);

    serve(config).await?;

    info!("Server shutting down");

    Ok(())
}

/// Validate the configuration and run the server until the transport stops.
async fn serve(config: Config) -> calc_server::Result<()> {
    config.validate()?;

    info!("Starting {} v{}", config.server.name, config.server.version);

    let server = CalculatorServer::new(config.clone());

    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Logs go to stderr so STDIO mode keeps stdout for protocol messages.
fn init_logging(level: &str, with_timestamps: bool) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
