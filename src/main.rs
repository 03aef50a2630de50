use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use extcmd::channel::FileChannelWriter;
use extcmd::command::{CommandGateway, CommandSerializer, SystemClock};
use extcmd::config::{CliOverrides, Config, LoggingConfig};
use extcmd::registry::CommandRegistry;
use extcmd::startup::StartupLogger;
use extcmd::web::{configure_routes, route_table};

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = extcmd::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    log_level: Option<String>,

    /// Server host
    #[arg(long)]
    host: Option<String>,

    /// Server port
    #[arg(long)]
    port: Option<u16>,

    /// External command file or named pipe
    #[arg(long)]
    command_file: Option<PathBuf>,

    /// Print the registered commands and routes, then exit
    #[arg(long)]
    list_commands: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_commands {
        print_commands();
        return Ok(());
    }

    let resolution = Config::load_with_resolution(
        &cli.config,
        CliOverrides {
            host: cli.host,
            port: cli.port,
            command_file: cli.command_file,
            log_level: cli.log_level,
        },
    )?;

    init_logging(&resolution.config.logging)?;

    let registry = CommandRegistry::global();
    StartupLogger::display_startup_info(&resolution, extcmd::VERSION, registry);

    let config = resolution.config;
    let serializer = CommandSerializer::new(Arc::new(SystemClock))
        .with_timestamp_prefix(config.channel.timestamp_prefix);
    let writer = Arc::new(FileChannelWriter::from_config(&config.channel));
    let gateway = web::Data::new(CommandGateway::new(serializer, writer));

    let bind_address = config.server.bind_address();
    info!("Starting HTTP server on {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(gateway.clone())
            .wrap(Logger::default())
            .configure(configure_routes)
    });
    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    if let Err(e) = server.bind(&bind_address)?.run().await {
        error!("HTTP server failed: {}", e);
        return Err(e.into());
    }

    info!("HTTP server stopped");
    Ok(())
}

/// Print the registry as a route table
fn print_commands() {
    let registry = CommandRegistry::global();
    for route in route_table(registry) {
        let Some(schema) = registry.lookup(route.command) else {
            continue;
        };
        let fields: Vec<String> = schema
            .fields
            .iter()
            .map(|field| match (field.required, field.default) {
                (true, _) => format!("{}*", field.name),
                (false, Some(default)) => format!("{}={}", field.name, default),
                (false, None) => field.name.to_string(),
            })
            .collect();
        println!("{} {:<45} {};{}", route.method, route.path, schema.name, fields.join(";"));
    }
}

/// Initialize logging
fn init_logging(logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(env_filter);
    if logging.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(false))
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    Ok(())
}
