use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use mm2calc::{logging, report, Settings};

#[derive(Parser, Debug)]
#[command(name = "mm2calc", version)]
#[command(about = "M/M/2 queue calculator with step-by-step derivations")]
struct Args {
    /// Log filter (e.g., "debug", "mm2_web=trace"); RUST_LOG takes precedence
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the queue metrics and print the derivation
    Calc {
        /// Mean time between arrivals, in minutes
        #[arg(allow_hyphen_values = true)]
        interarrival_min: String,

        /// Mean service time of one server, in minutes
        #[arg(allow_hyphen_values = true)]
        service_min: String,

        /// Print the full calculation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve the calculator as a web form
    Serve {
        /// Host to bind (default 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (default $PORT, then 5000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Calc {
            interarrival_min,
            service_min,
            json,
        } => {
            logging::init(args.log_level.as_deref().unwrap_or("warn"))?;
            run_calc(&interarrival_min, &service_min, json)
        }
        Command::Serve { host, port, config } => {
            let settings = Settings::load(config.as_deref())?.with_overrides(
                host,
                port,
                args.log_level,
            );
            logging::init(&settings.log.level)?;
            run_serve(&settings)
        }
    }
}

/// Compute from the two arguments and print the result.
fn run_calc(interarrival_min: &str, service_min: &str, json: bool) -> Result<()> {
    let calc = mm2_core::compute_fields(Some(interarrival_min), Some(service_min))
        .map_err(|err| {
            debug!(kind = err.kind(), error = ?err, "Calculation refused");
            err
        })?;

    let output = if json {
        report::render_json(&calc)?
    } else {
        report::render_text(&calc)
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Run the web server until it fails.
fn run_serve(settings: &Settings) -> Result<()> {
    let config = settings.server_config();
    info!(
        listen_addr = %config.listen_addr,
        "Starting mm2calc v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Build a tokio runtime for the server
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(mm2_web::start(config))
        .context("web server stopped")
}
