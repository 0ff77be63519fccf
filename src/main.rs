use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Locale;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};

use weather_lookup::api::ApiState;
use weather_lookup::{
    AppConfig, ChainOutcome, FjallStore, ForecastFetcher, LocationResolver, OpenMeteoClient,
    Orchestrator, ViewModel, logging, web,
};

#[derive(Debug, Parser)]
#[command(
    name = "weather-lookup",
    version,
    about = "Weather lookup - day-by-day forecast for any place name"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Look up a single location, print its forecast and exit
    Lookup { location: String },
    /// Serve the forecast view over HTTP
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
}

fn build_orchestrator(config: &AppConfig) -> Result<Orchestrator> {
    let client = OpenMeteoClient::from_config(&config.weather)?;
    let store = FjallStore::open(config.storage.resolved_path())
        .context("Failed to open storage")?;

    let orchestrator = Orchestrator::new(
        Arc::new(LocationResolver::new(client.clone())),
        Arc::new(ForecastFetcher::new(client)),
        Arc::new(store),
        config.storage.key.clone(),
    )?;
    Ok(orchestrator)
}

fn print_view(orchestrator: &Orchestrator, locale: Locale) {
    println!("{}", ViewModel::from_state(&orchestrator.snapshot(), locale));
}

/// Each stdin line is a new location; EOF quits
async fn run_interactive(orchestrator: Orchestrator, locale: Locale) -> Result<()> {
    orchestrator.refresh().await;
    print_view(&orchestrator, locale);
    println!("Enter your location... (Ctrl-D to quit)");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if let Some(ticket) = orchestrator.begin(line) {
            print_view(&orchestrator, locale);
            orchestrator.complete(ticket).await;
        }
        print_view(&orchestrator, locale);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from_path(cli.config.clone())?;
    logging::init(&config.logging, cli.verbose)?;
    let locale = config.display.parsed_locale()?;

    let orchestrator = build_orchestrator(&config)?;

    match cli.command {
        None => run_interactive(orchestrator, locale).await,
        Some(Command::Lookup { location }) => {
            let outcome = orchestrator.submit(location).await;
            print_view(&orchestrator, locale);
            if let ChainOutcome::Failed(e) = outcome {
                anyhow::bail!(e.user_message());
            }
            Ok(())
        }
        Some(Command::Serve { port }) => {
            let port = port.unwrap_or(config.server.port);
            let state = ApiState::new(Arc::new(orchestrator), locale);
            state.spawn_refresh();
            web::run(state, port).await
        }
    }
}
