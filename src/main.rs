use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clearloop::config::Config;
use clearloop::controller::Controller;
use clearloop::gateway::ModelGateway;
use clearloop::ui;
use std::fs::OpenOptions;

#[derive(Parser)]
#[command(name = "clearloop")]
#[command(version)]
#[command(about = "A calm terminal thought companion for overthinkers", long_about = None)]
struct Cli {
    /// Override the configured model for this session
    #[arg(long)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the config file path
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config) = cli.command {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }

    let mut config = Config::load()?;
    if let Some(model) = cli.model {
        config.model = model;
    }

    init_logging()?;
    tracing::info!(model = %config.model, "starting session");

    let gateway = ModelGateway::new(config);
    let mut controller = Controller::new(gateway);
    ui::app::run(&mut controller).await
}

/// Log to a file under the clearloop home so the operator channel never
/// bleeds into the TUI. Absorbed gateway failures land here at WARN.
fn init_logging() -> Result<()> {
    let log_path = Config::home_dir()?.join("clearloop.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .context("Failed to open log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    Ok(())
}
