use anyhow::Result;
use clap::Parser;
use mind_match::config::CliConfig;
use mind_match::{Config, GameInterface, VERSION};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "mindmatch")]
#[command(about = "A themed memory-matching card game for the terminal")]
#[command(version = VERSION)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Start straight into a game with this board theme
    #[arg(short, long)]
    theme: Option<String>,

    /// Fixed board layout seed (reproducible shuffles)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level override (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Visual style for the interface
    #[arg(long)]
    style: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = cli.log_level.clone().unwrap_or_else(|| {
        if cli.debug { "debug" } else { "info" }.to_string()
    });
    tracing_subscriber::fmt()
        .with_env_filter(format!("mind_match={},warn", log_level))
        .init();

    info!("Starting MindMatch v{}", VERSION);

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => Config::from_file(&config_path)?,
        None => Config::default(),
    };
    config.merge_with_cli(CliConfig {
        log_level: cli.log_level,
        debug: cli.debug,
        seed: cli.seed,
        style: cli.style,
    });
    config.validate()?;

    let mut interface = GameInterface::new(config)?;

    let result = match cli.theme {
        Some(theme) => {
            info!("Starting themed game: {}", theme);
            interface.play_theme(&theme).await
        }
        None => interface.run().await,
    };

    if let Err(e) = result {
        error!("Game error: {}", e);
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }

    info!("Game session ended");
    Ok(())
}
