use clap::Parser;
use home_risk::cli::{Cli, Commands};
use home_risk::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            Config::from_toml(include_str!("../config.toml.example"))?
        }
    };
    config.apply_env_overrides()?;

    // Initialize telemetry
    let _telemetry = home_risk::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Analyze(args) => {
            args.execute(&config).await?;
        }
        Commands::Regions(args) => {
            args.execute(&config)?;
        }
        Commands::Stats(args) => {
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Data: {}", config.data.path.display());
            println!(
                "  Simulation: {} paths, seed {:?}, timeout {}s",
                config.simulation.num_simulations,
                config.simulation.seed,
                config.simulation.timeout_secs
            );
            println!(
                "  Telemetry: level={}, format={:?}, metrics_port={:?}",
                config.telemetry.log_level,
                config.telemetry.log_format,
                config.telemetry.metrics_port
            );
        }
    }

    Ok(())
}
