use clap::Parser;
use secstore::cli::{exit_status, Cli, Commands};
use secstore::config::Config;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            toml::from_str(include_str!("../config.toml.example"))?
        }
    };

    // Initialize telemetry
    secstore::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!("Starting pipeline run");
            args.execute(&config)?;
        }
        Commands::Lookup(args) => {
            tracing::info!("Starting lookup");
            args.execute(&config)?;
        }
        Commands::Report(args) => {
            tracing::info!("Starting report");
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Input: {}", config.input.path.display());
            println!("  Output: {}", config.output.path.display());
            println!("  Prompt: {}", config.lookup.prompt);
            println!("  Report: {:?}", config.report.format);
            println!(
                "  Logging: {} ({:?})",
                config.telemetry.log_level, config.telemetry.log_format
            );
        }
    }

    Ok(())
}
