use clap::Parser;
use kdumpcheck::{cli, config};
use kdumpcheck::errors::KdumpCheckError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let result = match cli.command {
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Analyze(args) => cli::analyze::handle_analyze(args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let exit_code = match &e {
            KdumpCheckError::Config(_) | KdumpCheckError::Yaml(_) => 2,
            KdumpCheckError::MalformedDocument(_) => 3,
            KdumpCheckError::Upload(_) | KdumpCheckError::Io(_) => 4,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), KdumpCheckError> {
    let path = std::path::PathBuf::from(&args.config);
    let config = config::parse_config(&path).await?;
    println!(
        "Configuration is valid: {} ({} extra solution entries)",
        args.config,
        config.solutions.len()
    );
    Ok(())
}
