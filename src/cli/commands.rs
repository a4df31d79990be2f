use clap::{Parser, Subcommand, Args};

#[derive(Parser)]
#[command(name = "kdumpcheck", version, about = "Kdump certification report analyzer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the upload web server
    Serve(ServeArgs),
    /// Analyze a report file from disk
    Analyze(AnalyzeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Bind address (overrides the config file)
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides the config file)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args, Clone)]
pub struct AnalyzeArgs {
    /// rhcert XML result file
    pub file: String,

    /// YAML configuration file (for extra recommended solutions)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// YAML configuration file
    pub config: String,
}
