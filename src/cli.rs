use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Target base URL to diagnose (e.g. http://staging.example.com)
    pub target: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 5_u64)]
    pub timeout: u64,

    /// Enable detailed debug logging
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Enable verbose logging
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

pub fn parse_cli() -> Cli {
    Cli::parse()
}
