use std::path::PathBuf;

use clap::Parser;

/// Limbic persona chat gateway
#[derive(Debug, Parser)]
#[command(name = "limbic", about = "Persona chat gateway for LLM chat completions")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "limbic.toml", env = "LIMBIC_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "LIMBIC_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
