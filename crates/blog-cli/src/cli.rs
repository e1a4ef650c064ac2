use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "blog",
    about = "Blog posts API: an in-memory JSON REST service",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// Print the effective configuration as TOML
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Listen port (overrides the config file and $PORT)
    #[arg(short, long)]
    pub port: Option<u16>,
    /// Start with an empty store
    #[arg(long)]
    pub no_seed: bool,
    #[arg(long)]
    pub log_format: Option<LogFormatArg>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
