use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use follows_types::UserId;

#[derive(Parser)]
#[command(
    name = "follows",
    about = "Follows: a small social-graph API",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServeArgs),
    /// List every seeded user
    Users(SeedArgs),
    /// Show one user's profile and who they follow
    Show(ShowArgs),
    /// Print the seed snapshot in its text form
    Snapshot(SeedArgs),
}

#[derive(Args)]
pub struct SeedArgs {
    /// Snapshot file to seed from instead of the built-in population
    #[arg(long)]
    pub seed: Option<PathBuf>,
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Address to bind, overriding the configuration file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[command(flatten)]
    pub seed: SeedArgs,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(value_parser = parse_user_id)]
    pub id: UserId,
    #[command(flatten)]
    pub seed: SeedArgs,
}

fn parse_user_id(s: &str) -> Result<UserId, String> {
    UserId::parse(s).map_err(|e| e.to_string())
}
