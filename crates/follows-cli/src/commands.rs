use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use follows_dispatch::Dispatcher;
use follows_server::{FollowsServer, ServerConfig};
use follows_store::{SeededUserStore, UserStore};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Users(args) => cmd_users(args, cli.format),
        Command::Show(args) => cmd_show(args, cli.format),
        Command::Snapshot(args) => cmd_snapshot(args),
    }
}

fn load_store(seed: Option<&Path>) -> anyhow::Result<SeededUserStore> {
    match seed {
        Some(path) => SeededUserStore::from_seed_file(path)
            .with_context(|| format!("loading seed {}", path.display())),
        None => Ok(SeededUserStore::default()),
    }
}

fn dispatcher(args: &SeedArgs) -> anyhow::Result<Dispatcher> {
    Ok(Dispatcher::new(Arc::new(load_store(args.seed.as_deref())?)))
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_toml_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(seed) = args.seed.seed {
        config.seed_path = Some(seed);
    }

    let server = FollowsServer::new(config)?;
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn cmd_users(args: SeedArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dispatcher = dispatcher(&args)?;
    let users = dispatcher.public_users(&dispatcher.initial_handle());
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&users)?),
        OutputFormat::Text => {
            for user in &users {
                println!("{}  {} views", user.id.as_str().bold(), user.view_count);
            }
        }
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, format: OutputFormat) -> anyhow::Result<()> {
    let dispatcher = dispatcher(&args.seed)?;
    let profile = dispatcher
        .profile(&dispatcher.initial_handle(), args.id.as_str())
        .with_context(|| format!("user not found: {}", args.id))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        OutputFormat::Text => {
            println!("{}  {} views", profile.id.as_str().bold(), profile.view_count);
            if profile.following.is_empty() {
                println!("  {}", "follows nobody".dimmed());
            }
            for followed in &profile.following {
                println!(
                    "  {} {}  {} views",
                    "→".cyan(),
                    followed.id.as_str().yellow(),
                    followed.view_count
                );
            }
        }
    }
    Ok(())
}

fn cmd_snapshot(args: SeedArgs) -> anyhow::Result<()> {
    let store = load_store(args.seed.as_deref())?;
    let handle = store.initial_handle();
    println!("{}", handle.to_text_pretty()?);
    Ok(())
}
