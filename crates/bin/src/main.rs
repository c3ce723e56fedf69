use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sundry=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, format = ?cli.format, "Running command");

    let format = cli.format;
    match &cli.command {
        Commands::Get(args) => commands::document::get(args, format),
        Commands::Set(args) => commands::document::set(args, format),
        Commands::Forget(args) => commands::document::forget(args, format),
        Commands::Dot(args) => commands::document::dot(args, format),
        Commands::Flatten(args) => commands::document::flatten(args, format),
        Commands::Slug(args) => commands::text::slug(args, format),
        Commands::Random(args) => commands::text::random(args, format),
        Commands::Pages(args) => commands::pages::run(args, format),
    }
}
