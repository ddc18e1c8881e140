//! binowner - binary ownership resolver
//!
//! Reads the bundle manifests of a distribution release from its update
//! server and credits each binary in /usr/bin to the bundle that should
//! provide it.

use clap::Parser;

mod cli;
mod commands;
mod domain;
mod error;
mod logging;
mod operations;
mod ownership;
mod progress;
mod report;
mod temp;
mod update;

use cli::{Cli, Commands, ResolveArgs};
use update::UpdateServer;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let server = UpdateServer::new(&cli.base_url, cli.latest_url);

    let result = match cli
        .command
        .unwrap_or_else(|| Commands::Resolve(ResolveArgs::default()))
    {
        Commands::Resolve(args) => commands::resolve::run(&server, args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
