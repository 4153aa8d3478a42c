use clap::Parser;
use colored::Colorize;
use composegen::{
    cli::{Cli, Commands},
    config::{self, Config},
    generator::{self, DbRequest},
};
use std::io::{self, Write};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(1);
    }
}

fn run() -> composegen::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Db { url, tag, service } => handle_db(DbRequest { url, tag, service }, &config),
    }
}

fn handle_db(request: DbRequest, config: &Config) -> composegen::Result<()> {
    log::info!("Generating docker-compose service");

    // Rendered in full first so errors never leave partial YAML on stdout
    let output = generator::generate_compose(&request, config)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
