use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use lingoboard::cli::handlers::{
    CommandContext, RenderParams, RouteParams, handle_init, handle_locales, handle_render,
    handle_route, handle_serve,
};
use lingoboard::cli::{Cli, Commands};
use lingoboard::config::BoardConfig;
use lingoboard::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    // Init writes the config, so it is the one command that runs without one.
    let config = cli.config;
    match cli.command {
        Commands::Init { force } => handle_init(force),
        Commands::Serve { port, bind } => handle_serve(load_context(config)?, port, bind),
        Commands::Render { locale, json, html } => handle_render(
            &load_context(config)?,
            RenderParams { locale, json, html },
        ),
        Commands::Locales { json } => handle_locales(&load_context(config)?, json),
        Commands::Route {
            path,
            accept_language,
            cookie,
        } => handle_route(
            &load_context(config)?,
            RouteParams {
                path,
                accept_language,
                cookie,
            },
        ),
    }
}

fn load_context(explicit: Option<PathBuf>) -> Result<CommandContext> {
    let (config, root) = match explicit {
        Some(path) => BoardConfig::load_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            BoardConfig::load(&cwd).context("Failed to load config")?
        }
    };
    tracing::debug!(
        root = %root.display(),
        locales = config.i18n.locales.len(),
        "Loaded config"
    );
    Ok(CommandContext::new(config, root))
}
