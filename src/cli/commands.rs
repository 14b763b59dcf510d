use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lingoboard")]
#[command(
    author,
    version,
    about = "A localized demo task board, served per locale"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .lingoboard.toml by default)
    #[arg(long, global = true, env = "LINGOBOARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .lingoboard.toml in the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Serve the board over HTTP
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Render the board for one locale
    Render {
        /// Locale to render (defaults to the configured default locale)
        #[arg(short, long)]
        locale: Option<String>,

        /// Output the render tree as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,

        /// Output the HTML page
        #[arg(long)]
        html: bool,
    },

    /// List supported locales
    Locales {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how the locale middleware would route a request path
    Route {
        /// Request path, optionally with a query string
        path: String,

        /// Accept-Language header value
        #[arg(long)]
        accept_language: Option<String>,

        /// Cookie header value
        #[arg(long)]
        cookie: Option<String>,
    },
}
