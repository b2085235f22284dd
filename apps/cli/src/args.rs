//! # CLI Argument Definitions

use argyle_content::ContentSource;
use argyle_domain::config::ContentConfig;
use clap::{ArgAction, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "argyle")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Validate Argyle content documents and render site pages")]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Load and validate a content document, then print what it contains
    Check {
        /// File path or http(s) URL of the document
        source: String,
    },
    /// Render one page to HTML on stdout
    Render {
        /// Page identifier (home, shop, about, community, contact). Unknown ids render home
        page: String,
        /// File path or http(s) URL of the document
        #[arg(short, long)]
        content: String,
        /// Emit a full HTML document instead of the body fragment
        #[arg(long)]
        document: bool,
    },
    /// List the page identifiers
    Pages {},
}

/// Source for a CLI location argument: absolute URLs go over HTTP, anything else is a file.
pub fn source_of(location: &str) -> ContentSource {
    ContentSource::from_config(&ContentConfig { source: location.to_owned(), base_url: None })
}
