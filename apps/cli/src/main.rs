pub mod args;
pub mod handlers;

use crate::args::{AppCommands, Cli};
use crate::handlers::{check, pages, render};
use argyle_logger::{LevelFilter, Logger};
use clap::Parser;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = Logger::builder(env!("CARGO_PKG_NAME"))
        .stderr(true)
        .level(level_for(cli.verbose))
        .init()?;

    match cli.command {
        AppCommands::Check { source } => check::check_content(&source).await?,
        AppCommands::Render { page, content, document } => {
            render::render(&page, &content, document).await?;
        },
        AppCommands::Pages {} => pages::list_pages()?,
    }

    Ok(())
}

const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
