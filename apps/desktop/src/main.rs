#![windows_subsystem = "windows"]

use argyle_content::ContentSource;
use argyle_desktop::DesktopApp;
use argyle_kernel::config::load_site_config;
use argyle_logger::Logger;

/// Usage: `argyle-desktop [CONFIG]`. Without a path, `argyle.{toml,json,yaml}` is used if present.
fn main() -> anyhow::Result<()> {
    let config = load_site_config(std::env::args_os().nth(1))?;
    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), &config.log)?.init()?;

    DesktopApp::from_config(&config.window).launch(ContentSource::from_config(&config.content));

    Ok(())
}
