use crate::args::source_of;
use argyle_domain::Page;
use argyle_ui::{render_document, render_page};
use std::io::{self, Write};
use tracing::warn;

pub async fn render(page_id: &str, location: &str, full_document: bool) -> anyhow::Result<()> {
    let page = Page::from_id(page_id);
    if page.id() != page_id {
        warn!(requested = page_id, "Unknown page, rendering {page}");
    }

    let content = source_of(location).load().await?;
    let html = if full_document { render_document(&content, page) } else { render_page(&content, page) };

    let mut out = io::stdout().lock();
    out.write_all(html.as_bytes())?;
    writeln!(out)?;
    Ok(())
}
