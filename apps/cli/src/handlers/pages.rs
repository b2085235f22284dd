use argyle_domain::Page;
use std::io::{self, Write};

pub fn list_pages() -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    for page in Page::all() {
        writeln!(out, "{page}")?;
    }
    Ok(())
}
