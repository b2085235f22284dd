use crate::args::source_of;
use argyle_content::ContentSummary;
use std::io::{self, Write};

pub async fn check_content(location: &str) -> anyhow::Result<()> {
    let source = source_of(location);
    let content = source.load().await?;

    let mut out = io::stdout().lock();
    writeln!(out, "OK {source}")?;
    writeln!(out, "{}", ContentSummary::of(&content))?;
    writeln!(out, "brand: {} {}", content.common.brand_name, content.common.brand_suffix)?;
    for item in &content.shop.inventory {
        writeln!(out, "  item {}: {} ({})", item.id, item.title, item.price)?;
    }
    for post in &content.community.posts {
        writeln!(out, "  post {}: {}", post.id, post.author)?;
    }
    Ok(())
}
