use argyle_domain::ContentDocument;
use std::fmt;

/// Section sizes of a loaded document, for logs and the CLI report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentSummary {
    pub features: usize,
    pub inventory: usize,
    pub posts: usize,
    pub about_entries: usize,
    pub footer_links: usize,
}

impl ContentSummary {
    #[must_use]
    pub fn of(document: &ContentDocument) -> Self {
        let about = &document.about.page;
        let footer = &document.footer;
        Self {
            features: document.features.items.len(),
            inventory: document.shop.inventory.len(),
            posts: document.community.posts.len(),
            about_entries: about.what_we_do_list.len() + about.why_choose_us_list.len(),
            footer_links: footer.shop_column.links.len() + footer.support_column.links.len(),
        }
    }
}

impl fmt::Display for ContentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} features, {} inventory items, {} posts, {} about entries, {} footer links",
            self.features, self.inventory, self.posts, self.about_entries, self.footer_links
        )
    }
}
