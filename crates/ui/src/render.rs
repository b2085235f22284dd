//! Server-side rendering of the site tree.

use crate::app::{App, Site, SiteProps};
use argyle_content::ContentSource;
use argyle_domain::{Content, Page};
use dioxus::prelude::*;

/// Renders the site shell with `page` selected, as an HTML fragment.
#[must_use]
pub fn render_page(content: &Content, page: Page) -> String {
    let mut dom =
        VirtualDom::new_with_props(Site, SiteProps { content: content.clone(), initial: page });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Like [`render_page`], wrapped in a standalone HTML document.
#[must_use]
pub fn render_document(content: &Content, page: Page) -> String {
    let title = format!(
        "{} {} | {}",
        content.common.brand_name,
        content.common.brand_suffix,
        content.nav.label(page)
    );
    let head = dioxus_ssr::render_element(rsx! {
        meta { charset: "utf-8" }
        meta { name: "viewport", content: "width=device-width, initial-scale=1.0" }
        title { "{title}" }
    });
    let body = render_page(content, page);

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>{head}</head>\n\
         <body>\n<div id=\"main\">{body}</div>\n</body>\n</html>\n"
    )
}

/// First frame of [`App`] for `source`: the loading view, since the load has not run yet.
#[must_use]
pub fn render_app_shell(source: ContentSource) -> String {
    let mut dom = VirtualDom::new(App).with_root_context(source);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
