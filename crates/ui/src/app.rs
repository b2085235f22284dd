use crate::components::{Footer, Header, Loading, Newsletter};
use crate::navigation::Navigation;
use crate::pages::{AboutPage, CommunityPage, ContactPage, HomePage, ShopPage};
use crate::theme::GLOBAL_CSS;
use argyle_content::ContentSource;
use argyle_domain::{Content, Page};
use dioxus::prelude::*;
use tracing::{debug, error};

const SCROLL_TO_TOP: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

/// Root component.
///
/// Loads the document from the [`ContentSource`] in context once, then hands it to
/// [`Site`]. Until the load succeeds, and forever if it fails, the loading view is shown.
#[component]
pub fn App() -> Element {
    let source = use_context::<ContentSource>();
    let content = use_resource(move || {
        let source = source.clone();
        async move {
            source
                .load()
                .await
                .inspect_err(|e| error!(source = %source, "Failed to load content document: {e}"))
                .ok()
        }
    });

    match content.cloned().flatten() {
        Some(content) => rsx! {
            Site { content }
        },
        None => rsx! {
            Loading {}
        },
    }
}

#[derive(Props, Debug, Clone, PartialEq)]
pub struct SiteProps {
    pub content: Content,
    #[props(default)]
    pub initial: Page,
}

/// The site shell around a loaded document: header, routed page, newsletter, footer.
///
/// Owns the [`Navigation`] signal; every child navigates through one callback.
#[allow(non_snake_case)]
pub fn Site(props: SiteProps) -> Element {
    use_context_provider(|| props.content.clone());
    let mut nav = use_signal(|| Navigation::at(props.initial));

    let navigate = use_callback(move |target: Page| {
        let from = nav.peek().page();
        debug!(%from, to = %target, "Navigating");
        nav.write().go(target);
        let _ = document::eval(SCROLL_TO_TOP);
    });

    rsx! {
        style { dangerous_inner_html: GLOBAL_CSS }
        Header { nav, on_navigate: navigate }
        main {
            PageView { page: nav().page(), on_navigate: navigate }
            Newsletter {}
        }
        Footer { on_navigate: navigate }
    }
}

/// Maps the current page to its view.
#[component]
pub fn PageView(page: Page, on_navigate: EventHandler<Page>) -> Element {
    match page {
        Page::Home => rsx! {
            HomePage { on_navigate }
        },
        Page::Shop => rsx! {
            ShopPage {}
        },
        Page::About => rsx! {
            AboutPage {}
        },
        Page::Community => rsx! {
            CommunityPage {}
        },
        Page::Contact => rsx! {
            ContactPage {}
        },
    }
}
