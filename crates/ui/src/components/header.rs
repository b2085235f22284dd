use crate::context::use_content;
use crate::icons::{Icon, IconView};
use crate::navigation::Navigation;
use argyle_domain::Page;
use dioxus::prelude::*;

/// Pages listed as plain nav links. Contact gets its own button.
const NAV_PAGES: [Page; 4] = [Page::Home, Page::Shop, Page::About, Page::Community];

/// Vertical scroll offset past which the header turns solid.
pub const SCROLL_THRESHOLD_PX: u32 = 20;

/// Reports whether the page is scrolled past the threshold, now and on every scroll.
/// The script never resolves so the channel stays open for the page's lifetime.
fn scroll_watcher() -> String {
    format!(
        "const report = () => dioxus.send(window.scrollY > {SCROLL_THRESHOLD_PX});
         window.addEventListener('scroll', report, {{ passive: true }});
         report();
         await new Promise(() => {{}});"
    )
}

#[component]
pub fn Header(mut nav: Signal<Navigation>, on_navigate: EventHandler<Page>) -> Element {
    let content = use_content();
    let mut scrolled = use_signal(|| false);

    use_future(move || async move {
        let mut watcher = document::eval(&scroll_watcher());
        while let Ok(past) = watcher.recv::<bool>().await {
            if *scrolled.peek() != past {
                scrolled.set(past);
            }
        }
    });

    let current = nav().page();
    let menu_open = nav().menu_open();

    let brand_name = content.common.brand_name.clone();
    let brand_suffix = content.common.brand_suffix.clone();
    let contact = content.nav.contact.clone();
    let links: Vec<(Page, String)> =
        NAV_PAGES.iter().map(|&page| (page, content.nav.label(page).to_owned())).collect();

    rsx! {
        header { class: header_class(scrolled()),
            div { class: "container header-row",
                button { class: "logo", onclick: move |_| on_navigate.call(Page::Home),
                    div { class: "logo-mark",
                        span { "C" }
                    }
                    div { class: "logo-text",
                        span { class: "brand-name", "{brand_name}" }
                        span { class: "brand-suffix", "{brand_suffix}" }
                    }
                }

                nav { class: "desktop-nav",
                    for (page, label) in links.clone() {
                        button {
                            key: "{page}",
                            class: nav_class(page, current),
                            onclick: move |_| on_navigate.call(page),
                            "{label}"
                        }
                    }
                    button { class: "nav-contact", onclick: move |_| on_navigate.call(Page::Contact), "{contact}" }
                    button { class: "nav-cart",
                        IconView { icon: Icon::ShoppingBag }
                    }
                }

                button {
                    class: "mobile-toggle",
                    onclick: move |_| nav.write().toggle_menu(),
                    if menu_open {
                        IconView { icon: Icon::X }
                    } else {
                        IconView { icon: Icon::Menu }
                    }
                }
            }

            if menu_open {
                div { class: "mobile-nav",
                    for (page, label) in links {
                        button {
                            key: "{page}",
                            class: nav_class(page, current),
                            onclick: move |_| on_navigate.call(page),
                            "{label}"
                        }
                    }
                    button { class: "nav-link", onclick: move |_| on_navigate.call(Page::Contact), "{contact}" }
                }
            }
        }
    }
}

fn nav_class(page: Page, current: Page) -> &'static str {
    if page == current { "nav-link active" } else { "nav-link" }
}

/// Transparent at the top of the page, solid once scrolled.
fn header_class(scrolled: bool) -> &'static str {
    if scrolled { "site-header scrolled" } else { "site-header" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_once_scrolled() {
        assert_eq!(header_class(false), "site-header");
        assert_eq!(header_class(true), "site-header scrolled");
    }

    #[test]
    fn watcher_uses_the_threshold() {
        let script = scroll_watcher();
        assert!(script.contains("window.scrollY > 20"));
        assert!(script.contains("addEventListener('scroll'"));
    }

    #[test]
    fn only_the_current_page_is_active() {
        let active: Vec<_> =
            NAV_PAGES.iter().filter(|&&page| nav_class(page, Page::Shop).ends_with("active")).collect();
        assert_eq!(active, [&Page::Shop]);
    }
}
