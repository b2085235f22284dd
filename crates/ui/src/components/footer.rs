use crate::context::use_content;
use argyle_domain::Page;
use argyle_domain::content::{FooterLink, LinkColumn, Nav};
use dioxus::prelude::*;

#[component]
pub fn Footer(on_navigate: EventHandler<Page>) -> Element {
    let content = use_content();
    let footer = &content.footer;

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h4 { class: "brand", "{footer.brand_column.title}" }
                        p { "{footer.brand_column.text}" }
                    }
                    FooterColumn { column: footer.shop_column.clone(), nav: content.nav.clone(), on_navigate }
                    FooterColumn { column: footer.support_column.clone(), nav: content.nav.clone(), on_navigate }
                }
                div { class: "footer-bottom",
                    p { "{footer.copyright}" }
                    div { class: "socials",
                        div { class: "social" }
                        div { class: "social" }
                        div { class: "social" }
                    }
                }
            }
        }
    }
}

/// A titled list of footer links. Links without a target page are inert.
#[component]
fn FooterColumn(column: LinkColumn, nav: Nav, on_navigate: EventHandler<Page>) -> Element {
    rsx! {
        div {
            h4 { "{column.title}" }
            ul { class: "footer-links",
                for (index, link) in column.links.iter().enumerate() {
                    FooterEntry { key: "{index}", link: link.clone(), nav: nav.clone(), on_navigate }
                }
            }
        }
    }
}

#[component]
fn FooterEntry(link: FooterLink, nav: Nav, on_navigate: EventHandler<Page>) -> Element {
    let target = link.target(&nav);
    let label = link.label();

    rsx! {
        li {
            a {
                href: "#",
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    if let Some(page) = target {
                        on_navigate.call(page);
                    }
                },
                "{label}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> Nav {
        Nav {
            home: "Home".to_owned(),
            shop_drops: "Shop Drops".to_owned(),
            about_us: "About Us".to_owned(),
            community: "Community".to_owned(),
            contact: "Contact".to_owned(),
        }
    }

    #[test]
    fn contact_labels_route_to_contact() {
        let nav = nav();
        assert_eq!(FooterLink::Label("Contact".to_owned()).target(&nav), Some(Page::Contact));
        assert_eq!(FooterLink::Label("Contact Us".to_owned()).target(&nav), Some(Page::Contact));
        assert_eq!(FooterLink::Label("Returns".to_owned()).target(&nav), None);
    }
}
