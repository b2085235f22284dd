use super::PageBanner;
use crate::context::use_content;
use crate::icons::{Icon, IconView};
use dioxus::prelude::*;

#[component]
pub fn AboutPage() -> Element {
    let content = use_content();
    let page = &content.about.page;

    rsx! {
        div { class: "page",
            PageBanner { title: content.nav.about_us.clone() }
            div { class: "page-body",
                div { class: "narrow",
                    div { class: "mission-card",
                        h2 { "{page.header}" }
                        p { "“{page.mission_statement}”" }
                    }

                    div { class: "prose",
                        h2 { class: "underlined", "{page.story_title}" }
                        p { "{page.story_body}" }
                    }

                    div { class: "prose",
                        h2 { "{page.what_we_do_title}" }
                        p { "{page.what_we_do_intro}" }
                        div { class: "stack",
                            for (index, entry) in page.what_we_do_list.iter().enumerate() {
                                div { key: "{index}", class: "offer-card",
                                    h3 { "{entry.title}" }
                                    p { "{entry.desc}" }
                                }
                            }
                        }
                    }

                    div { class: "approach",
                        div { class: "approach-copy",
                            h2 { "{page.approach_title}" }
                            p { "{page.approach_body}" }
                        }
                        div { class: "argyle-bg" }
                    }

                    div { class: "prose",
                        h2 { "{page.looking_ahead_title}" }
                        p { "{page.looking_ahead_body}" }
                    }

                    div { class: "prose",
                        h2 { "{page.why_choose_us_title}" }
                        div { class: "checklist",
                            for (index, reason) in page.why_choose_us_list.iter().enumerate() {
                                div { key: "{index}", class: "check-row",
                                    IconView { icon: Icon::Check }
                                    p { "{reason}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
