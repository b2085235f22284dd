use dioxus::prelude::*;
use strum_macros::EnumString;

/// Inline SVG icons. Stroke follows `currentColor` unless the icon is accent-colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Icon {
    Menu,
    X,
    ShoppingBag,
    Shield,
    Star,
    Zap,
    Check,
    Mail,
    Heart,
    Message,
}

impl Icon {
    /// Resolves a feature `iconType`. Unknown keys fall back to [`Icon::Star`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().parse() {
            Ok(icon @ (Self::Shield | Self::Star | Self::Zap | Self::Check | Self::Mail)) => icon,
            _ => Self::Star,
        }
    }

    #[must_use]
    pub const fn svg(self) -> &'static str {
        match self {
            Self::Menu => {
                r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="3" y1="12" x2="21" y2="12"></line><line x1="3" y1="6" x2="21" y2="6"></line><line x1="3" y1="18" x2="21" y2="18"></line></svg>"#
            },
            Self::X => {
                r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="18" y1="6" x2="6" y2="18"></line><line x1="6" y1="6" x2="18" y2="18"></line></svg>"#
            },
            Self::ShoppingBag => {
                r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4z"></path><line x1="3" y1="6" x2="21" y2="6"></line><path d="M16 10a4 4 0 0 1-8 0"></path></svg>"#
            },
            Self::Shield => {
                r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#7BAFD4" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"></path></svg>"##
            },
            Self::Star => {
                r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#7BAFD4" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"></polygon></svg>"##
            },
            Self::Zap => {
                r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="#7BAFD4" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"></polygon></svg>"##
            },
            Self::Check => {
                r##"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="#7BAFD4" stroke-width="3" stroke-linecap="round" stroke-linejoin="round"><polyline points="20 6 9 17 4 12"></polyline></svg>"##
            },
            Self::Mail => {
                r#"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path><polyline points="22,6 12,13 2,6"></polyline></svg>"#
            },
            Self::Heart => {
                r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78L12 21.23l8.84-8.84a5.5 5.5 0 0 0 0-7.78z"></path></svg>"#
            },
            Self::Message => {
                r#"<svg width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z"></path></svg>"#
            },
        }
    }
}

#[component]
pub fn IconView(icon: Icon) -> Element {
    rsx! {
        span { class: "icon", dangerous_inner_html: icon.svg() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_keys_resolve() {
        assert_eq!(Icon::from_key("shield"), Icon::Shield);
        assert_eq!(Icon::from_key("zap"), Icon::Zap);
        assert_eq!(Icon::from_key(" star "), Icon::Star);
    }

    #[test]
    fn unknown_and_chrome_keys_fall_back_to_star() {
        assert_eq!(Icon::from_key("rocket"), Icon::Star);
        assert_eq!(Icon::from_key(""), Icon::Star);
        assert_eq!(Icon::from_key("menu"), Icon::Star);
    }
}
