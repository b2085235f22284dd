use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Top-level view selector.
///
/// The string form (`home`, `shop`, ...) is the page identifier used by navigation
/// entries, footer links and the CLI.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Home,
    Shop,
    About,
    Community,
    Contact,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Self; 5] = [Self::Home, Self::Shop, Self::About, Self::Community, Self::Contact];

    /// Resolves a page identifier. Matching is exact (`"Shop"` is not `shop`);
    /// anything unknown lands on [`Page::Home`].
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        id.parse().unwrap_or_default()
    }

    #[must_use]
    pub fn id(self) -> &'static str {
        self.into()
    }

    /// Iterates [`Page::ALL`].
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        assert_eq!(Page::from_id("shop"), Page::Shop);
        assert_eq!(Page::from_id("about"), Page::About);
        assert_eq!(Page::from_id("community"), Page::Community);
        assert_eq!(Page::from_id("contact"), Page::Contact);
    }

    #[test]
    fn ids_match_exactly() {
        assert_eq!(Page::from_id("Shop"), Page::Home);
        assert_eq!(Page::from_id(" contact "), Page::Home);
        assert_eq!(Page::from_id("ABOUT"), Page::Home);
    }

    #[test]
    fn unknown_ids_fall_back_to_home() {
        assert_eq!(Page::from_id(""), Page::Home);
        assert_eq!(Page::from_id("checkout"), Page::Home);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert!("checkout".parse::<Page>().is_err());
        assert_eq!("shop".parse::<Page>().ok(), Some(Page::Shop));
    }

    #[test]
    fn id_matches_display() {
        for page in Page::all() {
            assert_eq!(page.id(), page.to_string());
        }
        assert!(Page::all().eq(Page::ALL));
    }
}
