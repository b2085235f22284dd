use argyle_domain::Content;
use dioxus::prelude::*;

/// The loaded content document shared by [`crate::Site`].
///
/// # Panics
/// Outside a `Site` subtree, where no content has been provided.
#[must_use]
pub fn use_content() -> Content {
    use_context::<Content>()
}
