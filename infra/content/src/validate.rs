use crate::error::ContentError;
use argyle_domain::ContentDocument;
use argyle_domain::content::ItemId;
use std::collections::HashSet;

/// Checks the invariants serde cannot express.
///
/// # Errors
/// [`ContentError::Validation`] naming the first duplicate inventory or post id.
pub fn validate(document: &ContentDocument) -> Result<(), ContentError> {
    ensure_unique("inventory item", document.shop.inventory.iter().map(|item| &item.id))?;
    ensure_unique("community post", document.community.posts.iter().map(|post| &post.id))
}

fn ensure_unique<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a ItemId>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::Validation {
                message: format!("duplicate {kind} id '{id}'").into(),
                context: None,
            });
        }
    }
    Ok(())
}
