//! Contract for the external content platform.
//!
//! The platform owns storage, versioning, localization and URL resolution;
//! this crate only reads item metadata through these traits. Implementations
//! live with the platform bindings (or in test doubles), not here.

use crate::types::{ItemId, ItemKey, ItemPath, Language, Version};

/// Read-only view of one content item.
///
/// All accessors are pure reads; nothing in this crate mutates an item.
pub trait ContentItem {
    fn id(&self) -> ItemId;

    /// The item's name, the final segment of its path.
    fn name(&self) -> &str;

    /// Human-facing display name, which may differ from the name.
    fn display_name(&self) -> &str;

    /// The lowercase key derived from the item's name.
    fn key(&self) -> &ItemKey;

    /// Absolute path of the item within its database.
    fn path(&self) -> &ItemPath;

    /// Path relative to the content root.
    fn content_path(&self) -> ItemPath;

    /// Absolute path including the database root. Most platforms report the
    /// same value as [`path`](Self::path), which is the default.
    fn full_path(&self) -> ItemPath {
        self.path().clone()
    }

    fn language(&self) -> &Language;

    fn version(&self) -> Version;

    /// Identifier of the template governing this item's field set.
    fn template_id(&self) -> ItemId;

    fn template_name(&self) -> &str;

    /// Fully resolved front-end URL, including language segment and extension.
    fn url(&self) -> String;

    /// Resolved media URL for the item's media reference.
    ///
    /// Only meaningful for media items. For non-media items the platform's
    /// value is passed through unchanged and carries no defined meaning.
    fn media_url(&self) -> String;
}

/// A named content database, an already-open connection owned by the caller.
pub trait ContentDatabase {
    type Item: ContentItem;

    fn name(&self) -> &str;

    /// Resolves an absolute item path. Returns `None` if no item exists at
    /// the path.
    fn get_item(&self, path: &ItemPath) -> Option<&Self::Item>;
}
