use nutype::nutype;

pub const MAX_PATH_LENGTH: usize = 4096;

/// An absolute item path within a content database, e.g. `/content/home`.
///
/// Also used for content-relative and full paths; all three share the same
/// shape, a non-empty `/`-rooted segment string.
#[nutype(
    sanitize(trim),
    validate(
        not_empty,
        len_char_max = MAX_PATH_LENGTH,
        predicate = |path| path.starts_with('/'),
    ),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ItemPath(String);

impl ItemPath {
    /// Final path segment, the item's name position in the tree.
    pub fn leaf(&self) -> &str {
        self.as_str().rsplit('/').next().unwrap_or_default()
    }

    /// Strips a root prefix, keeping the result `/`-rooted.
    ///
    /// Returns `None` when the path is not under `root`.
    pub fn relative_to(&self, root: &str) -> Option<ItemPath> {
        let stripped = self.as_str().strip_prefix(root.trim_end_matches('/'))?;
        if stripped.is_empty() {
            return None;
        }
        ItemPath::try_new(stripped.to_string()).ok()
    }
}
