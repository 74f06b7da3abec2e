use nutype::nutype;

/// An item key: the item's name folded to lowercase by the platform.
///
/// Lowercasing happens on construction, so two keys built from the same name
/// in different cases always compare equal.
#[nutype(
    sanitize(trim, lowercase),
    validate(not_empty),
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
pub struct ItemKey(String);
