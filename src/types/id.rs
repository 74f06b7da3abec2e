use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier wrapper used by the content platform for items and templates.
///
/// The raw representation is the inner [`Uuid`]; the wrapper carries the
/// platform's textual convention of an uppercase, braced GUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub const fn new(guid: Uuid) -> Self {
        Self(guid)
    }

    /// The raw identifier without the platform wrapper.
    pub const fn guid(&self) -> Uuid {
        self.0
    }

    pub const fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ItemId {
    fn from(guid: Uuid) -> Self {
        Self(guid)
    }
}

impl From<ItemId> for Uuid {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; uuid::fmt::Hyphenated::LENGTH];
        let encoded = self.0.hyphenated().encode_upper(&mut buf);
        write!(f, "{{{encoded}}}")
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    /// Accepts both braced and bare forms, in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s
            .trim()
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or(s.trim());
        Ok(Self(Uuid::parse_str(trimmed)?))
    }
}
