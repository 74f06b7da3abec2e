pub(crate) mod config;
pub use config::{DatabaseConfig, DefaultsConfig, MappingSettings, SettingsError};

pub(crate) mod id;
pub use id::ItemId;

pub(crate) mod item_path;
pub use item_path::{ItemPath, ItemPathError, MAX_PATH_LENGTH};

pub(crate) mod key;
pub use key::{ItemKey, ItemKeyError};

pub(crate) mod language;
pub use language::{Language, LanguageError};

pub(crate) mod version;
pub use version::{Version, VersionError};
