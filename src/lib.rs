pub mod item;
pub mod mapping;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use item::{ContentDatabase, ContentItem};
pub use mapping::{
    InfoConfig, InfoKind, InfoMapper, InfoValue, MapperError, MappingContext, TemplateIdFormat,
};
pub use types::{ItemId, ItemKey, ItemPath, Language, MappingSettings, Version};
