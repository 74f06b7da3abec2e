//! Info-kind dispatch: projects item metadata onto typed values.
//!
//! An [`InfoMapper`] is configured once with an [`InfoConfig`] and then
//! invoked any number of times against items borrowed through a
//! [`MappingContext`]. Each call is a stateless pure read.

use crate::item::ContentItem;
use crate::types::{ItemId, Language, Version};
use serde::{Deserialize, Serialize};
use std::any::Any;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapperError {
    /// Mapping was attempted before an info kind was configured.
    #[error("info kind not configured")]
    KindNotConfigured,
}

/// Which metadata attribute to read off an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKind {
    ContentPath,
    DisplayName,
    FullPath,
    Key,
    Language,
    MediaUrl,
    Name,
    Path,
    TemplateId,
    TemplateName,
    Url,
    Version,
}

/// How a template identifier is represented in the mapped value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateIdFormat {
    /// The bare identifier.
    #[default]
    Raw,
    /// The platform's identifier-wrapper type.
    Wrapped,
}

/// Mapper configuration. `kind` starts out unset; a mapper whose config has
/// no kind fails at mapping time, not at setup time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoConfig {
    pub kind: Option<InfoKind>,
    pub template_id_format: TemplateIdFormat,
}

impl InfoConfig {
    pub fn new(kind: InfoKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn with_template_id_format(mut self, format: TemplateIdFormat) -> Self {
        self.template_id_format = format;
        self
    }
}

/// Read-only context for one mapping call: the item being read and an
/// optional ambient target object from the surrounding pipeline.
pub struct MappingContext<'a, I: ContentItem> {
    item: &'a I,
    target: Option<&'a dyn Any>,
}

impl<'a, I: ContentItem> MappingContext<'a, I> {
    pub fn new(item: &'a I) -> Self {
        Self { item, target: None }
    }

    pub fn with_target(item: &'a I, target: &'a dyn Any) -> Self {
        Self {
            item,
            target: Some(target),
        }
    }

    pub fn item(&self) -> &I {
        self.item
    }

    pub fn target(&self) -> Option<&dyn Any> {
        self.target
    }
}

/// A value produced by mapping, in exactly the representation the
/// configuration selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoValue {
    Text(String),
    Id(Uuid),
    WrappedId(ItemId),
    Language(Language),
    Version(Version),
}

impl InfoValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            InfoValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<Uuid> {
        match self {
            InfoValue::Id(guid) => Some(*guid),
            _ => None,
        }
    }

    pub fn as_wrapped_id(&self) -> Option<ItemId> {
        match self {
            InfoValue::WrappedId(id) => Some(*id),
            _ => None,
        }
    }
}

/// Maps one info kind from content items onto typed values.
#[derive(Debug, Clone, Default)]
pub struct InfoMapper {
    config: InfoConfig,
}

impl InfoMapper {
    /// An unconfigured mapper; [`setup`](Self::setup) must run before mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the configuration. No validation happens here.
    pub fn setup(&mut self, config: InfoConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &InfoConfig {
        &self.config
    }

    /// Reads the configured attribute off the context's item.
    ///
    /// Fails with [`MapperError::KindNotConfigured`] when no kind has been
    /// configured. Missing items and null contexts are the caller's
    /// responsibility; the borrow in [`MappingContext`] rules them out here.
    pub fn map_to_property<I: ContentItem>(
        &self,
        context: &MappingContext<'_, I>,
    ) -> Result<InfoValue, MapperError> {
        let kind = self.config.kind.ok_or(MapperError::KindNotConfigured)?;
        let item = context.item();
        tracing::trace!(?kind, item = %item.path(), "mapping info attribute");

        let value = match kind {
            InfoKind::ContentPath => InfoValue::Text(item.content_path().into_inner()),
            InfoKind::DisplayName => InfoValue::Text(item.display_name().to_string()),
            InfoKind::FullPath => InfoValue::Text(item.full_path().into_inner()),
            InfoKind::Key => InfoValue::Text(item.key().to_string()),
            InfoKind::Language => InfoValue::Language(item.language().clone()),
            InfoKind::MediaUrl => InfoValue::Text(item.media_url()),
            InfoKind::Name => InfoValue::Text(item.name().to_string()),
            InfoKind::Path => InfoValue::Text(item.path().to_string()),
            InfoKind::TemplateId => match self.config.template_id_format {
                TemplateIdFormat::Raw => InfoValue::Id(item.template_id().guid()),
                TemplateIdFormat::Wrapped => InfoValue::WrappedId(item.template_id()),
            },
            InfoKind::TemplateName => InfoValue::Text(item.template_name().to_string()),
            InfoKind::Url => InfoValue::Text(item.url()),
            InfoKind::Version => InfoValue::Version(item.version()),
        };

        Ok(value)
    }
}
