use itemmap::{ContentDatabase, ContentItem, ItemId, ItemKey, ItemPath, Language, Version};
use std::collections::HashMap;

pub const FIXTURE_PATH: &str = "/content/home/products/widget";
pub const TEMPLATE_GUID: &str = "031501a9-c7f2-4596-bd65-9276da3a627a";

/// Plain-data stand-in for a platform item handle.
#[derive(Debug, Clone, PartialEq)]
pub struct StubItem {
    pub id: ItemId,
    pub name: String,
    pub display_name: String,
    pub key: ItemKey,
    pub path: ItemPath,
    pub content_path: ItemPath,
    pub language: Language,
    pub version: Version,
    pub template_id: ItemId,
    pub template_name: String,
    pub url: String,
    pub media_url: String,
}

impl ContentItem for StubItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    fn key(&self) -> &ItemKey {
        &self.key
    }

    fn path(&self) -> &ItemPath {
        &self.path
    }

    fn content_path(&self) -> ItemPath {
        self.content_path.clone()
    }

    fn language(&self) -> &Language {
        &self.language
    }

    fn version(&self) -> Version {
        self.version
    }

    fn template_id(&self) -> ItemId {
        self.template_id
    }

    fn template_name(&self) -> &str {
        &self.template_name
    }

    fn url(&self) -> String {
        self.url.clone()
    }

    fn media_url(&self) -> String {
        self.media_url.clone()
    }
}

/// In-memory content database keyed by absolute path.
pub struct MemoryDatabase {
    name: String,
    items: HashMap<ItemPath, StubItem>,
}

impl MemoryDatabase {
    pub fn new(name: &str, items: Vec<StubItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.path.clone(), item))
            .collect();
        Self {
            name: name.to_string(),
            items,
        }
    }
}

impl ContentDatabase for MemoryDatabase {
    type Item = StubItem;

    fn name(&self) -> &str {
        &self.name
    }

    fn get_item(&self, path: &ItemPath) -> Option<&StubItem> {
        self.items.get(path)
    }
}

/// A database holding the one fixture item all mapping tests read.
pub fn fixture_database() -> MemoryDatabase {
    MemoryDatabase::new("master", vec![fixture_item()])
}

pub fn fixture_item() -> StubItem {
    let path = ItemPath::try_new(FIXTURE_PATH.to_string()).unwrap();
    StubItem {
        id: "7d3d3ef2-cf44-40ef-9a57-214b8e6d31a8".parse().unwrap(),
        name: "Widget".to_string(),
        display_name: "Widget Overview".to_string(),
        // key is the name folded to lowercase, which matches the path leaf
        key: ItemKey::try_new(path.leaf().to_string()).unwrap(),
        content_path: path.relative_to("/content").unwrap(),
        path,
        language: Language::try_new("en".to_string()).unwrap(),
        version: Version::try_new(1).unwrap(),
        template_id: TEMPLATE_GUID.parse().unwrap(),
        template_name: "Product Page".to_string(),
        url: "/en/home/products/widget.html".to_string(),
        media_url: "/media/7d3d3ef2cf4440ef9a57214b8e6d31a8.jpg".to_string(),
    }
}

pub fn fixture_path() -> ItemPath {
    ItemPath::try_new(FIXTURE_PATH.to_string()).unwrap()
}
