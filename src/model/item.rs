use serde::{Deserialize, Serialize};

use super::bin::BinId;
use super::language::LocalizedText;

/// A sortable waste item as supplied by the item provider.
///
/// Immutable once built. The session consumes items read-only; validation
/// (unknown bin strings, missing translations) happens at the provider
/// boundary, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteItem {
    pub id: u64,
    pub name: LocalizedText,
    pub description: LocalizedText,
    pub correct_bin: BinId,
    pub image_url: Option<String>,
}

impl WasteItem {
    pub fn new(
        id: u64,
        name: LocalizedText,
        description: LocalizedText,
        correct_bin: BinId,
    ) -> Self {
        Self {
            id,
            name,
            description,
            correct_bin,
            image_url: None,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}
