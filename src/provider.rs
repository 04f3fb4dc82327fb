//! Item pool provider seam.
//!
//! The session samples from whatever pool the provider returns. Items carry
//! both translations; screens pick a language at render time, so the
//! provider contract has no language parameter.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::WasteItem;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("invalid item {id}: {reason}")]
    InvalidItem { id: i64, reason: String },
}

#[async_trait]
pub trait ItemProvider: Send + Sync {
    /// The full pool of sortable items. An empty pool means no level starts.
    async fn items(&self) -> Result<Vec<WasteItem>, ProviderError>;
}

/// Provider over a fixed in-memory pool, for tests and offline play.
#[derive(Debug, Clone, Default)]
pub struct StaticItemProvider {
    pool: Vec<WasteItem>,
}

impl StaticItemProvider {
    pub fn new(pool: Vec<WasteItem>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemProvider for StaticItemProvider {
    async fn items(&self) -> Result<Vec<WasteItem>, ProviderError> {
        Ok(self.pool.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BinId, LocalizedText};

    #[tokio::test]
    async fn static_provider_returns_its_pool() {
        let item = WasteItem::new(
            1,
            LocalizedText::new("Newspaper", "Zeitung"),
            LocalizedText::new("", ""),
            BinId::Paper,
        );
        let provider = StaticItemProvider::new(vec![item.clone()]);
        assert_eq!(provider.items().await.unwrap(), vec![item]);
    }

    #[tokio::test]
    async fn empty_static_provider_returns_empty_pool() {
        let provider = StaticItemProvider::default();
        assert!(provider.items().await.unwrap().is_empty());
    }
}
