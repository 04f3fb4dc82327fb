use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::model::{BinId, LocalizedText, WasteItem};
use crate::provider::{ItemProvider, ProviderError};

/// Fetch the full item catalog.
///
/// This is the provider boundary: rows with an unknown bin string are a data
/// error and fail the fetch rather than leaking an invalid item into the
/// session.
pub async fn fetch_items(pool: &PgPool) -> Result<Vec<WasteItem>, ProviderError> {
    let rows = sqlx::query(
        "SELECT id, name_en, name_de, description_en, description_de, correct_bin, image_url \
         FROM waste_items ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        let id: i64 = row.get("id");
        let bin: String = row.get("correct_bin");
        let correct_bin =
            BinId::try_from(bin).map_err(|reason| ProviderError::InvalidItem { id, reason })?;
        items.push(WasteItem {
            id: id as u64,
            name: LocalizedText::new(
                row.get::<String, _>("name_en"),
                row.get::<String, _>("name_de"),
            ),
            description: LocalizedText::new(
                row.get::<String, _>("description_en"),
                row.get::<String, _>("description_de"),
            ),
            correct_bin,
            image_url: row.get::<Option<String>, _>("image_url"),
        });
    }
    Ok(items)
}

/// Postgres-backed item provider.
#[derive(Clone)]
pub struct PgItemProvider {
    pool: PgPool,
}

impl PgItemProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemProvider for PgItemProvider {
    async fn items(&self) -> Result<Vec<WasteItem>, ProviderError> {
        fetch_items(&self.pool).await
    }
}
