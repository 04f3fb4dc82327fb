use sqlx::PgPool;

use crate::model::WasteItem;

/// Bulk-load the waste-item catalog using COPY FROM STDIN (text format).
///
/// Deployments seed the catalog once; the item provider reads it back. Items
/// are written as-is; ids must be unique across the given slice.
pub async fn seed_items(pool: &PgPool, items: &[WasteItem]) -> Result<(), sqlx::Error> {
    let mut buf = String::new();
    for item in items {
        buf.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
            item.id,
            escape(&item.name.en),
            escape(&item.name.de),
            escape(&item.description.en),
            escape(&item.description.de),
            item.correct_bin.as_str(),
            opt_text(item.image_url.as_deref()),
        ));
    }
    copy_in(pool, include_str!("../../sql/copy_waste_items.sql"), &buf).await
}

/// Execute a COPY FROM STDIN with the given text-format payload.
async fn copy_in(pool: &PgPool, statement: &str, data: &str) -> Result<(), sqlx::Error> {
    let mut conn = pool.acquire().await?;
    let mut copy = conn.copy_in_raw(statement).await?;
    copy.send(data.as_bytes()).await?;
    copy.finish().await?;
    Ok(())
}

/// Escape a string for Postgres COPY text format.
/// Backslash must be escaped first, then the special whitespace characters.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Render an optional text column as a COPY text value (`\N` for NULL).
fn opt_text(v: Option<&str>) -> String {
    match v {
        Some(s) => escape(s),
        None => "\\N".to_string(),
    }
}
