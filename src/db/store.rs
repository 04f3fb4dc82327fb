use sqlx::PgPool;

use crate::model::{ProgressUpdate, SessionSummary};

/// Record one completed level session.
pub async fn save_session(
    pool: &PgPool,
    player: &str,
    summary: &SessionSummary,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO game_sessions \
         (player, level, score, items_sorted, correct_sorts, accuracy, time_spent_seconds) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(player)
    .bind(summary.level as i32)
    .bind(summary.score as i32)
    .bind(summary.items_sorted as i32)
    .bind(summary.correct_sorts as i32)
    .bind(summary.accuracy)
    .bind(summary.time_spent_seconds as i64)
    .execute(pool)
    .await?;
    Ok(())
}

/// Upsert the player's cumulative progress row.
pub async fn update_progress(
    pool: &PgPool,
    player: &str,
    update: &ProgressUpdate,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO user_progress (player, level, total_correct, total_attempts, completed_levels) \
         VALUES ($1, $2, $3, $4, $5) \
         ON CONFLICT (player) DO UPDATE SET \
             level = EXCLUDED.level, \
             total_correct = EXCLUDED.total_correct, \
             total_attempts = EXCLUDED.total_attempts, \
             completed_levels = EXCLUDED.completed_levels, \
             updated_at = now()",
    )
    .bind(player)
    .bind(update.level as i32)
    .bind(update.total_correct as i64)
    .bind(update.total_attempts as i64)
    .bind(update.completed_levels as i32)
    .execute(pool)
    .await?;
    Ok(())
}

/// Fire-and-forget variant of [`save_session`]: failures are logged, never
/// retried, and never reach gameplay; the in-memory session stays the
/// source of truth until the next successful save.
pub async fn save_session_logged(pool: &PgPool, player: &str, summary: &SessionSummary) {
    if let Err(err) = save_session(pool, player, summary).await {
        tracing::warn!("failed to save session for {player}: {err}");
    }
}

/// Fire-and-forget variant of [`update_progress`].
pub async fn update_progress_logged(pool: &PgPool, player: &str, update: &ProgressUpdate) {
    if let Err(err) = update_progress(pool, player, update).await {
        tracing::warn!("failed to update progress for {player}: {err}");
    }
}
