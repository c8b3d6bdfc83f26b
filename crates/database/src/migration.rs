//! One-time schema extension and seed data.
//!
//! Extends the base schema with review counters on `words` and a thumbnail
//! on `study_activities`, then seeds the baseline groups, activities, and
//! word-to-group links. The whole routine runs in a single transaction and
//! is expected to run once, at startup, before request traffic begins.
//!
//! The seed statements use INSERT OR IGNORE and are safe to re-run; the
//! column adds are not guarded by an existence check, so re-running the
//! full routine against an already-extended schema fails with a
//! duplicate-column error.

use sqlx::{Sqlite, SqlitePool};

use crate::Result;

/// Apply the schema extension and seed data as one atomic unit.
///
/// Any step failing rolls back the whole routine; the error is logged here
/// and propagated so startup can treat it as fatal.
pub async fn run(pool: &SqlitePool) -> Result<()> {
    match apply(pool).await {
        Ok(()) => {
            tracing::info!("Schema extension and seed data applied");
            Ok(())
        }
        Err(err) => {
            tracing::error!("Migration error: {}", err);
            Err(err)
        }
    }
}

async fn apply(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("ALTER TABLE words ADD COLUMN correct_count INTEGER DEFAULT 0")
        .execute(&mut *tx)
        .await?;
    sqlx::query("ALTER TABLE words ADD COLUMN wrong_count INTEGER DEFAULT 0")
        .execute(&mut *tx)
        .await?;
    sqlx::query("ALTER TABLE study_activities ADD COLUMN thumbnail_url TEXT")
        .execute(&mut *tx)
        .await?;

    seed_reference_data(&mut *tx).await?;

    tx.commit().await?;
    Ok(())
}

/// Insert the baseline groups, activities, and word-to-group links.
///
/// Every statement ignores conflicts, so repeated runs leave the reference
/// data unchanged.
pub async fn seed_reference_data<'e, E>(executor: E) -> Result<()>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    // raw_sql so the whole seed script executes as one batch
    sqlx::raw_sql(
        r#"
        INSERT OR IGNORE INTO groups (name) VALUES
        ('Animals'),
        ('Basic Greetings'),
        ('Everyday Objects');

        INSERT OR IGNORE INTO study_activities (name, thumbnail_url) VALUES
        ('Vocabulary Quiz', 'https://example.com/quiz-thumbnail.jpg'),
        ('Flashcard Practice', 'https://example.com/flashcard-thumbnail.jpg');

        INSERT OR IGNORE INTO words_groups (word_id, group_id)
        SELECT w.id, g.id
        FROM words w, groups g
        WHERE
        (w.japanese = '犬' AND g.name = 'Animals') OR
        (w.japanese = '猫' AND g.name = 'Animals') OR
        (w.japanese = '鳥' AND g.name = 'Animals');
        "#,
    )
    .execute(executor)
    .await?;

    Ok(())
}
