//! Group CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Group, Word};

/// Create a new group.
pub async fn create_group(pool: &SqlitePool, name: &str) -> Result<Group> {
    let group = sqlx::query_as::<_, Group>(
        r#"
        INSERT INTO groups (name)
        VALUES (?)
        RETURNING id, name
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Group",
                    id: name.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(group)
}

/// Get a group by ID.
pub async fn get_group(pool: &SqlitePool, id: i64) -> Result<Group> {
    sqlx::query_as::<_, Group>(
        r#"
        SELECT id, name
        FROM groups
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Group",
        id: id.to_string(),
    })
}

/// Get a group by its unique name.
pub async fn get_group_by_name(pool: &SqlitePool, name: &str) -> Result<Group> {
    sqlx::query_as::<_, Group>(
        r#"
        SELECT id, name
        FROM groups
        WHERE name = ?
        "#,
    )
    .bind(name)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Group",
        id: name.to_string(),
    })
}

/// Rename an existing group.
pub async fn update_group(pool: &SqlitePool, id: i64, name: &str) -> Result<Group> {
    let result = sqlx::query(
        r#"
        UPDATE groups
        SET name = ?
        WHERE id = ?
        "#,
    )
    .bind(name)
    .bind(id)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Group",
                    id: name.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Group",
            id: id.to_string(),
        });
    }

    get_group(pool, id).await
}

/// List all groups.
pub async fn list_groups(pool: &SqlitePool) -> Result<Vec<Group>> {
    let groups = sqlx::query_as::<_, Group>(
        r#"
        SELECT id, name
        FROM groups
        ORDER BY name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(groups)
}

/// List the words linked to a group.
pub async fn list_group_words(pool: &SqlitePool, group_id: i64) -> Result<Vec<Word>> {
    let words = sqlx::query_as::<_, Word>(
        r#"
        SELECT w.id, w.japanese, w.romaji, w.english, w.parts,
               w.correct_count, w.wrong_count
        FROM words w
        JOIN words_groups wg ON wg.word_id = w.id
        WHERE wg.group_id = ?
        ORDER BY w.id
        "#,
    )
    .bind(group_id)
    .fetch_all(pool)
    .await?;

    Ok(words)
}

/// Link a word to a group. Existing links are left untouched.
pub async fn add_word_to_group(pool: &SqlitePool, word_id: i64, group_id: i64) -> Result<()> {
    sqlx::query(
        r#"
        INSERT OR IGNORE INTO words_groups (word_id, group_id)
        VALUES (?, ?)
        "#,
    )
    .bind(word_id)
    .bind(group_id)
    .execute(pool)
    .await?;

    Ok(())
}
