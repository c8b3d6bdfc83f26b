//! Word CRUD operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::Word;

/// Fields supplied when creating or updating a word.
#[derive(Debug, Clone)]
pub struct NewWord {
    pub japanese: String,
    pub romaji: String,
    pub english: String,
    /// Optional JSON breakdown of the word's parts.
    pub parts: Option<String>,
}

/// Create a new word. Review counters start at zero.
pub async fn create_word(pool: &SqlitePool, word: &NewWord) -> Result<Word> {
    let word = sqlx::query_as::<_, Word>(
        r#"
        INSERT INTO words (japanese, romaji, english, parts)
        VALUES (?, ?, ?, ?)
        RETURNING id, japanese, romaji, english, parts, correct_count, wrong_count
        "#,
    )
    .bind(&word.japanese)
    .bind(&word.romaji)
    .bind(&word.english)
    .bind(&word.parts)
    .fetch_one(pool)
    .await?;

    Ok(word)
}

/// Get a word by ID.
pub async fn get_word(pool: &SqlitePool, id: i64) -> Result<Word> {
    sqlx::query_as::<_, Word>(
        r#"
        SELECT id, japanese, romaji, english, parts, correct_count, wrong_count
        FROM words
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Word",
        id: id.to_string(),
    })
}

/// Update an existing word's text fields.
pub async fn update_word(pool: &SqlitePool, id: i64, word: &NewWord) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE words
        SET japanese = ?, romaji = ?, english = ?, parts = ?
        WHERE id = ?
        "#,
    )
    .bind(&word.japanese)
    .bind(&word.romaji)
    .bind(&word.english)
    .bind(&word.parts)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Word",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a word by ID.
pub async fn delete_word(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM words
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Word",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// List all words.
pub async fn list_words(pool: &SqlitePool) -> Result<Vec<Word>> {
    let words = sqlx::query_as::<_, Word>(
        r#"
        SELECT id, japanese, romaji, english, parts, correct_count, wrong_count
        FROM words
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(words)
}

/// Count total words.
pub async fn count_words(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM words
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;

    #[tokio::test]
    async fn word_crud() {
        let db = test_db().await;
        let pool = db.pool();

        let created = create_word(
            pool,
            &NewWord {
                japanese: "犬".to_string(),
                romaji: "inu".to_string(),
                english: "dog".to_string(),
                parts: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(created.correct_count, 0);
        assert_eq!(created.wrong_count, 0);

        let fetched = get_word(pool, created.id).await.unwrap();
        assert_eq!(fetched, created);

        update_word(
            pool,
            created.id,
            &NewWord {
                japanese: "犬".to_string(),
                romaji: "inu".to_string(),
                english: "dog (animal)".to_string(),
                parts: Some(r#"{"kanji":"犬"}"#.to_string()),
            },
        )
        .await
        .unwrap();
        let fetched = get_word(pool, created.id).await.unwrap();
        assert_eq!(fetched.english, "dog (animal)");

        assert_eq!(list_words(pool).await.unwrap().len(), 1);
        assert_eq!(count_words(pool).await.unwrap(), 1);

        delete_word(pool, created.id).await.unwrap();
        let result = get_word(pool, created.id).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn missing_word_is_not_found() {
        let db = test_db().await;

        assert!(matches!(
            get_word(db.pool(), 42).await,
            Err(DatabaseError::NotFound { entity: "Word", .. })
        ));
        assert!(matches!(
            delete_word(db.pool(), 42).await,
            Err(DatabaseError::NotFound { entity: "Word", .. })
        ));
    }
}
