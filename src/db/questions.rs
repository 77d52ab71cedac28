use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

#[derive(Debug, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i64,
    pub category: i64,
}

pub async fn get_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, difficulty, category
FROM questions
ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_question_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, difficulty, category
FROM questions
WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, difficulty, category
FROM questions
WHERE category = ?1
ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring match on the question text.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, difficulty, category
FROM questions
WHERE lower(question) LIKE '%' || lower(?1) || '%'
ORDER BY id
        "#,
    )
    .bind(term)
    .fetch_all(pool)
    .await
}

pub async fn create_question(pool: &SqlitePool, new: &NewQuestion) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, difficulty, category) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(&new.question)
    .bind(&new.answer)
    .bind(new.difficulty)
    .bind(new.category)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    sqlx::query(
        r#"
DELETE FROM questions WHERE id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}
