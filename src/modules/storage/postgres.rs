//! PostgreSQL implementation of [`TriviaStore`].

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};

use super::store::{StoreError, StoreResult, TriviaStore};
use crate::core::config::DatabaseConfig;
use crate::features::categories::models::Category;
use crate::features::questions::models::{CreateQuestion, Question};

const SELECT_CATEGORIES: &str = r#"SELECT id, "type" FROM categories"#;

const SELECT_QUESTIONS: &str =
    "SELECT id, question, answer, category, difficulty FROM questions";

pub struct PgTriviaStore {
    pool: PgPool,
}

impl PgTriviaStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
            .connect(&config.url)
            .await?;

        Ok(Self::new(pool))
    }
}

fn db_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |e| {
        tracing::error!("Failed to {}: {:?}", operation, e);
        StoreError::Database(e)
    }
}

/// Builds an ILIKE pattern that matches `term` literally anywhere in the text.
fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl TriviaStore for PgTriviaStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(SELECT_CATEGORIES)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list categories"))
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        let query = format!("{} WHERE id = $1", SELECT_CATEGORIES);
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("get category by id"))
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(SELECT_QUESTIONS)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list questions"))
    }

    async fn list_questions_by_id(&self) -> StoreResult<Vec<Question>> {
        let query = format!("{} ORDER BY id", SELECT_QUESTIONS);
        sqlx::query_as::<_, Question>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list questions by id"))
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count questions"))
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let query = format!(r"{} WHERE question ILIKE $1 ESCAPE '\'", SELECT_QUESTIONS);
        sqlx::query_as::<_, Question>(&query)
            .bind(contains_pattern(term))
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("search questions"))
    }

    async fn questions_in_category(&self, category_id: i32) -> StoreResult<Vec<Question>> {
        let query = format!("{} WHERE category = $1", SELECT_QUESTIONS);
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(db_error("list questions by category"))
    }

    async fn quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        match category_id {
            Some(category_id) => {
                let query = format!(
                    "{} WHERE category = $1 AND NOT (id = ANY($2))",
                    SELECT_QUESTIONS
                );
                sqlx::query_as::<_, Question>(&query)
                    .bind(category_id)
                    .bind(exclude)
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let query = format!("{} WHERE NOT (id = ANY($1))", SELECT_QUESTIONS);
                sqlx::query_as::<_, Question>(&query)
                    .bind(exclude)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(db_error("list quiz candidates"))
    }

    async fn insert_question(&self, data: CreateQuestion) -> StoreResult<Question> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.category)
        .bind(data.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create question"))?;

        tracing::info!(
            "Question created: id={}, category={}",
            question.id,
            question.category
        );

        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(db_error("delete question"))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("Question {}", id)));
        }

        tracing::info!("Question deleted: id={}", id);
        Ok(())
    }
}
