//! In-memory [`TriviaStore`] and fixtures for service and router tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use fake::{faker::lorem::en::Word, Fake};
use serde_json::Value;
use tower::ServiceExt;

use crate::core::app::{api_router, AppServices};
use crate::features::categories::models::Category;
use crate::features::questions::models::{CreateQuestion, Question};
use crate::modules::storage::{StoreError, StoreResult, TriviaStore};

#[derive(Default)]
struct MemoryState {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: i32,
}

/// Store double keeping rows in insertion order, like a heap table.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails like a dropped database connection
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn with_category(self, id: i32, kind: &str) -> Self {
        self.state.lock().unwrap().categories.push(Category {
            id,
            kind: kind.to_string(),
        });
        self
    }

    pub fn with_question(self, question: &str, category: i32, difficulty: i32) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state.next_question_id += 1;
            let id = state.next_question_id;
            state.questions.push(Question {
                id,
                question: question.to_string(),
                answer: Word().fake(),
                category,
                difficulty,
            });
        }
        self
    }

    pub fn questions(&self) -> Vec<Question> {
        self.state.lock().unwrap().questions.clone()
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.check()?;
        Ok(self.state.lock().unwrap().categories.clone())
    }

    async fn find_category(&self, id: i32) -> StoreResult<Option<Category>> {
        self.check()?;
        let state = self.state.lock().unwrap();
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list_questions(&self) -> StoreResult<Vec<Question>> {
        self.check()?;
        Ok(self.questions())
    }

    async fn list_questions_by_id(&self) -> StoreResult<Vec<Question>> {
        self.check()?;
        let mut questions = self.questions();
        questions.sort_by_key(|q| q.id);
        Ok(questions)
    }

    async fn count_questions(&self) -> StoreResult<i64> {
        self.check()?;
        Ok(self.state.lock().unwrap().questions.len() as i64)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        self.check()?;
        let needle = term.to_lowercase();
        Ok(self
            .questions()
            .into_iter()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .collect())
    }

    async fn questions_in_category(&self, category_id: i32) -> StoreResult<Vec<Question>> {
        self.check()?;
        Ok(self
            .questions()
            .into_iter()
            .filter(|q| q.category == category_id)
            .collect())
    }

    async fn quiz_candidates(
        &self,
        category_id: Option<i32>,
        exclude: &[i32],
    ) -> StoreResult<Vec<Question>> {
        self.check()?;
        Ok(self
            .questions()
            .into_iter()
            .filter(|q| category_id.map_or(true, |c| q.category == c))
            .filter(|q| !exclude.contains(&q.id))
            .collect())
    }

    async fn insert_question(&self, data: CreateQuestion) -> StoreResult<Question> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        state.next_question_id += 1;
        let question = Question {
            id: state.next_question_id,
            question: data.question,
            answer: data.answer,
            category: data.category,
            difficulty: data.difficulty,
        };
        state.questions.push(question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<()> {
        self.check()?;
        let mut state = self.state.lock().unwrap();
        let before = state.questions.len();
        state.questions.retain(|q| q.id != id);
        if state.questions.len() == before {
            return Err(StoreError::NotFound(format!("Question {}", id)));
        }
        Ok(())
    }
}

/// Three categories and twelve questions: ids 1-10 in Science, 11-12 in Art.
///
/// Questions 3, 7 and 11 contain the word "title".
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new()
        .with_category(1, "Science")
        .with_category(2, "Art")
        .with_category(3, "History");

    for n in 1..=10 {
        let text = if n == 3 || n == 7 {
            format!("Science question {n}: which gas holds the Title of most abundant?")
        } else {
            format!("Science question {n}: name the element with atomic number {n}")
        };
        store = store.with_question(&text, 1, (n % 5) + 1);
    }

    store
        .with_question(
            "Art question 1: what is the title of the painting with melting clocks?",
            2,
            3,
        )
        .with_question("Art question 2: who painted the Mona Lisa?", 2, 2)
}

pub fn test_app(store: Arc<MemoryStore>) -> Router {
    api_router(&AppServices::new(store))
}

/// Sends one request through `app` and decodes the JSON body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub fn question_ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
