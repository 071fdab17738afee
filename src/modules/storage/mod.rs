//! Storage module for trivia data
//!
//! Defines the store trait the services depend on and its PostgreSQL
//! implementation. The schema itself is owned outside this service
//! (see `db/schema.sql`).

mod postgres;
mod store;

pub use postgres::PgTriviaStore;
pub use store::{StoreError, StoreResult, TriviaStore};
