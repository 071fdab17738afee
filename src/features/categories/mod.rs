//! Read-only trivia categories.
//!
//! Categories are seeded outside the service; this feature only lists them
//! and resolves them for the other features.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/categories` | `{id: type}` mapping of every category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
