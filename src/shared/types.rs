use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::shared::constants::{DEFAULT_PAGE, QUESTIONS_PER_PAGE};
use crate::shared::deserializers::deserialize_lenient_page;

/// Success envelope: `success: true` next to the endpoint's own fields.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub payload: T,
}

impl<T> ApiResponse<T> {
    pub fn success(payload: T) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// Error envelope shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    /// HTTP status code, repeated in the body
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &str) -> Self {
        Self {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// `?page=` query parameter shared by the paginated endpoints.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page number (1-indexed, default: 1). Unparseable values fall back to 1.
    #[serde(default, deserialize_with = "deserialize_lenient_page")]
    #[param(value_type = Option<u32>, minimum = 0)]
    pub page: Option<u32>,
}

impl PaginationQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }
}

/// Returns page `page` (1-indexed) of `items`, `QUESTIONS_PER_PAGE` at a time.
///
/// Page 0 and pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: u32) -> Vec<T> {
    let Some(index) = (page as usize).checked_sub(1) else {
        return Vec::new();
    };
    let Some(start) = index.checked_mul(QUESTIONS_PER_PAGE) else {
        return Vec::new();
    };

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
