use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{AppConfig, SwaggerConfig};
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::questions::{routes as questions_routes, QuestionService};
use crate::features::quizzes::{routes as quizzes_routes, QuizService};
use crate::modules::storage::TriviaStore;

/// Every feature service, built over one shared store handle
#[derive(Clone)]
pub struct AppServices {
    pub categories: Arc<CategoryService>,
    pub questions: Arc<QuestionService>,
    pub quizzes: Arc<QuizService>,
}

impl AppServices {
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        let categories = Arc::new(CategoryService::new(Arc::clone(&store)));
        let questions = Arc::new(QuestionService::new(
            Arc::clone(&store),
            Arc::clone(&categories),
        ));
        let quizzes = Arc::new(QuizService::new(store));

        Self {
            categories,
            questions,
            quizzes,
        }
    }
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// API routes with the JSON 404/405 fallbacks, without any middleware
pub fn api_router(services: &AppServices) -> Router {
    Router::new()
        .merge(categories_routes::routes(Arc::clone(&services.categories)))
        .merge(questions_routes::routes(Arc::clone(&services.questions)))
        .merge(quizzes_routes::routes(Arc::clone(&services.quizzes)))
        .route("/health", get(health_check))
        .method_not_allowed_fallback(middleware::method_not_allowed_fallback)
        .fallback(middleware::not_found_fallback)
}

/// Full application: API routes, Swagger UI and the middleware stack
pub fn build_app(services: &AppServices, app: &AppConfig, swagger: &SwaggerConfig) -> Router {
    let swagger_modifier = SwaggerInfoModifier {
        title: swagger.title.clone(),
        version: swagger.version.clone(),
        description: swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi);

    Router::new()
        .merge(swagger_ui)
        .merge(api_router(services))
        .layer(DefaultBodyLimit::max(app.max_request_body_size))
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(middleware::cors_layer(&app.cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use serde_json::json;
    use tower::ServiceExt;

    use crate::shared::test_helpers::{question_ids, seeded_store, send};

    fn app() -> Router {
        let services = AppServices::new(Arc::new(seeded_store()));
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors_allowed_origins: vec!["*".to_string()],
            max_request_body_size: 1024,
        };
        let swagger = SwaggerConfig {
            title: "Trivia API".to_string(),
            version: "test".to_string(),
            description: "Trivia API under test".to_string(),
        };
        build_app(&services, &config, &swagger)
    }

    #[tokio::test]
    async fn test_trivia_round_trip() {
        let app = app();

        let (status, categories) = send(&app, Method::GET, "/categories", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(categories["categories"].as_object().unwrap().len(), 3);

        let (_, second_page) = send(&app, Method::GET, "/questions?page=2", None).await;
        assert_eq!(question_ids(&second_page).len(), 2);
        assert_eq!(second_page["total_questions"], 12);

        let (_, art) = send(&app, Method::GET, "/categories/2/questions", None).await;
        assert_eq!(question_ids(&art), vec![11, 12]);

        let (status, quiz) = send(
            &app,
            Method::POST,
            "/quizzes",
            Some(json!({
                "quiz_category": { "id": 2, "type": "category" },
                "previous_questions": []
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let picked = quiz["question"]["id"].as_i64().unwrap();
        assert!(picked == 11 || picked == 12);
    }

    #[tokio::test]
    async fn test_unknown_path_renders_envelope() {
        let (status, body) = send(&app(), Method::GET, "/nope", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!({ "success": false, "error": 404, "message": "Resource Not Found" })
        );
    }

    #[tokio::test]
    async fn test_health() {
        let (status, _) = send(&app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_and_request_id_headers() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/categories")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_trivia_methods() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/questions/7")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let allowed = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap()
            .to_string();
        let mut methods: Vec<&str> = allowed.split(',').map(str::trim).collect();
        methods.sort_unstable();
        assert_eq!(methods, vec!["DELETE", "GET", "POST"]);
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let big = "x".repeat(4096);
        let (status, _) = send(
            &app(),
            Method::POST,
            "/questions/search",
            Some(json!({ "searchTerm": big })),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/categories",
            "/categories/{id}/questions",
            "/questions",
            "/questions/{id}",
            "/questions/search",
            "/quizzes",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
