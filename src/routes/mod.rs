//! HTTP route assembly.
//!
//! The shell owns two routes of its own (`/` and `/health`) and mounts five
//! externally supplied route groups under fixed `/api` prefixes. The groups'
//! internals (auth, user, product, batch, consumer handling) live outside
//! this crate; [`ApiRoutes`] is the seam through which they are injected.
//!
//! Layer order matters: the request-id layer is outermost so its span wraps
//! CORS handling and the security-header pass as well as the handlers.

pub mod health;
pub mod home;

use axum::{middleware::from_fn, routing::get, Router};

use crate::middleware::{cors_layer, request_id_layer, security_headers_layer};
use crate::state::AppState;

/// Externally supplied route groups, one per `/api` prefix.
///
/// `Default` yields empty groups: every path under a prefix then falls
/// through to the platform 404, which is the correct behavior when a group
/// has not been wired in.
#[derive(Default)]
pub struct ApiRoutes {
    pub auth: Router<AppState>,
    pub users: Router<AppState>,
    pub products: Router<AppState>,
    pub batches: Router<AppState>,
    pub consumer: Router<AppState>,
}

/// Creates the Axum router with the service routes, mounted API groups, and
/// the middleware stack.
pub fn create_router(state: AppState, api: ApiRoutes) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/health", get(health::health))
        .nest("/api/auth", api.auth)
        .nest("/api/users", api.users)
        .nest("/api/products", api.products)
        .nest("/api/batches", api.batches)
        .nest("/api/consumer", api.consumer)
        .with_state(state)
        .layer(from_fn(security_headers_layer))
        .layer(cors_layer())
        .layer(from_fn(request_id_layer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::AppError;
    use axum::body::Body;
    use chrono::{DateTime, Utc};
    use http::header;
    use http::{Request, StatusCode};
    use sqlx::PgPool;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let config = Config {
            port: 8080,
            node_env: "development".to_string(),
            database_url: "postgres://localhost/supplychain_test".to_string(),
        };
        // Lazy pool: no connection is made unless a handler uses it.
        let db = PgPool::connect_lazy(&config.database_url).unwrap();
        AppState::new(config, db)
    }

    fn app(api: ApiRoutes) -> Router {
        create_router(test_state(), api)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn root_returns_welcome_message() {
        let response = app(ApiRoutes::default())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "message": "Welcome to Supply Chain API" }));
    }

    #[tokio::test]
    async fn root_is_byte_stable_across_calls() {
        let app = app(ApiRoutes::default());

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
                .await
                .unwrap();
            bodies.push(
                axum::body::to_bytes(response.into_body(), usize::MAX)
                    .await
                    .unwrap(),
            );
        }

        assert_eq!(bodies[0], bodies[1]);
    }

    #[tokio::test]
    async fn health_returns_ok_with_fresh_timestamp() {
        let before = Utc::now();
        let response = app(ApiRoutes::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let after = Utc::now();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "OK");
        assert_eq!(json["service"], "Supply Chain API");

        let timestamp: DateTime<Utc> = DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap())
            .unwrap()
            .with_timezone(&Utc);
        assert!(timestamp >= before - chrono::Duration::milliseconds(1));
        assert!(timestamp <= after + chrono::Duration::milliseconds(1));
    }

    #[tokio::test]
    async fn unmatched_path_returns_404() {
        let response = app(ApiRoutes::default())
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn injected_group_receives_requests_under_its_prefix() {
        let products = Router::new().route("/list", get(|| async { "three products" }));
        let api = ApiRoutes {
            products,
            ..Default::default()
        };

        let response = app(api)
            .oneshot(
                Request::builder()
                    .uri("/api/products/list")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn handler_error_maps_to_generic_500() {
        let users = Router::new().route(
            "/boom",
            get(|| async { Err::<(), AppError>(AppError::Internal("pool exhausted".to_string())) }),
        );
        let api = ApiRoutes {
            users,
            ..Default::default()
        };

        let response = app(api)
            .oneshot(
                Request::builder()
                    .uri("/api/users/boom")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "message": "Something went wrong!" }));
    }

    #[tokio::test]
    async fn cors_reflects_origin_and_allows_credentials() {
        let response = app(ApiRoutes::default())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "https://consumer.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "https://consumer.example"
        );
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[tokio::test]
    async fn security_headers_are_set_on_responses() {
        let response = app(ApiRoutes::default())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let headers = response.headers();
        assert_eq!(headers.get(header::X_CONTENT_TYPE_OPTIONS).unwrap(), "nosniff");
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "SAMEORIGIN");
        assert!(headers.contains_key(header::STRICT_TRANSPORT_SECURITY));
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
        assert!(headers.contains_key("cross-origin-resource-policy"));
    }
}
