//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/config", get(handlers::config::get_config))
        .route("/api/navigation", get(handlers::navigation::get_navigation))
        .route("/api/slugs", get(handlers::slugs::get_slugs))
        .route("/api/docs/", get(handlers::docs::get_root_doc))
        .route("/api/docs/{*slug}", get(handlers::docs::get_doc))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use comet_config::Config;
    use comet_site::{Site, SiteConfig};
    use comet_storage::MockStorage;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::handlers::config::PublicConfig;

    pub(crate) fn test_router() -> Router {
        router_with(
            MockStorage::new()
                .with_file("en/index.md", "# Welcome\n\n## Start here\n")
                .with_file("en/intro.md", "---\ntitle: Intro\nposition: 1\n---\nHello\n")
                .with_file("en/guides/section.json", r#"{"title":"Guides","position":2}"#)
                .with_file("en/guides/install.md", "# Install\n")
                .with_file("fr/intro.md", "---\ntitle: Introduction\n---\n")
                .with_unreadable("en/locked.md"),
        )
    }

    pub(crate) fn router_with(storage: MockStorage) -> Router {
        let config = Config::default();
        let state = Arc::new(AppState {
            site: Arc::new(Site::new(Arc::new(storage), SiteConfig::from(&config))),
            public_config: PublicConfig::from(&config),
            version: "1.0.0".to_owned(),
        });
        create_router(state)
    }

    pub(crate) async fn get_response(uri: &str) -> Response {
        test_router()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    pub(crate) async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_security_headers_on_every_response() {
        for uri in ["/api/navigation", "/api/docs/missing"] {
            let response = get_response(uri).await;
            let headers = response.headers();

            assert_eq!(headers["x-content-type-options"], "nosniff");
            assert_eq!(headers["x-frame-options"], "DENY");
            assert!(headers.contains_key("content-security-policy"));
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        assert_eq!(get_response("/api/unknown").await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_navigation_endpoint() {
        let response = get_response("/api/navigation").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!([
                {"title": "Intro", "path": "/docs/intro", "position": 1, "children": []},
                {
                    "title": "Guides",
                    "path": "/docs/guides",
                    "position": 2,
                    "isFolder": true,
                    "children": [
                        {"title": "Install", "path": "/docs/guides/install", "children": []}
                    ]
                },
                {"title": "locked", "path": "/docs/locked", "children": []},
                {"title": "Welcome", "path": "/docs", "children": []}
            ])
        );
    }

    #[tokio::test]
    async fn test_doc_etag_round_trip() {
        let first = get_response("/api/docs/intro").await;
        assert_eq!(first.status(), StatusCode::OK);
        let etag = first.headers()[header::ETAG].clone();

        let response = test_router()
            .oneshot(
                Request::get("/api/docs/intro")
                    .header(header::IF_NONE_MATCH, etag)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_MODIFIED);
    }
}
