//! Docs API endpoint.
//!
//! Returns a document with metadata, table of contents and rendered HTML.
//! Responses carry an `ETag` over the serialized document so clients can
//! revalidate with `If-None-Match`.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use md5::{Digest, Md5};

use crate::error::ServerError;
use crate::handlers::LocaleQuery;
use crate::state::AppState;

/// Handle GET /api/docs/ (root index document).
pub(crate) async fn get_root_doc(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_doc_impl(String::new(), query, state, headers).await
}

/// Handle GET /api/docs/{*slug}.
pub(crate) async fn get_doc(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    get_doc_impl(slug, query, state, headers).await
}

#[allow(clippy::needless_pass_by_value)]
async fn get_doc_impl(
    slug: String,
    query: LocaleQuery,
    state: Arc<AppState>,
    headers: HeaderMap,
) -> Result<Response, ServerError> {
    let site = Arc::clone(&state.site);
    let lookup = slug.clone();
    let doc = tokio::task::spawn_blocking(move || site.document(query.locale.as_deref(), &lookup))
        .await??
        .ok_or(ServerError::DocNotFound(slug))?;

    // Hash the whole response so metadata edits also invalidate caches
    let body = serde_json::to_string(&doc)?;
    let etag = compute_etag(&state.version, &body);

    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && if_none_match.as_bytes() == etag.as_bytes()
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok((
        [
            (header::ETAG, etag),
            (header::CONTENT_TYPE, "application/json".to_owned()),
            (header::CACHE_CONTROL, "private, max-age=60".to_owned()),
        ],
        body,
    )
        .into_response())
}

/// Compute `ETag` from version and content.
///
/// MD5 truncated to 64 bits (16 hex chars), quoted.
fn compute_etag(version: &str, content: &str) -> String {
    let hash = Md5::digest(format!("{version}:{content}").as_bytes());
    format!("\"{}\"", &hex::encode(hash)[..16])
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use comet_storage::MockStorage;
    use tower::ServiceExt;

    use super::*;
    use crate::app::tests::{get_response, json_body, router_with};

    async fn etag_for(content: &str) -> String {
        let router = router_with(MockStorage::new().with_file("en/intro.md", content));
        let response = router
            .oneshot(
                axum::http::Request::get("/api/docs/intro")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        response.headers()[header::ETAG].to_str().unwrap().to_owned()
    }

    #[test]
    fn test_compute_etag_includes_version() {
        assert_ne!(compute_etag("1.0.0", "content"), compute_etag("1.0.1", "content"));
    }

    #[test]
    fn test_compute_etag_includes_content() {
        assert_ne!(compute_etag("1.0.0", "content1"), compute_etag("1.0.0", "content2"));
    }

    #[test]
    fn test_compute_etag_format() {
        let etag = compute_etag("1.0.0", "content");

        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert_eq!(etag.len(), 18);
    }

    #[tokio::test]
    async fn test_get_doc() {
        let response = get_response("/api/docs/intro").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(header::ETAG));
        let json = json_body(response).await;
        assert_eq!(
            json["metadata"],
            json!({"title": "Intro", "slug": "intro", "locale": "en", "path": "en/intro.md", "position": 1})
        );
        assert_eq!(json["content"], "Hello\n");
        assert_eq!(json["html"], "<p>Hello</p>\n");
    }

    #[tokio::test]
    async fn test_etag_changes_with_metadata() {
        let old = etag_for("---\ntitle: Old Title\n---\nHello\n").await;
        let new = etag_for("---\ntitle: New Title\n---\nHello\n").await;

        assert_ne!(old, new);
        assert_eq!(old, etag_for("---\ntitle: Old Title\n---\nHello\n").await);
    }

    #[tokio::test]
    async fn test_get_root_doc() {
        let json = json_body(get_response("/api/docs/").await).await;

        assert_eq!(json["metadata"]["title"], "Welcome");
        assert_eq!(json["toc"]["items"][0]["id"], "start-here");
    }

    #[tokio::test]
    async fn test_get_nested_doc_for_locale() {
        assert_eq!(
            get_response("/api/docs/guides/install").await.status(),
            StatusCode::OK
        );
        assert_eq!(
            get_response("/api/docs/guides/install?locale=fr").await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn test_missing_doc_is_json_404() {
        let response = get_response("/api/docs/missing").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            json_body(response).await,
            json!({"error": "Document not found", "slug": "missing"})
        );
    }

    #[tokio::test]
    async fn test_unreadable_doc_is_500() {
        let response = get_response("/api/docs/locked").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
