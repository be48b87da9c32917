//! Navigation API endpoint.
//!
//! Returns the navigation tree for a locale.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use comet_site::NavItem;
use serde::Deserialize;

use crate::error::ServerError;
use crate::state::AppState;

/// Query for GET /api/navigation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct NavigationQuery {
    locale: Option<String>,
    base_path: Option<String>,
}

/// Handle GET /api/navigation.
pub(crate) async fn get_navigation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<Vec<NavItem>>, ServerError> {
    let site = Arc::clone(&state.site);
    let items = tokio::task::spawn_blocking(move || {
        site.navigation(query.locale.as_deref(), query.base_path.as_deref())
    })
    .await?;
    Ok(Json(items))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::app::tests::{get_response, json_body};

    #[tokio::test]
    async fn test_locale_and_base_path_query() {
        let response = get_response("/api/navigation?locale=fr&basePath=/fr/docs").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!([{"title": "Introduction", "path": "/fr/docs/intro", "children": []}])
        );
    }

    #[tokio::test]
    async fn test_unknown_locale_is_empty() {
        let response = get_response("/api/navigation?locale=de").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!([]));
    }
}
