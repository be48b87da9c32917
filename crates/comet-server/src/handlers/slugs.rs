//! Slugs API endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};

use crate::error::ServerError;
use crate::handlers::LocaleQuery;
use crate::state::AppState;

/// Handle GET /api/slugs.
pub(crate) async fn get_slugs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocaleQuery>,
) -> Result<Json<Vec<String>>, ServerError> {
    let site = Arc::clone(&state.site);
    let slugs = tokio::task::spawn_blocking(move || site.slugs(query.locale.as_deref())).await?;
    Ok(Json(slugs))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::app::tests::{get_response, json_body};

    #[tokio::test]
    async fn test_slugs() {
        let json = json_body(get_response("/api/slugs").await).await;

        assert_eq!(json, json!(["", "guides/install", "intro", "locked"]));
    }

    #[tokio::test]
    async fn test_slugs_for_locale() {
        let json = json_body(get_response("/api/slugs?locale=fr").await).await;

        assert_eq!(json, json!(["intro"]));
    }
}
