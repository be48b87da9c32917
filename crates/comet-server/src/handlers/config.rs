//! Configuration API endpoint.
//!
//! Returns the client-side subset of the site configuration. The Algolia
//! API key never leaves the server.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use comet_config::{Config, SearchType, ThemeConfig};
use serde::Serialize;

use crate::state::AppState;

/// Response for GET /api/config.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PublicConfig {
    theme: ThemeConfig,
    base_path: String,
    default_locale: String,
    code_highlighting: bool,
    search: PublicSearch,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PublicSearch {
    enabled: bool,
    #[serde(rename = "type")]
    search_type: SearchType,
    #[serde(skip_serializing_if = "Option::is_none")]
    algolia: Option<PublicAlgolia>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PublicAlgolia {
    app_id: String,
    index_name: String,
}

impl From<&Config> for PublicConfig {
    fn from(config: &Config) -> Self {
        let search = &config.advanced.search;
        let algolia = (search.search_type == SearchType::Algolia).then(|| PublicAlgolia {
            app_id: search.algolia.app_id.clone(),
            index_name: search.algolia.index_name.clone(),
        });

        Self {
            theme: config.theme.clone(),
            base_path: config.advanced.base_path.clone(),
            default_locale: config.content.default_locale.clone(),
            code_highlighting: config.advanced.code_highlighting,
            search: PublicSearch {
                enabled: search.enabled,
                search_type: search.search_type,
                algolia,
            },
        }
    }
}

/// Handle GET /api/config.
pub(crate) async fn get_config(State(state): State<Arc<AppState>>) -> Json<PublicConfig> {
    Json(state.public_config.clone())
}
