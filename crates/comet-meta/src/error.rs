/// Error type for metadata parsing.
#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    /// Frontmatter block is not a valid YAML mapping.
    #[error("Invalid frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Section file is not valid JSON.
    #[error("Invalid section metadata: {0}")]
    Json(#[from] serde_json::Error),

    /// Section file is valid JSON but not an object.
    #[error("Invalid section metadata: expected a JSON object")]
    NotAnObject,
}
