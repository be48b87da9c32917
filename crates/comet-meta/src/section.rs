//! Folder metadata from `section.json` sidecar files.
//!
//! A sidecar overrides the folder's display title, its sort position among
//! siblings, and whether the sidebar renders it collapsed. Fields are read
//! leniently: a field of the wrong type is ignored, not an error.

use serde::Serialize;
use serde_json::Value;

use crate::error::MetaError;
use crate::position::coerce_position;

/// Per-folder overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SectionMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SectionMetadata {
    /// Parse sidecar JSON.
    ///
    /// Empty content yields default metadata.
    ///
    /// # Errors
    ///
    /// Returns [`MetaError::Json`] for malformed JSON and
    /// [`MetaError::NotAnObject`] when the top-level value is not an object.
    ///
    /// # Example
    ///
    /// ```
    /// use comet_meta::SectionMetadata;
    ///
    /// let meta = SectionMetadata::from_json(r#"{"title": "Guides", "position": "2"}"#).unwrap();
    /// assert_eq!(meta.title.as_deref(), Some("Guides"));
    /// assert_eq!(meta.position, Some(2));
    /// ```
    pub fn from_json(content: &str) -> Result<Self, MetaError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let Value::Object(map) = serde_json::from_str::<Value>(trimmed)? else {
            return Err(MetaError::NotAnObject);
        };

        Ok(Self {
            title: map
                .get("title")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned),
            position: map.get("position").and_then(coerce_position),
            collapsed: map.get("collapsed").and_then(Value::as_bool),
        })
    }

    /// Check if no override is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.position.is_none() && self.collapsed.is_none()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_all_fields() {
        let meta =
            SectionMetadata::from_json(r#"{"title": "Guides", "position": 2, "collapsed": true}"#)
                .unwrap();

        assert_eq!(
            meta,
            SectionMetadata {
                title: Some("Guides".to_owned()),
                position: Some(2),
                collapsed: Some(true),
            }
        );
    }

    #[test]
    fn test_empty_content() {
        assert!(SectionMetadata::from_json("").unwrap().is_empty());
        assert!(SectionMetadata::from_json("  \n").unwrap().is_empty());
        assert!(SectionMetadata::from_json("{}").unwrap().is_empty());
    }

    #[test]
    fn test_numeric_string_position() {
        let meta = SectionMetadata::from_json(r#"{"position": " 5 "}"#).unwrap();

        assert_eq!(meta.position, Some(5));
    }

    #[test]
    fn test_wrong_types_are_ignored() {
        let meta =
            SectionMetadata::from_json(r#"{"title": 12, "position": "later", "collapsed": "yes"}"#)
                .unwrap();

        assert!(meta.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let meta = SectionMetadata::from_json(r#"{"title": "API", "icon": "book"}"#).unwrap();

        assert_eq!(meta.title.as_deref(), Some("API"));
    }

    #[test]
    fn test_invalid_json() {
        let result = SectionMetadata::from_json("{title: Guides}");

        assert!(matches!(result, Err(MetaError::Json(_))));
    }

    #[test]
    fn test_non_object() {
        let result = SectionMetadata::from_json("[1, 2]");

        assert!(matches!(result, Err(MetaError::NotAnObject)));
    }
}
