//! Metadata extraction for the Comet documentation engine.
//!
//! Everything the navigation resolver and document loader learn about a file
//! besides its location comes from this crate:
//!
//! - [`parse_document`]: split a leading `---` YAML block from the Markdown body
//! - [`SectionMetadata`]: per-folder `section.json` overrides
//! - [`first_heading`]: title fallback from the first `#` (or `##`) heading
//! - [`coerce_position`]: lenient integer coercion for sort keys
//! - [`titlecase_from_slug`]: display names derived from file and folder names
//!
//! Parsing is pure: callers read the text through a storage backend and decide
//! how to degrade when a parse fails.

mod error;
mod frontmatter;
mod position;
mod section;
mod title;

pub use error::MetaError;
pub use frontmatter::{Frontmatter, ParsedDocument, parse_document};
pub use position::{coerce_position, parse_leading_int};
pub use section::SectionMetadata;
pub use title::{display_name, first_heading, titlecase_from_slug};
