//! Generation request models.
//!
//! A [`GenerationRequest`] is built from the three raw input fields every
//! time the user submits. Nothing is validated: empty fields are passed
//! through and produce nearly empty prompts.

use serde::{Deserialize, Serialize};

/// Temperature used when the caller does not pick one.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Everything needed to produce one article.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Article title, verbatim.
    pub title: String,

    /// Tags in input order, each trimmed. Empty pieces are kept.
    pub tags: Vec<String>,

    /// Free-form notes, verbatim (may span several lines).
    pub notes: String,

    /// Sampling temperature forwarded to the completion service.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

impl GenerationRequest {
    /// Build a request from the raw form fields.
    ///
    /// `raw_tags` is the comma-separated tags field exactly as typed.
    pub fn from_fields(title: &str, raw_tags: &str, notes: &str) -> Self {
        Self {
            title: title.to_string(),
            tags: split_tags(raw_tags),
            notes: notes.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Override the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// The tags as they appear in the outline prompt.
    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }
}

/// Split a comma-separated tags field, trimming every piece.
///
/// Mirrors a plain string split: `""` yields a single empty tag and
/// `"a,,b"` keeps the empty middle piece.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}

/// Normalize a raw tags field into the `", "`-joined form used in prompts.
pub fn normalize_tags(raw: &str) -> String {
    split_tags(raw).join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_tags_trims_each_piece() {
        assert_eq!(normalize_tags("a, b ,c"), "a, b, c");
    }

    #[test]
    fn test_split_tags_keeps_empty_pieces() {
        assert_eq!(split_tags("a,,b"), vec!["a", "", "b"]);
        assert_eq!(split_tags(""), vec![""]);
        assert_eq!(normalize_tags("   "), "");
    }

    #[test]
    fn test_from_fields_keeps_title_and_notes_verbatim() {
        let request = GenerationRequest::from_fields(
            "  Ocean Conservation ",
            "nature, water, policy",
            "line one\nline two",
        );

        assert_eq!(request.title, "  Ocean Conservation ");
        assert_eq!(request.tags, vec!["nature", "water", "policy"]);
        assert_eq!(request.notes, "line one\nline two");
        assert_eq!(request.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(request.tag_line(), "nature, water, policy");
    }

    #[test]
    fn test_with_temperature() {
        let request = GenerationRequest::from_fields("t", "x", "n").with_temperature(0.2);
        assert_eq!(request.temperature, 0.2);
    }
}
