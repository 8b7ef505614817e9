//! # Metadata Records
//!
//! A metadata file is a JSON object describing one labeled curve:
//!
//! ```json
//! {
//!   "labelName": "XENONnT (2023)",
//!   "id": "xenonnt_2023",
//!   "url": "xenonnt_2023.csv",
//!   "paperUrls": ["https://arxiv.org/abs/2303.14729"]
//! }
//! ```
//!
//! The required fields are kept as raw JSON values so that presence and
//! shape can be judged separately: a field holding `null` is present, just
//! malformed. Unrecognized fields land in [`MetadataRecord::extra`].

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Fields every metadata file must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 4] = ["labelName", "id", "url", "paperUrls"];

/// One parsed metadata file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    /// Human-readable curve name.
    #[serde(default, deserialize_with = "present")]
    pub label_name: Option<Value>,
    /// Unique key of the dataset.
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    /// Path of the referenced data file, relative to the metadata file or
    /// to the repository root.
    #[serde(default, deserialize_with = "present")]
    pub url: Option<Value>,
    /// Publications the curve is taken from. Must be a non-empty array.
    #[serde(default, deserialize_with = "present")]
    pub paper_urls: Option<Value>,
    /// Everything else in the object.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// Data file location found by the validator. Never read from disk.
    #[serde(skip)]
    pub resolved_data_file: Option<PathBuf>,
}

/// Treat any value, `null` included, as present.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl MetadataRecord {
    /// Parse a metadata document. Fails for malformed JSON and for any
    /// top-level value that is not an object.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Look up one of the required fields by its JSON name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match name {
            "labelName" => self.label_name.as_ref(),
            "id" => self.id.as_ref(),
            "url" => self.url.as_ref(),
            "paperUrls" => self.paper_urls.as_ref(),
            other => self.extra.get(other),
        }
    }

    /// Required fields absent from the document, in [`REQUIRED_FIELDS`] order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|name| self.field(name).is_none())
            .collect()
    }

    /// `url` as a string, if it is one.
    pub fn url_str(&self) -> Option<&str> {
        self.url.as_ref().and_then(Value::as_str)
    }

    /// True when `paperUrls` is an array with at least one element.
    pub fn has_paper_urls(&self) -> bool {
        self.paper_urls
            .as_ref()
            .and_then(Value::as_array)
            .is_some_and(|urls| !urls.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_complete_record_and_keeps_extra_fields() {
        let rec = MetadataRecord::from_json_str(
            r#"{
                "labelName": "LZ (2022)",
                "id": "lz_2022",
                "url": "lz_2022.csv",
                "paperUrls": ["https://arxiv.org/abs/2207.03764"],
                "color": "red"
            }"#,
        )
        .unwrap();
        assert!(rec.missing_fields().is_empty());
        assert_eq!(rec.field("labelName"), Some(&Value::from("LZ (2022)")));
        assert_eq!(rec.url_str(), Some("lz_2022.csv"));
        assert!(rec.has_paper_urls());
        assert_eq!(rec.extra.get("color"), Some(&Value::from("red")));
        assert!(rec.resolved_data_file.is_none());
    }

    #[test]
    fn reports_missing_fields_in_order() {
        let rec = MetadataRecord::from_json_str(r#"{"labelName": "A", "paperUrls": ["u"]}"#)
            .unwrap();
        assert_eq!(rec.missing_fields(), vec!["id", "url"]);
    }

    #[test]
    fn null_field_counts_as_present() {
        let rec = MetadataRecord::from_json_str(
            r#"{"labelName": null, "id": "a", "url": "a.csv", "paperUrls": null}"#,
        )
        .unwrap();
        assert!(rec.missing_fields().is_empty());
        assert_eq!(rec.field("labelName"), Some(&Value::Null));
        assert!(!rec.has_paper_urls());
    }

    #[test]
    fn empty_paper_urls_is_not_accepted() {
        let rec = MetadataRecord::from_json_str(r#"{"paperUrls": []}"#).unwrap();
        assert!(!rec.has_paper_urls());
    }

    #[test]
    fn non_object_document_is_rejected() {
        assert!(MetadataRecord::from_json_str("[1, 2, 3]").is_err());
        assert!(MetadataRecord::from_json_str("\"text\"").is_err());
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(MetadataRecord::from_json_str("{\"id\": ").is_err());
    }

    #[test]
    fn numeric_id_is_present() {
        let rec = MetadataRecord::from_json_str(r#"{"id": 17}"#).unwrap();
        assert_eq!(rec.field("id"), Some(&Value::from(17)));
    }
}
