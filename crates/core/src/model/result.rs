use serde::{Deserialize, Serialize};

/// Descriptive record the backend associates with a scoring outcome.
///
/// The catalog is ordered like the category sequence; a record is selected by
/// category index. Beyond `title` and `description` the payload shape is the
/// backend's to define, so the remainder is kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_are_preserved() {
        let record: ResultRecord = serde_json::from_str(
            r#"{"title":"Rest","description":"Focus on sleep.","advice":"Go to bed earlier","level":2}"#,
        )
        .unwrap();

        assert_eq!(record.title.as_deref(), Some("Rest"));
        assert_eq!(record.extra["advice"], "Go to bed earlier");
        assert_eq!(record.extra["level"], 2);
    }

    #[test]
    fn bare_record_deserializes() {
        let record: ResultRecord = serde_json::from_str("{}").unwrap();
        assert!(record.title.is_none());
        assert!(record.description.is_none());
        assert!(record.extra.is_empty());
    }
}
