use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single question as stored in a pack file.
///
/// Records are open-ended: every field is kept and echoed back untouched.
/// Only `topic` is ever inspected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Question(pub Map<String, JsonValue>);

impl Question {
    /// Returns `None` for anything that is not a JSON object.
    pub fn from_value(value: JsonValue) -> Option<Self> {
        match value {
            JsonValue::Object(fields) => Some(Self(fields)),
            _ => None,
        }
    }

    /// The record's topic. Missing, non-string and empty values all count as
    /// no topic.
    pub fn topic(&self) -> Option<&str> {
        self.0
            .get("topic")
            .and_then(|t| t.as_str())
            .filter(|t| !t.is_empty())
    }

    /// Key a record is counted under in per-topic stats. Only a missing
    /// `topic` falls back to "Uncategorized"; an empty string is its own key
    /// and other JSON values are keyed by their JSON text.
    pub fn breakdown_key(&self) -> String {
        match self.0.get("topic") {
            None => UNCATEGORIZED.to_string(),
            Some(JsonValue::String(topic)) => topic.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn matches_topic(&self, selector: &str) -> bool {
        self.topic()
            .map(|t| t.to_lowercase() == selector.to_lowercase())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_objects_become_questions() {
        assert!(Question::from_value(json!({"topic": "Math"})).is_some());
        assert!(Question::from_value(json!("Math")).is_none());
        assert!(Question::from_value(json!([1, 2])).is_none());
    }

    #[test]
    fn topic_ignores_empty_and_non_string_values() {
        let q = Question::from_value(json!({"topic": ""})).unwrap();
        assert_eq!(q.topic(), None);

        let q = Question::from_value(json!({"topic": 42})).unwrap();
        assert_eq!(q.topic(), None);
    }

    #[test]
    fn breakdown_key_defaults_only_when_topic_is_missing() {
        let key = |v: JsonValue| Question::from_value(v).unwrap().breakdown_key();
        assert_eq!(key(json!({"q": "?"})), UNCATEGORIZED);
        assert_eq!(key(json!({"topic": ""})), "");
        assert_eq!(key(json!({"topic": "Math"})), "Math");
        assert_eq!(key(json!({"topic": 42})), "42");
        assert_eq!(key(json!({"topic": null})), "null");
    }

    #[test]
    fn topic_match_is_case_insensitive() {
        let q = Question::from_value(json!({"topic": "Organic Chemistry"})).unwrap();
        assert!(q.matches_topic("organic chemistry"));
        assert!(q.matches_topic("ORGANIC CHEMISTRY"));
        assert!(!q.matches_topic("chemistry"));

        let untagged = Question::from_value(json!({"q": "?"})).unwrap();
        assert!(!untagged.matches_topic("chemistry"));
    }

    #[test]
    fn serializes_back_unchanged() {
        let raw = json!({"topic": "Math", "q": "2+2?", "options": ["3", "4"]});
        let q = Question::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&q).unwrap(), raw);
    }
}
