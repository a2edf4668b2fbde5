use serde::Serialize;
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::models::pack_file::PackFile;
use crate::models::question::Question;
use crate::services::question_service::QuestionQuery;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionsQuery {
    pub limit: Option<i64>,
    pub shuffle: bool,
}

impl QuestionsQuery {
    /// Builds the query from raw key/value pairs. Only the first occurrence
    /// of a key counts. A `limit` that is not an integer is treated as
    /// absent, and only the string `true` (any case) turns `shuffle` on.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let first = |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.trim())
        };

        Self {
            limit: first("limit").and_then(|raw| raw.parse().ok()),
            shuffle: first("shuffle")
                .map(|raw| raw.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    pub fn for_topic(self, topic: Option<String>) -> QuestionQuery {
        QuestionQuery {
            topic,
            shuffle: self.shuffle,
            limit: self.limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuestionsResponse {
    pub success: bool,
    #[schema(value_type = Vec<Object>)]
    pub questions: Vec<Question>,
    pub total: usize,
}

impl From<Vec<Question>> for QuestionsResponse {
    fn from(questions: Vec<Question>) -> Self {
        Self {
            success: true,
            total: questions.len(),
            questions,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TopicsResponse {
    pub success: bool,
    pub topics: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub success: bool,
    pub total_questions: usize,
    pub total_topics: usize,
    pub topic_breakdown: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilesResponse {
    pub success: bool,
    pub files: Vec<PackFile>,
    pub total: usize,
}
