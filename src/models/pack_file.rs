use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackFile {
    pub name: String,
    pub filename: String,
    pub directory: String,
    pub question_count: usize,
}
