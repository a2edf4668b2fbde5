use crate::error::Result;
use crate::models::pack_file::PackFile;
use crate::models::question::Question;
use rand::seq::SliceRandom;
use serde_json::Value as JsonValue;
use std::collections::{BTreeMap, BTreeSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Topic selector that disables topic filtering.
pub const ALL_TOPICS: &str = "all";

const PACK_EXTENSION: &str = ".json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackDir {
    /// Name reported as `directory` in file listings.
    pub label: String,
    pub path: PathBuf,
}

impl PackDir {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// File-backed question store. Holds no records itself: every call rescans
/// the pack directories.
#[derive(Clone)]
pub struct QuestionService {
    pack_dirs: Arc<Vec<PackDir>>,
}

impl QuestionService {
    pub fn new(pack_dirs: Vec<PackDir>) -> Self {
        Self {
            pack_dirs: Arc::new(pack_dirs),
        }
    }

    pub fn pack_dirs(&self) -> &[PackDir] {
        &self.pack_dirs
    }

    pub async fn ensure_directories(&self) -> Result<()> {
        for dir in self.pack_dirs.iter() {
            fs::create_dir_all(&dir.path).await?;
        }
        Ok(())
    }

    /// Concatenation of every record in every pack file, directory by
    /// directory, files in name order.
    pub async fn load_all(&self) -> Result<Vec<Question>> {
        let mut all_questions = Vec::new();
        for dir in self.pack_dirs.iter() {
            for (_, path) in pack_files(&dir.path).await? {
                all_questions.extend(load_questions_from_file(&path).await);
            }
        }
        Ok(all_questions)
    }

    pub async fn list_files(&self) -> Result<Vec<PackFile>> {
        let mut files = Vec::new();
        for dir in self.pack_dirs.iter() {
            for (filename, path) in pack_files(&dir.path).await? {
                let questions = load_questions_from_file(&path).await;
                files.push(PackFile {
                    name: filename
                        .strip_suffix(PACK_EXTENSION)
                        .unwrap_or(&filename)
                        .to_string(),
                    filename,
                    directory: dir.label.clone(),
                    question_count: questions.len(),
                });
            }
        }
        Ok(files)
    }

    pub async fn query(&self, query: &QuestionQuery) -> Result<Vec<Question>> {
        let questions = self.load_all().await?;
        Ok(query.apply(questions))
    }
}

/// Entries named `*.json` directly inside `dir`, sorted by name. Entries
/// that are not readable files are still listed; loading them logs a warning
/// and yields no records. A directory that does not exist holds no files.
async fn pack_files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let Some(filename) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !filename.ends_with(PACK_EXTENSION) {
            continue;
        }
        files.push((filename, entry.path()));
    }

    files.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(files)
}

/// Reads one pack file. Any problem with the file is logged and yields no
/// records rather than an error.
pub async fn load_questions_from_file(path: &Path) -> Vec<Question> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("Error loading {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let items = match serde_json::from_str::<JsonValue>(&content) {
        Ok(JsonValue::Array(items)) => items,
        Ok(_) => {
            tracing::warn!(
                "Error loading {}: top-level value is not an array",
                path.display()
            );
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!("Error loading {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let total = items.len();
    let questions: Vec<Question> = items.into_iter().filter_map(Question::from_value).collect();
    if questions.len() < total {
        tracing::warn!(
            "{}: dropped {} entries that are not JSON objects",
            path.display(),
            total - questions.len()
        );
    }
    questions
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionQuery {
    pub topic: Option<String>,
    pub shuffle: bool,
    pub limit: Option<i64>,
}

impl QuestionQuery {
    /// Filter by topic, then shuffle, then truncate.
    pub fn apply(&self, questions: Vec<Question>) -> Vec<Question> {
        let mut selected = match self.topic.as_deref() {
            Some(topic) if topic != ALL_TOPICS => questions
                .into_iter()
                .filter(|q| q.matches_topic(topic))
                .collect(),
            _ => questions,
        };

        if self.shuffle {
            selected.shuffle(&mut rand::thread_rng());
        }

        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            selected.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        selected
    }
}

/// Distinct topics, sorted. Records without a topic are left out.
pub fn collect_topics(questions: &[Question]) -> Vec<String> {
    questions
        .iter()
        .filter_map(Question::topic)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Per-topic counts. Records with no `topic` field are counted as
/// "Uncategorized", so the counts always sum to `questions.len()`.
pub fn topic_breakdown(questions: &[Question]) -> BTreeMap<String, usize> {
    let mut breakdown = BTreeMap::new();
    for q in questions {
        *breakdown.entry(q.breakdown_key()).or_insert(0) += 1;
    }
    breakdown
}
