// SPDX-License-Identifier: MPL-2.0
//! Static portal content: the timeline, the open-when letters and the quiz.
//!
//! Each collection lives in its own JSON file inside the data directory and is
//! loaded once at startup. A collection that is missing, unreadable, malformed,
//! or has a record lacking a required field degrades to an empty list; pages
//! render a placeholder instead.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const TIMELINE_FILE: &str = "timeline.json";
pub const LETTERS_FILE: &str = "letters.json";
pub const QUIZ_FILE: &str = "quiz.json";

/// One dated moment on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: String,
    pub title: String,
    pub line: String,
}

/// An open-when letter: a title on the closed card, paragraphs once opened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Letter {
    pub title: String,
    pub body: Vec<String>,
}

/// A single-choice quiz question. `answer` is expected to be one of `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    #[serde(alias = "q")]
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// The three content collections, read-only after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentStore {
    pub timeline: Vec<TimelineEntry>,
    pub letters: Vec<Letter>,
    pub quiz: Vec<QuizQuestion>,
}

impl ContentStore {
    /// Loads every collection from `data_dir`, each independently.
    pub fn load(data_dir: &Path) -> Self {
        let store = Self {
            timeline: load_collection(&data_dir.join(TIMELINE_FILE), Vec::new()),
            letters: load_collection(&data_dir.join(LETTERS_FILE), Vec::new()),
            quiz: load_collection(&data_dir.join(QUIZ_FILE), Vec::new()),
        };
        tracing::info!(
            data_dir = %data_dir.display(),
            timeline = store.timeline.len(),
            letters = store.letters.len(),
            quiz = store.quiz.len(),
            "content loaded"
        );
        store
    }
}

/// Parses `path` as a JSON array of `T`, returning `fallback` on any failure.
pub fn load_collection<T: DeserializeOwned>(path: &Path, fallback: Vec<T>) -> Vec<T> {
    match read_collection(path) {
        Ok(records) => records,
        Err(err) => {
            if path.exists() {
                tracing::warn!(path = %path.display(), error = %err, "content file ignored");
            } else {
                tracing::debug!(path = %path.display(), "content file absent");
            }
            fallback
        }
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let raw = fs::read_to_string(path)?;
    let records = serde_json::from_str(&raw)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_returns_fallback() {
        let dir = tempdir().expect("temp dir");
        let loaded: Vec<TimelineEntry> = load_collection(&dir.path().join("nope.json"), Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_file_returns_fallback() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(TIMELINE_FILE);
        fs::write(&path, "[{\"date\": \"14 Feb\",").expect("write");

        let fallback = vec![TimelineEntry {
            date: "d".into(),
            title: "t".into(),
            line: "l".into(),
        }];
        let loaded = load_collection(&path, fallback.clone());
        assert_eq!(loaded, fallback);
    }

    #[test]
    fn record_missing_a_field_fails_the_whole_collection() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(LETTERS_FILE);
        fs::write(
            &path,
            r#"[{"title": "Open when sad", "body": ["hi"]}, {"title": "Open when bored"}]"#,
        )
        .expect("write");

        let loaded: Vec<Letter> = load_collection(&path, Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn quiz_accepts_short_question_key() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(QUIZ_FILE);
        fs::write(
            &path,
            r#"[{"q": "Where did we meet?", "options": ["Cafe", "Library"], "answer": "Cafe"}]"#,
        )
        .expect("write");

        let loaded: Vec<QuizQuestion> = load_collection(&path, Vec::new());
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].question, "Where did we meet?");
        assert_eq!(loaded[0].answer, "Cafe");
    }

    #[test]
    fn store_loads_collections_independently() {
        let dir = tempdir().expect("temp dir");
        fs::write(
            dir.path().join(TIMELINE_FILE),
            r#"[{"date": "28 Aug", "title": "Official", "line": "the day"}]"#,
        )
        .expect("write timeline");
        fs::write(dir.path().join(QUIZ_FILE), "not json").expect("write quiz");

        let store = ContentStore::load(dir.path());
        assert_eq!(store.timeline.len(), 1);
        assert!(store.letters.is_empty());
        assert!(store.quiz.is_empty());
    }
}
