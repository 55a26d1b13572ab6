//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use question_catalog::catalog::resolve;
use question_catalog::taxonomy::{Category, format_identifier};
use tempfile::TempDir;

/// Builder for creating test question directory trees
pub struct QuestionDirBuilder {
    temp_dir: TempDir,
}

impl QuestionDirBuilder {
    /// Create a new builder with an empty base directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the base directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a record with the given raw bytes
    pub fn with_raw(self, category: Category, n: u32, bytes: &[u8]) -> Self {
        let path = resolve(self.temp_dir.path(), category, &format_identifier(category, n));
        fs::create_dir_all(path.parent().expect("record path has a parent"))
            .expect("Failed to create record dir");
        fs::write(path, bytes).expect("Failed to write question.json");
        self
    }

    /// Add a record built from a [`RecordBuilder`]
    pub fn with_record(self, category: Category, n: u32, record: RecordBuilder) -> Self {
        let json = record.to_json();
        self.with_raw(category, n, json.as_bytes())
    }

    /// Add a long-form detail document beside a record
    pub fn with_detail(self, category: Category, n: u32, content: &str) -> Self {
        let dir = self.temp_dir.path().join(category.name()).join(format_identifier(category, n));
        fs::create_dir_all(&dir).expect("Failed to create record dir");
        fs::write(dir.join("detail.md"), content).expect("Failed to write detail.md");
        self
    }

    /// Add an arbitrary file relative to the base directory
    pub fn with_file(self, relative: &str, content: &str) -> Self {
        let path = self.temp_dir.path().join(relative);
        fs::create_dir_all(path.parent().expect("file path has a parent"))
            .expect("Failed to create parent dir");
        fs::write(path, content).expect("Failed to write file");
        self
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for QuestionDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for question.json contents
pub struct RecordBuilder {
    question: Option<String>,
    tags: Option<Vec<String>>,
    difficulty: Option<serde_json::Value>,
}

impl RecordBuilder {
    /// Create a record with a question, two tags and difficulty 1
    pub fn new() -> Self {
        Self {
            question: Some("Test question".to_string()),
            tags: Some(vec!["tag1".to_string(), "tag2".to_string()]),
            difficulty: Some(serde_json::json!(1)),
        }
    }

    pub fn question(mut self, question: &str) -> Self {
        self.question = Some(question.to_string());
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Difficulty as any JSON value (number or string in practice)
    pub fn difficulty(mut self, difficulty: serde_json::Value) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn without_tags(mut self) -> Self {
        self.tags = None;
        self
    }

    pub fn without_difficulty(mut self) -> Self {
        self.difficulty = None;
        self
    }

    pub fn without_question(mut self) -> Self {
        self.question = None;
        self
    }

    /// Convert to JSON string, including unrelated fields real records carry
    pub fn to_json(&self) -> String {
        let mut object = serde_json::Map::new();
        object.insert("id".to_string(), serde_json::json!("ignored"));
        if let Some(question) = &self.question {
            object.insert("question".to_string(), serde_json::json!(question));
        }
        if let Some(tags) = &self.tags {
            object.insert("tags".to_string(), serde_json::json!(tags));
        }
        if let Some(difficulty) = &self.difficulty {
            object.insert("difficulty".to_string(), difficulty.clone());
        }
        object.insert("answer".to_string(), serde_json::json!("A long answer | with a pipe"));
        serde_json::Value::Object(object).to_string()
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create a realistic question tree with sample data
pub fn realistic_question_dir() -> TempDir {
    QuestionDirBuilder::new()
        .with_record(
            Category::Cpp,
            1,
            RecordBuilder::new().question("什么是RAII？").tags(&["C++", "资源管理"]).difficulty(
                serde_json::json!(2),
            ),
        )
        .with_record(
            Category::Cpp,
            3,
            RecordBuilder::new().question("Explain move semantics").tags(&["C++11"]),
        )
        .with_record(
            Category::Network,
            2,
            RecordBuilder::new().question("TCP三次握手").tags(&["TCP", "网络"]).difficulty(
                serde_json::json!(3),
            ),
        )
        .with_detail(Category::Network, 2, "# TCP三次握手\n")
        .with_record(Category::Behavior, 10, RecordBuilder::new().question("Why this role?"))
        .build()
}
