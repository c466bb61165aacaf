//! Shared fixtures: small on-disk datasets in a temporary directory.

use crate::config::ServiceConfig;
use crate::dataset::DatasetCatalog;
use crate::server::AppContext;

use serde_json::{Value, json};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

pub fn write_lines(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

pub fn write_jsonl(dir: &Path, name: &str, records: &[Value]) -> PathBuf {
    let lines: Vec<String> = records.iter().map(Value::to_string).collect();
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    write_lines(dir, name, &refs)
}

/// "graph" hits L1 slides 2, 3 and 5 (not 1 or 4) and "Lecture 3" slide 7.
pub fn sample_slides() -> Vec<Value> {
    vec![
        json!({"lecture": "L1", "slide_number": 1, "slide_title": "Welcome", "slide_text": "course logistics", "presenter_notes": ""}),
        json!({"lecture": "L1", "slide_number": 2, "slide_title": "Graph basics", "slide_text": "vertices and edges", "presenter_notes": ""}),
        json!({"lecture": "L1", "slide_number": 3, "slide_title": "Paths", "slide_text": "shortest path in a graph", "presenter_notes": ""}),
        json!({"lecture": "L1", "slide_number": 4, "slide_title": "Break", "slide_text": "", "presenter_notes": ""}),
        json!({"lecture": "L1", "slide_number": 5, "slide_title": "Recap", "slide_text": "", "presenter_notes": "graph traversal recap"}),
        json!({"lecture": "L2", "slide_number": 1, "slide_title": "Hashing", "slide_text": "hash tables", "presenter_notes": ""}),
        json!({"lecture": "L2", "slide_number": 2, "slide_title": "Collisions", "slide_text": "open addressing", "presenter_notes": "chaining"}),
        json!({"lecture": "Lecture 3", "slide_number": 7, "slide_title": "DFS", "full_text": "depth-first search on a Graph"}),
    ]
}

/// Scores for "graph": Graph Algorithms 5, Trees and Graphs 4,
/// Graph Coloring 3, Hash Tables 1, Intro 0.
pub fn sample_videos() -> Vec<Value> {
    vec![
        json!({"title": "Hash Tables", "url": "https://videos.example/hash", "transcript": "we build a graph of collisions", "keywords": "hashing"}),
        json!({"title": "Graph Algorithms", "url": "https://videos.example/graphs", "transcript": "bfs and dfs", "keywords": "graphs, search"}),
        json!({"title": "Intro", "url": "https://videos.example/intro", "transcript": "welcome", "keywords": ""}),
        json!({"title": "Trees and Graphs", "url": "https://videos.example/trees", "transcript": "a tree is a graph", "keywords": ["trees"]}),
        json!({"title": "Graph Coloring", "url": "https://videos.example/coloring", "transcript": "", "keywords": []}),
    ]
}

pub fn sample_questions() -> Vec<Value> {
    vec![
        json!({"assignment": "HW1", "question_number": "1", "type": "normal", "prompt": "Define a graph."}),
        json!({"assignment": "HW1", "question_number": "3-5", "type": "matching", "matches": [["BFS", "queue"], ["DFS", "stack"], ["Dijkstra", "heap"]]}),
        json!({"assignment": "HW1", "question_number": "6-8", "type": "matching", "matches": [["Prim", "MST"]]}),
        json!({"assignment": "HW1", "question_number": "4", "type": "normal", "prompt": "Shadowed duplicate"}),
        json!({"assignment": "HW2", "question_number": "x-y", "type": "normal"}),
        json!({"assignment": "HW2", "question_number": 2, "type": "normal", "prompt": "Numeric label"}),
        json!({"assignment": "HW2", "question_number": "10-12", "type": "normal"}),
    ]
}

pub fn sample_lecture_keys() -> Vec<Value> {
    vec![
        json!({"lectures": ["Lecture 1", "Lecture 02"], "review": "Review A", "exam": "Midterm"}),
        json!({"lectures": "Lecture 2b", "review": "Review B", "exam": "Midterm"}),
        json!({"lectures": [5, "06"], "review": "Review C", "exam": "Final", "room": "B-204"}),
    ]
}

/// A temporary data directory holding all four sample datasets.
pub struct Fixture {
    pub dir: TempDir,
    pub config: ServiceConfig,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let config = ServiceConfig::with_data_dir(dir.path());

        write_jsonl(dir.path(), "all_slides.jsonl", &sample_slides());
        write_jsonl(dir.path(), "videos.jsonl", &sample_videos());
        write_jsonl(dir.path(), "questions.jsonl", &sample_questions());
        write_jsonl(dir.path(), "lecture_keys.jsonl", &sample_lecture_keys());

        Self { dir, config }
    }

    pub fn catalog(&self) -> DatasetCatalog {
        DatasetCatalog::from_config(&self.config)
    }

    pub fn context(&self) -> Arc<AppContext> {
        Arc::new(AppContext::new(self.config.clone()))
    }
}
