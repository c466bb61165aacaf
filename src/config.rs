//! Service Configuration
//!
//! Everything the request handlers need to know about their environment is
//! resolved once at startup into a [`ServiceConfig`] and handed down through
//! the shared context. Business logic never reads the process environment.
//!
//! ## Sources
//! 1. Command-line flags (`--bind`, `--data-dir`).
//! 2. `COURSE_SEARCH_*` environment variables.
//! 3. Built-in defaults.

use anyhow::{Context, Result, anyhow};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_BIND: &str = "127.0.0.1:5000";
pub const DEFAULT_VIDEO_LIMIT: usize = 3;

const SLIDES_FILE: &str = "all_slides.jsonl";
const VIDEOS_FILE: &str = "videos.jsonl";
const QUESTIONS_FILE: &str = "questions.jsonl";
const LECTURE_KEYS_FILE: &str = "lecture_keys.jsonl";

/// How the loader treats a line that is not valid JSON for the record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// A single bad line aborts the whole load.
    #[default]
    Strict,
    /// Bad lines are logged and skipped.
    Lenient,
}

/// Locations of the four read-only datasets.
#[derive(Debug, Clone)]
pub struct DatasetPaths {
    pub slides: PathBuf,
    pub videos: PathBuf,
    pub questions: PathBuf,
    pub lecture_keys: PathBuf,
}

impl DatasetPaths {
    /// Default file names resolved inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            slides: dir.join(SLIDES_FILE),
            videos: dir.join(VIDEOS_FILE),
            questions: dir.join(QUESTIONS_FILE),
            lecture_keys: dir.join(LECTURE_KEYS_FILE),
        }
    }
}

/// Weights applied to slide fields when scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideWeights {
    pub title: u32,
    pub notes: u32,
    pub body: u32,
}

impl Default for SlideWeights {
    fn default() -> Self {
        Self {
            title: 3,
            notes: 2,
            body: 1,
        }
    }
}

/// Weights applied to video fields when scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoWeights {
    pub title: u32,
    pub keywords: u32,
    pub transcript: u32,
}

impl Default for VideoWeights {
    fn default() -> Self {
        Self {
            title: 3,
            keywords: 2,
            transcript: 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScoringConfig {
    pub slides: SlideWeights,
    pub videos: VideoWeights,
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub datasets: DatasetPaths,
    pub load_mode: LoadMode,
    pub scoring: ScoringConfig,
    /// Maximum number of video hits returned by `/search`.
    pub video_limit: usize,
    /// Reuse parsed datasets while the file's modification time is unchanged.
    pub cache_datasets: bool,
}

impl ServiceConfig {
    /// Defaults with every dataset resolved inside `dir`.
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            datasets: DatasetPaths::in_dir(dir),
            load_mode: LoadMode::Strict,
            scoring: ScoringConfig::default(),
            video_limit: DEFAULT_VIDEO_LIMIT,
            cache_datasets: false,
        }
    }

    /// Builds the configuration from the process environment and arguments.
    pub fn from_env_and_args(args: &[String]) -> Result<Self> {
        Self::from_sources(|key| std::env::var(key).ok(), args)
    }

    /// Builds the configuration from an arbitrary variable lookup, so tests
    /// can supply their own environment.
    pub fn from_sources<F>(lookup: F, args: &[String]) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut bind: Option<String> = lookup("COURSE_SEARCH_BIND");
        let mut data_dir: PathBuf = lookup("COURSE_SEARCH_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("--bind requires an address"))?;
                    bind = Some(value.clone());
                    i += 2;
                }
                "--data-dir" => {
                    let value = args
                        .get(i + 1)
                        .ok_or_else(|| anyhow!("--data-dir requires a directory"))?;
                    data_dir = PathBuf::from(value);
                    i += 2;
                }
                other => {
                    tracing::warn!("Ignoring unknown argument: {}", other);
                    i += 1;
                }
            }
        }

        let mut config = Self::with_data_dir(&data_dir);

        if let Some(bind) = bind {
            config.bind_addr = bind
                .parse()
                .with_context(|| format!("invalid bind address: {}", bind))?;
        }

        if let Some(path) = lookup("COURSE_SEARCH_SLIDES") {
            config.datasets.slides = PathBuf::from(path);
        }
        if let Some(path) = lookup("COURSE_SEARCH_VIDEOS") {
            config.datasets.videos = PathBuf::from(path);
        }
        if let Some(path) = lookup("COURSE_SEARCH_QUESTIONS") {
            config.datasets.questions = PathBuf::from(path);
        }
        if let Some(path) = lookup("COURSE_SEARCH_LECTURE_KEYS") {
            config.datasets.lecture_keys = PathBuf::from(path);
        }

        if lookup("COURSE_SEARCH_LENIENT").is_some_and(|v| is_truthy(&v)) {
            config.load_mode = LoadMode::Lenient;
        }
        config.cache_datasets = lookup("COURSE_SEARCH_CACHE").is_some_and(|v| is_truthy(&v));

        if let Some(limit) = lookup("COURSE_SEARCH_VIDEO_LIMIT") {
            config.video_limit = limit
                .trim()
                .parse()
                .with_context(|| format!("invalid COURSE_SEARCH_VIDEO_LIMIT: {}", limit))?;
        }

        if let Some(raw) = lookup("COURSE_SEARCH_SLIDE_WEIGHTS") {
            let [title, notes, body] = parse_weights(&raw)
                .with_context(|| format!("invalid COURSE_SEARCH_SLIDE_WEIGHTS: {}", raw))?;
            config.scoring.slides = SlideWeights { title, notes, body };
        }
        if let Some(raw) = lookup("COURSE_SEARCH_VIDEO_WEIGHTS") {
            let [title, keywords, transcript] = parse_weights(&raw)
                .with_context(|| format!("invalid COURSE_SEARCH_VIDEO_WEIGHTS: {}", raw))?;
            config.scoring.videos = VideoWeights {
                title,
                keywords,
                transcript,
            };
        }

        Ok(config)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Parses an `a,b,c` weight triple.
fn parse_weights(raw: &str) -> Result<[u32; 3]> {
    let parts: Vec<u32> = raw
        .split(',')
        .map(|part| part.trim().parse::<u32>())
        .collect::<Result<_, _>>()?;

    <[u32; 3]>::try_from(parts)
        .map_err(|parts| anyhow!("expected 3 comma-separated weights, got {}", parts.len()))
}
