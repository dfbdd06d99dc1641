//! Persistent score history.
//!
//! Every finished session appends one record; the all-time best is the
//! maximum over the whole history.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("score file i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("malformed score record on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not encode score record: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type ScoreResult<T> = Result<T, ScoreError>;

pub trait ScoreStore {
    /// Append a finished session's score, creating the store if needed.
    fn record_score(&mut self, score: u32) -> ScoreResult<()>;

    /// Best score ever recorded, or 0 when there is none.
    fn highest_score(&self) -> ScoreResult<u32>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: u64,
    pub score: u32,
    /// Unix timestamp (seconds)
    pub recorded_at: u64,
}

/// JSON Lines file, one [`ScoreRecord`] per line.
#[derive(Debug, Clone)]
pub struct JsonScoreStore {
    path: PathBuf,
}

impl JsonScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in file order. A missing file is an empty history.
    pub fn records(&self) -> ScoreResult<Vec<ScoreRecord>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|source| ScoreError::Parse {
                    line: i + 1,
                    source,
                })
            })
            .collect()
    }
}

impl ScoreStore for JsonScoreStore {
    fn record_score(&mut self, score: u32) -> ScoreResult<()> {
        let id = self
            .records()?
            .iter()
            .map(|r| r.id)
            .max()
            .map_or(1, |last| last + 1);
        let recorded_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let line = serde_json::to_string(&ScoreRecord {
            id,
            score,
            recorded_at,
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;

        log::info!("recorded score {score} as #{id} in {}", self.path.display());
        Ok(())
    }

    fn highest_score(&self) -> ScoreResult<u32> {
        Ok(self
            .records()?
            .iter()
            .map(|r| r.score)
            .max()
            .unwrap_or(0))
    }
}

/// Stores for exercising the game loop without touching the disk
#[cfg(test)]
pub mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shares its history with clones so a test can inspect what the game wrote
    #[derive(Debug, Clone, Default)]
    pub struct MemoryScoreStore {
        pub scores: Rc<RefCell<Vec<u32>>>,
    }

    impl ScoreStore for MemoryScoreStore {
        fn record_score(&mut self, score: u32) -> ScoreResult<()> {
            self.scores.borrow_mut().push(score);
            Ok(())
        }

        fn highest_score(&self) -> ScoreResult<u32> {
            Ok(self.scores.borrow().iter().copied().max().unwrap_or(0))
        }
    }

    #[derive(Debug, Clone, Copy, Default)]
    pub struct FailingScoreStore;

    impl ScoreStore for FailingScoreStore {
        fn record_score(&mut self, _score: u32) -> ScoreResult<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
        }

        fn highest_score(&self) -> ScoreResult<u32> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }
}
