//! Best-score persistence
//!
//! A single durable slot behind the `ScoreStore` trait. Absence and
//! corruption read as zero; saves are best-effort and never fail the run.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Durable best-score slot
pub trait ScoreStore {
    /// Stored best, or 0 when nothing usable is stored.
    fn load_best(&self) -> u64;
    /// Persist a new best. Best-effort.
    fn save_best(&mut self, best: u64);
}

/// On-disk JSON envelope
#[derive(Debug, Serialize, Deserialize)]
struct BestScoreFile {
    best: u64,
}

/// JSON-file-backed store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for JsonFileStore {
    fn load_best(&self) -> u64 {
        match fs::read_to_string(&self.path) {
            Ok(json) => match serde_json::from_str::<BestScoreFile>(&json) {
                Ok(file) => {
                    log::info!("loaded best score {}", file.best);
                    file.best
                }
                Err(err) => {
                    log::warn!("best-score file unreadable, treating as 0: {err}");
                    0
                }
            },
            Err(_) => {
                log::info!("no best-score file, starting fresh");
                0
            }
        }
    }

    fn save_best(&mut self, best: u64) {
        let json = match serde_json::to_string(&BestScoreFile { best }) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("best-score serialization failed: {err}");
                return;
            }
        };
        match fs::write(&self.path, json) {
            Ok(()) => log::info!("best score saved ({best})"),
            Err(err) => log::warn!("best-score save failed: {err}"),
        }
    }
}

/// In-memory store for tests and embeddings without a filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryStore {
    best: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u64) -> Self {
        Self { best }
    }
}

impl ScoreStore for MemoryStore {
    fn load_best(&self) -> u64 {
        self.best
    }

    fn save_best(&mut self, best: u64) {
        self.best = best;
    }
}
