use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;
use tracing::{debug, warn};

/// `git log` record layout: hash, author name, author email, subject.
pub const LOG_FORMAT: &str = "%H|%an|%ae|%s";

pub const DEFAULT_MAX_COUNT: usize = 100;

/// Raw history text, or a marker that no history could be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    Text(String),
    Unavailable,
}

impl LogOutput {
    /// Collapses `Unavailable` to empty text, which parses to zero commits.
    pub fn into_text(self) -> String {
        match self {
            LogOutput::Text(text) => text,
            LogOutput::Unavailable => String::new(),
        }
    }
}

/// Somewhere commit history text can be read from.
pub trait LogSource {
    fn fetch(&self) -> Result<LogOutput>;
}

/// Runs `git log` in a repository.
///
/// Never fails: a missing binary, a non-repository path or a non-zero exit
/// all come back as [`LogOutput::Unavailable`].
#[derive(Debug, Clone)]
pub struct GitLog {
    repo_path: PathBuf,
    max_count: usize,
    progress: bool,
}

impl GitLog {
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
            max_count: DEFAULT_MAX_COUNT,
            progress: false,
        }
    }

    pub fn with_max_count(mut self, max_count: usize) -> Self {
        self.max_count = max_count;
        self
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn args(&self) -> Vec<String> {
        vec![
            "log".to_string(),
            format!("--pretty=format:{LOG_FORMAT}"),
            "--all".to_string(),
            format!("-{}", self.max_count),
        ]
    }

    fn spinner(&self) -> Option<ProgressBar> {
        if !self.progress {
            return None;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading git history...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}

impl LogSource for GitLog {
    fn fetch(&self) -> Result<LogOutput> {
        let pb = self.spinner();
        let output = Command::new("git")
            .args(self.args())
            .current_dir(&self.repo_path)
            .output();
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        match output {
            Ok(out) if out.status.success() => {
                let text = String::from_utf8_lossy(&out.stdout).into_owned();
                debug!(repo = %self.repo_path.display(), bytes = text.len(), "read git log");
                Ok(LogOutput::Text(text))
            }
            Ok(out) => {
                let stderr = String::from_utf8_lossy(&out.stderr);
                warn!(
                    repo = %self.repo_path.display(),
                    status = %out.status,
                    stderr = %stderr.trim(),
                    "git log failed, treating history as empty"
                );
                Ok(LogOutput::Unavailable)
            }
            Err(e) => {
                warn!(%e, "could not run git, treating history as empty");
                Ok(LogOutput::Unavailable)
            }
        }
    }
}

/// Reads previously captured `git log` output from a file.
#[derive(Debug, Clone)]
pub struct LogFile {
    path: PathBuf,
}

impl LogFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl LogSource for LogFile {
    fn fetch(&self) -> Result<LogOutput> {
        let text = std::fs::read_to_string(&self.path)?;
        debug!(path = %self.path.display(), bytes = text.len(), "read log file");
        Ok(LogOutput::Text(text))
    }
}

/// History text already in memory.
#[derive(Debug, Clone, Default)]
pub struct TextLog(pub String);

impl TextLog {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl LogSource for TextLog {
    fn fetch(&self) -> Result<LogOutput> {
        Ok(LogOutput::Text(self.0.clone()))
    }
}
