//! Core types and structures for domain-finder

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DomainFinderError, Result};

/// Lookup tool that confirmed a name as available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMethod {
    Whois,
    Nslookup,
}

impl std::fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckMethod::Whois => write!(f, "whois"),
            CheckMethod::Nslookup => write!(f, "nslookup"),
        }
    }
}

/// Availability check result for one candidate name
#[derive(Debug, Clone)]
pub struct DomainResult {
    /// Candidate name without the `.com` suffix
    pub name: String,
    pub available: bool,
    /// Set only when `available` is true
    pub method: Option<CheckMethod>,
    pub checked_at: DateTime<Utc>,
    pub check_duration: Duration,
}

impl DomainResult {
    pub fn full_domain(&self) -> String {
        format!("{}.com", self.name)
    }
}

/// Configuration for a finder run.
///
/// `Default` holds the values the binary always runs with.
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Names requested from the generator per batch
    pub batch_size: usize,
    /// Minimum number of distinct names to test
    pub target: usize,
    /// How many recent names are listed in the prompt as already tested
    pub history_window: usize,
    pub generator_program: String,
    pub generator_args: Vec<String>,
    pub generator_timeout: Duration,
    pub whois_timeout: Duration,
    pub nslookup_timeout: Duration,
    pub output_path: PathBuf,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            batch_size: 20,
            target: 100,
            history_window: 50,
            generator_program: "claude".to_string(),
            generator_args: vec!["-p".to_string()],
            generator_timeout: Duration::from_secs(60),
            whois_timeout: Duration::from_secs(10),
            nslookup_timeout: Duration::from_secs(5),
            output_path: PathBuf::from("domain-results.txt"),
        }
    }
}

impl FinderConfig {
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(DomainFinderError::config("batch_size must be greater than zero"));
        }
        if self.target == 0 {
            return Err(DomainFinderError::config("target must be greater than zero"));
        }
        if self.generator_program.trim().is_empty() {
            return Err(DomainFinderError::config("generator_program must not be empty"));
        }
        Ok(())
    }
}

/// Outcome of a completed finder run
#[derive(Debug, Clone)]
pub struct FinderReport {
    /// Every tested name, in discovery order
    pub tested: Vec<String>,
    /// Names whose check came back available, in discovery order
    pub available: Vec<String>,
    /// Generator calls, including ones that produced nothing
    pub batches: usize,
    pub empty_batches: usize,
    pub whois_hits: usize,
    pub nslookup_hits: usize,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl FinderReport {
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
