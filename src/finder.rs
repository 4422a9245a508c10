//! Driver loop: generate batches, check each new name, write the results

use crate::domain::AvailabilityCheck;
use crate::error::Result;
use crate::llm::NameGenerator;
use crate::report;
use crate::types::{CheckMethod, FinderConfig, FinderReport};
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Sequential generate-and-check loop
pub struct DomainFinder<G, C> {
    config: FinderConfig,
    generator: G,
    checker: C,
}

impl<G: NameGenerator, C: AvailabilityCheck> DomainFinder<G, C> {
    pub fn new(config: FinderConfig, generator: G, checker: C) -> Self {
        Self {
            config,
            generator,
            checker,
        }
    }

    /// Run until at least `target` distinct names are tested, then write the
    /// results file.
    ///
    /// A fatal generator error ends the run before anything is written.
    pub async fn run(&self) -> Result<FinderReport> {
        self.config.validate()?;

        let mut report = FinderReport {
            tested: Vec::new(),
            available: Vec::new(),
            batches: 0,
            empty_batches: 0,
            whois_hits: 0,
            nslookup_hits: 0,
            started_at: Utc::now(),
            finished_at: Utc::now(),
        };

        while report.tested.len() < self.config.target {
            report.batches += 1;

            println!();
            println!("📝 Batch {}: Generating domain ideas...", report.batches);
            let names = self.generate_batch(&report.tested).await?;

            if names.is_empty() {
                report.empty_batches += 1;
                println!("No domains generated, retrying...");
                tracing::warn!(batch = report.batches, "Empty batch");
                continue;
            }

            println!("   Generated {} new ideas", names.len());
            println!();
            println!("🔍 Testing availability...");

            for name in names {
                if report.tested.contains(&name) {
                    continue;
                }

                let result = self.checker.check_domain(&name).await;
                let status = if result.available { "✅ AVAILABLE" } else { "❌ taken" };
                println!("   {} - {}", result.full_domain(), status);

                match result.method {
                    Some(CheckMethod::Whois) => report.whois_hits += 1,
                    Some(CheckMethod::Nslookup) => report.nslookup_hits += 1,
                    None => {}
                }
                if result.available {
                    report.available.push(name.clone());
                }
                report.tested.push(name);
            }

            println!();
            println!(
                "📊 Progress: {}/{} tested, {} available",
                report.tested.len(),
                self.config.target,
                report.available.len()
            );
            tracing::info!(
                batch = report.batches,
                tested = report.tested.len(),
                available = report.available.len(),
                "Batch completed"
            );
        }

        report.finished_at = Utc::now();
        report::print_summary(&report);
        report::write_report(&report, &self.config.output_path)?;
        println!();
        println!("💾 Results saved to {}", self.config.output_path.display());

        Ok(report)
    }

    async fn generate_batch(&self, history: &[String]) -> Result<Vec<String>> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("   {spinner} {msg} ({elapsed})") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("waiting for {}", self.generator.name()));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let result = self.generator.generate(history).await;
        spinner.finish_and_clear();
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainFinderError;
    use crate::types::DomainResult;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Replays fixed batches, then repeats the last one
    struct ScriptedGenerator {
        batches: Vec<Vec<&'static str>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl NameGenerator for ScriptedGenerator {
        async fn generate(&self, _history: &[String]) -> Result<Vec<String>> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            let batch = &self.batches[call.min(self.batches.len() - 1)];
            Ok(batch.iter().map(|s| s.to_string()).collect())
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    struct MissingGenerator;

    #[async_trait]
    impl NameGenerator for MissingGenerator {
        async fn generate(&self, _history: &[String]) -> Result<Vec<String>> {
            Err(DomainFinderError::tool_missing("claude"))
        }

        fn name(&self) -> &str {
            "claude"
        }
    }

    /// Names starting with "a" are available
    struct PrefixChecker;

    #[async_trait]
    impl AvailabilityCheck for PrefixChecker {
        async fn check_domain(&self, name: &str) -> DomainResult {
            let available = name.starts_with('a');
            DomainResult {
                name: name.to_string(),
                available,
                method: available.then_some(CheckMethod::Nslookup),
                checked_at: Utc::now(),
                check_duration: Duration::ZERO,
            }
        }
    }

    fn config(target: usize, dir: &tempfile::TempDir) -> FinderConfig {
        FinderConfig {
            target,
            output_path: dir.path().join("domain-results.txt"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_duplicates_are_tested_once() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ScriptedGenerator {
            batches: vec![
                vec!["alpha", "bravo", "alpha"],
                vec!["bravo", "charlie", "delta"],
            ],
            calls: AtomicUsize::new(0),
        };
        let finder = DomainFinder::new(config(4, &dir), generator, PrefixChecker);
        let report = finder.run().await.unwrap();

        assert_eq!(report.tested, vec!["alpha", "bravo", "charlie", "delta"]);
        assert_eq!(report.available, vec!["alpha"]);
        assert_eq!(report.nslookup_hits, 1);
        assert_eq!(report.batches, 2);
    }

    #[tokio::test]
    async fn test_full_batch_overshoots_target() {
        let dir = tempfile::tempdir().unwrap();
        let generator = ScriptedGenerator {
            batches: vec![vec!["alpha", "bravo", "charlie"], vec!["delta", "echo", "foxtrot"]],
            calls: AtomicUsize::new(0),
        };
        let finder = DomainFinder::new(config(4, &dir), generator, PrefixChecker);
        let report = finder.run().await.unwrap();

        assert_eq!(report.tested.len(), 6);
        assert_eq!(report.batches, 2);
    }

    #[tokio::test]
    async fn test_fatal_generator_error_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(10, &dir);
        let path = config.output_path.clone();
        let finder = DomainFinder::new(config, MissingGenerator, PrefixChecker);

        let err = finder.run().await.unwrap_err();
        assert!(matches!(err, DomainFinderError::ToolMissing { .. }));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_invalid_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(10, &dir);
        config.batch_size = 0;
        let finder = DomainFinder::new(config, MissingGenerator, PrefixChecker);

        assert!(matches!(finder.run().await, Err(DomainFinderError::Config { .. })));
    }
}
