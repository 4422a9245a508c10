//! Plain-text results file and console summary

use crate::error::{DomainFinderError, Result};
use crate::types::FinderReport;
use std::fmt::Write as _;
use std::path::Path;

/// Render the two-section results file
pub fn render(report: &FinderReport) -> String {
    let mut out = String::from("AVAILABLE DOMAINS:\n");
    for name in &report.available {
        let _ = writeln!(out, "{}.com", name);
    }
    let _ = writeln!(out, "\nTESTED ({} total):", report.tested.len());
    for name in &report.tested {
        let _ = writeln!(out, "{}.com", name);
    }
    out
}

/// Write the results file, replacing any previous one
pub fn write_report(report: &FinderReport, path: &Path) -> Result<()> {
    std::fs::write(path, render(report)).map_err(|e| {
        DomainFinderError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;
    tracing::info!(path = %path.display(), tested = report.tested.len(), "Results written");
    Ok(())
}

/// Print the final summary to the console
pub fn print_summary(report: &FinderReport) {
    println!();
    println!("{}", "=".repeat(60));
    println!("🎉 RESULTS");
    println!("{}", "=".repeat(60));
    println!("Total tested: {}", report.tested.len());
    println!("Available domains: {}", report.available.len());
    if report.whois_hits + report.nslookup_hits > 0 {
        println!(
            "   (confirmed by whois: {}, by nslookup: {})",
            report.whois_hits, report.nslookup_hits
        );
    }
    println!("Batches: {} ({} empty)", report.batches, report.empty_batches);
    println!("Total time: {}s", report.elapsed().num_seconds());

    if report.available.is_empty() {
        println!();
        println!("😔 No available domains found");
    } else {
        println!();
        println!("✅ Available .com domains:");
        for name in &report.available {
            println!("   • {}.com", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample() -> FinderReport {
        let now = Utc::now();
        FinderReport {
            tested: vec!["fithabit".into(), "coachly".into(), "repmate".into()],
            available: vec!["coachly".into()],
            batches: 1,
            empty_batches: 0,
            whois_hits: 1,
            nslookup_hits: 0,
            started_at: now,
            finished_at: now,
        }
    }

    #[test]
    fn test_render() {
        assert_eq!(
            render(&sample()),
            "AVAILABLE DOMAINS:\ncoachly.com\n\nTESTED (3 total):\nfithabit.com\ncoachly.com\nrepmate.com\n"
        );
    }

    #[test]
    fn test_render_nothing_available() {
        let mut report = sample();
        report.available.clear();
        assert!(render(&report).starts_with("AVAILABLE DOMAINS:\n\nTESTED (3 total):\n"));
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("domain-results.txt");
        std::fs::write(&path, "stale contents that are much longer than the report itself ...").unwrap();

        write_report(&sample(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), render(&sample()));
    }

    #[test]
    fn test_write_to_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("domain-results.txt");
        let err = write_report(&sample(), &path).unwrap_err();
        assert!(matches!(err, DomainFinderError::Io { path: Some(_), .. }));
    }
}
