//! Domain Finder - generate .com name ideas and check their availability
//!
//! Takes no arguments. Needs the `claude`, `whois` and `nslookup` tools on
//! the PATH and writes `domain-results.txt` in the current directory.

use anyhow::Context;
use domain_finder::{CliNameGenerator, DomainChecker, DomainFinder, DomainFinderError, FinderConfig};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = domain_finder::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    if let Err(e) = run().await {
        match e.downcast_ref::<DomainFinderError>() {
            Some(err) => eprintln!("{}", err.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    println!("{}", "=".repeat(60));
    println!("🔍 Domain Name Finder for Habits App v{}", domain_finder::VERSION);
    println!("{}", "=".repeat(60));

    let config = FinderConfig::default();
    let generator = CliNameGenerator::new(&config);
    let checker = DomainChecker::new(&config);
    let finder = DomainFinder::new(config, generator, checker);

    let report = finder.run().await.context("domain search aborted")?;
    tracing::info!(
        tested = report.tested.len(),
        available = report.available.len(),
        "Run finished"
    );

    Ok(())
}
