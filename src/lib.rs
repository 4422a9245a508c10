//! Domain Finder - generate .com name ideas with an AI CLI and check their availability
//!
//! Names come from an external text-generation tool in batches; each new name
//! is checked with `whois`, falling back to `nslookup`, and the results are
//! written to a plain-text file.

pub mod domain;
pub mod error;
pub mod finder;
pub mod llm;
pub mod process;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{DomainFinderError, Result};
pub use types::{CheckMethod, DomainResult, FinderConfig, FinderReport};

// Re-export main functionality
pub use domain::{AvailabilityCheck, DomainChecker, LookupProbe};
pub use finder::DomainFinder;
pub use llm::{CliNameGenerator, NameGenerator};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library: load `.env` if present and install the log
/// subscriber. `RUST_LOG` overrides the default `domain_finder=warn`.
/// Calling it more than once is harmless.
pub fn init() -> Result<()> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("domain_finder=warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();

    Ok(())
}
