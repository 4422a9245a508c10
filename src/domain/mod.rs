//! Domain availability checking module

pub mod checker;
pub mod probe;

pub use checker::DomainChecker;
pub use probe::CommandProbe;

use crate::types::{CheckMethod, DomainResult};
use async_trait::async_trait;

/// Registration lookup phrases meaning "no record for this name".
/// Matched as lowercase substrings, in this order.
pub const WHOIS_AVAILABLE_PATTERNS: &[&str] = &[
    "no match",
    "not found",
    "no entries found",
    "no data found",
    "domain not found",
    "no whois data",
];

/// Resolver phrases meaning the name does not resolve
pub const NSLOOKUP_AVAILABLE_PATTERNS: &[&str] = &["nxdomain", "can't find"];

/// First pattern contained in already-lowercased `output`
pub fn find_pattern<'a>(output: &str, patterns: &[&'a str]) -> Option<&'a str> {
    patterns.iter().copied().find(|p| output.contains(p))
}

/// A single lookup that can affirm a `.com` name is unregistered.
///
/// `false` covers both "registered" and "could not tell".
#[async_trait]
pub trait LookupProbe: Send + Sync {
    async fn probe(&self, domain: &str) -> bool;

    fn method(&self) -> CheckMethod;
}

/// Availability check for a bare candidate name
#[async_trait]
pub trait AvailabilityCheck: Send + Sync {
    async fn check_domain(&self, name: &str) -> DomainResult;

    async fn is_available(&self, name: &str) -> bool {
        self.check_domain(name).await.available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whois_phrases_pinned() {
        assert_eq!(
            WHOIS_AVAILABLE_PATTERNS,
            &[
                "no match",
                "not found",
                "no entries found",
                "no data found",
                "domain not found",
                "no whois data",
            ]
        );
    }

    #[test]
    fn test_nslookup_phrases_pinned() {
        assert_eq!(NSLOOKUP_AVAILABLE_PATTERNS, &["nxdomain", "can't find"]);
    }

    #[test]
    fn test_find_pattern() {
        let output = "no match for \"fithabit.com\".\n>>> last update of whois database";
        assert_eq!(find_pattern(output, WHOIS_AVAILABLE_PATTERNS), Some("no match"));

        let output = "** server can't find fithabit.com: nxdomain";
        assert_eq!(find_pattern(output, NSLOOKUP_AVAILABLE_PATTERNS), Some("nxdomain"));

        let output = "domain name: google.com\nregistrar: markmonitor inc.";
        assert_eq!(find_pattern(output, WHOIS_AVAILABLE_PATTERNS), None);
    }
}
