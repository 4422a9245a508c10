//! Domain availability checker

use crate::domain::{AvailabilityCheck, CommandProbe, LookupProbe};
use crate::types::{DomainResult, FinderConfig};
use async_trait::async_trait;
use chrono::Utc;
use std::time::Instant;

/// Primary lookup with a fallback that only runs when the primary does
/// not affirm availability
pub struct DomainChecker {
    primary: Box<dyn LookupProbe>,
    fallback: Box<dyn LookupProbe>,
}

impl DomainChecker {
    /// `whois` first, then `nslookup`
    pub fn new(config: &FinderConfig) -> Self {
        Self::with_probes(
            Box::new(CommandProbe::whois(config.whois_timeout)),
            Box::new(CommandProbe::nslookup(config.nslookup_timeout)),
        )
    }

    pub fn with_probes(primary: Box<dyn LookupProbe>, fallback: Box<dyn LookupProbe>) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl AvailabilityCheck for DomainChecker {
    async fn check_domain(&self, name: &str) -> DomainResult {
        let start_time = Instant::now();
        let domain = format!("{}.com", name);

        let method = if self.primary.probe(&domain).await {
            Some(self.primary.method())
        } else if self.fallback.probe(&domain).await {
            Some(self.fallback.method())
        } else {
            None
        };

        let duration = start_time.elapsed();
        tracing::debug!(
            domain = %domain,
            available = method.is_some(),
            method = ?method,
            duration_ms = %duration.as_millis(),
            "Domain check completed"
        );

        DomainResult {
            name: name.to_string(),
            available: method.is_some(),
            method,
            checked_at: Utc::now(),
            check_duration: duration,
        }
    }
}
