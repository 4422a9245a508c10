//! Lookups backed by the system `whois` and `nslookup` tools

use crate::domain::{find_pattern, LookupProbe, NSLOOKUP_AVAILABLE_PATTERNS, WHOIS_AVAILABLE_PATTERNS};
use crate::process::run_tool;
use crate::types::CheckMethod;
use async_trait::async_trait;
use std::time::Duration;

/// Runs `<program> <domain>` and looks for availability phrases in its output
#[derive(Debug, Clone)]
pub struct CommandProbe {
    program: String,
    timeout: Duration,
    patterns: &'static [&'static str],
    method: CheckMethod,
}

impl CommandProbe {
    pub fn new(
        program: impl Into<String>,
        timeout: Duration,
        patterns: &'static [&'static str],
        method: CheckMethod,
    ) -> Self {
        Self {
            program: program.into(),
            timeout,
            patterns,
            method,
        }
    }

    /// Registration-record lookup
    pub fn whois(timeout: Duration) -> Self {
        Self::new("whois", timeout, WHOIS_AVAILABLE_PATTERNS, CheckMethod::Whois)
    }

    /// Name-resolution lookup
    pub fn nslookup(timeout: Duration) -> Self {
        Self::new("nslookup", timeout, NSLOOKUP_AVAILABLE_PATTERNS, CheckMethod::Nslookup)
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl LookupProbe for CommandProbe {
    async fn probe(&self, domain: &str) -> bool {
        let output = match run_tool(&self.program, [domain], self.timeout).await {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(domain = %domain, method = %self.method, error = %e, "Lookup failed");
                return false;
            }
        };

        let combined = output.combined_lowercase();
        match find_pattern(&combined, self.patterns) {
            Some(pattern) => {
                tracing::debug!(domain = %domain, method = %self.method, pattern = %pattern, "Lookup reports unregistered");
                true
            }
            None => false,
        }
    }

    fn method(&self) -> CheckMethod {
        self.method
    }
}
