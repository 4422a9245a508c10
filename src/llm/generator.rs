//! Name generator backed by the `claude` CLI

use crate::error::{DomainFinderError, Result};
use crate::llm::prompt::{build_prompt, parse_candidates};
use crate::llm::NameGenerator;
use crate::process::run_tool;
use crate::types::FinderConfig;
use async_trait::async_trait;
use std::time::{Duration, Instant};

/// Runs `<program> <args..> <prompt>` and parses one name per output line
pub struct CliNameGenerator {
    program: String,
    args: Vec<String>,
    timeout: Duration,
    batch_size: usize,
    history_window: usize,
}

impl CliNameGenerator {
    pub fn new(config: &FinderConfig) -> Self {
        Self {
            program: config.generator_program.clone(),
            args: config.generator_args.clone(),
            timeout: config.generator_timeout,
            batch_size: config.batch_size,
            history_window: config.history_window,
        }
    }
}

#[async_trait]
impl NameGenerator for CliNameGenerator {
    async fn generate(&self, history: &[String]) -> Result<Vec<String>> {
        let start_time = Instant::now();
        let prompt = build_prompt(history, self.batch_size, self.history_window);

        let mut args = self.args.clone();
        args.push(prompt);

        let output = match run_tool(&self.program, &args, self.timeout).await {
            Ok(output) => output,
            Err(e @ DomainFinderError::Timeout { .. }) => {
                println!("{} CLI timed out", self.program);
                tracing::warn!(generator = %self.program, error = %e, "Name generation timed out");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        if !output.success {
            println!("{} CLI error: {}", self.program, output.stderr.trim());
            tracing::warn!(
                generator = %self.program,
                code = ?output.code,
                "Name generation exited with failure"
            );
            return Ok(Vec::new());
        }

        let names = parse_candidates(&output.stdout, history, self.batch_size);
        tracing::info!(
            generator = %self.program,
            names_count = %names.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "Name generation completed"
        );

        Ok(names)
    }

    fn name(&self) -> &str {
        &self.program
    }
}
