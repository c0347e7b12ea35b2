//! Prover configuration types.

use std::time::Duration;

/// Configuration for the bounded resolution search.
#[derive(Debug, Clone)]
pub struct ProverConfig {
    /// Maximum number of resolution steps (selected clause pairs)
    pub max_steps: usize,
    /// Number of candidate pairs sampled from the frontier per iteration
    pub beam_width: usize,
    /// Wall-clock bound, polled once per search iteration
    pub timeout: Duration,
}

impl Default for ProverConfig {
    fn default() -> Self {
        ProverConfig {
            max_steps: 20_000,
            beam_width: 200,
            timeout: Duration::from_secs(10),
        }
    }
}
