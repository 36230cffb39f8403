//! Producer phase: push synthetic payloads at the input server.
//!
//! # Responsibilities
//! - Issue a bounded sequence of POSTs with fresh random payloads
//! - Record each trial's status code for the report
//! - Abort on the first transport error
//!
//! # Design Decisions
//! - Status codes are logged, never validated: a 4xx/5xx reply still proves
//!   the server is reachable, which is all this phase asserts
//! - No retries; a transport error fails the phase immediately

use std::time::Duration;

use crate::checker::payload::InputPayload;
use crate::config::ProducerConfig;

/// Outcome of a single trial that completed at the transport level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialResult {
    /// Zero-based trial index.
    pub attempt: usize,
    /// HTTP status code returned by the input server.
    pub status: u16,
}

/// Aggregate outcome of the producer phase.
#[derive(Debug, Clone)]
pub struct ProducerOutcome {
    /// True when every trial completed without a transport error.
    pub ok: bool,
    /// Completed trials in issue order.
    pub trials: Vec<TrialResult>,
    /// Transport error message when the phase failed.
    pub error: Option<String>,
}

pub struct ProducerCheck {
    client: reqwest::Client,
    config: ProducerConfig,
    inter_trial_delay: Duration,
}

impl ProducerCheck {
    pub fn new(client: reqwest::Client, config: ProducerConfig) -> Self {
        let inter_trial_delay = Duration::from_millis(config.inter_trial_delay_ms);
        Self {
            client,
            config,
            inter_trial_delay,
        }
    }

    /// Run the phase: one POST per trial, stopping at the first transport error.
    pub async fn run(&self) -> ProducerOutcome {
        tracing::info!(
            endpoint = %self.config.endpoint,
            trials = self.config.trials,
            payload_size = self.config.payload_size,
            "Testing input server"
        );

        let mut trials = Vec::with_capacity(self.config.trials);

        for attempt in 0..self.config.trials {
            let payload = InputPayload::generate(self.config.payload_size);

            let result = self
                .client
                .post(&self.config.endpoint)
                .json(&payload)
                .send()
                .await;

            match result {
                Ok(response) => {
                    let status = response.status().as_u16();
                    tracing::info!(attempt = attempt + 1, status, "Trial completed");
                    trials.push(TrialResult { attempt, status });
                }
                Err(e) => {
                    tracing::warn!(attempt = attempt + 1, error = %e, "Input server test failed");
                    return ProducerOutcome {
                        ok: false,
                        trials,
                        error: Some(e.to_string()),
                    };
                }
            }

            if attempt + 1 < self.config.trials {
                tokio::time::sleep(self.inter_trial_delay).await;
            }
        }

        tracing::info!("Input server test completed");
        ProducerOutcome {
            ok: true,
            trials,
            error: None,
        }
    }
}
