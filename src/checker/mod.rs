//! Connectivity checking subsystem.
//!
//! # Data Flow
//! ```text
//! Producer phase (producer.rs):
//!     POST random payloads to the input server
//!     → record per-trial status codes
//!     → transport error aborts the phase
//!
//! settle delay
//!
//! Consumer phase (consumer.rs):
//!     GET output server base URL (liveness)
//!     → GET outputs sub-path (best effort)
//!
//! Report (report.rs):
//!     both outcomes → rendered text
//! ```
//!
//! # Design Decisions
//! - Strictly sequential: two phases, one settle pause, no parallelism
//! - Phase verdicts are independent; both are always produced
//! - Transport errors stop at the phase boundary, never propagate out

pub mod consumer;
pub mod payload;
pub mod producer;
pub mod report;

use std::time::Duration;

use crate::checker::consumer::ConsumerCheck;
use crate::checker::producer::ProducerCheck;
use crate::checker::report::Report;
use crate::config::CheckerConfig;

pub use consumer::ConsumerOutcome;
pub use producer::{ProducerOutcome, TrialResult};

/// Two-phase connectivity checker against the input and output servers.
pub struct ConnectivityChecker {
    config: CheckerConfig,
    client: reqwest::Client,
}

impl ConnectivityChecker {
    /// Build a checker. Fails only if the HTTP client cannot be constructed.
    pub fn new(config: CheckerConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timing.request_timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    /// Run both phases in order and aggregate the report.
    pub async fn run(&self) -> Report {
        let producer = ProducerCheck::new(self.client.clone(), self.config.producer.clone());
        let producer_outcome = producer.run().await;

        tokio::time::sleep(Duration::from_millis(self.config.timing.settle_delay_ms)).await;

        let consumer = ConsumerCheck::new(self.client.clone(), self.config.consumer.clone());
        let consumer_outcome = consumer.run().await;

        Report {
            producer: producer_outcome,
            consumer: consumer_outcome,
            producer_endpoint: self.config.producer.endpoint.clone(),
            consumer_base_url: self.config.consumer.base_url.clone(),
        }
    }
}
