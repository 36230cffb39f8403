//! Consumer phase: probe the output server and sample its outputs.
//!
//! # Responsibilities
//! - Liveness probe against the output server's base URL
//! - Best-effort fetch of the current outputs JSON
//!
//! # Design Decisions
//! - Only the base probe decides the phase verdict; the outputs fetch is
//!   advisory ("no data yet" is a normal state while the topology warms up)
//! - The outputs body is surfaced as raw JSON; its shape is owned by the
//!   output server, not by this tool

use serde_json::Value;

use crate::config::ConsumerConfig;

/// Aggregate outcome of the consumer phase.
#[derive(Debug, Clone)]
pub struct ConsumerOutcome {
    /// True when the base-URL probe completed at the transport level.
    pub ok: bool,
    /// Status code of the base-URL probe, when it completed.
    pub base_status: Option<u16>,
    /// Decoded outputs body, when the outputs path returned 200 with valid JSON.
    pub outputs: Option<Value>,
    /// Why no outputs are shown, when `outputs` is `None`.
    pub note: Option<String>,
    /// Transport error message when the phase failed.
    pub error: Option<String>,
}

pub struct ConsumerCheck {
    client: reqwest::Client,
    config: ConsumerConfig,
}

impl ConsumerCheck {
    pub fn new(client: reqwest::Client, config: ConsumerConfig) -> Self {
        Self { client, config }
    }

    /// Run the phase: liveness probe, then best-effort outputs fetch.
    pub async fn run(&self) -> ConsumerOutcome {
        tracing::info!(base_url = %self.config.base_url, "Monitoring output server");

        let base_status = match self.client.get(&self.config.base_url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::info!(status, "Output server responded");
                status
            }
            Err(e) => {
                tracing::warn!(error = %e, "Output server test failed");
                return ConsumerOutcome {
                    ok: false,
                    base_status: None,
                    outputs: None,
                    note: None,
                    error: Some(e.to_string()),
                };
            }
        };

        let (outputs, note) = self.fetch_outputs().await;

        tracing::info!("Output server test completed");
        ConsumerOutcome {
            ok: true,
            base_status: Some(base_status),
            outputs,
            note,
            error: None,
        }
    }

    /// Fetch the outputs sub-path. Never fails the phase: any status other
    /// than 200, and any transport or decode error, becomes a note.
    async fn fetch_outputs(&self) -> (Option<Value>, Option<String>) {
        let url = format!("{}{}", self.config.base_url, self.config.outputs_path);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Output API not reachable");
                return (
                    None,
                    Some("Output API not available or no data yet".to_string()),
                );
            }
        };

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return (
                None,
                Some(format!(
                    "No outputs available yet (status: {})",
                    status.as_u16()
                )),
            );
        }

        match response.json::<Value>().await {
            Ok(body) => (Some(body), None),
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Output body was not valid JSON");
                (
                    None,
                    Some("Output API not available or no data yet".to_string()),
                )
            }
        }
    }
}
