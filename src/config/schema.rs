//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the checker.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the connectivity checker.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CheckerConfig {
    /// Producer (input server) check settings.
    pub producer: ProducerConfig,

    /// Consumer (output server) check settings.
    pub consumer: ConsumerConfig,

    /// Timing settings shared by both phases.
    pub timing: TimingConfig,
}

/// Producer phase configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProducerConfig {
    /// Full URL accepting input payloads (e.g., "http://localhost:8001/api/inputs").
    pub endpoint: String,

    /// Number of payloads to send.
    pub trials: usize,

    /// Elements per payload.
    pub payload_size: usize,

    /// Pause between trials in milliseconds.
    pub inter_trial_delay_ms: u64,
}

impl Default for ProducerConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:8001/api/inputs".to_string(),
            trials: 5,
            payload_size: 16,
            inter_trial_delay_ms: 1000,
        }
    }
}

/// Consumer phase configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ConsumerConfig {
    /// Base URL of the output server (liveness probe target).
    pub base_url: String,

    /// Sub-path exposing the current outputs as JSON.
    pub outputs_path: String,
}

impl Default for ConsumerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8002".to_string(),
            outputs_path: "/api/outputs".to_string(),
        }
    }
}

/// Timing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Pause between the producer and consumer phases in milliseconds.
    /// Lets the external topology settle before outputs are sampled.
    pub settle_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 5,
            settle_delay_ms: 2000,
        }
    }
}
