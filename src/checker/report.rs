//! Final report rendering.
//!
//! The report mirrors what an operator wants at a glance: per-trial status
//! lines, a pass/fail verdict per phase, the sampled outputs if any, and the
//! two servers' web addresses when everything looks healthy.

use url::Url;

use crate::checker::consumer::ConsumerOutcome;
use crate::checker::producer::ProducerOutcome;

/// Aggregated result of one checker run.
#[derive(Debug, Clone)]
pub struct Report {
    pub producer: ProducerOutcome,
    pub consumer: ConsumerOutcome,
    /// Producer endpoint as configured (full URL including the API path).
    pub producer_endpoint: String,
    /// Consumer base URL as configured.
    pub consumer_base_url: String,
}

impl Report {
    /// True when both phases passed.
    pub fn all_ok(&self) -> bool {
        self.producer.ok && self.consumer.ok
    }

    /// Render the human-facing report text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("Test Results:\n");

        for trial in &self.producer.trials {
            out.push_str(&format!(
                "   Test {}: Status {}\n",
                trial.attempt + 1,
                trial.status
            ));
        }

        out.push_str(&format!(
            "   Input Server: {}\n",
            verdict(self.producer.ok, self.producer.error.as_deref())
        ));
        out.push_str(&format!(
            "   Output Server: {}\n",
            verdict(self.consumer.ok, self.consumer.error.as_deref())
        ));

        if let Some(status) = self.consumer.base_status {
            out.push_str(&format!("   Output server HTTP status: {}\n", status));
        }
        if let Some(outputs) = &self.consumer.outputs {
            out.push_str(&format!("   Current outputs: {}\n", outputs));
        } else if let Some(note) = &self.consumer.note {
            out.push_str(&format!("   {}\n", note));
        }

        if self.all_ok() {
            out.push_str("\nTopology is working correctly!\n");
            out.push_str("   You can access:\n");
            out.push_str(&format!(
                "   - Input Server Web Interface: {}\n",
                origin_of(&self.producer_endpoint)
            ));
            out.push_str(&format!(
                "   - Output Server Web Interface: {}\n",
                self.consumer_base_url
            ));
        } else {
            out.push_str("\nSome issues detected. Check the logs for details.\n");
        }

        out
    }
}

fn verdict(ok: bool, error: Option<&str>) -> String {
    match (ok, error) {
        (true, _) => "OK".to_string(),
        (false, Some(e)) => format!("FAILED ({})", e),
        (false, None) => "FAILED".to_string(),
    }
}

/// Human-facing base address of an endpoint (scheme, host, port).
fn origin_of(endpoint: &str) -> String {
    match Url::parse(endpoint) {
        Ok(url) => {
            let mut origin = format!("{}://{}", url.scheme(), url.host_str().unwrap_or(""));
            if let Some(port) = url.port() {
                origin.push_str(&format!(":{}", port));
            }
            origin
        }
        // Validation guarantees a parseable URL; fall back to the raw string.
        Err(_) => endpoint.to_string(),
    }
}
