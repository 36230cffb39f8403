//! Synthetic payload generation.

use rand::Rng;
use serde::Serialize;

/// Wire shape accepted by the input server.
#[derive(Debug, Clone, Serialize)]
pub struct InputPayload {
    pub inputs: Vec<f64>,
}

impl InputPayload {
    /// Generate a fresh payload of `size` uniform samples in [0,1).
    pub fn generate(size: usize) -> Self {
        let mut rng = rand::thread_rng();
        Self {
            inputs: (0..size).map(|_| rng.gen::<f64>()).collect(),
        }
    }
}
