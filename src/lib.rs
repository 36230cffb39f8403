//! Topology Connectivity Checker
//!
//! A smoke-check CLI for a distributed neural-network topology reachable over
//! plain HTTP. One run performs two sequential phases:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 CONNECTIVITY CHECKER                      │
//! │                                                           │
//! │  ┌──────────┐   POST {"inputs": [...]}   ┌─────────────┐ │
//! │  │ producer │──────────────────────────▶ │input server │ │
//! │  │  phase   │        × trials            │   :8001     │ │
//! │  └──────────┘                            └─────────────┘ │
//! │       │ settle delay                                      │
//! │       ▼                                                   │
//! │  ┌──────────┐   GET /  +  GET /api/outputs ┌───────────┐ │
//! │  │ consumer │────────────────────────────▶ │  output   │ │
//! │  │  phase   │                              │  server   │ │
//! │  └──────────┘                              │   :8002   │ │
//! │       │                                    └───────────┘ │
//! │       ▼                                                   │
//! │  ┌──────────┐                                             │
//! │  │  report  │  per-phase pass/fail, sampled outputs       │
//! │  └──────────┘                                             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Both servers are external collaborators; this crate only drives HTTP
//! against them and reports what it saw. Phase failures never change the
//! process exit code.

pub mod checker;
pub mod config;

pub use checker::report::Report;
pub use checker::ConnectivityChecker;
pub use config::CheckerConfig;
