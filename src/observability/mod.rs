//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (tracing fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through all log events
//! - Metrics are cheap (atomic increments)
//! - The metrics exporter is opt-in via config

pub mod logging;
pub mod metrics;
