//! # explog
//!
//! Embedded in-memory event logger for A/B experiments.
//!
//! explog records user visit, variant exposure, and metric events with
//! wall-clock timestamps, and exposes each log as an ordered table with
//! named columns for downstream analysis tooling.
//!
//! ## Quick Start
//!
//! ```
//! use explog::prelude::*;
//!
//! let mut logger = EventLogger::new();
//!
//! // Record events during live traffic or a simulation
//! logger.record_visit("u1");
//! logger.record_exposure("u1", "treatment");
//! logger.record_metric("u1", "clicks", 3.0);
//!
//! // Tabular snapshots, in insertion order
//! let exposures = logger.exposure_log();
//! assert_eq!(exposures.len(), 1);
//! assert_eq!(exposures.rows()[0][1].as_str(), Some("treatment"));
//! ```
//!
//! ## Guarantees
//!
//! - **Append-only**: events are immutable once recorded and never deleted
//! - **Insertion order**: the only ordering guarantee; no sorting by
//!   timestamp or user id
//! - **Isolation**: snapshots are deep copies, so mutating a returned
//!   [`Table`] never affects the logger
//! - **No validation**: user ids, variant names, and metric names are
//!   opaque strings stored verbatim
//!
//! ## What explog is not
//!
//! There is no persistence (logs live and die with the logger), no query or
//! aggregation layer, and no internal locking. Writes require `&mut self`;
//! wrap the logger in a `Mutex` if multiple writers need it.

#![warn(missing_docs)]

mod error;
mod event;
mod logger;
mod table;

pub mod prelude;

// Re-export main entry point
pub use logger::{EventLogger, EXPOSURE_COLUMNS, METRIC_COLUMNS, VISIT_COLUMNS};

// Re-export errors
pub use error::{Error, Result};

// Re-export event and table types
pub use event::{ExposureEvent, MetricEvent, VisitEvent};
pub use table::{Cell, Table};
