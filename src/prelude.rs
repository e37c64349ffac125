//! Convenient imports for explog.
//!
//! Re-exports the most commonly used types so you can get started with a
//! single import:
//!
//! ```
//! use explog::prelude::*;
//!
//! let mut logger = EventLogger::new();
//! logger.record_visit("u1");
//! ```

// Main entry point
pub use crate::logger::EventLogger;

// Error handling
pub use crate::error::{Error, Result};

// Table types
pub use crate::table::{Cell, Table};

// Event types
pub use crate::event::{ExposureEvent, MetricEvent, VisitEvent};
