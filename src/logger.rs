//! The event logger.
//!
//! [`EventLogger`] owns three append-only logs: visits, exposures, and
//! metrics. Appends stamp the event with the current wall-clock time and
//! never fail; accessors return owned [`Table`] snapshots in insertion
//! order.
//!
//! ## Contract
//!
//! - Logs are append-only (no update or delete)
//! - Insertion order is the only ordering guarantee
//! - Snapshots are deep copies; mutating one never affects the logger
//! - Inputs are stored verbatim, with no validation
//!
//! ## Concurrency
//!
//! Writes go through `&mut self`, so a single logger has a single writer by
//! construction. The type is `Send`; callers that need concurrent access
//! wrap the logger in their own `Mutex` or `RwLock`.

use crate::error::{Error, Result};
use crate::event::{ExposureEvent, MetricEvent, VisitEvent};
use crate::table::{Cell, Table};

/// Default column names for the visit log.
pub const VISIT_COLUMNS: [&str; 2] = ["user_id", "visit_timestamp"];

/// Default column names for the exposure log.
pub const EXPOSURE_COLUMNS: [&str; 3] = ["user_id", "variant_name", "exposure_timestamp"];

/// Default column names for the metric log.
pub const METRIC_COLUMNS: [&str; 4] = ["user_id", "metric_name", "metric_value", "metric_timestamp"];

/// In-memory event logger for an A/B experiment.
///
/// Each logger is an independently constructed, explicitly owned object;
/// there is no process-wide instance.
///
/// # Example
///
/// ```
/// use explog::EventLogger;
///
/// let mut logger = EventLogger::new();
/// logger.record_visit("u1");
/// logger.record_exposure("u1", "treatment");
///
/// let visits = logger.visit_log();
/// assert_eq!(visits.len(), 1);
/// assert_eq!(visits.columns(), &["user_id", "visit_timestamp"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventLogger {
    visits: Vec<VisitEvent>,
    exposures: Vec<ExposureEvent>,
    metrics: Vec<MetricEvent>,
}

impl EventLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty logger with pre-reserved capacity in all three logs.
    ///
    /// Useful for simulations where the event volume is known up front.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            visits: Vec::with_capacity(capacity),
            exposures: Vec::with_capacity(capacity),
            metrics: Vec::with_capacity(capacity),
        }
    }

    // =========================================================================
    // Appends
    // =========================================================================

    /// Record a visit.
    ///
    /// Appends a [`VisitEvent`] stamped with the current wall-clock time.
    /// Any user id is accepted verbatim.
    pub fn record_visit(&mut self, user_id: impl Into<String>) {
        let event = VisitEvent::now(user_id);
        tracing::debug!(user_id = %event.user_id, "visit recorded");
        self.visits.push(event);
    }

    /// Record an exposure to an experiment variant.
    ///
    /// Appends an [`ExposureEvent`] stamped with the current wall-clock time.
    /// Both the user id and the variant name are stored verbatim.
    pub fn record_exposure(&mut self, user_id: impl Into<String>, variant: impl Into<String>) {
        let event = ExposureEvent::now(user_id, variant);
        tracing::debug!(user_id = %event.user_id, variant = %event.variant, "exposure recorded");
        self.exposures.push(event);
    }

    /// Record a metric observation.
    ///
    /// Appends a [`MetricEvent`] stamped with the current wall-clock time.
    pub fn record_metric(
        &mut self,
        user_id: impl Into<String>,
        metric: impl Into<String>,
        value: f64,
    ) {
        let event = MetricEvent::now(user_id, metric, value);
        tracing::debug!(
            user_id = %event.user_id,
            metric = %event.metric,
            value = event.value,
            "metric recorded"
        );
        self.metrics.push(event);
    }

    // =========================================================================
    // Snapshots
    // =========================================================================

    /// Snapshot of the visit log with the default column names.
    ///
    /// Rows are `(user_id, visit_timestamp)` in insertion order.
    pub fn visit_log(&self) -> Table {
        self.visit_table(&VISIT_COLUMNS)
    }

    /// Snapshot of the visit log with caller-supplied column names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnCount`] unless exactly 2 names are supplied.
    pub fn visit_log_with_columns(&self, columns: &[&str]) -> Result<Table> {
        check_width(VISIT_COLUMNS.len(), columns)?;
        Ok(self.visit_table(columns))
    }

    /// Snapshot of the exposure log with the default column names.
    ///
    /// Rows are `(user_id, variant_name, exposure_timestamp)` in insertion
    /// order.
    pub fn exposure_log(&self) -> Table {
        self.exposure_table(&EXPOSURE_COLUMNS)
    }

    /// Snapshot of the exposure log with caller-supplied column names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnCount`] unless exactly 3 names are supplied.
    pub fn exposure_log_with_columns(&self, columns: &[&str]) -> Result<Table> {
        check_width(EXPOSURE_COLUMNS.len(), columns)?;
        Ok(self.exposure_table(columns))
    }

    /// Snapshot of the metric log with the default column names.
    ///
    /// Rows are `(user_id, metric_name, metric_value, metric_timestamp)` in
    /// insertion order.
    pub fn metric_log(&self) -> Table {
        self.metric_table(&METRIC_COLUMNS)
    }

    /// Snapshot of the metric log with caller-supplied column names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ColumnCount`] unless exactly 4 names are supplied.
    pub fn metric_log_with_columns(&self, columns: &[&str]) -> Result<Table> {
        check_width(METRIC_COLUMNS.len(), columns)?;
        Ok(self.metric_table(columns))
    }

    // =========================================================================
    // Counters
    // =========================================================================

    /// Number of recorded visits.
    pub fn visit_count(&self) -> usize {
        self.visits.len()
    }

    /// Number of recorded exposures.
    pub fn exposure_count(&self) -> usize {
        self.exposures.len()
    }

    /// Number of recorded metric observations.
    pub fn metric_count(&self) -> usize {
        self.metrics.len()
    }

    /// Check if all three logs are empty.
    pub fn is_empty(&self) -> bool {
        self.visits.is_empty() && self.exposures.is_empty() && self.metrics.is_empty()
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn visit_table(&self, columns: &[&str]) -> Table {
        let rows = self
            .visits
            .iter()
            .map(|e| {
                vec![
                    Cell::Str(e.user_id.clone()),
                    Cell::Timestamp(e.timestamp),
                ]
            })
            .collect();
        Table::new(owned(columns), rows)
    }

    fn exposure_table(&self, columns: &[&str]) -> Table {
        let rows = self
            .exposures
            .iter()
            .map(|e| {
                vec![
                    Cell::Str(e.user_id.clone()),
                    Cell::Str(e.variant.clone()),
                    Cell::Timestamp(e.timestamp),
                ]
            })
            .collect();
        Table::new(owned(columns), rows)
    }

    fn metric_table(&self, columns: &[&str]) -> Table {
        let rows = self
            .metrics
            .iter()
            .map(|e| {
                vec![
                    Cell::Str(e.user_id.clone()),
                    Cell::Str(e.metric.clone()),
                    Cell::Float(e.value),
                    Cell::Timestamp(e.timestamp),
                ]
            })
            .collect();
        Table::new(owned(columns), rows)
    }
}

fn check_width(expected: usize, columns: &[&str]) -> Result<()> {
    if columns.len() != expected {
        return Err(Error::ColumnCount {
            expected,
            got: columns.len(),
        });
    }
    Ok(())
}

fn owned(columns: &[&str]) -> Vec<String> {
    columns.iter().map(|c| c.to_string()).collect()
}
