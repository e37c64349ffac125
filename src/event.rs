//! Event types for the experiment logs.
//!
//! Events are immutable records in append-only logs. Each event captures the
//! wall-clock time at which it was recorded; user ids and variant/metric
//! names are opaque strings stored verbatim, with no validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user visiting the system under test, independent of experiment variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitEvent {
    /// Opaque user identifier (stored verbatim)
    pub user_id: String,
    /// Wall-clock time the visit was recorded
    pub timestamp: DateTime<Utc>,
}

/// A user being assigned to / shown a specific experiment variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureEvent {
    /// Opaque user identifier (stored verbatim)
    pub user_id: String,
    /// Name of the treatment arm the user was exposed to (stored verbatim)
    pub variant: String,
    /// Wall-clock time the exposure was recorded
    pub timestamp: DateTime<Utc>,
}

/// A metric observation for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricEvent {
    /// Opaque user identifier (stored verbatim)
    pub user_id: String,
    /// Metric name (stored verbatim)
    pub metric: String,
    /// Observed value
    pub value: f64,
    /// Wall-clock time the observation was recorded
    pub timestamp: DateTime<Utc>,
}

impl VisitEvent {
    /// Create a visit event stamped with the current wall-clock time.
    pub(crate) fn now(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            timestamp: Utc::now(),
        }
    }
}

impl ExposureEvent {
    /// Create an exposure event stamped with the current wall-clock time.
    pub(crate) fn now(user_id: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            variant: variant.into(),
            timestamp: Utc::now(),
        }
    }
}

impl MetricEvent {
    /// Create a metric event stamped with the current wall-clock time.
    pub(crate) fn now(user_id: impl Into<String>, metric: impl Into<String>, value: f64) -> Self {
        Self {
            user_id: user_id.into(),
            metric: metric.into(),
            value,
            timestamp: Utc::now(),
        }
    }
}
