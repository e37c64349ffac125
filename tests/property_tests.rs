//! Property tests for the event logger.
//!
//! Checks the append/snapshot contract over arbitrary inputs: row counts
//! equal append counts, fields survive verbatim, insertion order holds.

use explog::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn visit_rows_match_appends_in_order(user_ids in prop::collection::vec(".*", 0..64)) {
        let mut logger = EventLogger::new();
        for id in &user_ids {
            logger.record_visit(id.clone());
        }

        let table = logger.visit_log();
        prop_assert_eq!(table.len(), user_ids.len());
        for (row, id) in table.rows().iter().zip(&user_ids) {
            prop_assert_eq!(row[0].as_str(), Some(id.as_str()));
        }
    }

    #[test]
    fn exposure_fields_survive_verbatim(
        pairs in prop::collection::vec((".*", ".*"), 0..64)
    ) {
        let mut logger = EventLogger::new();
        for (id, variant) in &pairs {
            logger.record_exposure(id.clone(), variant.clone());
        }

        let table = logger.exposure_log();
        prop_assert_eq!(table.len(), pairs.len());
        for (row, (id, variant)) in table.rows().iter().zip(&pairs) {
            prop_assert_eq!(row[0].as_str(), Some(id.as_str()));
            prop_assert_eq!(row[1].as_str(), Some(variant.as_str()));
        }
    }

    #[test]
    fn metric_values_survive_exactly(
        entries in prop::collection::vec(("[a-z]{1,8}", "[a-z]{1,8}", -1e9f64..1e9), 0..64)
    ) {
        let mut logger = EventLogger::new();
        for (id, metric, value) in &entries {
            logger.record_metric(id.clone(), metric.clone(), *value);
        }

        let table = logger.metric_log();
        prop_assert_eq!(table.len(), entries.len());
        for (row, (_, _, value)) in table.rows().iter().zip(&entries) {
            prop_assert_eq!(row[2].as_float(), Some(*value));
        }
    }

    #[test]
    fn timestamps_are_nondecreasing(n in 0usize..32) {
        let mut logger = EventLogger::new();
        for i in 0..n {
            logger.record_visit(format!("u{i}"));
        }

        let table = logger.visit_log();
        let stamps: Vec<_> = table
            .rows()
            .iter()
            .map(|row| row[1].as_timestamp().unwrap())
            .collect();
        for pair in stamps.windows(2) {
            prop_assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn snapshots_are_isolated(user_ids in prop::collection::vec("[a-z]{1,8}", 1..32)) {
        let mut logger = EventLogger::new();
        for id in &user_ids {
            logger.record_visit(id.clone());
        }

        let mut snapshot = logger.visit_log();
        snapshot.rows_mut().clear();

        prop_assert_eq!(logger.visit_log().len(), user_ids.len());
    }
}
