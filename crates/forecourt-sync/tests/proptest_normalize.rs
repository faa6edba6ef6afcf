// SPDX-License-Identifier: Apache-2.0

use forecourt_sync::normalize_fleet_row;
use proptest::prelude::*;
use proptest::test_runner::Config;
use serde_json::Value;

fn fleet_row(id: &str, features: &str) -> Vec<Value> {
    let mut row = vec![Value::String(String::new()); 12];
    row[0] = Value::String(id.to_string());
    row[5] = Value::String(features.to_string());
    row
}

proptest! {
    #![proptest_config(Config::with_cases(128))]
    #[test]
    fn rows_of_blank_cells_are_always_discarded(
        width in 0usize..16,
        padding in "[ \t]{0,4}"
    ) {
        let row: Vec<Value> = (0..width)
            .map(|_| Value::String(padding.clone()))
            .collect();
        prop_assert!(normalize_fleet_row(&row).is_none());
    }

    #[test]
    fn feature_cells_normalize_to_trimmed_non_empty_segments(
        segments in proptest::collection::vec("[A-Za-z0-9 ]{0,8}", 0..8)
    ) {
        let raw = segments.join("|");
        let item = normalize_fleet_row(&fleet_row("car-1", &raw)).expect("row with id");
        let expected: Vec<String> = segments
            .iter()
            .map(|segment| segment.trim().to_string())
            .filter(|segment| !segment.is_empty())
            .collect();
        prop_assert_eq!(item.features, expected);
    }

    #[test]
    fn only_the_exact_marker_activates_a_row(marker in "[A-Za-z01 ]{0,6}") {
        let mut row = fleet_row("car-1", "");
        row[9] = Value::String(marker.clone());
        let item = normalize_fleet_row(&row).expect("row with id");
        prop_assert_eq!(item.active, marker.trim() == "TRUE");
    }
}
