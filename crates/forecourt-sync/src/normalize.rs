// SPDX-License-Identifier: Apache-2.0

use forecourt_model::CatalogItem;
use serde_json::Value;
use std::collections::BTreeMap;

/// Fleet tab column order, columns A through L. The header row in the
/// sheet carries these names; position is what binds a cell to a field.
pub const FLEET_COLUMNS: [&str; 12] = [
    "id",
    "category",
    "name",
    "price",
    "unit",
    "features",
    "badge",
    "imagePublicId",
    "imageAlt",
    "active",
    "createdAt",
    "updatedAt",
];

/// Collapse one untyped cell to canonical text. Strings are trimmed,
/// numbers and booleans are rendered, everything else becomes empty.
fn cell_text(row: &[Value], index: usize) -> String {
    match row.get(index) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(_) => String::new(),
    }
}

fn split_features(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// One fleet row to a catalog item. `None` discards the row: either every
/// cell is empty after coercion, or the id cell is, which would break the
/// published uniqueness contract. A discarded row never aborts the run.
#[must_use]
pub fn normalize_fleet_row(row: &[Value]) -> Option<CatalogItem> {
    let cells: Vec<String> = (0..FLEET_COLUMNS.len())
        .map(|index| cell_text(row, index))
        .collect();
    if cells.iter().all(String::is_empty) {
        return None;
    }
    if cells[0].is_empty() {
        return None;
    }
    let badge = (!cells[6].is_empty()).then(|| cells[6].clone());
    let image_public_id = (!cells[7].is_empty()).then(|| cells[7].clone());
    Some(CatalogItem {
        id: cells[0].clone(),
        category: cells[1].clone(),
        name: cells[2].clone(),
        price: cells[3].clone(),
        unit: cells[4].clone(),
        features: split_features(&cells[5]),
        badge,
        image_public_id,
        image: None,
        image_alt: cells[8].clone(),
        // Only the exact marker publishes a visible car.
        active: cells[9] == "TRUE",
    })
}

/// Settings rows are raw (key, value) pairs with no header row. Rows with
/// an empty key are skipped; a key appearing twice keeps its last value.
#[must_use]
pub fn normalize_settings_rows(rows: &[Vec<Value>]) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();
    for row in rows {
        let key = cell_text(row, 0);
        if key.is_empty() {
            continue;
        }
        entries.insert(key, cell_text(row, 1));
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(cells: &[Value]) -> Vec<Value> {
        cells.to_vec()
    }

    #[test]
    fn column_layout_is_twelve_wide_with_image_public_id_at_h() {
        assert_eq!(FLEET_COLUMNS.len(), 12);
        assert_eq!(FLEET_COLUMNS[0], "id");
        assert_eq!(FLEET_COLUMNS[7], "imagePublicId");
        assert_eq!(FLEET_COLUMNS[9], "active");
    }

    #[test]
    fn fully_empty_row_is_discarded() {
        assert!(normalize_fleet_row(&[]).is_none());
        let blank = vec![json!(""); 12];
        assert!(normalize_fleet_row(&blank).is_none());
        let nulls = row(&[Value::Null, Value::Null, Value::Null]);
        assert!(normalize_fleet_row(&nulls).is_none());
    }

    #[test]
    fn whitespace_only_cells_count_as_empty() {
        let padded = row(&[json!("   "), json!("\t"), json!(" \n ")]);
        assert!(normalize_fleet_row(&padded).is_none());
    }

    #[test]
    fn row_without_id_is_discarded_even_when_named() {
        let cells = row(&[json!(""), json!("SUV"), json!("Trail Runner")]);
        assert!(normalize_fleet_row(&cells).is_none());
    }

    #[test]
    fn active_requires_the_exact_upper_case_marker() {
        for (raw, expected) in [
            ("TRUE", true),
            ("  TRUE ", true),
            ("true", false),
            ("True", false),
            ("1", false),
            ("yes", false),
            ("", false),
            ("FALSE", false),
        ] {
            let mut cells = vec![json!("eco-1")];
            cells.resize(9, json!(""));
            cells.push(json!(raw));
            let item = normalize_fleet_row(&cells).expect("row with id");
            assert_eq!(item.active, expected, "marker {raw:?}");
        }
    }

    #[test]
    fn features_split_on_pipe_trimming_and_dropping_empty_segments() {
        let cells = row(&[
            json!("eco-1"),
            json!("Economy"),
            json!("Sprint Hatch"),
            json!("250"),
            json!("MAD/day"),
            json!(" Automatic |A/C|  5 seats |"),
        ]);
        let item = normalize_fleet_row(&cells).expect("row");
        assert_eq!(item.features, vec!["Automatic", "A/C", "5 seats"]);
    }

    #[test]
    fn pipe_only_features_cell_yields_no_features() {
        let cells = row(&[json!("eco-1"), json!(""), json!(""), json!(""), json!(""), json!("|||")]);
        let item = normalize_fleet_row(&cells).expect("row");
        assert!(item.features.is_empty());
    }

    #[test]
    fn numeric_and_boolean_cells_coerce_to_text() {
        let cells = row(&[
            json!(7),
            json!("Economy"),
            json!("City Car"),
            json!(250),
            json!(""),
            json!(""),
            json!(""),
            json!(""),
            json!(""),
            json!(true),
        ]);
        let item = normalize_fleet_row(&cells).expect("row");
        assert_eq!(item.id, "7");
        assert_eq!(item.price, "250");
        // Boolean true renders as lowercase text, which is not the marker.
        assert!(!item.active);
    }

    #[test]
    fn empty_badge_and_public_id_become_none() {
        let mut cells = vec![json!("eco-1")];
        cells.resize(12, json!(" "));
        let item = normalize_fleet_row(&cells).expect("row");
        assert_eq!(item.badge, None);
        assert_eq!(item.image_public_id, None);
        assert_eq!(item.image, None);
    }

    #[test]
    fn present_badge_and_public_id_are_kept_trimmed() {
        let cells = row(&[
            json!("suv-2"),
            json!("SUV"),
            json!("Trail Runner"),
            json!("600"),
            json!("MAD/day"),
            json!("4x4"),
            json!(" Popular "),
            json!(" fleet/suv-2 "),
            json!("Grey SUV on gravel"),
            json!("TRUE"),
        ]);
        let item = normalize_fleet_row(&cells).expect("row");
        assert_eq!(item.badge.as_deref(), Some("Popular"));
        assert_eq!(item.image_public_id.as_deref(), Some("fleet/suv-2"));
        assert_eq!(item.image_alt, "Grey SUV on gravel");
        assert!(item.active);
    }

    #[test]
    fn settings_rows_skip_empty_keys_and_keep_last_duplicate() {
        let rows = vec![
            row(&[json!(" name "), json!(" Acme Cars ")]),
            row(&[json!(""), json!("orphan value")]),
            row(&[json!("email"), json!("first@example.com")]),
            row(&[json!("email"), json!("second@example.com")]),
            row(&[json!("hours")]),
        ];
        let entries = normalize_settings_rows(&rows);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries.get("name").map(String::as_str), Some("Acme Cars"));
        assert_eq!(
            entries.get("email").map(String::as_str),
            Some("second@example.com")
        );
        assert_eq!(entries.get("hours").map(String::as_str), Some(""));
    }
}
