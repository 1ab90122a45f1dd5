#![allow(missing_docs)]

use census_model::ChoiceTable;
use census_transform::area::{SQ_M_PER_BIGHA, SQ_M_PER_DHUR, SQ_M_PER_KATTHA};
use census_transform::{
    convert_traditional_area, decode_multiple_choices, decode_single_choice, process_location,
};
use proptest::prelude::*;
use serde_json::json;

fn table() -> ChoiceTable {
    ChoiceTable::with_entries(
        "water_source",
        [
            ("tap_inside_house", "Tap inside house"),
            ("tubewell", "Tubewell"),
            ("spring", "Spring/River"),
        ],
    )
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("tap_inside_house".to_string()),
        Just("tubewell".to_string()),
        Just("spring".to_string()),
        proptest::string::string_regex("[a-z_]{1,12}").unwrap(),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn single_choice_is_label_or_code(code in token()) {
        let table = table();
        let decoded = decode_single_choice(&code, &table);
        match table.label(&code) {
            Some(label) => prop_assert_eq!(decoded, label),
            None => prop_assert_eq!(decoded, code),
        }
    }

    #[test]
    fn multiple_choices_preserve_count_and_order(
        codes in proptest::collection::vec(token(), 1..8),
        separator in prop_oneof![Just(" "), Just("  "), Just("\t")],
    ) {
        let table = table();
        let joined = codes.join(separator);
        let decoded = decode_multiple_choices(Some(&joined), &table).unwrap();
        prop_assert_eq!(decoded.len(), codes.len());
        for (code, label) in codes.iter().zip(&decoded) {
            prop_assert_eq!(label, &decode_single_choice(code, &table));
        }
    }

    #[test]
    fn area_is_linear(bigha in 0u32..50, kattha in 0u32..20, dhur in 0u32..20) {
        let (b, k, d) = (f64::from(bigha), f64::from(kattha), f64::from(dhur));
        let expected = b * SQ_M_PER_BIGHA + k * SQ_M_PER_KATTHA + d * SQ_M_PER_DHUR;
        prop_assert!((convert_traditional_area(b, k, d) - expected).abs() < 1e-6);
    }

    #[test]
    fn point_and_altitude_stay_paired(text in ".{0,40}") {
        let gps = process_location(Some(&json!(text)));
        prop_assert_eq!(gps.point.is_some(), gps.altitude.is_some());
        prop_assert!(gps.accuracy.is_none());
    }
}

#[test]
fn composite_area() {
    let area = convert_traditional_area(2.0, 3.0, 4.0);
    assert!((area - (2.0 * 6772.63 + 3.0 * 338.63 + 4.0 * 16.93)).abs() < 1e-9);
}

#[test]
fn empty_inputs_decode_to_none() {
    let table = table();
    assert_eq!(decode_multiple_choices(Some(""), &table), None);
    assert_eq!(decode_multiple_choices(None, &table), None);
}
