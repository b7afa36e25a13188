//! Property tests for coercion, color conversion, flattening and CSV rows.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::{Map, Value};
use tokenport_core::{coerce, flatten, parse_csv, to_rgba, Rgba, TokenValue};

fn nested_object() -> impl Strategy<Value = Map<String, Value>> {
    let leaf = prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[a-z]{0,6}".prop_map(Value::from),
    ];
    let tree = leaf.prop_recursive(4, 32, 4, |inner| {
        prop::collection::btree_map("[a-z]{1,3}", inner, 0..4)
            .prop_map(|m| Value::Object(m.into_iter().collect()))
    });
    prop::collection::btree_map("[a-z]{1,3}", tree, 0..5)
        .prop_map(|m| m.into_iter().collect::<Map<String, Value>>())
}

proptest! {
    #[test]
    fn boolean_words_in_any_case(word in "[tT][rR][uU][eE]|[fF][aA][lL][sS][eE]") {
        let expected = word.eq_ignore_ascii_case("true");
        prop_assert_eq!(coerce(&word), TokenValue::Boolean(expected));
    }

    #[test]
    fn finite_numbers_parse_exactly(n in any::<f64>().prop_filter("finite", |n| n.is_finite())) {
        let text = n.to_string();
        prop_assert_eq!(coerce(&text), TokenValue::Number(n));
    }

    #[test]
    fn dimensioned_numbers_stay_strings(n in 0u32..10_000, unit in "px|em|rem") {
        let text = format!("{n}{unit}");
        prop_assert_eq!(coerce(&text), TokenValue::String(text.clone()));
    }

    #[test]
    fn six_digit_hex_divides_by_255(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let text = format!("#{r:02X}{g:02X}{b:02x}");
        let expected = Rgba::new(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        );
        prop_assert_eq!(to_rgba(&text), expected);
        prop_assert_eq!(coerce(&text), TokenValue::Color(expected));
    }

    #[test]
    fn eight_digit_hex_carries_alpha(r in any::<u8>(), a in any::<u8>()) {
        let color = to_rgba(&format!("#{r:02x}0000{a:02X}"));
        prop_assert_eq!(color.r, f64::from(r) / 255.0);
        prop_assert_eq!(color.a, f64::from(a) / 255.0);
    }

    #[test]
    fn channels_always_in_unit_range(raw in "#?[0-9a-fA-F]{6,8}|rgba?\\([0-9 ,.%/-]{0,20}\\)|[a-z]{0,8}") {
        let c = to_rgba(&raw);
        for channel in [c.r, c.g, c.b, c.a] {
            prop_assert!((0.0..=1.0).contains(&channel), "{} -> {:?}", raw, c);
        }
    }

    #[test]
    fn flatten_leaves_no_objects_and_is_idempotent(obj in nested_object()) {
        let once = flatten(&obj, "");
        prop_assert!(once.values().all(|v| !v.is_object()));
        let again = flatten(&once.clone().into_iter().collect(), "");
        prop_assert_eq!(once, again);
    }

    #[test]
    fn csv_rows_with_empty_fields_do_not_affect_others(
        rows in prop::collection::vec(("[A-C]?", "[x-z]?", "[0-9]{0,2}"), 0..20)
    ) {
        let mut text = String::from("collection,variable,value\n");
        let mut expected: BTreeMap<(String, String), String> = BTreeMap::new();
        for (c, v, val) in &rows {
            text.push_str(&format!("{c},{v},{val}\n"));
            if !c.is_empty() && !v.is_empty() && !val.is_empty() {
                expected.insert((c.clone(), v.clone()), val.clone());
            }
        }

        let model = parse_csv(&text);
        prop_assert_eq!(model.token_count(), expected.len());
        for ((c, v), val) in &expected {
            let n: f64 = val.parse().unwrap();
            prop_assert_eq!(model.get(c, v), Some(&TokenValue::Number(n)));
        }
    }
}
