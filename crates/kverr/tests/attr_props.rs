use std::collections::HashMap;

use kverr::AttrValue;
use kverr::attr::{merge, normalize, to_map};
use proptest::prelude::*;

fn attr_value() -> impl Strategy<Value = AttrValue> {
    prop_oneof![
        "[a-c]{1,2}".prop_map(AttrValue::Str),
        (0i64..100).prop_map(AttrValue::Int),
        any::<bool>().prop_map(AttrValue::Bool),
    ]
}

fn field_list(max: usize) -> impl Strategy<Value = Vec<AttrValue>> {
    proptest::collection::vec(attr_value(), 0..max)
}

proptest! {
    // The map view of two merged lists must match a dedup computed by hand:
    // walk the pairs in order, folding repeats into "<new> - <old>" chains.
    #[test]
    fn map_of_merged_lists_matches_manual_dedup(a in field_list(8), b in field_list(8)) {
        let a = normalize(a);
        let b = normalize(b);
        let merged = merge(a, b);

        let mut expected: HashMap<String, String> = HashMap::new();
        for pair in merged.chunks_exact(2) {
            let key = pair[0].to_string();
            let value = pair[1].to_string();
            let folded = match expected.get(&key) {
                Some(prev) => format!("{value} - {prev}"),
                None => value,
            };
            expected.insert(key, folded);
        }

        prop_assert_eq!(to_map(&merged), expected);
    }

    #[test]
    fn normalize_always_yields_even_lists(fields in field_list(9)) {
        let normalized = normalize(fields.clone());
        prop_assert_eq!(normalized.len() % 2, 0);
        if fields.len() % 2 == 0 {
            prop_assert_eq!(normalized, fields);
        } else {
            prop_assert_eq!(normalized[0].to_string(), kverr::MSG_KEY);
            prop_assert_eq!(&normalized[1..], &fields[..]);
        }
    }
}

#[test]
fn attrs_map_serializes_for_logging() {
    let se = kverr::err!("db write failed", "table", "users", "retries", 3);
    let json = serde_json::to_value(se.attrs_map()).expect("serialize attrs map");
    assert_eq!(json["table"], "users");
    assert_eq!(json["retries"], "3");
}
