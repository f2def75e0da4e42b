//! Property tests: logically equal JSON values normalize and sign identically.

use jsonsig::{canonical, json_signature, keys};
use proptest::prelude::*;
use serde_json::{Map, Value};

const DUMMY_WALLET_SK: &str = "8d7d56a9efa4158d232edbeaae601021eb3477ad77b5f3c720601fd74e8e04bb";

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e9f64..1.0e9).prop_map(Value::from),
        "\\PC{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("\\PC{0,8}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Rebuild every object with its entries in reverse order.
fn reverse_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut reversed = Map::new();
            for (k, v) in map.iter().rev() {
                reversed.insert(k.clone(), reverse_keys(v));
            }
            Value::Object(reversed)
        }
        Value::Array(items) => Value::Array(items.iter().map(reverse_keys).collect()),
        other => other.clone(),
    }
}

proptest! {
    #[test]
    fn normalization_ignores_key_order(value in arb_json()) {
        let a = canonical::to_canonical_string(&value).unwrap();
        let b = canonical::to_canonical_string(&reverse_keys(&value)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn canonical_text_is_compact_json(value in arb_json()) {
        let text = canonical::to_canonical_string(&value).unwrap();
        let reparsed: Value = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(reparsed.is_object(), value.is_object());
        prop_assert!(!text.contains('\n') && !text.contains('\t'));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn signatures_ignore_key_order(value in arb_json()) {
        let wallet = keys::load_wallet(DUMMY_WALLET_SK).unwrap();
        let a = json_signature::sign_message(&value, &wallet).unwrap();
        let b = json_signature::sign_message(&reverse_keys(&value), &wallet).unwrap();
        prop_assert_eq!(&a, &b);

        let key = keys::public_key(&wallet, false);
        prop_assert!(json_signature::is_valid_message(&reverse_keys(&value), &a, &key).unwrap());
    }
}
