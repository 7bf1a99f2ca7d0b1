use proptest::prelude::*;
use std::cmp::Ordering;
use witsml_types::Value;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn parse_reads_magnitude_and_unit() {
    let v = Value::parse(Some(" 1234.5 "), Some("m"));
    assert_eq!(v.magnitude(), Some(1234.5));
    assert_eq!(v.unit(), Some("m"));
}

#[test]
fn parse_keeps_unit_when_magnitude_is_blank() {
    let v = Value::parse(Some(""), Some("ft"));
    assert_eq!(v.magnitude(), None);
    assert_eq!(v.unit(), Some("ft"));
    assert!(!v.is_empty());
}

#[test]
fn parse_drops_blank_unit() {
    let v = Value::parse(Some("3"), Some("  "));
    assert_eq!(v.unit(), None);
}

#[test]
fn default_value_is_empty() {
    assert!(Value::default().is_empty());
}

#[test]
fn display_formats() {
    assert_eq!(Value::with_unit(2.5, "m").to_string(), "2.5 m");
    assert_eq!(Value::scalar(7.0).to_string(), "7");
    assert_eq!(Value::default().to_string(), "-");
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn absent_magnitude_sorts_after_present() {
    let present = Value::with_unit(1.0e12, "m");
    let absent = Value::new(None, Some("m".into()));
    assert_eq!(present.cmp(&absent), Ordering::Less);
    assert!(absent > present);
}

#[test]
fn sorting_puts_absent_values_last() {
    let mut values = vec![
        Value::default(),
        Value::scalar(3.0),
        Value::scalar(-1.0),
        Value::new(None, Some("ft".into())),
        Value::scalar(2.0),
    ];
    values.sort();
    let magnitudes: Vec<_> = values.iter().map(Value::magnitude).collect();
    assert_eq!(
        magnitudes,
        vec![Some(-1.0), Some(2.0), Some(3.0), None, None]
    );
}

#[test]
fn nan_is_equal_to_itself() {
    let a = Value::scalar(f64::NAN);
    assert_eq!(a, a.clone());
}

#[test]
fn serde_skips_absent_parts() {
    let json = serde_json::to_string(&Value::scalar(4.0)).unwrap();
    assert_eq!(json, r#"{"magnitude":4.0}"#);
    let back: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Value::scalar(4.0));
}

fn value_strategy() -> impl Strategy<Value = Value> {
    (
        prop::option::of(-1.0e9f64..1.0e9),
        prop::option::of(prop::sample::select(vec!["m", "ft", "dega"])),
    )
        .prop_map(|(m, u)| Value::new(m, u.map(str::to_string)))
}

proptest! {
    #[test]
    fn ordering_is_antisymmetric(a in value_strategy(), b in value_strategy()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn ordering_is_transitive(
        a in value_strategy(),
        b in value_strategy(),
        c in value_strategy(),
    ) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn present_is_always_less_than_absent(m in -1.0e9f64..1.0e9) {
        prop_assert!(Value::scalar(m) < Value::default());
    }
}
