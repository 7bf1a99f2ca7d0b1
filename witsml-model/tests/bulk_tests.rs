use pretty_assertions::assert_eq;
use proptest::prelude::*;
use witsml_model::{
    harmonize_units, is_depth_index, BulkDecodeError, BulkDecoder, CurveHeader, DataType,
    DecodeOptions, Log, ObjectIdentity, SampleValue, TokenPolicy,
};
use witsml_types::ObjectType;

fn log_with(curves: &[(&str, DataType, Option<&str>)]) -> Log {
    let identity = ObjectIdentity::with_ancestors(
        ObjectType::Log,
        Some("L1".into()),
        vec!["B1".into(), "W1".into()],
    )
    .unwrap();
    let mut log = Log::new(identity);
    let headers = curves
        .iter()
        .enumerate()
        .map(|(i, (mnemonic, data_type, unit))| CurveHeader {
            mnemonic: mnemonic.to_string(),
            column_index: Some(i + 1),
            data_type: Some(*data_type),
            unit: unit.map(str::to_string),
            ..CurveHeader::default()
        })
        .collect();
    log.apply_curve_headers(headers, None).unwrap();
    log
}

fn doubles(log: &Log, mnemonic: &str) -> Vec<Option<f64>> {
    log.curve(mnemonic).unwrap().numeric_values().collect()
}

fn decoder() -> BulkDecoder {
    BulkDecoder::new(DecodeOptions::default()).unwrap()
}

// ── Tokenizing ───────────────────────────────────────────────────

#[test]
fn empty_tokens_become_nulls() {
    let mut log = log_with(&[
        ("A", DataType::Double, None),
        ("B", DataType::Double, None),
        ("C", DataType::Double, None),
    ]);
    decoder().decode(&mut log, &["12.5,,7"]).unwrap();
    assert_eq!(doubles(&log, "A"), vec![Some(12.5)]);
    assert_eq!(doubles(&log, "B"), vec![None]);
    assert_eq!(doubles(&log, "C"), vec![Some(7.0)]);
}

#[test]
fn short_rows_are_padded_with_nulls() {
    let mut log = log_with(&[
        ("A", DataType::Double, None),
        ("B", DataType::Double, None),
        ("C", DataType::Double, None),
        ("D", DataType::Double, None),
    ]);
    decoder().decode(&mut log, &["1,2"]).unwrap();
    assert_eq!(doubles(&log, "C"), vec![None]);
    assert_eq!(doubles(&log, "D"), vec![None]);
    assert_eq!(log.row_count(), 1);
}

#[test]
fn empty_row_yields_all_nulls() {
    let mut log = log_with(&[("A", DataType::Double, None), ("B", DataType::Long, None)]);
    decoder().decode(&mut log, &["1,2", ""]).unwrap();
    assert_eq!(log.row_count(), 2);
    assert_eq!(doubles(&log, "A"), vec![Some(1.0), None]);
    assert_eq!(doubles(&log, "B"), vec![Some(2.0), None]);
}

#[test]
fn every_curve_has_one_sample_per_row() {
    let mut log = log_with(&[("A", DataType::Double, None), ("B", DataType::String, None)]);
    decoder()
        .decode(&mut log, &["1,x", "2", "3,y,extra"])
        .unwrap();
    for curve in log.curves() {
        assert_eq!(curve.len(), 3);
    }
}

#[test]
fn strings_keep_surrounding_whitespace() {
    let mut log = log_with(&[("A", DataType::Double, None), ("S", DataType::String, None)]);
    decoder().decode(&mut log, &["1, left pad"]).unwrap();
    let s = log.curve("S").unwrap();
    assert_eq!(s.value(0).and_then(SampleValue::as_str), Some(" left pad"));
}

#[test]
fn declared_delimiter_overrides_configured_one() {
    let mut log = log_with(&[("A", DataType::Double, None), ("B", DataType::Double, None)]);
    log.data_delimiter = Some(";".into());
    decoder().decode(&mut log, &["1;2"]).unwrap();
    assert_eq!(doubles(&log, "B"), vec![Some(2.0)]);
}

#[test]
fn multibyte_delimiter_is_rejected() {
    let mut log = log_with(&[("A", DataType::Double, None)]);
    log.data_delimiter = Some("||".into());
    let err = decoder().decode(&mut log, &["1"]).unwrap_err();
    assert!(matches!(err, BulkDecodeError::UnsupportedDelimiter(_)));

    let options = DecodeOptions {
        delimiter: '→',
        ..DecodeOptions::default()
    };
    assert!(BulkDecoder::new(options).is_err());
}

// ── Typing ───────────────────────────────────────────────────────

#[test]
fn typed_columns() {
    let mut log = log_with(&[
        ("TIME", DataType::DateTime, None),
        ("COUNT", DataType::Integer, None),
        ("BIG", DataType::Long, None),
        ("TAG", DataType::String, None),
    ]);
    decoder()
        .decode(&mut log, &["2024-03-01T12:00:00Z,7,9000000000,ok"])
        .unwrap();
    let time = log.curve("TIME").unwrap().value(0).unwrap();
    assert_eq!(time.as_timestamp().map(|t| t.to_rfc3339()), Some("2024-03-01T12:00:00+00:00".to_string()));
    assert_eq!(log.curve("COUNT").unwrap().value(0), Some(&SampleValue::Integer(7)));
    assert_eq!(log.curve("BIG").unwrap().value(0), Some(&SampleValue::Long(9_000_000_000)));
    assert_eq!(log.curve("TAG").unwrap().value(0), Some(&SampleValue::Text("ok".into())));
}

#[test]
fn bad_numeric_token_is_null_by_default() {
    let mut log = log_with(&[("A", DataType::Double, None)]);
    decoder().decode(&mut log, &["abc", "1"]).unwrap();
    assert_eq!(doubles(&log, "A"), vec![None, Some(1.0)]);
}

#[test]
fn bad_numeric_token_fails_under_strict_policy() {
    let options = DecodeOptions {
        numeric_policy: TokenPolicy::Fail,
        ..DecodeOptions::default()
    };
    let mut log = log_with(&[("DEPT", DataType::Double, None), ("GR", DataType::Double, None)]);
    let err = BulkDecoder::new(options)
        .unwrap()
        .decode(&mut log, &["1,2", "2,oops"])
        .unwrap_err();
    match err {
        BulkDecodeError::InvalidToken {
            mnemonic,
            token,
            row,
            column,
            ..
        } => {
            assert_eq!(mnemonic, "GR");
            assert_eq!(token, "oops");
            assert_eq!(row, 2);
            assert_eq!(column, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_timestamp_fails_by_default() {
    let mut log = log_with(&[("TIME", DataType::DateTime, None)]);
    let err = decoder().decode(&mut log, &["yesterday"]).unwrap_err();
    assert!(matches!(err, BulkDecodeError::InvalidToken { data_type: DataType::DateTime, .. }));
}

#[test]
fn failed_decode_leaves_previous_values() {
    let mut log = log_with(&[("TIME", DataType::DateTime, None)]);
    decoder().decode(&mut log, &["2024-01-01"]).unwrap();
    assert!(decoder().decode(&mut log, &["2024-01-02", "nope"]).is_err());
    assert_eq!(log.row_count(), 1);
}

// ── Null sentinels ───────────────────────────────────────────────

#[test]
fn log_null_value_is_honored() {
    let mut log = log_with(&[("A", DataType::Double, None)]);
    log.null_value = Some("-999.25".into());
    decoder().decode(&mut log, &["-999.25", "-999.2500", "3"]).unwrap();
    assert_eq!(doubles(&log, "A"), vec![None, None, Some(3.0)]);
}

#[test]
fn curve_null_value_wins_over_log_null_value() {
    let mut log = log_with(&[("A", DataType::Double, None), ("B", DataType::Double, None)]);
    log.null_value = Some("-999.25".into());
    log.curves_mut()[1].null_value = Some("-1".into());
    decoder().decode(&mut log, &["-1,-1", "-999.25,-999.25"]).unwrap();
    assert_eq!(doubles(&log, "A"), vec![Some(-1.0), None]);
    assert_eq!(doubles(&log, "B"), vec![None, Some(-999.25)]);
}

#[test]
fn configured_null_value_applies_last() {
    let options = DecodeOptions {
        null_value: "NaN".into(),
        ..DecodeOptions::default()
    };
    let mut log = log_with(&[("TAG", DataType::String, None)]);
    BulkDecoder::new(options)
        .unwrap()
        .decode(&mut log, &["NaN", "x"])
        .unwrap();
    assert_eq!(log.curve("TAG").unwrap().value(0), None);
    assert_eq!(log.curve("TAG").unwrap().value(1), Some(&SampleValue::Text("x".into())));
}

// ── Unit harmonization ───────────────────────────────────────────

#[test]
fn feet_become_meters() {
    let options = DecodeOptions {
        harmonize_units: true,
        ..DecodeOptions::default()
    };
    let mut log = log_with(&[("DEPT", DataType::Integer, Some("ft"))]);
    BulkDecoder::new(options)
        .unwrap()
        .decode(&mut log, &["100", ""])
        .unwrap();
    let dept = log.curve("DEPT").unwrap();
    assert_eq!(dept.unit.as_deref(), Some("m"));
    assert_eq!(dept.data_type, DataType::Double);
    let values: Vec<_> = dept.numeric_values().collect();
    assert!((values[0].unwrap() - 30.48).abs() < 1e-9);
    assert_eq!(values[1], None);
}

#[test]
fn degrees_become_radians() {
    let mut log = log_with(&[("INC", DataType::Double, Some("dega"))]);
    decoder().decode(&mut log, &["90"]).unwrap();
    assert_eq!(harmonize_units(log.curves_mut()), 1);
    let inc = log.curve("INC").unwrap();
    assert_eq!(inc.unit.as_deref(), Some("rad"));
    assert!((doubles(&log, "INC")[0].unwrap() - std::f64::consts::FRAC_PI_2).abs() < 1e-6);
}

#[test]
fn harmonizing_meters_is_a_no_op() {
    let mut log = log_with(&[("DEPT", DataType::Double, Some("m"))]);
    decoder().decode(&mut log, &["12.5"]).unwrap();
    assert_eq!(harmonize_units(log.curves_mut()), 0);
    assert_eq!(doubles(&log, "DEPT"), vec![Some(12.5)]);
    assert_eq!(log.curve("DEPT").unwrap().unit.as_deref(), Some("m"));
}

#[test]
fn text_curves_are_not_harmonized() {
    let mut log = log_with(&[("NOTE", DataType::String, Some("ft"))]);
    decoder().decode(&mut log, &["deep"]).unwrap();
    assert_eq!(harmonize_units(log.curves_mut()), 0);
}

#[test]
fn depth_index_names() {
    assert!(is_depth_index("DEPT"));
    assert!(is_depth_index("md"));
    assert!(!is_depth_index("TIME"));
    assert!(!is_depth_index("DEPTH"));
}

proptest! {
    #[test]
    fn decoded_row_count_matches_input(rows in prop::collection::vec("[0-9,.]{0,12}", 0..20)) {
        let mut log = log_with(&[
            ("A", DataType::Double, None),
            ("B", DataType::Double, None),
        ]);
        decoder().decode(&mut log, &rows).unwrap();
        for curve in log.curves() {
            prop_assert_eq!(curve.len(), rows.len());
        }
    }
}
