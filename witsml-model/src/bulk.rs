//! The bulk curve decoder.
//!
//! Log data arrives as text rows, one sample per curve, separated by a
//! single-byte delimiter. The decoder splits each row, maps tokens to curves
//! by column index and parses them per the curve's data type. Decoding is
//! all-or-nothing: the log's curves are only replaced once every row has
//! been decoded.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};
use witsml_types::{parse_timestamp, Value};

use crate::log::{DataType, Log, LogCurve, SampleValue};

/// What to do with a token that does not parse as the curve's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPolicy {
    /// Store a null sample and keep going.
    #[default]
    StoreNull,
    /// Abort the decode with [`BulkDecodeError::InvalidToken`].
    Fail,
}

/// Decoder settings. Part of the client configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Used when the log declares no delimiter of its own.
    pub delimiter: char,
    /// Fallback null sentinel when neither curve nor log declares one.
    pub null_value: String,
    /// Convert feet and degrees to meters and radians after decoding.
    pub harmonize_units: bool,
    pub numeric_policy: TokenPolicy,
    pub datetime_policy: TokenPolicy,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            null_value: String::new(),
            harmonize_units: false,
            numeric_policy: TokenPolicy::StoreNull,
            datetime_policy: TokenPolicy::Fail,
        }
    }
}

#[derive(Debug, Error)]
pub enum BulkDecodeError {
    #[error("cannot parse {token:?} as {data_type} for curve {mnemonic} (row {row}, column {column})")]
    InvalidToken {
        mnemonic: String,
        data_type: DataType,
        token: String,
        row: usize,
        column: usize,
    },

    #[error("unsupported data delimiter {0:?}: only single-byte delimiters are supported")]
    UnsupportedDelimiter(String),

    #[error("malformed data row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// Decodes delimited rows into a log's curves.
#[derive(Debug, Clone)]
pub struct BulkDecoder {
    options: DecodeOptions,
    delimiter: u8,
}

impl BulkDecoder {
    pub fn new(options: DecodeOptions) -> Result<Self, BulkDecodeError> {
        let delimiter = single_byte(&options.delimiter.to_string())?;
        Ok(Self { options, delimiter })
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Splits one row into raw tokens. Tokens are not trimmed; an empty row
    /// has no tokens at all.
    pub fn split_row(&self, row: &str) -> Result<Vec<String>, csv::Error> {
        split_row(row, self.delimiter)
    }

    /// Decodes `rows` into `log`, replacing every curve's values.
    ///
    /// A row shorter than the curve list yields null samples for the
    /// missing columns. The log's own `data_delimiter`, when set, overrides
    /// the configured one. On error `log` is unchanged.
    pub fn decode<S: AsRef<str>>(&self, log: &mut Log, rows: &[S]) -> Result<(), BulkDecodeError> {
        let delimiter = match log.data_delimiter.as_deref().filter(|d| !d.is_empty()) {
            Some(declared) => single_byte(declared)?,
            None => self.delimiter,
        };

        let curves = log.curves();
        let mut columns: Vec<Vec<Option<SampleValue>>> = curves
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;
            let tokens = split_row(row.as_ref(), delimiter).map_err(|source| BulkDecodeError::Row {
                row: row_number,
                source,
            })?;
            for (slot, curve) in curves.iter().enumerate() {
                let token = curve
                    .column_index
                    .checked_sub(1)
                    .and_then(|i| tokens.get(i))
                    .map(String::as_str);
                let sentinel = curve
                    .null_value
                    .as_deref()
                    .or(log.null_value.as_deref())
                    .unwrap_or(&self.options.null_value);
                columns[slot].push(self.decode_token(token, sentinel, curve, row_number)?);
            }
        }

        for (curve, values) in log.curves_mut().iter_mut().zip(columns) {
            curve.replace_values(values);
        }
        debug!(
            "Decoded {} row(s) into {} curve(s)",
            rows.len(),
            log.curves().len()
        );

        if self.options.harmonize_units {
            harmonize_units(log.curves_mut());
        }
        Ok(())
    }

    fn decode_token(
        &self,
        token: Option<&str>,
        sentinel: &str,
        curve: &LogCurve,
        row: usize,
    ) -> Result<Option<SampleValue>, BulkDecodeError> {
        let Some(raw) = token else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || raw == sentinel || trimmed == sentinel.trim() {
            return Ok(None);
        }

        let parsed = match curve.data_type {
            DataType::String => return Ok(Some(SampleValue::Text(raw.to_string()))),
            DataType::Double => trimmed.parse::<f64>().ok().map(SampleValue::Double),
            DataType::Integer => trimmed.parse::<i32>().ok().map(SampleValue::Integer),
            DataType::Long => trimmed.parse::<i64>().ok().map(SampleValue::Long),
            DataType::DateTime => parse_timestamp(trimmed).ok().map(SampleValue::DateTime),
        };

        if let Some(value) = parsed {
            // "-999.2500" against a "-999.25" sentinel.
            let is_sentinel = value
                .as_f64()
                .zip(sentinel.trim().parse::<f64>().ok())
                .is_some_and(|(v, s)| v == s);
            return Ok(if is_sentinel { None } else { Some(value) });
        }

        let policy = if curve.data_type == DataType::DateTime {
            self.options.datetime_policy
        } else {
            self.options.numeric_policy
        };
        match policy {
            TokenPolicy::StoreNull => {
                trace!(
                    "Unparseable {} token {:?} in {} row {}; stored as null",
                    curve.data_type, raw, curve.mnemonic, row
                );
                Ok(None)
            }
            TokenPolicy::Fail => Err(BulkDecodeError::InvalidToken {
                mnemonic: curve.mnemonic.clone(),
                data_type: curve.data_type,
                token: raw.to_string(),
                row,
                column: curve.column_index,
            }),
        }
    }
}

fn single_byte(delimiter: &str) -> Result<u8, BulkDecodeError> {
    match delimiter.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(BulkDecodeError::UnsupportedDelimiter(delimiter.to_string())),
    }
}

fn split_row(row: &str, delimiter: u8) -> Result<Vec<String>, csv::Error> {
    if row.is_empty() {
        return Ok(Vec::new());
    }
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(row.as_bytes());
    let mut record = csv::StringRecord::new();
    if reader.read_record(&mut record)? {
        Ok(record.iter().map(str::to_string).collect())
    } else {
        Ok(Vec::new())
    }
}

/// Unit conversions applied by [`harmonize_units`]: from, to, factor.
const CONVERSIONS: [(&str, &str, f64); 2] = [("ft", "m", 0.3048), ("dega", "rad", 0.017453292)];

/// Converts numeric curves in feet or degrees to meters or radians.
///
/// Converted curves become [`DataType::Double`]. Curves already in a target
/// unit, non-numeric curves and curves with other units are left alone.
/// Returns the number of curves converted.
pub fn harmonize_units(curves: &mut [LogCurve]) -> usize {
    let mut converted = 0;
    for curve in curves {
        if !curve.data_type.is_numeric() {
            continue;
        }
        let Some(&(from, to, factor)) = CONVERSIONS
            .iter()
            .find(|(from, _, _)| curve.unit.as_deref() == Some(*from))
        else {
            continue;
        };

        for sample in curve.values_mut().iter_mut() {
            *sample = sample
                .as_ref()
                .and_then(SampleValue::as_f64)
                .map(|v| SampleValue::Double(v * factor));
        }
        for bound in [&mut curve.min_index, &mut curve.max_index] {
            if let (Some(m), Some(from_unit)) = (bound.magnitude(), bound.unit()) {
                if from_unit == from {
                    *bound = Value::with_unit(m * factor, to);
                }
            }
        }
        curve.data_type = DataType::Double;
        curve.unit = Some(to.to_string());
        converted += 1;
        trace!("Harmonized curve {} from {} to {}", curve.mnemonic, from, to);
    }
    converted
}

/// True when an index curve name denotes measured depth (`DEPT`, `MD`).
pub fn is_depth_index(mnemonic: &str) -> bool {
    mnemonic.eq_ignore_ascii_case("dept") || mnemonic.eq_ignore_ascii_case("md")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_empty_tokens() {
        assert_eq!(split_row("12.5,,7", b',').unwrap(), ["12.5", "", "7"]);
        assert_eq!(split_row("a, b", b',').unwrap(), ["a", " b"]);
        assert!(split_row("", b',').unwrap().is_empty());
    }

    #[test]
    fn quotes_are_not_special() {
        assert_eq!(split_row("\"a,b\"", b',').unwrap(), ["\"a", "b\""]);
    }

    #[test]
    fn multibyte_delimiter_is_rejected() {
        assert!(matches!(
            single_byte("||"),
            Err(BulkDecodeError::UnsupportedDelimiter(_))
        ));
        assert_eq!(single_byte(";").unwrap(), b';');
    }
}
