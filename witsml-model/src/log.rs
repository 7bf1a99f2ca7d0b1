//! Logs and their curves.
//!
//! A log is a table: each curve is one column, each data row one sample per
//! curve. Curve metadata arrives in `logCurveInfo` headers; the sample
//! values arrive separately as delimited rows and are decoded by
//! [`crate::BulkDecoder`].

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use witsml_types::{Timestamp, Value};

use crate::bulk::is_depth_index;
use crate::common::CommonData;
use crate::error::{ModelError, ModelResult};
use crate::identity::ObjectIdentity;
use crate::refresh::Refresh;

/// The declared type of a curve's samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    #[default]
    Double,
    Integer,
    Long,
    String,
    DateTime,
}

impl DataType {
    /// Maps the protocol's `typeLogData` text. Unknown names yield `None`.
    pub fn from_protocol(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "double" | "float" => Some(DataType::Double),
            "int" | "integer" | "short" => Some(DataType::Integer),
            "long" => Some(DataType::Long),
            "string" => Some(DataType::String),
            "date time" | "datetime" => Some(DataType::DateTime),
            _ => None,
        }
    }

    pub fn as_protocol(self) -> &'static str {
        match self {
            DataType::Double => "double",
            DataType::Integer => "int",
            DataType::Long => "long",
            DataType::String => "string",
            DataType::DateTime => "date time",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, DataType::Double | DataType::Integer | DataType::Long)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_protocol())
    }
}

/// One decoded sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleValue {
    Double(f64),
    Integer(i32),
    Long(i64),
    Text(String),
    DateTime(Timestamp),
}

impl SampleValue {
    /// Numeric view of the sample. Text and timestamps have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SampleValue::Double(v) => Some(*v),
            SampleValue::Integer(v) => Some(f64::from(*v)),
            // i64 beyond 2^53 loses precision; acceptable for plotting.
            SampleValue::Long(v) => Some(*v as f64),
            SampleValue::Text(_) | SampleValue::DateTime(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SampleValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<&Timestamp> {
        match self {
            SampleValue::DateTime(ts) => Some(ts),
            _ => None,
        }
    }
}

/// Curve metadata as read from one `logCurveInfo` element.
///
/// Everything except the mnemonic is optional: an absent field leaves the
/// matching curve's current value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveHeader {
    pub uid: Option<String>,
    pub mnemonic: String,
    /// One-based column. Only 1.2.0 and 1.3.1.1 send it.
    pub column_index: Option<usize>,
    pub unit: Option<String>,
    pub data_type: Option<DataType>,
    pub null_value: Option<String>,
    pub quantity_class: Option<String>,
    pub description: Option<String>,
    pub min_index: Value,
    pub max_index: Value,
    pub min_time: Option<Timestamp>,
    pub max_time: Option<Timestamp>,
}

/// Column order as declared by 1.4.1.1's `mnemonicList` and `unitList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOrder {
    pub mnemonics: Vec<String>,
    pub units: Vec<String>,
}

impl ColumnOrder {
    /// Parses the comma separated lists. An empty unit list is allowed.
    pub fn parse(mnemonic_list: &str, unit_list: Option<&str>) -> Self {
        let split = |text: &str| -> Vec<String> {
            if text.trim().is_empty() {
                Vec::new()
            } else {
                text.split(',').map(|s| s.trim().to_string()).collect()
            }
        };
        Self {
            mnemonics: split(mnemonic_list),
            units: unit_list.map(split).unwrap_or_default(),
        }
    }
}

/// One column of a log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogCurve {
    pub uid: Option<String>,
    pub mnemonic: String,
    /// One-based position in the data rows.
    pub column_index: usize,
    pub unit: Option<String>,
    pub data_type: DataType,
    pub null_value: Option<String>,
    pub quantity_class: Option<String>,
    pub description: Option<String>,
    pub min_index: Value,
    pub max_index: Value,
    pub min_time: Option<Timestamp>,
    pub max_time: Option<Timestamp>,
    values: Vec<Option<SampleValue>>,
}

impl LogCurve {
    pub fn new(mnemonic: impl Into<String>, column_index: usize) -> Self {
        Self {
            uid: None,
            mnemonic: mnemonic.into(),
            column_index,
            unit: None,
            data_type: DataType::default(),
            null_value: None,
            quantity_class: None,
            description: None,
            min_index: Value::default(),
            max_index: Value::default(),
            min_time: None,
            max_time: None,
            values: Vec::new(),
        }
    }

    /// Decoded samples, one per data row. `None` is a null sample.
    pub fn values(&self) -> &[Option<SampleValue>] {
        &self.values
    }

    pub fn value(&self, row: usize) -> Option<&SampleValue> {
        self.values.get(row).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples as `f64`; nulls and non-numeric samples are `None`.
    pub fn numeric_values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.values
            .iter()
            .map(|v| v.as_ref().and_then(SampleValue::as_f64))
    }

    /// Applies header fields that are present; absent ones are kept.
    pub fn apply_header(&mut self, header: CurveHeader) {
        if !header.mnemonic.is_empty() {
            self.mnemonic = header.mnemonic;
        }
        if let Some(column) = header.column_index {
            self.column_index = column;
        }
        if let Some(data_type) = header.data_type {
            self.data_type = data_type;
        }
        self.uid.refresh(header.uid);
        self.unit.refresh(header.unit);
        self.null_value.refresh(header.null_value);
        self.quantity_class.refresh(header.quantity_class);
        self.description.refresh(header.description);
        self.min_index.refresh(header.min_index);
        self.max_index.refresh(header.max_index);
        self.min_time.refresh(header.min_time);
        self.max_time.refresh(header.max_time);
    }

    pub(crate) fn replace_values(&mut self, values: Vec<Option<SampleValue>>) {
        self.values = values;
    }

    pub(crate) fn values_mut(&mut self) -> &mut Vec<Option<SampleValue>> {
        &mut self.values
    }
}

/// A log header plus its curves.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Log {
    pub identity: ObjectIdentity,
    pub service_company: Option<String>,
    pub run_number: Option<String>,
    pub creation_date: Option<Timestamp>,
    pub description: Option<String>,
    pub object_growing: Option<bool>,
    pub index_type: Option<String>,
    pub direction: Option<String>,
    /// Mnemonic of the index curve.
    pub index_curve: Option<String>,
    pub start_index: Value,
    pub end_index: Value,
    pub step_increment: Value,
    pub start_time: Option<Timestamp>,
    pub end_time: Option<Timestamp>,
    /// Log-wide null sentinel; a curve's own sentinel takes precedence.
    pub null_value: Option<String>,
    /// Row delimiter declared by the server (1.4.1.1 only).
    pub data_delimiter: Option<String>,
    curves: Vec<LogCurve>,
    pub common_data: CommonData,
}

impl Log {
    pub fn new(identity: ObjectIdentity) -> Self {
        Self {
            identity,
            service_company: None,
            run_number: None,
            creation_date: None,
            description: None,
            object_growing: None,
            index_type: None,
            direction: None,
            index_curve: None,
            start_index: Value::default(),
            end_index: Value::default(),
            step_increment: Value::default(),
            start_time: None,
            end_time: None,
            null_value: None,
            data_delimiter: None,
            curves: Vec::new(),
            common_data: CommonData::default(),
        }
    }

    /// Curves ordered by column index.
    pub fn curves(&self) -> &[LogCurve] {
        &self.curves
    }

    pub fn curves_mut(&mut self) -> &mut [LogCurve] {
        &mut self.curves
    }

    /// Looks a curve up by mnemonic, exact match first, then ignoring case.
    pub fn curve(&self, mnemonic: &str) -> Option<&LogCurve> {
        self.curves
            .iter()
            .find(|c| c.mnemonic == mnemonic)
            .or_else(|| {
                self.curves
                    .iter()
                    .find(|c| c.mnemonic.eq_ignore_ascii_case(mnemonic))
            })
    }

    pub fn curve_at(&self, column_index: usize) -> Option<&LogCurve> {
        self.curves.iter().find(|c| c.column_index == column_index)
    }

    /// The curve named by [`Log::index_curve`], if present.
    pub fn index_curve_data(&self) -> Option<&LogCurve> {
        self.index_curve.as_deref().and_then(|m| self.curve(m))
    }

    /// Number of decoded data rows.
    pub fn row_count(&self) -> usize {
        self.curves.first().map_or(0, LogCurve::len)
    }

    /// True when the index curve is named `DEPT` or `MD` (any case).
    pub fn is_depth_log(&self) -> bool {
        self.index_curve.as_deref().is_some_and(is_depth_index)
    }

    /// Reconciles the curve list with freshly read headers.
    ///
    /// Existing curves are reused by mnemonic so decoded values and fields
    /// the server did not resend survive. When `order` is given (1.4.1.1),
    /// it is the authoritative column layout: a listed column with no
    /// header of its own is backfilled from an unmatched header, or failing
    /// that from an unmatched known curve. Without `order`, columns come
    /// from each header's `columnIndex`, falling back to header position,
    /// and a gap up to the highest column is backfilled the same way. Only
    /// a gap nothing can fill is an error.
    ///
    /// On error the curve list is left untouched.
    pub fn apply_curve_headers(
        &mut self,
        headers: Vec<CurveHeader>,
        order: Option<&ColumnOrder>,
    ) -> ModelResult<()> {
        if headers.is_empty() && order.is_none_or(|o| o.mnemonics.is_empty()) {
            return Ok(());
        }

        let rebuilt = match order {
            Some(order) if !order.mnemonics.is_empty() => self.reconcile_ordered(headers, order),
            _ => self.reconcile_by_header(headers)?,
        };

        let row_count = rebuilt.iter().map(LogCurve::len).max().unwrap_or(0);
        self.curves = rebuilt;
        for curve in &mut self.curves {
            if curve.len() < row_count {
                curve.values_mut().resize(row_count, None);
            }
        }
        debug!(
            "Log {} now has {} curve(s)",
            self.identity.id().unwrap_or("?"),
            self.curves.len()
        );
        Ok(())
    }

    fn reconcile_by_header(&mut self, headers: Vec<CurveHeader>) -> ModelResult<Vec<LogCurve>> {
        let width = headers
            .iter()
            .enumerate()
            .map(|(position, h)| h.column_index.unwrap_or(position + 1))
            .max()
            .unwrap_or(0);

        // Lay headers out by column; a header whose column is taken or out
        // of range waits to fill a gap.
        let mut slots: Vec<Option<CurveHeader>> = (0..width).map(|_| None).collect();
        let mut unplaced = Vec::new();
        for (position, header) in headers.into_iter().enumerate() {
            let column = header.column_index.unwrap_or(position + 1);
            match column.checked_sub(1).and_then(|i| slots.get_mut(i)) {
                Some(slot) if slot.is_none() => *slot = Some(header),
                _ => unplaced.push(header),
            }
        }
        let mut unplaced = unplaced.into_iter();
        for (index, slot) in slots.iter_mut().enumerate() {
            if slot.is_some() {
                continue;
            }
            let Some(header) = unplaced.next() else { break };
            warn!(
                "Column {} has no header; reusing unmatched header {}",
                index + 1,
                header.mnemonic
            );
            *slot = Some(header);
        }
        let dropped = unplaced.count();
        if dropped > 0 {
            debug!("{} curve header(s) with a duplicate column were dropped", dropped);
        }

        // Match known curves to headers, then hand the leftovers to the
        // columns still empty. Nothing is moved until the layout is complete.
        let mut claimed = vec![false; self.curves.len()];
        let mut matches = Vec::with_capacity(width);
        for slot in &slots {
            let matched = slot.as_ref().and_then(|header| {
                (0..self.curves.len())
                    .find(|&i| !claimed[i] && self.curves[i].mnemonic == header.mnemonic)
            });
            if let Some(i) = matched {
                claimed[i] = true;
            }
            matches.push(matched);
        }
        let missing: Vec<usize> = (1..=width).filter(|c| slots[c - 1].is_none()).collect();
        let spare: Vec<usize> = (0..self.curves.len()).filter(|&i| !claimed[i]).collect();
        if spare.len() < missing.len() {
            return Err(ModelError::ColumnLayout(format!(
                "columns {missing:?} have neither a header nor an unmatched curve"
            )));
        }

        let mut pool: Vec<Option<LogCurve>> =
            std::mem::take(&mut self.curves).into_iter().map(Some).collect();
        let mut rebuilt = Vec::with_capacity(width);
        for (index, (slot, matched)) in slots.into_iter().zip(matches).enumerate() {
            let Some(header) = slot else { continue };
            let column = index + 1;
            let mut curve = matched
                .and_then(|i| pool[i].take())
                .unwrap_or_else(|| LogCurve::new(header.mnemonic.clone(), column));
            curve.apply_header(header);
            curve.column_index = column;
            rebuilt.push(curve);
        }
        for (column, i) in missing.into_iter().zip(spare) {
            if let Some(mut curve) = pool[i].take() {
                warn!(
                    "Column {} has no header; reusing unmatched curve {}",
                    column, curve.mnemonic
                );
                curve.column_index = column;
                rebuilt.push(curve);
            }
        }
        rebuilt.sort_by_key(|c| c.column_index);
        Ok(rebuilt)
    }

    fn reconcile_ordered(&mut self, headers: Vec<CurveHeader>, order: &ColumnOrder) -> Vec<LogCurve> {
        let listed = |mnemonic: &str| order.mnemonics.iter().any(|m| m == mnemonic);

        let mut pool: Vec<Option<LogCurve>> =
            std::mem::take(&mut self.curves).into_iter().map(Some).collect();
        let mut pending: Vec<Option<CurveHeader>> = headers.into_iter().map(Some).collect();
        let mut rebuilt = Vec::with_capacity(order.mnemonics.len());

        for (position, mnemonic) in order.mnemonics.iter().enumerate() {
            let column = position + 1;
            let header = take_where(&mut pending, |h| h.mnemonic == *mnemonic).or_else(|| {
                let backfill = take_where(&mut pending, |h| !listed(&h.mnemonic));
                if let Some(h) = &backfill {
                    warn!(
                        "Column {} ({}) has no header; reusing unmatched header {}",
                        column, mnemonic, h.mnemonic
                    );
                }
                backfill
            });

            let mut curve = take_where(&mut pool, |c| c.mnemonic == *mnemonic);
            if curve.is_none() && header.is_none() {
                curve = take_where(&mut pool, |c| !listed(&c.mnemonic));
                if let Some(c) = &curve {
                    warn!(
                        "Column {} ({}) has no header; reusing unmatched curve {}",
                        column, mnemonic, c.mnemonic
                    );
                }
            }

            let mut curve = curve.unwrap_or_else(|| LogCurve::new(mnemonic.clone(), column));
            if let Some(header) = header {
                curve.apply_header(header);
            }
            curve.mnemonic = mnemonic.clone();
            curve.column_index = column;
            if curve.unit.is_none() {
                curve.unit = order
                    .units
                    .get(position)
                    .filter(|u| !u.is_empty())
                    .cloned();
            }
            rebuilt.push(curve);
        }

        let unused = pending.iter().flatten().count();
        if unused > 0 {
            debug!("{} curve header(s) not named in the column list were dropped", unused);
        }
        rebuilt
    }
}

fn take_where<T>(slots: &mut [Option<T>], pred: impl Fn(&T) -> bool) -> Option<T> {
    slots
        .iter_mut()
        .find(|slot| slot.as_ref().is_some_and(&pred))
        .and_then(Option::take)
}
