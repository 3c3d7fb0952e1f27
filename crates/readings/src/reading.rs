use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ReadingError;
use crate::sensor::SensorKind;

/// The timestamp format the station endpoint emits.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M";

/// One reading as it appears on the wire.
///
/// Latest-all responses carry a `type` key on every item; history
/// responses omit it because the whole response is for one sensor kind.
/// `Valeurs` arrives as a JSON number or a numeric string depending on
/// the database column it came from, so both forms must coerce.
#[derive(Debug, Clone, Deserialize)]
pub struct WireReading {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    #[serde(rename = "Valeurs", default)]
    pub value: Option<Value>,

    #[serde(rename = "time", default)]
    pub time: Option<String>,

    #[serde(rename = "ID", default)]
    pub id: Option<u64>,
}

/// One validated sensor observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub kind: SensorKind,
    pub value: f64,
    pub timestamp: NaiveDateTime,
    pub id: Option<u64>,
}

impl Reading {
    /// Validate a wire reading.
    ///
    /// History responses do not repeat the sensor type on every item;
    /// `kind_hint` supplies the requested kind in that case. A `type`
    /// key present on the wire always wins over the hint.
    pub fn from_wire(
        wire: WireReading,
        kind_hint: Option<SensorKind>,
    ) -> Result<Reading, ReadingError> {
        let kind = match wire.kind {
            Some(ref key) => SensorKind::from_key(key)
                .ok_or_else(|| ReadingError::UnknownKind { key: key.clone() })?,
            None => kind_hint.ok_or(ReadingError::MissingKind)?,
        };

        let value = parse_value(wire.value)?;
        let timestamp = parse_timestamp(wire.time)?;

        Ok(Reading {
            kind,
            value,
            timestamp,
            id: wire.id,
        })
    }
}

fn parse_value(value: Option<Value>) -> Result<f64, ReadingError> {
    let value = value.ok_or(ReadingError::MissingValue)?;

    let parsed = match value {
        Value::Number(ref number) => number.as_f64(),
        Value::String(ref text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|v| v.is_finite())
        .ok_or_else(|| ReadingError::MalformedValue {
            value: value.to_string(),
        })
}

fn parse_timestamp(time: Option<String>) -> Result<NaiveDateTime, ReadingError> {
    let time = time.ok_or(ReadingError::MissingTimestamp)?;

    NaiveDateTime::parse_from_str(&time, TIMESTAMP_FORMAT)
        .map_err(|_| ReadingError::MalformedTimestamp { timestamp: time })
}
