//! Typed-value mapping for the document store wire format.
//!
//! Every stored field is a one-key JSON object naming its type, e.g.
//! `{"doubleValue": 0.42}` or `{"timestampValue": "2024-10-24T00:00:00Z"}`.
//! Decoders are lenient: a field of the wrong shape decodes to `None` so
//! that callers can skip malformed documents instead of failing the fetch.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde_json::{json, Map, Value};

pub fn string_value(s: &str) -> Value {
    json!({ "stringValue": s })
}

pub fn double_value(v: f64) -> Value {
    json!({ "doubleValue": v })
}

pub fn integer_value(v: i64) -> Value {
    // Integers travel as strings in this wire format
    json!({ "integerValue": v.to_string() })
}

pub fn bool_value(v: bool) -> Value {
    json!({ "booleanValue": v })
}

/// Day-granularity timestamp: midnight UTC of the given date.
pub fn date_value(date: NaiveDate) -> Value {
    let midnight = DateTime::<Utc>::from_naive_utc_and_offset(
        date.and_time(NaiveTime::MIN),
        Utc,
    );
    json!({ "timestampValue": midnight.to_rfc3339() })
}

pub fn string_array_value<I, S>(items: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let values: Vec<Value> = items
        .into_iter()
        .map(|s| string_value(s.as_ref()))
        .collect();
    json!({ "arrayValue": { "values": values } })
}

pub fn as_string(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)?
        .get("stringValue")?
        .as_str()
        .map(|s| s.to_string())
}

/// Numeric fields may arrive as `doubleValue`, or as `integerValue`
/// carrying either a JSON number or its string form.
pub fn as_f64(fields: &Map<String, Value>, key: &str) -> Option<f64> {
    let value = fields.get(key)?;
    if let Some(v) = value.get("doubleValue").and_then(Value::as_f64) {
        return Some(v);
    }
    as_integer(value).map(|v| v as f64)
}

pub fn as_i64(fields: &Map<String, Value>, key: &str) -> Option<i64> {
    as_integer(fields.get(key)?)
}

fn as_integer(value: &Value) -> Option<i64> {
    let raw = value.get("integerValue")?;
    raw.as_i64()
        .or_else(|| raw.as_str().and_then(|s| s.parse().ok()))
}

pub fn as_bool(fields: &Map<String, Value>, key: &str) -> Option<bool> {
    fields.get(key)?.get("booleanValue")?.as_bool()
}

/// Day-granularity read: the time-of-day portion is stripped.
pub fn as_date(fields: &Map<String, Value>, key: &str) -> Option<NaiveDate> {
    let raw = fields.get(key)?.get("timestampValue")?.as_str()?;
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

pub fn as_string_array(fields: &Map<String, Value>, key: &str) -> Option<Vec<String>> {
    let values = fields.get(key)?.get("arrayValue")?.get("values");
    match values {
        // An empty array is stored without a "values" key
        None => Some(Vec::new()),
        Some(values) => Some(
            values
                .as_array()?
                .iter()
                .filter_map(|v| v.get("stringValue").and_then(Value::as_str))
                .map(|s| s.to_string())
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_of(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_string_round_trip() {
        let fields = fields_of(json!({ "notes": string_value("slept well") }));
        assert_eq!(as_string(&fields, "notes").as_deref(), Some("slept well"));
    }

    #[test]
    fn test_double_round_trip() {
        let fields = fields_of(json!({ "anxietyLevel": double_value(0.42) }));
        assert_eq!(as_f64(&fields, "anxietyLevel"), Some(0.42));
    }

    #[test]
    fn test_integer_travels_as_string() {
        let value = integer_value(7);
        assert_eq!(value["integerValue"], json!("7"));

        let fields = fields_of(json!({ "checkInCount": value }));
        assert_eq!(as_i64(&fields, "checkInCount"), Some(7));
    }

    #[test]
    fn test_f64_accepts_integer_encoding() {
        let fields = fields_of(json!({ "level": { "integerValue": "1" } }));
        assert_eq!(as_f64(&fields, "level"), Some(1.0));
    }

    #[test]
    fn test_date_round_trip_strips_time() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 24).unwrap();
        let fields = fields_of(json!({ "date": date_value(date) }));
        assert_eq!(as_date(&fields, "date"), Some(date));

        let fields = fields_of(json!({
            "date": { "timestampValue": "2024-10-24T18:45:11Z" }
        }));
        assert_eq!(as_date(&fields, "date"), Some(date));
    }

    #[test]
    fn test_string_array_round_trip() {
        let fields = fields_of(json!({
            "selectedHabits": string_array_value(["meditation", "exercise"])
        }));
        assert_eq!(
            as_string_array(&fields, "selectedHabits"),
            Some(vec!["meditation".to_string(), "exercise".to_string()])
        );
    }

    #[test]
    fn test_empty_array_has_no_values_key() {
        let fields = fields_of(json!({
            "selectedHabits": { "arrayValue": {} }
        }));
        assert_eq!(as_string_array(&fields, "selectedHabits"), Some(Vec::new()));
    }

    #[test]
    fn test_wrong_shape_decodes_to_none() {
        let fields = fields_of(json!({
            "anxietyLevel": string_value("not a number"),
            "date": { "timestampValue": "garbage" }
        }));
        assert_eq!(as_f64(&fields, "anxietyLevel"), None);
        assert_eq!(as_date(&fields, "date"), None);
        assert_eq!(as_string(&fields, "missing"), None);
    }
}
