use serde_json::Value;

/// Normalizes a loosely-typed numeric field to a definite `f64`.
///
/// The data-entry side of the dashboard sends numbers, numeric strings, or
/// nothing at all for the same field. Anything that does not carry a usable
/// number maps to 0.0: absent fields, null, booleans, arrays, objects,
/// non-numeric strings.
pub fn to_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let parsed: f64 = s.trim().parse().unwrap_or(f64::NAN);
            if parsed.is_nan() {
                0.0
            } else {
                parsed
            }
        }
        _ => 0.0,
    }
}
