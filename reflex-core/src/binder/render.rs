//! Rendering data values into the tree.
//!
//! Text content and attribute values follow the usual string coercion of
//! the DOM: strings verbatim, numbers and booleans in their display form,
//! `null` as `null`, arrays joined with commas, objects as
//! `[object Object]`. A property that does not exist renders as
//! `undefined`. The value property renders `null` as the empty string.

use serde_json::{Number, Value};

const UNDEFINED: &str = "undefined";

/// String written into text content and attributes.
pub fn text_of(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED.to_owned(),
        Some(value) => stringify(value),
    }
}

/// String written into the value property.
pub fn value_of(value: Option<&Value>) -> String {
    match value {
        Some(Value::Null) => String::new(),
        other => text_of(other),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_owned(),
    }
}

fn number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() => float(f),
        _ => n.to_string(),
    }
}

/// Shortest round-trip digits, laid out the way number-to-string conversion
/// does in the DOM: plain decimal for decimal exponents in `-7 < e < 21`,
/// `d.ddde+X` otherwise.
fn float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_owned();
    }

    let sign = if f < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", f.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat(n.unsigned_abs() as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let frac = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let e = n - 1;
        let e_sign = if e >= 0 { '+' } else { '-' };
        format!("{first}{frac}e{e_sign}{}", e.unsigned_abs())
    };

    format!("{sign}{body}")
}
