//! Parameter map handed to the signers.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::Value;

/// Params maps parameter names to scalar or collection values.
///
/// Order is irrelevant: the canonicalizer sorts keys itself and never
/// reorders the caller's map.
pub type Params = HashMap<String, Value>;

/// Render a scalar parameter value the way it is concatenated into the
/// string to sign.
///
/// | value           | rendered              |
/// |-----------------|-----------------------|
/// | string          | verbatim              |
/// | integer         | decimal               |
/// | float           | 14 significant digits |
/// | `true`          | `"1"`                 |
/// | `false`, `null` | `""`                  |
///
/// Arrays and objects are collections and return `None`: the caller must
/// skip both the key and the value.
pub fn scalar_to_string(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(if let Some(i) = n.as_i64() {
            i.to_string()
        } else if let Some(u) = n.as_u64() {
            u.to_string()
        } else {
            // Non-finite floats can't be represented by serde_json, so as_f64 is total here.
            n.as_f64().map(format_float).unwrap_or_default()
        })),
        Value::Bool(true) => Some(Cow::Borrowed("1")),
        Value::Bool(false) | Value::Null => Some(Cow::Borrowed("")),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Format a float with 14 significant digits and trailing zeros removed.
///
/// Exponent form (`1.0E+25`, `1.5E-7`) is used when the decimal exponent is
/// below -4 or at least 14, otherwise positional notation.
fn format_float(f: f64) -> String {
    const PRECISION: i32 = 14;

    if f == 0.0 {
        return if f.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // `{:.13e}` rounds correctly to 14 significant digits, e.g. `1.2340000000000e-7`.
    let sci = format!("{:.13e}", f.abs());
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or_default();
    let digits = mantissa.replace('.', "");
    let digits = digits.trim_end_matches('0');

    let mut s = String::with_capacity(digits.len() + 8);
    if f.is_sign_negative() {
        s.push('-');
    }

    if exp < -4 || exp >= PRECISION {
        let (first, rest) = digits.split_at(1);
        s.push_str(first);
        s.push('.');
        s.push_str(if rest.is_empty() { "0" } else { rest });
        s.push('E');
        s.push(if exp < 0 { '-' } else { '+' });
        s.push_str(&exp.abs().to_string());
    } else if exp < 0 {
        s.push_str("0.");
        for _ in 0..(-exp - 1) {
            s.push('0');
        }
        s.push_str(digits);
    } else {
        let int_len = exp as usize + 1;
        if digits.len() <= int_len {
            s.push_str(digits);
            for _ in digits.len()..int_len {
                s.push('0');
            }
        } else {
            s.push_str(&digits[..int_len]);
            s.push('.');
            s.push_str(&digits[int_len..]);
        }
    }
    s
}
