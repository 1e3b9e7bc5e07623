//! Canonical comparison keys for structural (deep) equality.
//!
//! Duplicate detection renders each value to a canonical string:
//! primitives via their natural text form, composite values recursively
//! with object keys sorted lexicographically by their string form and
//! `key=value` pairs joined with separators. The rendering is a
//! comparison aid only — it is never persisted and need not be
//! reversible.

use alloc::string::{String, ToString};

/// A value that can be rendered to a canonical comparison key.
///
/// Two values are duplicates iff their canonical keys are equal.
pub trait CanonicalKey {
    fn canonical_key(&self) -> String;
}

macro_rules! display_key {
    ($($t:ty),+ $(,)?) => {
        $(
            impl CanonicalKey for $t {
                fn canonical_key(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

display_key!(
    bool, char, f32, f64, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, String
);

impl CanonicalKey for &str {
    fn canonical_key(&self) -> String {
        (*self).to_string()
    }
}

#[cfg(feature = "json")]
mod json_value {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::fmt::Write;

    use serde_json::Value;

    use super::CanonicalKey;

    impl CanonicalKey for Value {
        fn canonical_key(&self) -> String {
            let mut out = String::new();
            render(self, &mut out);
            out
        }
    }

    fn render(value: &Value, out: &mut String) {
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Value::Number(n) => {
                let _ = write!(out, "{n}");
            }
            Value::String(s) => out.push_str(s),
            Value::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    render(item, out);
                }
                out.push(']');
            }
            Value::Object(map) => {
                // Sort by the string form of the key; do not rely on the
                // map's internal ordering.
                let mut pairs: Vec<(&String, &Value)> = map.iter().collect();
                pairs.sort_by(|a, b| a.0.cmp(b.0));
                out.push('{');
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        out.push('|');
                    }
                    let _ = write!(out, "{k}=");
                    render(v, out);
                }
                out.push('}');
            }
        }
    }
}
