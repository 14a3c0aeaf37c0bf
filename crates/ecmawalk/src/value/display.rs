//! Display and Debug implementations for Value
//!
//! `Display` is what `console.log` prints for a top-level argument.
//! `Debug` is the nested inspection form, where strings are quoted.

use std::fmt;

use super::number::number_to_string;
use super::*;

fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n == 0.0 && n.is_sign_negative() {
        write!(f, "-0")
    } else {
        write!(f, "{}", number_to_string(n))
    }
}

fn is_identifier_name(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    write!(f, "'")?;
    for c in s.chars() {
        match c {
            '\'' => write!(f, "\\'")?,
            '\\' => write!(f, "\\\\")?,
            '\n' => write!(f, "\\n")?,
            '\t' => write!(f, "\\t")?,
            c => write!(f, "{}", c)?,
        }
    }
    write!(f, "'")
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write_number(f, *n),
            Value::String(s) => write_quoted(f, s),
            Value::BigInt(b) => write!(f, "{}n", b),
            Value::Regex(r) => write!(f, "/{}/{}", r.pattern, r.flags),
            Value::Callable(func) => write!(f, "[Function: {}]", func.name),

            Value::Object(o) => {
                if o.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;
                for (i, (k, v)) in o.properties.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    if is_identifier_name(k) {
                        write!(f, "{}", k)?;
                    } else {
                        write_quoted(f, k)?;
                    }
                    write!(f, ": {:?}", v)?;
                }
                write!(f, " }}")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s.as_ref()), // No quotes for Display
            _ => fmt::Debug::fmt(self, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_primitives() {
        assert_eq!(Value::Number(5.0).to_string(), "5");
        assert_eq!(Value::Number(-0.0).to_string(), "-0");
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(Value::BigInt(10).to_string(), "10n");
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::regex("a", "g").to_string(), "/a/g");
    }

    #[test]
    fn test_debug_quotes_strings() {
        assert_eq!(format!("{:?}", Value::from("it's")), "'it\\'s'");
    }

    #[test]
    fn test_display_object() {
        let obj = ObjectValue::new()
            .with_property("a", Value::Number(1.0))
            .with_property("b-c", Value::from("x"))
            .with_property("log", Value::callable(BuiltinFn::new("log", -1, |_| Ok(Value::Undefined))));
        assert_eq!(
            Value::object(obj).to_string(),
            "{ a: 1, 'b-c': 'x', log: [Function: log] }"
        );
        assert_eq!(Value::object(ObjectValue::new()).to_string(), "{}");
    }
}
