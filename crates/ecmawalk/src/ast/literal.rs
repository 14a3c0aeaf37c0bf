//! Literal decoding from ESTree JSON
//!
//! ESTree encodes BigInt and RegExp literals out of band: the JSON `value`
//! is `null` (or `{}`) and the real payload sits in `bigint` / `regex`.

use serde::Deserialize;

use super::Span;

/// A literal node with its decoded value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawLiteral")]
pub struct Literal {
    /// Source offsets
    pub span: Span,

    /// The decoded literal value
    pub value: LiteralValue,
}

/// The value carried by a literal node.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `"text"` or `'text'`
    String(String),

    /// Numeric literal
    Number(f64),

    /// `true` / `false`
    Boolean(bool),

    /// `null`
    Null,

    /// `123n`
    BigInt(i128),

    /// `/pattern/flags`
    Regex(RegexLiteral),
}

/// Pattern and flags of a regular-expression literal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegexLiteral {
    /// Pattern source between the slashes
    pub pattern: String,

    /// Flag letters after the closing slash
    #[serde(default)]
    pub flags: String,
}

/// Wire shape of an ESTree `Literal`.
#[derive(Deserialize)]
struct RawLiteral {
    #[serde(default)]
    start: usize,
    #[serde(default)]
    end: usize,
    #[serde(default)]
    value: serde_json::Value,
    #[serde(default)]
    raw: Option<String>,
    #[serde(default)]
    regex: Option<RegexLiteral>,
    #[serde(default)]
    bigint: Option<String>,
}

impl TryFrom<RawLiteral> for Literal {
    type Error = String;

    fn try_from(raw: RawLiteral) -> Result<Self, Self::Error> {
        let span = Span::new(raw.start, raw.end);

        if let Some(digits) = raw.bigint {
            let value = parse_bigint_literal(&digits)
                .ok_or_else(|| format!("bigint literal `{}n` is out of range", digits))?;
            return Ok(Literal {
                span,
                value: LiteralValue::BigInt(value),
            });
        }

        if let Some(regex) = raw.regex {
            return Ok(Literal {
                span,
                value: LiteralValue::Regex(regex),
            });
        }

        let value = match raw.value {
            serde_json::Value::String(s) => LiteralValue::String(s),
            serde_json::Value::Bool(b) => LiteralValue::Boolean(b),
            serde_json::Value::Number(n) => LiteralValue::Number(
                n.as_f64()
                    .ok_or_else(|| format!("numeric literal `{}` is not representable", n))?,
            ),
            // JSON has no spelling for Infinity, so overflowing numerals arrive as null.
            serde_json::Value::Null => match raw.raw.as_deref() {
                None | Some("null") => LiteralValue::Null,
                Some(text) => LiteralValue::Number(parse_number_raw(text)?),
            },
            other => return Err(format!("unexpected literal value `{}`", other)),
        };

        Ok(Literal { span, value })
    }
}

/// Parse the digits of a BigInt literal (without the trailing `n`).
fn parse_bigint_literal(digits: &str) -> Option<i128> {
    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    let lower = cleaned.to_ascii_lowercase();

    if let Some(hex) = lower.strip_prefix("0x") {
        i128::from_str_radix(hex, 16).ok()
    } else if let Some(oct) = lower.strip_prefix("0o") {
        i128::from_str_radix(oct, 8).ok()
    } else if let Some(bin) = lower.strip_prefix("0b") {
        i128::from_str_radix(bin, 2).ok()
    } else {
        lower.parse::<i128>().ok()
    }
}

fn parse_number_raw(text: &str) -> Result<f64, String> {
    let cleaned: String = text.chars().filter(|c| *c != '_').collect();
    cleaned
        .parse::<f64>()
        .map_err(|_| format!("cannot decode numeric literal `{}`", text))
}
