//! Conversion of raw leaf text into typed values.
//!
//! Each known field name is declared with a [`FieldKind`]; everything the table
//! does not know about is plain text. Conversion is deterministic in the kind
//! and the raw text, and an empty leaf is always [`Value::Absent`].

use super::*;

/// Format of every timestamp the service emits, e.g. `2008-03-17 11:22:21`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How the raw text of a field is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldKind {
  /// Text kept verbatim
  Text,
  /// Signed 64-bit integer, thousands separators allowed (`3,498`); larger
  /// values are malformed
  Integer,
  /// Floating point number
  Float,
  /// Timestamp in [`DATE_FORMAT`]
  Date,
  /// Hex color code without a leading `#`
  HexColor,
  /// Comma separated floating point numbers
  FloatList,
}

/// Declared kinds of the fields the service is known to return.
const FIELD_KINDS: &[(&str, FieldKind)] = &[
  ("id", FieldKind::Integer),
  ("rank", FieldKind::Integer),
  ("rating", FieldKind::Integer),
  ("num_views", FieldKind::Integer),
  ("num_votes", FieldKind::Integer),
  ("num_lovers", FieldKind::Integer),
  ("num_colors", FieldKind::Integer),
  ("num_hearts", FieldKind::Float),
  ("num_palettes", FieldKind::Integer),
  ("num_patterns", FieldKind::Integer),
  ("num_comments", FieldKind::Integer),
  ("num_comments_made", FieldKind::Integer),
  ("num_comments_on_profile", FieldKind::Integer),
  ("total", FieldKind::Integer),
  ("color_widths", FieldKind::FloatList),
  ("date_created", FieldKind::Date),
  ("date_registered", FieldKind::Date),
  ("date_last_active", FieldKind::Date),
  ("hex", FieldKind::HexColor),
];

impl FieldKind {
  /// Looks up the declared kind of `field`, defaulting to [`FieldKind::Text`].
  pub fn of(field: &str) -> Self {
    FIELD_KINDS.iter().find(|(name, _)| *name == field).map_or(FieldKind::Text, |(_, kind)| *kind)
  }
}

impl Display for FieldKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      FieldKind::Text => "text",
      FieldKind::Integer => "an integer",
      FieldKind::Float => "a float",
      FieldKind::Date => "a date",
      FieldKind::HexColor => "a hex color",
      FieldKind::FloatList => "a list of floats",
    };
    f.write_str(name)
  }
}

/// A coerced field value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
  /// Plain text
  Text(String),
  /// Integer value
  Integer(i64),
  /// Floating point value
  Float(f64),
  /// Timestamp, the service gives no timezone
  Date(NaiveDateTime),
  /// Lowercase hex color with a single leading `#`
  Hex(String),
  /// Ordered list of floats
  FloatList(Vec<f64>),
  /// The element was present but empty
  Absent,
}

impl Value {
  /// Returns `true` for an empty leaf.
  pub fn is_absent(&self) -> bool { matches!(self, Value::Absent) }

  /// Text content of a [`Value::Text`] or [`Value::Hex`].
  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::Text(text) | Value::Hex(text) => Some(text),
      _ => None,
    }
  }

  /// Numeric value of a [`Value::Integer`].
  pub fn as_integer(&self) -> Option<i64> {
    match self {
      Value::Integer(value) => Some(*value),
      _ => None,
    }
  }

  /// Numeric value of a [`Value::Float`], integers are widened.
  pub fn as_float(&self) -> Option<f64> {
    match self {
      Value::Float(value) => Some(*value),
      Value::Integer(value) => Some(*value as f64),
      _ => None,
    }
  }

  /// Timestamp of a [`Value::Date`].
  pub fn as_date(&self) -> Option<NaiveDateTime> {
    match self {
      Value::Date(value) => Some(*value),
      _ => None,
    }
  }

  /// Entries of a [`Value::FloatList`].
  pub fn as_float_list(&self) -> Option<&[f64]> {
    match self {
      Value::FloatList(values) => Some(values),
      _ => None,
    }
  }
}

/// Coerces the raw text of `field` according to its declared kind.
///
/// `raw` is `None` for an empty or self-closing element, which yields
/// [`Value::Absent`] whatever the kind.
///
/// # Errors
///
/// Returns [`ColourLoversError::MalformedValue`] when the text does not fit the
/// declared kind.
pub fn coerce(field: &str, raw: Option<&str>) -> Result<Value> {
  let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
    return Ok(Value::Absent);
  };

  match FieldKind::of(field) {
    FieldKind::Text => Ok(Value::Text(raw.to_string())),
    FieldKind::Integer => parse_integer(field, raw).map(Value::Integer),
    FieldKind::Float => parse_float(field, raw).map(Value::Float),
    FieldKind::Date => parse_date(field, raw).map(Value::Date),
    FieldKind::HexColor => normalize_hex(field, raw).map(Value::Hex),
    FieldKind::FloatList => raw
      .split(',')
      .map(|segment| segment.trim().parse::<f64>())
      .collect::<core::result::Result<Vec<_>, _>>()
      .map(Value::FloatList)
      .map_err(|_| malformed(field, raw, FieldKind::FloatList)),
  }
}

/// Parses an integer after stripping thousands separators.
///
/// Values outside the `i64` range are reported as malformed rather than
/// wrapped or saturated.
pub fn parse_integer(field: &str, raw: &str) -> Result<i64> {
  raw.replace(',', "").trim().parse().map_err(|_| malformed(field, raw, FieldKind::Integer))
}

/// Parses a floating point number.
pub fn parse_float(field: &str, raw: &str) -> Result<f64> {
  raw.trim().parse().map_err(|_| malformed(field, raw, FieldKind::Float))
}

/// Parses a timestamp in [`DATE_FORMAT`].
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDateTime> {
  NaiveDateTime::parse_from_str(raw.trim(), DATE_FORMAT)
    .map_err(|_| malformed(field, raw, FieldKind::Date))
}

/// Lowercases a hex color and gives it exactly one leading `#`.
pub fn normalize_hex(field: &str, raw: &str) -> Result<String> {
  let digits = raw.trim().trim_start_matches('#');
  if digits.is_empty() {
    return Err(malformed(field, raw, FieldKind::HexColor));
  }
  Ok(format!("#{}", digits.to_lowercase()))
}

/// Error for `raw` not fitting `kind`.
fn malformed(field: &str, raw: &str, kind: FieldKind) -> ColourLoversError {
  ColourLoversError::MalformedValue { field: field.to_string(), value: raw.to_string(), kind }
}
