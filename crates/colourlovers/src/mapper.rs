//! Generic element-to-attributes mapping shared by every record.
//!
//! [`AttributeBag::from_element`] looks at the immediate children of one element
//! only. Each leaf child becomes a field: its tag goes through
//! [`tag_to_field`] and its text through [`coerce`]. Children that have children
//! of their own (`rgb`, `colors`, `comments`, ...) are left for the owning
//! record to pick up.

use serde::ser::Serializer;

use super::*;

/// Field name to coerced value mapping, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBag {
  /// Field and value pairs, field names unique
  entries: Vec<(String, Value)>,
}

impl AttributeBag {
  /// Maps the leaf children of `element` into a new bag.
  ///
  /// # Errors
  ///
  /// Returns [`ColourLoversError::MalformedValue`] if any leaf does not fit the
  /// kind declared for its field.
  ///
  /// # Examples
  ///
  /// ```
  /// use colourlovers::{element::Element, mapper::AttributeBag};
  ///
  /// let element = Element::parse(b"<lover><numColors>3,498</numColors></lover>").unwrap();
  /// let bag = AttributeBag::from_element(&element).unwrap();
  /// assert_eq!(bag.integer("num_colors"), Some(3498));
  /// ```
  pub fn from_element(element: &Element) -> Result<Self> {
    let mut bag = Self::default();
    for child in element.children().filter(|child| child.is_leaf()) {
      let field = tag_to_field(child.name());
      let value = coerce(&field, child.text())?;
      trace!("<{}> {} = {:?}", element.name(), field, value);
      bag.insert(field, value);
    }
    Ok(bag)
  }

  /// Sets `field`, replacing an earlier value in place.
  pub fn insert(&mut self, field: impl Into<String>, value: Value) {
    let field = field.into();
    match self.entries.iter_mut().find(|(name, _)| *name == field) {
      Some((_, existing)) => *existing = value,
      None => self.entries.push((field, value)),
    }
  }

  /// Value of `field`, `None` if the element had no such leaf.
  pub fn get(&self, field: &str) -> Option<&Value> {
    self.entries.iter().find(|(name, _)| name == field).map(|(_, value)| value)
  }

  /// Returns `true` if the element had a leaf for `field`, even an empty one.
  pub fn contains(&self, field: &str) -> bool { self.get(field).is_some() }

  /// Text of a text or hex field.
  pub fn text(&self, field: &str) -> Option<&str> { self.get(field).and_then(Value::as_str) }

  /// Value of an integer field.
  pub fn integer(&self, field: &str) -> Option<i64> { self.get(field).and_then(Value::as_integer) }

  /// Value of a float field, integers are widened.
  pub fn float(&self, field: &str) -> Option<f64> { self.get(field).and_then(Value::as_float) }

  /// Value of a date field.
  pub fn date(&self, field: &str) -> Option<NaiveDateTime> {
    self.get(field).and_then(Value::as_date)
  }

  /// Value of a float list field.
  pub fn float_list(&self, field: &str) -> Option<&[f64]> {
    self.get(field).and_then(Value::as_float_list)
  }

  /// Fields and values in document order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
    self.entries.iter().map(|(name, value)| (name.as_str(), value))
  }

  /// Number of fields.
  pub fn len(&self) -> usize { self.entries.len() }

  /// Returns `true` if the element had no leaf children.
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Serialize for AttributeBag {
  fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
    serializer.collect_map(self.iter())
  }
}
