//! Typed records for the content the service exposes.
//!
//! Every record type implements [`Variant`]: it names the root tag it parses and
//! builds itself from one element by running the generic
//! [`AttributeBag::from_element`] mapping and then extracting its own nested
//! structures (colors, comments, rgb/hsv values).
//!
//! # Examples
//!
//! ```
//! use colourlovers::{element::Element, prelude::*, resource::Palette};
//!
//! let element = Element::parse(
//!   b"<palette><id>12345</id><colors><hex>423238</hex><hex>F5DE8C</hex></colors></palette>",
//! )
//! .unwrap();
//! let palette = Palette::from_element(&element).unwrap();
//!
//! assert_eq!(palette.id(), Some(12345));
//! assert_eq!(palette.colors(), ["#423238", "#f5de8c"]);
//! ```

use super::*;

mod color;
mod lover;
mod palette;
mod stat;

pub use color::*;
pub use lover::*;
pub use palette::*;
pub use stat::*;

/// The categories of content the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
  /// Single colors
  Color,
  /// Palettes of up to five colors
  Palette,
  /// Patterns built from a set of colors
  Pattern,
  /// Registered users
  Lover,
  /// Content totals
  Stat,
}

impl ResourceKind {
  /// Element name a record of this kind is parsed from.
  pub fn root_tag(self) -> &'static str {
    match self {
      ResourceKind::Color => "color",
      ResourceKind::Palette => "palette",
      ResourceKind::Pattern => "pattern",
      ResourceKind::Lover => "lover",
      ResourceKind::Stat => "stats",
    }
  }
}

/// A record type that can be built from one XML element.
pub trait Variant: Sized {
  /// The kind of content this record represents.
  const KIND: ResourceKind;

  /// Element name this record is parsed from.
  fn root_tag() -> &'static str { Self::KIND.root_tag() }

  /// Builds the record from its element.
  ///
  /// # Errors
  ///
  /// - [`ColourLoversError::MalformedValue`] if a leaf does not fit its field kind
  /// - [`ColourLoversError::MissingRequiredField`] if a mandatory nested structure is absent
  fn from_element(element: &Element) -> Result<Self>;
}

/// Accessors for the fields most records share.
///
/// All of them read from the record's [`AttributeBag`] and return `None` when the
/// field is missing or empty.
pub trait Attributed {
  /// The generic field mapping of the record.
  fn attributes(&self) -> &AttributeBag;

  /// Numeric id of the record.
  fn id(&self) -> Option<i64> { self.attributes().integer("id") }

  /// Title given by its creator.
  fn title(&self) -> Option<&str> { self.attributes().text("title") }

  /// User name of the creator, or of the lover itself.
  fn user_name(&self) -> Option<&str> { self.attributes().text("user_name") }

  /// Description text, `None` when left blank.
  fn description(&self) -> Option<&str> { self.attributes().text("description") }

  /// Number of page views.
  fn num_views(&self) -> Option<i64> { self.attributes().integer("num_views") }

  /// Number of votes.
  fn num_votes(&self) -> Option<i64> { self.attributes().integer("num_votes") }

  /// Number of comments.
  fn num_comments(&self) -> Option<i64> { self.attributes().integer("num_comments") }

  /// Average heart rating.
  fn num_hearts(&self) -> Option<f64> { self.attributes().float("num_hearts") }

  /// Position in the overall ranking.
  fn rank(&self) -> Option<i64> { self.attributes().integer("rank") }

  /// When the record was created.
  fn date_created(&self) -> Option<NaiveDateTime> { self.attributes().date("date_created") }

  /// Page of the record on the website.
  fn url(&self) -> Option<&str> { self.attributes().text("url") }

  /// Rendered image of the record.
  fn image_url(&self) -> Option<&str> { self.attributes().text("image_url") }

  /// Small badge image of the record.
  fn badge_url(&self) -> Option<&str> { self.attributes().text("badge_url") }

  /// Canonical API location of the record.
  fn api_url(&self) -> Option<&str> { self.attributes().text("api_url") }
}

/// Any record, as returned by name-based dispatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum Record {
  /// A `<color>` element
  Color(Color),
  /// A `<palette>` element
  Palette(Palette),
  /// A `<pattern>` element
  Pattern(Pattern),
  /// A `<lover>` element
  Lover(Lover),
  /// A `<stats>` document
  Stat(Stat),
}

impl Record {
  /// Builds the record of the given kind from its element.
  pub fn from_element(kind: ResourceKind, element: &Element) -> Result<Self> {
    Ok(match kind {
      ResourceKind::Color => Record::Color(Color::from_element(element)?),
      ResourceKind::Palette => Record::Palette(Palette::from_element(element)?),
      ResourceKind::Pattern => Record::Pattern(Pattern::from_element(element)?),
      ResourceKind::Lover => Record::Lover(Lover::from_element(element)?),
      ResourceKind::Stat => Record::Stat(Stat::from_element(element)?),
    })
  }

  /// The kind of the wrapped record.
  pub fn kind(&self) -> ResourceKind {
    match self {
      Record::Color(_) => ResourceKind::Color,
      Record::Palette(_) => ResourceKind::Palette,
      Record::Pattern(_) => ResourceKind::Pattern,
      Record::Lover(_) => ResourceKind::Lover,
      Record::Stat(_) => ResourceKind::Stat,
    }
  }

  /// The generic field mapping of the wrapped record.
  pub fn attributes(&self) -> &AttributeBag {
    match self {
      Record::Color(color) => color.attributes(),
      Record::Palette(palette) => palette.attributes(),
      Record::Pattern(pattern) => pattern.attributes(),
      Record::Lover(lover) => lover.attributes(),
      Record::Stat(stat) => stat.attributes(),
    }
  }
}

/// First child named `name`, which must be present.
fn required_child<'a>(element: &'a Element, name: &str) -> Result<&'a Element> {
  element.child(name).ok_or_else(|| {
    ColourLoversError::MissingRequiredField(format!("{}.{}", element.name(), name))
  })
}

/// Text of the first child named `name`, which must be present and non-empty.
fn required_text<'a>(element: &'a Element, name: &str) -> Result<&'a str> {
  required_child(element, name)?.text().ok_or_else(|| {
    ColourLoversError::MissingRequiredField(format!("{}.{}", element.name(), name))
  })
}

/// Reads a bounded integer component such as `red` or `hue`.
fn component<T>(element: &Element, name: &str, max: i64) -> Result<T>
where T: TryFrom<i64> {
  let raw = required_text(element, name)?;
  let field = format!("{}.{}", element.name(), name);
  let value = parse_integer(&field, raw)?;
  if !(0..=max).contains(&value) {
    return Err(ColourLoversError::MalformedValue {
      field,
      value: raw.to_string(),
      kind: FieldKind::Integer,
    });
  }
  T::try_from(value).map_err(|_| ColourLoversError::MalformedValue {
    field,
    value: raw.to_string(),
    kind: FieldKind::Integer,
  })
}
