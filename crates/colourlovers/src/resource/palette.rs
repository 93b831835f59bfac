use super::*;

/// A palette: an ordered set of hex colors with optional widths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
  /// Leaf fields of the `<palette>` element
  attributes: AttributeBag,
  /// Hex colors under `<colors>`, in document order
  colors:     Vec<String>,
}

impl Palette {
  /// Hex colors in document order, lowercase with a leading `#`.
  pub fn colors(&self) -> &[String] { &self.colors }

  /// Relative color widths, only returned when `show_palette_widths` was requested.
  pub fn color_widths(&self) -> Option<&[f64]> { self.attributes.float_list("color_widths") }
}

impl Variant for Palette {
  const KIND: ResourceKind = ResourceKind::Palette;

  fn from_element(element: &Element) -> Result<Self> {
    Ok(Self { attributes: AttributeBag::from_element(element)?, colors: collect_hex(element)? })
  }
}

impl Attributed for Palette {
  fn attributes(&self) -> &AttributeBag { &self.attributes }
}

/// A pattern and the hex colors it is built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
  /// Leaf fields of the `<pattern>` element
  attributes: AttributeBag,
  /// Hex colors under `<colors>`, in document order
  colors:     Vec<String>,
}

impl Pattern {
  /// Hex colors in document order, lowercase with a leading `#`.
  pub fn colors(&self) -> &[String] { &self.colors }
}

impl Variant for Pattern {
  const KIND: ResourceKind = ResourceKind::Pattern;

  fn from_element(element: &Element) -> Result<Self> {
    Ok(Self { attributes: AttributeBag::from_element(element)?, colors: collect_hex(element)? })
  }
}

impl Attributed for Pattern {
  fn attributes(&self) -> &AttributeBag { &self.attributes }
}

/// Collects every `<hex>` under `<colors>`; no `<colors>` child means no colors.
fn collect_hex(element: &Element) -> Result<Vec<String>> {
  let Some(colors) = element.child("colors") else {
    return Ok(Vec::new());
  };
  colors
    .children_named("hex")
    .map(|hex| normalize_hex("colors.hex", hex.text().unwrap_or_default()))
    .collect()
}
