use super::*;

/// Total number of items the service holds for one content kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stat {
  /// Value of the mandatory `<total>` child
  pub total:  i64,
  /// Leaf fields of the `<stats>` element
  attributes: AttributeBag,
}

impl Variant for Stat {
  const KIND: ResourceKind = ResourceKind::Stat;

  /// Reads a `<stats>` element; a missing or empty `<total>` is an error.
  fn from_element(element: &Element) -> Result<Self> {
    let total = parse_integer("total", required_text(element, "total")?)?;
    Ok(Self { total, attributes: AttributeBag::from_element(element)? })
  }
}

impl Attributed for Stat {
  fn attributes(&self) -> &AttributeBag { &self.attributes }
}
