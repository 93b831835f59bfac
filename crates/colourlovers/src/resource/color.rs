use super::*;

/// A single color, with its RGB and HSV values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Color {
  /// Leaf fields of the `<color>` element
  attributes: AttributeBag,
  /// Value of the `<rgb>` child
  rgb:        Rgb,
  /// Value of the `<hsv>` child
  hsv:        Hsv,
}

impl Color {
  /// Value of the `<rgb>` child.
  pub fn rgb(&self) -> &Rgb { &self.rgb }

  /// Value of the `<hsv>` child.
  pub fn hsv(&self) -> &Hsv { &self.hsv }

  /// Hex code as reported by the service, e.g. `#6b4106`.
  pub fn hex(&self) -> Option<&str> { self.attributes.text("hex") }
}

impl Variant for Color {
  const KIND: ResourceKind = ResourceKind::Color;

  fn from_element(element: &Element) -> Result<Self> {
    let attributes = AttributeBag::from_element(element)?;
    let rgb = Rgb::from_element(required_child(element, "rgb")?)?;
    let hsv = Hsv::from_element(required_child(element, "hsv")?)?;
    Ok(Self { attributes, rgb, hsv })
  }
}

impl Attributed for Color {
  fn attributes(&self) -> &AttributeBag { &self.attributes }
}

/// An RGB color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
  /// Red component, 0-255
  pub red:   u8,
  /// Green component, 0-255
  pub green: u8,
  /// Blue component, 0-255
  pub blue:  u8,
}

impl Rgb {
  /// Reads the `red`, `green` and `blue` children of an `<rgb>` element.
  pub fn from_element(element: &Element) -> Result<Self> {
    Ok(Self {
      red:   component(element, "red", 255)?,
      green: component(element, "green", 255)?,
      blue:  component(element, "blue", 255)?,
    })
  }

  /// Lowercase hex code with a leading `#`.
  ///
  /// ```
  /// use colourlovers::resource::Rgb;
  ///
  /// assert_eq!(Rgb { red: 107, green: 65, blue: 6 }.hex(), "#6b4106");
  /// ```
  pub fn hex(&self) -> String { format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue) }
}

/// An HSV color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Hsv {
  /// Hue in degrees, 0 to 360
  pub hue:        u16,
  /// Saturation in percent
  pub saturation: u8,
  /// Value (brightness) in percent
  pub value:      u8,
}

impl Hsv {
  /// Reads the `hue`, `saturation` and `value` children of an `<hsv>` element.
  pub fn from_element(element: &Element) -> Result<Self> {
    Ok(Self {
      hue:        component(element, "hue", 360)?,
      saturation: component(element, "saturation", 255)?,
      value:      component(element, "value", 255)?,
    })
  }
}
