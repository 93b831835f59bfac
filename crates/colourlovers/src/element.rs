//! In-memory XML tree built from a response body.
//!
//! The service answers with small documents, so the whole body is read into a
//! tree of [`Element`]s before any record is built. Text and CDATA content are
//! kept verbatim per element, except for the whitespace between child elements; attributes, comments and processing instructions are not
//! used by the service and are skipped.

use quick_xml::{events::Event, Reader};

use super::*;

/// One XML element with its text and child elements, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
  /// Tag name
  name:     String,
  /// Concatenated text and CDATA content
  text:     String,
  /// Child elements in document order
  children: Vec<Element>,
}

impl Element {
  /// Parses a complete document and returns its root element.
  ///
  /// # Errors
  ///
  /// Returns [`ColourLoversError::RetrievalFailure`] if the body is empty, is not
  /// valid UTF-8, is not well-formed XML, has no root element or has content
  /// after the root.
  ///
  /// # Examples
  ///
  /// ```
  /// use colourlovers::element::Element;
  ///
  /// let root = Element::parse(b"<stats><total>1500563</total></stats>").unwrap();
  /// assert_eq!(root.name(), "stats");
  /// assert_eq!(root.child_text("total"), Some("1500563"));
  /// ```
  pub fn parse(data: &[u8]) -> Result<Self> {
    let xml = utf8(data)?;
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
      let event = match reader.read_event() {
        Ok(event) => event,
        Err(e) => {
          debug!("Malformed XML at position {}: {}", reader.buffer_position(), e);
          return Err(ColourLoversError::RetrievalFailure);
        },
      };

      match event {
        Event::Start(e) => {
          if root.is_some() {
            return Err(ColourLoversError::RetrievalFailure);
          }
          stack.push(Element::named(utf8(e.name().as_ref())?));
        },
        Event::Empty(e) => {
          let element = Element::named(utf8(e.name().as_ref())?);
          attach(&mut stack, &mut root, element)?;
        },
        Event::End(_) => {
          let mut element = stack.pop().ok_or(ColourLoversError::RetrievalFailure)?;
          // Indentation between child elements is not content.
          if !element.is_leaf() && element.text.trim().is_empty() {
            element.text.clear();
          }
          attach(&mut stack, &mut root, element)?;
        },
        Event::Text(e) => {
          let text = e.unescape().map_err(|_| ColourLoversError::RetrievalFailure)?;
          match stack.last_mut() {
            Some(current) => current.text.push_str(&text),
            None if text.trim().is_empty() => (),
            None => return Err(ColourLoversError::RetrievalFailure),
          }
        },
        Event::CData(e) => match stack.last_mut() {
          Some(current) => current.text.push_str(utf8(&e.into_inner())?),
          None => return Err(ColourLoversError::RetrievalFailure),
        },
        Event::Eof => break,
        _ => (),
      }
    }

    if !stack.is_empty() {
      return Err(ColourLoversError::RetrievalFailure);
    }
    root.ok_or(ColourLoversError::RetrievalFailure)
  }

  /// Empty element called `name`.
  fn named(name: impl Into<String>) -> Self { Self { name: name.into(), ..Self::default() } }

  /// Tag name of this element.
  pub fn name(&self) -> &str { &self.name }

  /// Text content, `None` if the element is empty.
  pub fn text(&self) -> Option<&str> { (!self.text.is_empty()).then_some(self.text.as_str()) }

  /// Returns `true` if the element has no child elements.
  pub fn is_leaf(&self) -> bool { self.children.is_empty() }

  /// Immediate children in document order.
  pub fn children(&self) -> impl Iterator<Item = &Element> { self.children.iter() }

  /// Immediate children with the given tag name, in document order.
  pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
    self.children.iter().filter(move |child| child.name == name)
  }

  /// First immediate child with the given tag name.
  pub fn child(&self, name: &str) -> Option<&Element> {
    self.children.iter().find(|child| child.name == name)
  }

  /// Text of the first immediate child with the given tag name.
  pub fn child_text(&self, name: &str) -> Option<&str> { self.child(name).and_then(Element::text) }
}

/// Bodies are read as UTF-8; anything else cannot be a document we understand.
fn utf8(bytes: &[u8]) -> Result<&str> {
  std::str::from_utf8(bytes).map_err(|e| {
    debug!("Body is not valid UTF-8: {}", e);
    ColourLoversError::RetrievalFailure
  })
}

/// Hands a closed element to its parent, or makes it the document root.
fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) -> Result<()> {
  match stack.last_mut() {
    Some(parent) => parent.children.push(element),
    None if root.is_none() => *root = Some(element),
    None => return Err(ColourLoversError::RetrievalFailure),
  }
  Ok(())
}
