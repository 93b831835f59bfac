use super::*;

/// A registered user and, when requested with `comments=1`, the comments on
/// their profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lover {
  /// Leaf fields of the `<lover>` element
  attributes: AttributeBag,
  /// Comments under `<comments>`, in document order
  comments:   Vec<Comment>,
}

impl Lover {
  /// Comments on the profile, oldest entry of the document first.
  pub fn comments(&self) -> &[Comment] { &self.comments }

  /// When the account was created.
  pub fn date_registered(&self) -> Option<NaiveDateTime> {
    self.attributes.date("date_registered")
  }

  /// When the lover was last seen on the site.
  pub fn date_last_active(&self) -> Option<NaiveDateTime> {
    self.attributes.date("date_last_active")
  }

  /// Community rating.
  pub fn rating(&self) -> Option<i64> { self.attributes.integer("rating") }

  /// Free-form location as entered by the lover.
  pub fn location(&self) -> Option<&str> { self.attributes.text("location") }

  /// Number of colors created.
  pub fn num_colors(&self) -> Option<i64> { self.attributes.integer("num_colors") }

  /// Number of palettes created.
  pub fn num_palettes(&self) -> Option<i64> { self.attributes.integer("num_palettes") }

  /// Number of patterns created.
  pub fn num_patterns(&self) -> Option<i64> { self.attributes.integer("num_patterns") }

  /// Number of comments left on other profiles and items.
  pub fn num_comments_made(&self) -> Option<i64> { self.attributes.integer("num_comments_made") }

  /// Number of lovers following this one.
  pub fn num_lovers(&self) -> Option<i64> { self.attributes.integer("num_lovers") }

  /// Number of comments left on this profile.
  pub fn num_comments_on_profile(&self) -> Option<i64> {
    self.attributes.integer("num_comments_on_profile")
  }
}

impl Variant for Lover {
  const KIND: ResourceKind = ResourceKind::Lover;

  fn from_element(element: &Element) -> Result<Self> {
    let attributes = AttributeBag::from_element(element)?;
    let comments = match element.child("comments") {
      Some(comments) =>
        comments.children_named("comment").map(Comment::from_element).collect::<Result<_>>()?,
      None => Vec::new(),
    };
    Ok(Self { attributes, comments })
  }
}

impl Attributed for Lover {
  fn attributes(&self) -> &AttributeBag { &self.attributes }
}

/// A comment left on a lover's profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
  /// When the comment was made
  pub date:      NaiveDateTime,
  /// Who made it
  pub user_name: String,
  /// The comment itself
  pub text:      String,
}

impl Comment {
  /// Reads a `<comment>` element.
  ///
  /// The sub-tags are fixed (`commentDate`, `commentUserName`,
  /// `commentComments`) and read directly rather than through the generic
  /// field mapping. All three must be present; user name and text may be
  /// empty.
  pub fn from_element(element: &Element) -> Result<Self> {
    let date = parse_date("comment_date", required_text(element, "commentDate")?)?;
    let user_name = required_child(element, "commentUserName")?.text().unwrap_or_default();
    let text = required_child(element, "commentComments")?.text().unwrap_or_default();
    Ok(Self { date, user_name: user_name.to_string(), text: text.to_string() })
  }
}
