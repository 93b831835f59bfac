//! Translation between the service's camelCase names and snake_case field names.
//!
//! Tags coming out of a document are turned into field names with
//! [`tag_to_field`]; keyword filters going into a request are turned into query
//! parameter names with [`field_to_param`]. Both are structural, so tags the
//! service introduces later translate the same way as the ones known today.

use super::*;

/// Query parameters a caller is never allowed to set.
///
/// The client only ever speaks XML, so neither the output format nor a JSONP
/// callback may be overridden through keyword filters.
pub const RESERVED_PARAMS: [&str; 2] = ["format", "jsonCallback"];

/// Converts a camelCase tag into a snake_case field name.
///
/// Every uppercase letter starts a new lowercased segment and segments are
/// joined with `_`.
///
/// ```
/// use colourlovers::naming::tag_to_field;
///
/// assert_eq!(tag_to_field("userName"), "user_name");
/// assert_eq!(tag_to_field("dateCreated"), "date_created");
/// assert_eq!(tag_to_field("id"), "id");
/// ```
pub fn tag_to_field(tag: &str) -> String {
  let mut field = String::with_capacity(tag.len() + 4);
  for (index, c) in tag.chars().enumerate() {
    if index > 0 && c.is_uppercase() {
      field.push('_');
    }
    field.extend(c.to_lowercase());
  }
  field
}

/// Converts a snake_case field name into a camelCase query parameter.
///
/// ```
/// use colourlovers::naming::field_to_param;
///
/// assert_eq!(field_to_param("num_results"), "numResults");
/// assert_eq!(field_to_param("sortBy"), "sortBy");
/// ```
pub fn field_to_param(field: &str) -> String {
  let mut segments = field.split('_');
  let mut param = segments.next().map(lowercase_first).unwrap_or_default();
  for segment in segments {
    param.push_str(&uppercase_first(segment));
  }
  param
}

/// Translates keyword filters into query parameters, dropping the reserved ones.
///
/// The check runs on the translated name, so `json_callback` is dropped just
/// like `jsonCallback`.
pub fn convert_keywords(filters: &Filters) -> BTreeMap<String, String> {
  filters
    .iter()
    .filter_map(|(key, value)| {
      let param = field_to_param(key);
      if RESERVED_PARAMS.contains(&param.as_str()) {
        warn!("Dropping reserved filter `{}`", key);
        None
      } else {
        Some((param, value.clone()))
      }
    })
    .collect()
}

/// `sortBy` stays `sortBy`, `Num` becomes `num`.
fn lowercase_first(segment: &str) -> String {
  let mut chars = segment.chars();
  match chars.next() {
    Some(first) => first.to_lowercase().chain(chars).collect(),
    None => String::new(),
  }
}

/// `results` becomes `Results`.
fn uppercase_first(segment: &str) -> String {
  let mut chars = segment.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
