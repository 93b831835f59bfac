//! Error types for the colourlovers client.
//!
//! Every failure is local and synchronous to the call that produced it; nothing
//! is retried. A call either yields its full list of records or one of these.
//!
//! # Examples
//!
//! ```no_run
//! use colourlovers::{prelude::*, ColourLovers};
//!
//! # async fn example() -> Result<()> {
//! let client = ColourLovers::new();
//! match client.call(Query::new("colors").with_argument("oldest")).await {
//!   Err(ColourLoversError::InvalidArgument(reason)) => println!("rejected: {reason}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(records) => println!("{} records", records.len()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

use crate::coercion::FieldKind;

/// Error type alias used for the [`colourlovers`](crate) crate.
pub type Result<T> = core::result::Result<T, ColourLoversError>;

/// Errors that can occur when talking to the ColourLovers service.
#[derive(Error, Debug)]
pub enum ColourLoversError {
  /// The named operation is not part of the operation registry.
  ///
  /// Raised before any request is built.
  #[error("`{0}` is not a valid operation")]
  InvalidOperation(String),

  /// The positional argument is not acceptable for the operation.
  ///
  /// This occurs when:
  /// - a search is given a mode other than `new`, `top` or `random`
  /// - stats are requested for anything but colors, lovers, patterns or palettes
  /// - a lookup is missing its identifier, or a color lookup gets a malformed hex code
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// A leaf value could not be coerced to the kind declared for its field.
  #[error("cannot read {value:?} in `{field}` as {kind}")]
  MalformedValue {
    /// Field name, snake_case
    field: String,
    /// Raw text found in the document
    value: String,
    /// Kind the field was declared as
    kind:  FieldKind,
  },

  /// A mandatory nested structure is missing from an otherwise parseable element.
  #[error("missing required field `{0}`")]
  MissingRequiredField(String),

  /// The response was not a parseable document or the service answered with a
  /// non-success status.
  #[error("could not retrieve result for your request")]
  RetrievalFailure,

  /// The bundled HTTP transport failed to complete the request.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The configured base URL is not a valid URL.
  #[error(transparent)]
  Url(#[from] url::ParseError),

  /// Reading a configuration file failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// A configuration file is not valid TOML for [`ClientConfig`](crate::configuration::ClientConfig).
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration is unusable for building requests.
  #[error("{0}")]
  Config(String),
}
