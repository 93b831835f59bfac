//! Typed client for the ColourLovers content and ratings API.
//!
//! `colourlovers` turns idiomatic method calls into requests against the
//! service's fixed URL grammar and turns the XML documents it answers with into
//! typed records:
//!
//! - [`Color`](resource::Color) with its [`Rgb`](resource::Rgb) and [`Hsv`](resource::Hsv) values
//! - [`Palette`](resource::Palette) and [`Pattern`](resource::Pattern) with their hex colors
//! - [`Lover`](resource::Lover) with its [`Comment`](resource::Comment)s
//! - [`Stat`](resource::Stat) totals per content kind
//!
//! # Getting Started
//!
//! ```no_run
//! use colourlovers::{operation::SearchMode, prelude::*, ColourLovers, Filters};
//!
//! # async fn example() -> Result<()> {
//! let client = ColourLovers::new();
//!
//! // Look up a single color by its hex code
//! let colors = client.color("#6B4106").await?;
//! println!("{:?}", colors[0].title());
//!
//! // Search the top palettes, twenty at a time
//! let filters = Filters::from([("num_results".to_string(), "20".to_string())]);
//! let palettes = client.palettes(Some(SearchMode::Top), &filters).await?;
//!
//! // Name-based dispatch works as well
//! let records = client.call(Query::new("patterns").with_argument("new")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`naming`]: camelCase <-> snake_case translation and keyword filtering
//! - [`coercion`]: field kinds and conversion of raw leaf text into typed values
//! - [`element`]: in-memory XML tree built from a response body
//! - [`mapper`]: generic element-to-[`AttributeBag`](mapper::AttributeBag) mapping
//! - [`resource`]: the typed records the service exposes
//! - [`operation`]: the static operation registry and per-call [`Query`](operation::Query)
//! - [`client`]: request routing and response validation
//! - [`transport`]: the outbound HTTP seam
//! - [`configuration`]: client configuration

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::BTreeMap,
  fmt::{self, Display},
  path::Path,
  str::FromStr,
};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
use url::Url;
#[cfg(test)] use tracing_test::traced_test;

pub mod client;
pub mod coercion;
pub mod configuration;
pub mod element;
pub mod error;
pub mod mapper;
pub mod naming;
pub mod operation;
pub mod resource;
pub mod transport;

pub use client::ColourLovers;

use crate::{
  coercion::*, configuration::ClientConfig, element::Element, error::*, mapper::AttributeBag,
  naming::*, operation::*, resource::*, transport::*,
};

/// Caller-supplied keyword filters, keyed by snake_case name.
pub type Filters = BTreeMap<String, String>;

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use colourlovers::prelude::*;
/// ```
pub mod prelude {
  pub use crate::{
    error::{ColourLoversError, Result},
    operation::Query,
    resource::{Attributed, Record, Variant},
    transport::Transport,
  };
}
