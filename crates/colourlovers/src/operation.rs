//! The static operation registry and per-call queries.
//!
//! Every call the client can make is one entry of [`OPERATIONS`]. A [`Query`]
//! names an operation, optionally carries a positional argument and keyword
//! filters, and is turned into a [`Route`] by [`Query::route`]. All validation
//! happens there, so an unknown operation or an illegal argument never
//! reaches the network.
//!
//! | Operations | Argument | Path |
//! |---|---|---|
//! | `color`, `palette`, `pattern`, `lover` | required identifier | `/<op>/<id>` |
//! | `colors`, `palettes`, `patterns`, `lovers` | none, `new`, `top` or `random` | `/<op>[/<mode>]` |
//! | `stats` | `colors`, `lovers`, `patterns` or `palettes` | `/stats/<kind>` |

use super::*;

lazy_static! {
  /// Six hex digits, the only shape a color lookup accepts.
  static ref HEX_CODE: Regex = Regex::new(r"^[0-9A-Fa-f]{6}$").unwrap();
}

/// What an operation accepts as its positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentPolicy {
  /// Exactly one identifier naming a single item
  Identifier,
  /// An optional [`SearchMode`]
  SearchMode,
  /// A mandatory [`ContentKind`]
  ContentKind,
}

/// How many records an operation answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
  /// Zero or more records under the document root
  Many,
  /// The document root itself is the one record
  Single,
}

/// One entry of the operation registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
  /// Name used in the request path
  pub name:   &'static str,
  /// Kind of record the response holds
  pub kind:   ResourceKind,
  /// Accepted positional argument
  pub policy: ArgumentPolicy,
  /// Number of records in the response
  pub arity:  Arity,
}

/// Every operation the service supports, lookups first, then searches, then stats.
pub const OPERATIONS: [Operation; 9] = [
  Operation::lookup_of("color", ResourceKind::Color),
  Operation::lookup_of("palette", ResourceKind::Palette),
  Operation::lookup_of("pattern", ResourceKind::Pattern),
  Operation::lookup_of("lover", ResourceKind::Lover),
  Operation::search_of("colors", ResourceKind::Color),
  Operation::search_of("palettes", ResourceKind::Palette),
  Operation::search_of("patterns", ResourceKind::Pattern),
  Operation::search_of("lovers", ResourceKind::Lover),
  Operation {
    name:   "stats",
    kind:   ResourceKind::Stat,
    policy: ArgumentPolicy::ContentKind,
    arity:  Arity::Single,
  },
];

impl Operation {
  /// Entry for a single-item lookup.
  const fn lookup_of(name: &'static str, kind: ResourceKind) -> Self {
    Self { name, kind, policy: ArgumentPolicy::Identifier, arity: Arity::Many }
  }

  /// Entry for a search.
  const fn search_of(name: &'static str, kind: ResourceKind) -> Self {
    Self { name, kind, policy: ArgumentPolicy::SearchMode, arity: Arity::Many }
  }

  /// Finds the registry entry called `name`.
  ///
  /// # Errors
  ///
  /// Returns [`ColourLoversError::InvalidOperation`] for names outside the registry.
  pub fn lookup(name: &str) -> Result<&'static Operation> {
    OPERATIONS
      .iter()
      .find(|operation| operation.name == name)
      .ok_or_else(|| ColourLoversError::InvalidOperation(name.to_string()))
  }
}

/// Selection mode of a search operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchMode {
  /// Most recently created first
  New,
  /// Best rated first
  Top,
  /// A random pick; takes no filters
  Random,
}

impl SearchMode {
  /// Path argument for this mode.
  pub fn as_str(self) -> &'static str {
    match self {
      SearchMode::New => "new",
      SearchMode::Top => "top",
      SearchMode::Random => "random",
    }
  }
}

impl FromStr for SearchMode {
  type Err = ColourLoversError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "new" => Ok(SearchMode::New),
      "top" => Ok(SearchMode::Top),
      "random" => Ok(SearchMode::Random),
      other => Err(ColourLoversError::InvalidArgument(format!(
        "search mode must be one of `new`, `top` or `random`, got `{other}`"
      ))),
    }
  }
}

/// Content kinds the `stats` operation reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
  /// Color totals
  Colors,
  /// Registered users
  Lovers,
  /// Pattern totals
  Patterns,
  /// Palette totals
  Palettes,
}

impl ContentKind {
  /// Path argument for this content kind.
  pub fn as_str(self) -> &'static str {
    match self {
      ContentKind::Colors => "colors",
      ContentKind::Lovers => "lovers",
      ContentKind::Patterns => "patterns",
      ContentKind::Palettes => "palettes",
    }
  }
}

impl FromStr for ContentKind {
  type Err = ColourLoversError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "colors" => Ok(ContentKind::Colors),
      "lovers" => Ok(ContentKind::Lovers),
      "patterns" => Ok(ContentKind::Patterns),
      "palettes" => Ok(ContentKind::Palettes),
      other => Err(ColourLoversError::InvalidArgument(format!("cannot retrieve stats for `{other}`"))),
    }
  }
}

/// A single call: operation name, positional argument and keyword filters.
///
/// ```
/// use colourlovers::operation::Query;
///
/// let query = Query::new("palettes").with_argument("top").with_filter("num_results", 20);
/// let route = query.route().unwrap();
/// assert_eq!(route.params, [("numResults".to_string(), "20".to_string())]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
  /// Operation name, checked against [`OPERATIONS`] when routed
  operation: String,
  /// Positional argument
  argument:  Option<String>,
  /// snake_case keyword filters
  filters:   Filters,
}

impl Query {
  /// Starts a query for the named operation.
  pub fn new(operation: impl Into<String>) -> Self {
    Self { operation: operation.into(), ..Self::default() }
  }

  /// Sets the positional argument: an identifier, a search mode or a content kind.
  pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
    self.argument = Some(argument.into());
    self
  }

  /// Adds a snake_case keyword filter such as `num_results` or `order_col`.
  pub fn with_filter(mut self, key: impl Into<String>, value: impl Display) -> Self {
    self.filters.insert(key.into(), value.to_string());
    self
  }

  /// Adds every filter of `filters`, replacing earlier values for the same key.
  pub fn with_filters(mut self, filters: &Filters) -> Self {
    self.filters.extend(filters.iter().map(|(key, value)| (key.clone(), value.clone())));
    self
  }

  /// Name of the requested operation.
  pub fn operation(&self) -> &str { &self.operation }

  /// Positional argument as given by the caller.
  pub fn argument(&self) -> Option<&str> { self.argument.as_deref() }

  /// Keyword filters, keyed by snake_case name.
  pub fn filters(&self) -> &Filters { &self.filters }

  /// Validates the query against the registry and resolves it into a [`Route`].
  ///
  /// # Errors
  ///
  /// - [`ColourLoversError::InvalidOperation`] if the operation is not registered
  /// - [`ColourLoversError::InvalidArgument`] if the argument does not fit the operation
  pub fn route(self) -> Result<Route> {
    let operation = Operation::lookup(&self.operation)?;
    let mut filters = self.filters;

    let argument = match operation.policy {
      ArgumentPolicy::Identifier => {
        let argument = self.argument.ok_or_else(|| {
          ColourLoversError::InvalidArgument(format!("`{}` requires an argument", operation.name))
        })?;
        let argument = argument.replace('#', "");
        if argument.is_empty() {
          return Err(ColourLoversError::InvalidArgument(format!(
            "`{}` requires a non-empty argument",
            operation.name
          )));
        }
        if operation.kind == ResourceKind::Color && !HEX_CODE.is_match(&argument) {
          return Err(ColourLoversError::InvalidArgument(format!(
            "`{argument}` is not a six digit hex color"
          )));
        }
        Some(argument)
      },
      ArgumentPolicy::SearchMode => match self.argument {
        None => None,
        Some(argument) => {
          let mode: SearchMode = argument.parse()?;
          if mode == SearchMode::Random && !filters.is_empty() {
            warn!("Discarding {} filter(s), random selection accepts none", filters.len());
            filters.clear();
          }
          Some(mode.as_str().to_string())
        },
      },
      ArgumentPolicy::ContentKind => {
        let argument = self.argument.ok_or_else(|| {
          ColourLoversError::InvalidArgument("`stats` requires a content kind".to_string())
        })?;
        let kind: ContentKind = argument.parse()?;
        if !filters.is_empty() {
          warn!("Discarding {} filter(s), stats accept none", filters.len());
          filters.clear();
        }
        Some(kind.as_str().to_string())
      },
    };

    Ok(Route { operation, argument, params: convert_keywords(&filters).into_iter().collect() })
  }
}

/// A validated query, ready to be turned into a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
  /// Registry entry of the operation
  pub operation: &'static Operation,
  /// Path argument, `#` already stripped
  pub argument:  Option<String>,
  /// camelCase query parameters
  pub params:    Vec<(String, String)>,
}

impl Route {
  /// Appends `/<operation>[/<argument>]` to the base URL.
  ///
  /// # Errors
  ///
  /// Returns [`ColourLoversError::Config`] if the base URL cannot carry a path.
  pub fn url(&self, base: &Url) -> Result<Url> {
    let mut url = base.clone();
    {
      let mut segments = url.path_segments_mut().map_err(|_| {
        ColourLoversError::Config(format!("base URL `{base}` cannot carry a path"))
      })?;
      segments.pop_if_empty().push(self.operation.name);
      if let Some(argument) = &self.argument {
        segments.push(argument);
      }
    }
    Ok(url)
  }
}
