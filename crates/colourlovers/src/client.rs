//! Request routing and response validation.
//!
//! [`ColourLovers`] validates a [`Query`] against the operation registry, sends
//! exactly one request through its [`Transport`] and maps the matching elements
//! of the answer into records. Both a rejected response and a body that is not
//! a well-formed XML document surface as
//! [`ColourLoversError::RetrievalFailure`].

use super::*;

/// Client for the ColourLovers API.
///
/// # Examples
///
/// ```no_run
/// use colourlovers::{operation::ContentKind, ColourLovers};
///
/// # async fn example() -> colourlovers::error::Result<()> {
/// let client = ColourLovers::new().with_config_str(r#"user_agent = "palette-bot/1.0""#)?;
/// let stats = client.stats(ContentKind::Palettes).await?;
/// println!("{} palettes", stats.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ColourLovers<T = HttpTransport> {
  /// Settings applied to every request
  config:    ClientConfig,
  /// Performs the requests
  transport: T,
}

impl ColourLovers {
  /// Creates a client for the public API with the default configuration.
  pub fn new() -> Self { Self::default() }
}

impl<T: Transport> ColourLovers<T> {
  /// Swaps the transport, keeping the configuration.
  pub fn with_transport<U: Transport>(self, transport: U) -> ColourLovers<U> {
    ColourLovers { config: self.config, transport }
  }

  /// Replaces the configuration.
  pub fn with_config(mut self, config: ClientConfig) -> Self {
    self.config = config;
    self
  }

  /// Replaces the configuration with one parsed from a TOML string.
  pub fn with_config_str(self, toml_str: &str) -> Result<Self> {
    Ok(self.with_config(ClientConfig::from_toml_str(toml_str)?))
  }

  /// Replaces the configuration with one read from a TOML file.
  pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self> {
    Ok(self.with_config(ClientConfig::from_file(path)?))
  }

  /// Configuration applied to every request.
  pub fn config(&self) -> &ClientConfig { &self.config }

  /// Transport the requests go through.
  pub fn transport(&self) -> &T { &self.transport }

  /// Names of all registered operations, in registry order.
  pub fn valid_operations() -> Vec<&'static str> {
    OPERATIONS.iter().map(|operation| operation.name).collect()
  }

  /// Performs any registered operation by name.
  ///
  /// # Errors
  ///
  /// - [`ColourLoversError::InvalidOperation`] or
  ///   [`ColourLoversError::InvalidArgument`] before anything is sent
  /// - [`ColourLoversError::RetrievalFailure`] if the service rejects the request or answers with
  ///   something other than an XML document
  /// - [`ColourLoversError::MalformedValue`] or [`ColourLoversError::MissingRequiredField`] if a
  ///   record cannot be built
  pub async fn call(&self, query: Query) -> Result<Vec<Record>> {
    let route = query.route()?;
    let kind = route.operation.kind;
    self
      .retrieve(&route)
      .await?
      .iter()
      .map(|element| Record::from_element(kind, element))
      .collect()
  }

  /// Performs an operation whose records are of type `V`.
  ///
  /// Asking for the wrong record type, e.g. a [`Palette`] from `colors`, is an
  /// [`ColourLoversError::InvalidOperation`] and nothing is sent.
  pub async fn fetch<V: Variant>(&self, query: Query) -> Result<Vec<V>> {
    let route = query.route()?;
    if route.operation.kind != V::KIND {
      return Err(ColourLoversError::InvalidOperation(format!(
        "`{}` does not answer with {} records",
        route.operation.name,
        V::root_tag()
      )));
    }
    self.retrieve(&route).await?.iter().map(V::from_element).collect()
  }

  /// Looks up a color by its hex code, with or without the leading `#`.
  pub async fn color(&self, hex: &str) -> Result<Vec<Color>> {
    self.fetch(Query::new("color").with_argument(hex)).await
  }

  /// Looks up a palette by its numeric id.
  pub async fn palette(&self, id: impl Display) -> Result<Vec<Palette>> {
    self.fetch(Query::new("palette").with_argument(id.to_string())).await
  }

  /// Looks up a pattern by its numeric id.
  pub async fn pattern(&self, id: impl Display) -> Result<Vec<Pattern>> {
    self.fetch(Query::new("pattern").with_argument(id.to_string())).await
  }

  /// Looks up a lover by user name.
  pub async fn lover(&self, user_name: &str) -> Result<Vec<Lover>> {
    self.fetch(Query::new("lover").with_argument(user_name)).await
  }

  /// Searches colors; `None` searches all of them.
  pub async fn colors(&self, mode: Option<SearchMode>, filters: &Filters) -> Result<Vec<Color>> {
    self.fetch(search("colors", mode, filters)).await
  }

  /// Searches palettes; `None` searches all of them.
  pub async fn palettes(
    &self,
    mode: Option<SearchMode>,
    filters: &Filters,
  ) -> Result<Vec<Palette>> {
    self.fetch(search("palettes", mode, filters)).await
  }

  /// Searches patterns; `None` searches all of them.
  pub async fn patterns(
    &self,
    mode: Option<SearchMode>,
    filters: &Filters,
  ) -> Result<Vec<Pattern>> {
    self.fetch(search("patterns", mode, filters)).await
  }

  /// Searches lovers; `None` searches all of them.
  pub async fn lovers(&self, mode: Option<SearchMode>, filters: &Filters) -> Result<Vec<Lover>> {
    self.fetch(search("lovers", mode, filters)).await
  }

  /// Total number of items of one content kind.
  pub async fn stats(&self, kind: ContentKind) -> Result<Stat> {
    let mut stats = self.fetch::<Stat>(Query::new("stats").with_argument(kind.as_str())).await?;
    stats.pop().ok_or(ColourLoversError::RetrievalFailure)
  }

  /// Sends the request for `route` and returns the elements holding its records.
  async fn retrieve(&self, route: &Route) -> Result<Vec<Element>> {
    let request = Request {
      url:     route.url(&self.config.base_url()?)?,
      query:   route.params.clone(),
      headers: self.config.request_headers(),
    };
    debug!("Requesting {}", request.full_url());

    let response = self.transport.get(&request).await?;
    trace!("Response body: {}", String::from_utf8_lossy(&response.body));

    let document = check_response(&response)?;
    let root_tag = route.operation.kind.root_tag();
    match route.operation.arity {
      Arity::Many => Ok(document.children_named(root_tag).cloned().collect()),
      Arity::Single if document.name() == root_tag => Ok(vec![document]),
      Arity::Single => {
        warn!("Expected a `{}` document, got `{}`", root_tag, document.name());
        Err(ColourLoversError::RetrievalFailure)
      },
    }
  }
}

/// Query for a search operation.
fn search(operation: &str, mode: Option<SearchMode>, filters: &Filters) -> Query {
  let query = Query::new(operation).with_filters(filters);
  match mode {
    Some(mode) => query.with_argument(mode.as_str()),
    None => query,
  }
}

/// Accepts a 2xx response carrying a well-formed XML document and returns its root.
///
/// # Errors
///
/// Returns [`ColourLoversError::RetrievalFailure`] otherwise.
pub fn check_response(response: &Response) -> Result<Element> {
  if !response.is_success() {
    warn!("Request rejected with status {}", response.status);
    return Err(ColourLoversError::RetrievalFailure);
  }
  Element::parse(&response.body)
}
