//! The outbound HTTP seam.
//!
//! The client builds a [`Request`] and hands it to a [`Transport`], which performs
//! one GET and reports the status and raw body. Connection handling, TLS,
//! redirects and timeouts all live behind this trait; [`HttpTransport`] is the
//! bundled implementation over `reqwest`.

use super::*;

/// A GET request against the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
  /// Base URL plus `/<operation>[/<argument>]`, without a query string
  pub url:     Url,
  /// camelCase query parameters
  pub query:   Vec<(String, String)>,
  /// Headers sent with the request
  pub headers: Vec<(String, String)>,
}

impl Request {
  /// The URL with the query parameters appended.
  pub fn full_url(&self) -> Url {
    let mut url = self.url.clone();
    if !self.query.is_empty() {
      url.query_pairs_mut().extend_pairs(&self.query);
    }
    url
  }
}

/// What the service answered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
  /// HTTP status code
  pub status: u16,
  /// Raw response body
  pub body:   Vec<u8>,
}

impl Response {
  /// Returns `true` for a 2xx status.
  pub fn is_success(&self) -> bool { (200..300).contains(&self.status) }
}

/// Performs requests on behalf of the client.
///
/// # Examples
///
/// ```
/// use colourlovers::{
///   prelude::*,
///   transport::{Request, Response},
/// };
///
/// struct Canned(&'static str);
///
/// #[async_trait::async_trait]
/// impl Transport for Canned {
///   async fn get(&self, _request: &Request) -> Result<Response> {
///     Ok(Response { status: 200, body: self.0.as_bytes().to_vec() })
///   }
/// }
/// ```
#[async_trait]
pub trait Transport: Send + Sync {
  /// Performs one GET request.
  ///
  /// A non-2xx answer is still an `Ok` [`Response`]; only failing to get an
  /// answer at all is an error.
  async fn get(&self, request: &Request) -> Result<Response>;
}

/// [`Transport`] over a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
  /// Connection pool reused across calls
  client: reqwest::Client,
}

impl HttpTransport {
  /// Wraps an existing `reqwest` client, e.g. one configured with a timeout.
  pub fn new(client: reqwest::Client) -> Self { Self { client } }
}

#[async_trait]
impl Transport for HttpTransport {
  async fn get(&self, request: &Request) -> Result<Response> {
    let mut builder = self.client.get(request.url.clone()).query(&request.query);

    for (key, value) in &request.headers {
      builder = builder.header(key, value);
    }

    let response = builder.send().await?;
    let status = response.status().as_u16();
    let body = response.bytes().await?.to_vec();

    Ok(Response { status, body })
  }
}
