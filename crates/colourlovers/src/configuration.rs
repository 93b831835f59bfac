//! Client configuration.
//!
//! Every field has a default, so an empty TOML document is a valid
//! configuration:
//!
//! ```toml
//! base_url = "http://www.colourlovers.com/api"
//! user_agent = "ColourLovers Browser"
//!
//! [headers]
//! Accept = "application/xml"
//! ```

use super::*;

/// Location of the public API.
pub const DEFAULT_BASE_URL: &str = "http://www.colourlovers.com/api";

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "ColourLovers Browser";

/// Settings used to build every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
  /// Base URL operations are appended to
  pub base_url:   String,
  /// Value of the `User-Agent` header
  pub user_agent: String,
  /// Extra headers sent with every request
  pub headers:    BTreeMap<String, String>,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url:   DEFAULT_BASE_URL.to_string(),
      user_agent: DEFAULT_USER_AGENT.to_string(),
      headers:    BTreeMap::new(),
    }
  }
}

impl ClientConfig {
  /// Parses a configuration from a TOML string.
  pub fn from_toml_str(toml_str: &str) -> Result<Self> { Ok(toml::from_str(toml_str)?) }

  /// Reads a configuration from a TOML file.
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    Self::from_toml_str(&content)
  }

  /// The parsed base URL.
  pub fn base_url(&self) -> Result<Url> { Ok(Url::parse(&self.base_url)?) }

  /// Headers for one request, the user agent first.
  pub fn request_headers(&self) -> Vec<(String, String)> {
    std::iter::once(("User-Agent".to_string(), self.user_agent.clone()))
      .chain(self.headers.iter().map(|(key, value)| (key.clone(), value.clone())))
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::NamedTempFile;

  use super::*;

  #[test]
  fn test_empty_config_uses_defaults() {
    let config = ClientConfig::from_toml_str("").unwrap();
    assert_eq!(config, ClientConfig::default());
    assert_eq!(config.base_url().unwrap().as_str(), "http://www.colourlovers.com/api");
    assert_eq!(config.request_headers(), [(
      "User-Agent".to_string(),
      "ColourLovers Browser".to_string()
    )]);
  }

  #[test]
  fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
      file,
      r#"
      base_url = "https://mirror.example.com/api/"
      user_agent = "palette-bot/1.0"

      [headers]
      Accept = "application/xml"
      "#
    )
    .unwrap();

    let config = ClientConfig::from_file(file.path()).unwrap();

    assert_eq!(config.base_url, "https://mirror.example.com/api/");
    assert_eq!(config.request_headers(), [
      ("User-Agent".to_string(), "palette-bot/1.0".to_string()),
      ("Accept".to_string(), "application/xml".to_string()),
    ]);
  }

  #[test]
  fn test_invalid_config() {
    assert!(matches!(
      ClientConfig::from_toml_str("base_url = 42"),
      Err(ColourLoversError::TomlDe(_))
    ));
    assert!(matches!(
      ClientConfig::from_file("/definitely/not/here.toml"),
      Err(ColourLoversError::Path(_))
    ));
    let config = ClientConfig { base_url: "not a url".to_string(), ..ClientConfig::default() };
    assert!(matches!(config.base_url(), Err(ColourLoversError::Url(_))));
  }
}
