use super::*;

#[tokio::test]
async fn test_invalid_operation_sends_nothing() {
  let client = client_with(FakeTransport::fixture("colors.xml"));

  let result = client.call(Query::new("colours")).await;

  assert!(matches!(result, Err(ColourLoversError::InvalidOperation(ref name)) if name == "colours"));
  assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_invalid_hex_sends_nothing() {
  let client = client_with(FakeTransport::fixture("colors.xml"));

  assert!(matches!(client.color("6B410").await, Err(ColourLoversError::InvalidArgument(_))));
  assert!(matches!(
    client.call(Query::new("colors").with_argument("invalid_argument")).await,
    Err(ColourLoversError::InvalidArgument(_))
  ));
  assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_color_lookup() -> TestResult<()> {
  for hex in ["6B4106", "#6b4106"] {
    let client = client_with(FakeTransport::fixture("colors.xml"));

    let colors = client.color(hex).await?;

    assert_eq!(colors.len(), 1);
    assert_eq!(colors[0].hex(), Some("#6b4106"));

    let requests = client.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
      requests[0].url.as_str().to_lowercase(),
      "http://www.colourlovers.com/api/color/6b4106"
    );
    assert!(requests[0].query.is_empty());
    assert_eq!(requests[0].headers, [("User-Agent".to_string(), "ColourLovers Browser".to_string())]);
  }
  Ok(())
}

#[tokio::test]
async fn test_search_sends_translated_filters() -> TestResult<()> {
  let client = client_with(FakeTransport::fixture("palettes.xml"));
  let filters = Filters::from([
    ("num_results".to_string(), "20".to_string()),
    ("order_col".to_string(), "score".to_string()),
    ("format".to_string(), "json".to_string()),
  ]);

  let palettes = client.palettes(Some(SearchMode::Top), &filters).await?;

  assert_eq!(palettes.len(), 1);
  let request = &client.transport().requests()[0];
  assert_eq!(request.url.as_str(), "http://www.colourlovers.com/api/palettes/top");
  assert_eq!(request.query, [
    ("numResults".to_string(), "20".to_string()),
    ("orderCol".to_string(), "score".to_string()),
  ]);
  assert_eq!(
    request.full_url().as_str(),
    "http://www.colourlovers.com/api/palettes/top?numResults=20&orderCol=score"
  );
  Ok(())
}

#[tokio::test]
async fn test_random_search_drops_filters() -> TestResult<()> {
  let client = client_with(FakeTransport::fixture("patterns.xml"));
  let filters = Filters::from([("num_results".to_string(), "20".to_string())]);

  let patterns = client.patterns(Some(SearchMode::Random), &filters).await?;

  assert_eq!(patterns.len(), 1);
  let request = &client.transport().requests()[0];
  assert_eq!(request.url.as_str(), "http://www.colourlovers.com/api/patterns/random");
  assert!(request.query.is_empty());
  Ok(())
}

#[tokio::test]
async fn test_search_without_mode() -> TestResult<()> {
  let client = client_with(FakeTransport::fixture("lovers.xml"));

  let lovers = client.lovers(None, &Filters::new()).await?;

  assert_eq!(lovers[0].user_name(), Some("electrikmönk"));
  let request = &client.transport().requests()[0];
  assert_eq!(request.url.as_str(), "http://www.colourlovers.com/api/lovers");
  Ok(())
}

#[tokio::test]
async fn test_rejected_or_unreadable_responses() {
  let bodies: [(u16, &[u8]); 4] = [
    (404, b"<colors></colors>"),
    (500, b""),
    (200, b""),
    (200, b"<html><body>Service Unavailable"),
  ];
  for (status, body) in bodies {
    let client = client_with(FakeTransport::new(status, body));
    assert!(matches!(
      client.colors(Some(SearchMode::New), &Filters::new()).await,
      Err(ColourLoversError::RetrievalFailure)
    ));
    assert_eq!(client.transport().requests().len(), 1);
  }
}

#[tokio::test]
async fn test_no_matching_records() -> TestResult<()> {
  let client = client_with(FakeTransport::new(200, r#"<colors numResults="0" totalResults="0"/>"#));
  assert!(client.colors(None, &Filters::new()).await?.is_empty());

  let client = client_with(FakeTransport::fixture("palettes.xml"));
  assert!(client.colors(None, &Filters::new()).await?.is_empty());
  Ok(())
}

#[tokio::test]
async fn test_stats() -> TestResult<()> {
  let client = client_with(FakeTransport::fixture("stats.xml"));

  let stats = client.stats(ContentKind::Palettes).await?;

  assert_eq!(stats.total, 1500563);
  let request = &client.transport().requests()[0];
  assert_eq!(request.url.as_str(), "http://www.colourlovers.com/api/stats/palettes");
  Ok(())
}

#[tokio::test]
async fn test_dynamic_call() -> TestResult<()> {
  let client = client_with(FakeTransport::fixture("lovers.xml"));

  let records = client.call(Query::new("lover").with_argument("electrikmonk")).await?;

  assert_eq!(records.len(), 1);
  match &records[0] {
    Record::Lover(lover) => assert_eq!(lover.comments().len(), 1),
    other => panic!("expected a lover, got {other:?}"),
  }
  let request = &client.transport().requests()[0];
  assert_eq!(request.url.as_str(), "http://www.colourlovers.com/api/lover/electrikmonk");
  Ok(())
}

#[tokio::test]
async fn test_mismatched_record_type() {
  let client = client_with(FakeTransport::fixture("colors.xml"));
  assert!(matches!(
    client.fetch::<colourlovers::resource::Palette>(Query::new("colors")).await,
    Err(ColourLoversError::InvalidOperation(_))
  ));
  assert!(client.transport().requests().is_empty());
}

#[tokio::test]
async fn test_configured_client() -> TestResult<()> {
  let client = client_with(FakeTransport::fixture("palettes.xml")).with_config_str(
    r#"
    base_url = "https://mirror.example.com/api/"
    user_agent = "palette-bot/1.0"

    [headers]
    Accept = "application/xml"
    "#,
  )?;

  client.palette(293826).await?;

  let request = &client.transport().requests()[0];
  assert_eq!(request.url.as_str(), "https://mirror.example.com/api/palette/293826");
  assert_eq!(request.headers, [
    ("User-Agent".to_string(), "palette-bot/1.0".to_string()),
    ("Accept".to_string(), "application/xml".to_string()),
  ]);
  Ok(())
}
