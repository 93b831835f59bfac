use chrono::NaiveDate;
use colourlovers::{
  element::Element,
  resource::{Color, Lover, Palette, Pattern, Stat},
};

use super::*;

/// First record of kind `V` in a fixture document.
fn first_record<V: Variant>(fixture: &str) -> V {
  let document = Element::parse(&read_fixture(fixture)).unwrap();
  let element = document.child(V::root_tag()).unwrap();
  V::from_element(element).unwrap()
}

fn datetime(ymd: (i32, u32, u32), hms: (u32, u32, u32)) -> chrono::NaiveDateTime {
  NaiveDate::from_ymd_opt(ymd.0, ymd.1, ymd.2).unwrap().and_hms_opt(hms.0, hms.1, hms.2).unwrap()
}

#[test]
fn test_color_from_fixture() {
  let color: Color = first_record("colors.xml");

  assert_eq!(color.id(), Some(903893));
  assert_eq!(color.title(), Some("wet dirt"));
  assert_eq!(color.user_name(), Some("jessicabrown"));
  assert_eq!(color.num_views(), Some(0));
  assert_eq!(color.num_votes(), Some(0));
  assert_eq!(color.num_comments(), Some(0));
  assert_eq!(color.num_hearts(), Some(0.0));
  assert_eq!(color.rank(), Some(903853));
  assert_eq!(color.date_created(), Some(datetime((2008, 3, 17), (11, 22, 21))));
  assert_eq!(color.hex(), Some("#6b4106"));

  assert_eq!((color.rgb().red, color.rgb().green, color.rgb().blue), (107, 65, 6));
  assert_eq!(color.rgb().hex(), "#6b4106");
  assert_eq!((color.hsv().hue, color.hsv().saturation, color.hsv().value), (35, 94, 42));

  assert_eq!(color.description(), None);
  assert_eq!(color.url(), Some("http://www.colourlovers.com/color/6B4106/wet_dirt"));
  assert_eq!(color.image_url(), Some("http://www.colourlovers.com/img/6B4106/100/100/wet_dirt.png"));
  assert_eq!(
    color.badge_url(),
    Some("http://www.colourlovers.com/images/badges/c/903/903893_wet_dirt.png")
  );
  assert_eq!(color.api_url(), Some("http://www.colourlovers.com/api/color/6B4106"));
}

#[test]
fn test_palette_from_fixture() {
  let palette: Palette = first_record("palettes.xml");

  assert_eq!(palette.id(), Some(12345));
  assert_eq!(palette.title(), Some("be my boy"));
  assert_eq!(palette.user_name(), Some("sinta schneider"));
  assert_eq!(palette.num_views(), Some(1052));
  assert_eq!(palette.num_votes(), Some(37));
  assert_eq!(palette.num_comments(), Some(13));
  assert_eq!(palette.num_hearts(), Some(4.5));
  assert_eq!(palette.rank(), Some(1));
  assert_eq!(palette.date_created(), Some(datetime((2008, 3, 1), (16, 19, 21))));
  assert_eq!(palette.colors(), ["#423238", "#f5de8c", "#c8d197", "#b3702d", "#eb2138"]);
  assert_eq!(palette.color_widths(), Some(&[0.2, 0.2, 0.2, 0.2, 0.2][..]));
  assert_eq!(palette.description(), None);
  assert_eq!(palette.url(), Some("http://www.colourlovers.com/palette/293826/be_my_boy"));
  assert_eq!(palette.api_url(), Some("http://www.colourlovers.com/api/palette/293826"));
}

#[test]
fn test_pattern_from_fixture() {
  let pattern: Pattern = first_record("patterns.xml");

  assert_eq!(pattern.id(), Some(12345));
  assert_eq!(pattern.title(), Some("Tenderness."));
  assert_eq!(pattern.user_name(), Some("not.an.am.person"));
  assert_eq!(pattern.num_views(), Some(617));
  assert_eq!(pattern.num_votes(), Some(32));
  assert_eq!(pattern.num_comments(), Some(14));
  assert_eq!(pattern.num_hearts(), Some(4.5));
  assert_eq!(pattern.rank(), Some(1));
  assert_eq!(pattern.date_created(), Some(datetime((2008, 3, 1), (6, 43, 38))));
  assert_eq!(pattern.colors(), ["#c6c5ac", "#cdb89f", "#d4aa93", "#b8e0c5", "#bfd3b8"]);
  assert_eq!(
    pattern.image_url(),
    Some("http://colourlovers.com.s3.amazonaws.com/images/patterns/49/49471.png")
  );
  assert_eq!(
    pattern.badge_url(),
    Some("http://www.colourlovers.com/images/badges/n/49/49471_Tenderness..png")
  );
}

#[test]
fn test_lover_from_fixture() {
  let lover: Lover = first_record("lovers.xml");

  assert_eq!(lover.user_name(), Some("electrikmönk"));
  assert_eq!(lover.date_registered(), Some(datetime((2005, 8, 7), (6, 45, 47))));
  assert_eq!(lover.date_last_active(), Some(datetime((2008, 3, 16), (21, 2, 1))));
  assert_eq!(lover.rating(), Some(554159));
  assert_eq!(lover.location(), Some("#FF0000stick, LA, US"));
  assert_eq!(lover.num_colors(), Some(3498));
  assert_eq!(lover.num_palettes(), Some(2775));
  assert_eq!(lover.num_patterns(), Some(36));
  assert_eq!(lover.num_comments_made(), Some(7201));
  assert_eq!(lover.num_lovers(), Some(710));
  assert_eq!(lover.num_comments_on_profile(), Some(672));

  assert_eq!(lover.comments().len(), 1);
  let comment = &lover.comments()[0];
  assert_eq!(comment.date, datetime((2008, 3, 10), (5, 10, 58)));
  assert_eq!(comment.user_name, "mashedpotato");
  assert_eq!(comment.text, "you are so awesome. :x ");

  assert_eq!(lover.url(), Some("http://www.colourlovers.com/lover/electrikmonk"));
  assert_eq!(lover.api_url(), Some("http://www.colourlovers.com/api/lover/electrikmonk"));
}

#[test]
fn test_stat_from_fixture() {
  let document = Element::parse(&read_fixture("stats.xml")).unwrap();
  let stat = Stat::from_element(&document).unwrap();
  assert_eq!(stat.total, 1500563);
}

#[test]
fn test_records_serialize() {
  let palette: Palette = first_record("palettes.xml");

  let json = serde_json::to_value(&palette).unwrap();

  assert_eq!(json["attributes"]["user_name"], "sinta schneider");
  assert_eq!(json["attributes"]["num_views"], 1052);
  assert_eq!(json["colors"][1], "#f5de8c");

  let record = serde_json::to_value(Record::Palette(palette)).unwrap();
  assert_eq!(record["kind"], "palette");
  assert_eq!(record["record"]["attributes"]["id"], 12345);
}
