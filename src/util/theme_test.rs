use super::*;

#[test]
fn parse_recognizes_dark() {
    assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
}

#[test]
fn parse_falls_back_to_light() {
    assert_eq!(Theme::parse(None), Theme::Light);
    assert_eq!(Theme::parse(Some("light")), Theme::Light);
    assert_eq!(Theme::parse(Some("midnight")), Theme::Light);
    assert_eq!(Theme::parse(Some("")), Theme::Light);
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(Some(theme.as_str())), theme);
    }
}

#[test]
fn flipped_alternates() {
    assert_eq!(Theme::Light.flipped(), Theme::Dark);
    assert_eq!(Theme::Dark.flipped(), Theme::Light);
    assert_eq!(Theme::Light.flipped().flipped(), Theme::Light);
}

#[test]
fn read_preference_defaults_to_light_without_a_browser() {
    assert_eq!(read_preference(), Theme::Light);
}
