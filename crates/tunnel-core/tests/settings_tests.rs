// Host-side tests for the named-parameter configuration surface.

use fnv::FnvHashMap;
use tunnel_core::*;

#[test]
fn defaults_match_reset_values() {
    let s = Settings::default();
    assert_eq!(s.animation_speed, 2.0);
    assert_eq!(s.spawn_rate, 5.0);
    assert_eq!(s.text_spawn_rate, 0.1);
    assert_eq!(s.text_visible_time, 5.0);
    assert_eq!(s.text_fade_time, 3.0);
    assert_eq!(s.shape_transparency, 255.0);
    assert_eq!(s.shape_kind, ShapeKind::Square);
    assert!(s.text.is_empty());
    assert!(!s.mouse_follow && !s.mouse_rotation && !s.static_text_color);
    assert_eq!(s.shape_palette.len(), 4);
    assert_eq!(s.background_palette[0], Rgb::BLACK);
}

#[test]
fn every_listed_param_round_trips() {
    let mut s = Settings::default();
    for (i, name) in PARAM_NAMES.iter().enumerate() {
        let v = i as f32 + 0.5;
        s.set_param(name, v).unwrap();
        assert_eq!(s.param(name), Some(v), "{name}");
    }
}

#[test]
fn each_param_name_owns_its_own_field() {
    let mut s = Settings::default();
    for (i, name) in PARAM_NAMES.iter().enumerate() {
        s.set_param(name, 100.0 + i as f32).unwrap();
    }
    for (i, name) in PARAM_NAMES.iter().enumerate() {
        assert_eq!(s.param(name), Some(100.0 + i as f32), "{name}");
    }
    assert_eq!(s.animation_speed, 100.0);
    assert_eq!(s.shape_transparency, 100.0 + (PARAM_NAMES.len() - 1) as f32);

    let mut names = PARAM_NAMES.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), PARAM_NAMES.len());
}

#[test]
fn unknown_and_non_finite_params_are_rejected() {
    let mut s = Settings::default();
    assert_eq!(
        s.set_param("warpFactor", 9.0),
        Err(SettingsError::UnknownParam("warpFactor".into()))
    );
    assert!(matches!(
        s.set_param("spawnRate", f32::NAN),
        Err(SettingsError::NotFinite { .. })
    ));
    assert_eq!(s.spawn_rate, 5.0);
    assert_eq!(s.param("warpFactor"), None);
}

#[test]
fn from_params_keeps_defaults_for_missing_keys() {
    let mut params = FnvHashMap::default();
    params.insert("spawnRate".to_string(), 8.0);
    params.insert("originX".to_string(), 25.0);
    params.insert("bogus".to_string(), 1.0);
    let (s, rejected) = Settings::from_params(&params);
    assert_eq!(s.spawn_rate, 8.0);
    assert_eq!(s.origin_x, 25.0);
    assert_eq!(s.origin_y, 50.0);
    assert_eq!(s.animation_speed, 2.0);
    assert_eq!(rejected, vec![SettingsError::UnknownParam("bogus".into())]);
}

#[test]
fn toggles_by_name() {
    let mut s = Settings::default();
    s.set_toggle("mouseFollow", true).unwrap();
    s.set_toggle("mouseRotation", true).unwrap();
    s.set_toggle("staticTextColor", true).unwrap();
    s.set_toggle("invertTextRotation", true).unwrap();
    assert!(s.mouse_follow && s.mouse_rotation && s.static_text_color && s.invert_text_rotation);
    assert!(matches!(
        s.set_toggle("fullscreen", true),
        Err(SettingsError::UnknownToggle(_))
    ));
}

#[test]
fn text_is_truncated_to_the_limit() {
    let mut s = Settings::default();
    let long = "x".repeat(5000);
    s.set_text(&long, Limits::default().max_text_len);
    assert_eq!(s.text.chars().count(), 2000);
    s.set_text("héllo wörld and more", 16);
    assert_eq!(s.text, "héllo wörld and ");
}

#[test]
fn words_split_on_whitespace() {
    let mut s = Settings::default();
    s.set_text("  into   the\ntunnel ", 2000);
    assert_eq!(s.words().collect::<Vec<_>>(), vec!["into", "the", "tunnel"]);
}

#[test]
fn palettes_replace_only_on_success() {
    let mut s = Settings::default();
    s.set_palette(PaletteTarget::Shapes, &["#ff0000", "#0000ff"]).unwrap();
    assert_eq!(s.shape_palette.as_slice(), &[Rgb::new(1.0, 0.0, 0.0), Rgb::new(0.0, 0.0, 1.0)]);

    let before = s.background_palette.clone();
    assert!(matches!(
        s.set_palette(PaletteTarget::Background, &["#000000", "nope"]),
        Err(SettingsError::Color(_))
    ));
    let empty: [&str; 0] = [];
    assert_eq!(
        s.set_palette(PaletteTarget::Background, &empty),
        Err(SettingsError::EmptyPalette)
    );
    assert_eq!(s.background_palette, before);
}

#[test]
fn text_color_parses_hex() {
    let mut s = Settings::default();
    s.set_text_color("#ff00ff").unwrap();
    assert_eq!(s.text_color, Rgb::new(1.0, 0.0, 1.0));
    assert!(s.set_text_color("purple").is_err());
    assert_eq!(s.text_color, Rgb::new(1.0, 0.0, 1.0));
}

#[test]
fn shape_kind_names() {
    for kind in [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Hexagon] {
        assert_eq!(ShapeKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(ShapeKind::from_name(" Circle "), Some(ShapeKind::Circle));
    assert_eq!(ShapeKind::from_name("star"), None);
}
