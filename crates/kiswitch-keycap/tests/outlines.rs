use approx::assert_abs_diff_eq;
use indexmap::IndexMap;
use kiswitch_core::Vec2;
use kiswitch_keycap::{Keycap, KeycapConfig, KeycapError, KeycapFamily, KeycapType};
use kiswitch_params::ParamError;

fn regular(width: f64, rotation: f64) -> KeycapConfig {
    KeycapConfig {
        name: String::new(),
        description: String::new(),
        tags: "Keycap".to_string(),
        kind: KeycapType::Regular,
        spacing: Vec2::splat(19.05),
        width: Some(width),
        rotation,
        offset: Vec2::ZERO,
    }
}

fn assert_same_points(actual: &[Vec2], expected: &[Vec2]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(a.x, e.x, epsilon = 1e-9);
        assert_abs_diff_eq!(a.y, e.y, epsilon = 1e-9);
    }
}

#[test]
fn one_unit_is_a_pitch_square() {
    let cap = Keycap::new(&regular(1.0, 0.0));
    assert_same_points(
        &cap.vertices(),
        &[
            Vec2::new(-9.525, -9.525),
            Vec2::new(9.525, -9.525),
            Vec2::new(9.525, 9.525),
            Vec2::new(-9.525, 9.525),
            Vec2::new(-9.525, -9.525),
        ],
    );
    assert_eq!(cap.name, "1.00u");
}

#[test]
fn rotated_outline_is_rotated_unrotated_outline() {
    let flat = Keycap::new(&regular(2.0, 0.0)).vertices();
    let turned = Keycap::new(&regular(2.0, 90.0)).vertices();
    let expected: Vec<Vec2> = flat.iter().map(|p| p.rotate(90.0)).collect();
    assert_same_points(&turned, &expected);
    assert_abs_diff_eq!(turned[0].x, 9.525, epsilon = 1e-9);
    assert_abs_diff_eq!(turned[0].y, -19.05, epsilon = 1e-9);
}

#[test]
fn iso_enter_polygon() {
    let cap = KeycapFamily::Keycap
        .build(Some("ISOEnter"), &IndexMap::new())
        .unwrap();
    let pts = cap.vertices();
    assert_eq!(pts.len(), 7);
    assert_eq!(pts.first(), pts.last());
    let narrow = 19.05 * 1.25 / 2.0;
    let wide = 19.05 * 1.75 / 2.0;
    assert_abs_diff_eq!(narrow, 11.906, epsilon = 0.001);
    assert_abs_diff_eq!(wide, 16.669, epsilon = 0.001);
    assert_same_points(
        &pts,
        &[
            Vec2::new(narrow, 19.05),
            Vec2::new(narrow, -19.05),
            Vec2::new(-wide, -19.05),
            Vec2::new(-wide, 0.0),
            Vec2::new(-narrow, 0.0),
            Vec2::new(-narrow, 19.05),
            Vec2::new(narrow, 19.05),
        ],
    );
}

#[test]
fn iso_enter_rotation_applies() {
    let flat = KeycapFamily::Keycap.build(Some("ISOEnter"), &IndexMap::new()).unwrap();
    let turned = KeycapFamily::Keycap.build(Some("ISOEnter270"), &IndexMap::new()).unwrap();
    let expected: Vec<Vec2> = flat.vertices().iter().map(|p| p.rotate(270.0)).collect();
    assert_same_points(&turned.vertices(), &expected);
}

#[test]
fn outlines_are_deterministic() {
    let args = IndexMap::from([("offset_y".to_string(), "1.5".to_string())]);
    for size in kiswitch_keycap::size_names() {
        let a = KeycapFamily::KeycapChoc.build(Some(size), &args).unwrap();
        let b = KeycapFamily::KeycapChoc.build(Some(size), &args).unwrap();
        assert_eq!(a, b, "{size}");
    }
}

#[test]
fn regular_without_width_is_missing() {
    let err = KeycapFamily::Keycap.build(None, &IndexMap::new()).unwrap_err();
    assert_eq!(err, KeycapError::Param(ParamError::Missing("width".to_string())));
}

#[test]
fn explicit_width_without_preset() {
    let args = IndexMap::from([
        ("width".to_string(), "1.5".to_string()),
        ("name".to_string(), "Cap".to_string()),
    ]);
    let cap = KeycapFamily::Keycap.build(None, &args).unwrap();
    assert_eq!(cap.name, "Cap1.50u");
}

fn keycap_args(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn preset_keeps_caller_rotation_and_offset() {
    let args = keycap_args(&[("offset_x", "5"), ("rotation", "45")]);
    let cap = KeycapFamily::Keycap.build(Some("1u"), &args).unwrap();
    assert_eq!(cap.name, "1.00u_45deg_Offset");

    let shifted = KeycapConfig {
        offset: Vec2::new(5.0, 0.0),
        ..regular(1.0, 45.0)
    };
    assert_same_points(&cap.vertices(), &Keycap::new(&shifted).vertices());
    assert_abs_diff_eq!(cap.vertices()[0].x, Vec2::new(5.0 - 9.525, -9.525).rotate(45.0).x, epsilon = 1e-9);
}

#[test]
fn preset_overrides_only_what_it_defines() {
    let args = keycap_args(&[("rotation", "45"), ("offset_x", "2")]);
    let cap = KeycapFamily::Keycap.build(Some("2u90"), &args).unwrap();
    assert_eq!(cap.name, "2.00u_90deg_Offset");

    let cap = KeycapFamily::Keycap.build(Some("6uOffset"), &args).unwrap();
    assert_eq!(cap.name, "6.00u_45deg_Offset");
    assert_abs_diff_eq!(
        cap.vertices()[0].x,
        Vec2::new(-9.525 - 6.0 * 19.05 / 2.0, -9.525).rotate(45.0).x,
        epsilon = 1e-9
    );

    let iso = KeycapFamily::Keycap
        .build(Some("ISOEnter"), &keycap_args(&[("rotation", "180")]))
        .unwrap();
    assert_eq!(iso.name, "ISOEnter_180deg");
}
