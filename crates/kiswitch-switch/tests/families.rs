use approx::assert_abs_diff_eq;
use indexmap::IndexMap;
use kiswitch_core::Vec2;
use kiswitch_footprint::{Attribute, Drill, Layer, PadShape, PadType, Shape, TextKind};
use kiswitch_keycap::KeycapFamily;
use kiswitch_params::ParamError;
use kiswitch_switch::{Request, SwitchError, SwitchFamily, PATH3D};

fn args(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn build(family: SwitchFamily, pairs: &[(&str, &str)]) -> kiswitch_footprint::Footprint {
    let params = family.params(&args(pairs)).unwrap();
    family.assemble(&params).unwrap().finish()
}

#[test]
fn stabilizer_three_units() {
    let fp = build(SwitchFamily::StabilizerCherryMx, &[("size", "3")]);
    assert_eq!(fp.name, "Stabilizer_Cherry_MX_3.00u");
    assert_eq!(fp.attribute, Attribute::Virtual);
    assert!(fp.tags.ends_with("3.00u Cutout"));

    let holes: Vec<_> = fp.pads().collect();
    assert_eq!(holes.len(), 4);
    assert!(holes.iter().all(|p| p.pad_type == PadType::NonPlated));
    let expected = [
        (-19.05, -6.985, 3.048),
        (19.05, -6.985, 3.048),
        (-19.05, 8.225, 3.9878),
        (19.05, 8.225, 3.9878),
    ];
    for (pad, (x, y, d)) in holes.iter().zip(expected) {
        assert_abs_diff_eq!(pad.at.x, x);
        assert_abs_diff_eq!(pad.at.y, y);
        assert_eq!(pad.drill, Some(Drill::Round(d)));
    }

    let cutouts: Vec<_> = fp
        .on_layer(Layer::Eco1User)
        .filter_map(|s| match s {
            Shape::Rect { start, end, .. } => Some((*start, *end)),
            _ => None,
        })
        .collect();
    assert_eq!(cutouts.len(), 2);
    assert_abs_diff_eq!(cutouts[0].0.x, 19.05 - 3.375);
    assert_abs_diff_eq!(cutouts[0].1.y, 6.77);
    assert_abs_diff_eq!(cutouts[1].0.x, -19.05 - 3.375);
}

#[test]
fn stabilizer_rejects_unlisted_size() {
    let err = SwitchFamily::StabilizerCherryMx
        .params(&args(&[("size", "4")]))
        .unwrap_err();
    assert!(matches!(err, SwitchError::Param(ParamError::NotAllowed { .. })));
}

#[test]
fn cherry_relief_cutout() {
    let fp = build(SwitchFamily::CherryMx, &[("cutout", "relief")]);
    let relief = fp
        .on_layer(Layer::Eco1User)
        .find_map(|s| s.points().map(<[Vec2]>::len));
    assert_eq!(relief, Some(21));
    assert!(fp.tags.contains("Relief Cutout"));
}

#[test]
fn cherry_plate_has_no_mount_holes() {
    let pcb = build(SwitchFamily::CherryMx, &[]);
    let plate = build(SwitchFamily::CherryMx, &[("switch_type", "Plate")]);
    let npth = |fp: &kiswitch_footprint::Footprint| {
        fp.pads().filter(|p| p.pad_type == PadType::NonPlated).count()
    };
    assert_eq!(npth(&pcb), 3);
    assert_eq!(npth(&plate), 1);
    assert_eq!(plate.name, "SW_Cherry_MX_Plate");
    assert!(plate.description.ends_with("Plate Mount"));
}

#[test]
fn alps_has_only_pins() {
    let fp = build(SwitchFamily::AlpsMatias, &[]);
    assert!(fp.pads().all(|p| p.pad_type == PadType::ThroughHole));
    assert_eq!(fp.pads().count(), 2);
}

#[test]
fn choc_plated_without_hotswap_is_unsupported() {
    let params = SwitchFamily::KailhChoc
        .params(&args(&[("hotswap_plated", "true")]))
        .unwrap();
    assert!(matches!(
        SwitchFamily::KailhChoc.assemble(&params),
        Err(SwitchError::Unsupported(_))
    ));
}

#[test]
fn choc_hotswap_renames_default() {
    let fp = build(SwitchFamily::KailhChoc, &[("hotswap", "true")]);
    assert!(fp.name.starts_with("SW_Hotswap_Kailh_Choc"));
    assert_eq!(fp.attribute, Attribute::Smd);
    assert!(fp.pads().any(|p| p.pad_type == PadType::Smd));
}

#[test]
fn hybrid_slotted_pads() {
    let fp = build(SwitchFamily::HybridCherryMxAlps, &[]);
    let oval: Vec<_> = fp.pads().filter(|p| p.shape == PadShape::Oval).collect();
    assert_eq!(oval.len(), 2);
    assert_abs_diff_eq!(oval[0].rotation, 48.0);
    assert_abs_diff_eq!(oval[0].offset.x, 0.980778);
    assert_abs_diff_eq!(oval[1].rotation, 86.0);
    assert_eq!(oval[1].drill, Some(Drill::Oval(Vec2::new(2.08137, 1.5))));
}

#[test]
fn bad_switch_argument_is_a_param_error() {
    let err = SwitchFamily::CherryMx
        .params(&args(&[("text_offset", "far")]))
        .unwrap_err();
    assert!(matches!(err, SwitchError::Param(ParamError::Type { .. })));
    let err = SwitchFamily::CherryMx
        .params(&args(&[("colour", "red")]))
        .unwrap_err();
    assert!(matches!(err, SwitchError::Param(ParamError::Unknown(_))));
}

#[test]
fn generic_nodes_close_the_footprint() {
    let fp = build(SwitchFamily::AlpsMatias, &[]);
    let n = fp.shapes.len();
    let tail = &fp.shapes[n - 4..];
    assert!(matches!(
        &tail[0],
        Shape::Text { kind: TextKind::Reference, text, layer: Layer::FSilkS, .. } if text == "REF**"
    ));
    assert!(matches!(
        &tail[1],
        Shape::Text { kind: TextKind::Value, text, layer: Layer::FFab, .. } if *text == fp.name
    ));
    assert!(matches!(&tail[2], Shape::Text { kind: TextKind::User, text, .. } if text == "%R"));
    assert!(matches!(
        &tail[3],
        Shape::Model { path, .. } if *path == format!("{PATH3D}SW_Alps_Matias.wrl")
    ));
}

#[test]
fn keycap_variants_share_the_switch_body() {
    let fps = Request::new(SwitchFamily::KailhChoc)
        .keycap(KeycapFamily::KeycapChoc)
        .keycap_sizes(["1u", "ISOEnter"])
        .build()
        .unwrap();
    assert_eq!(fps.len(), 3);
    assert_eq!(fps[1].name, "SW_Kailh_Choc_V1V2_1.00u");
    assert!(fps[2].name.ends_with("_ISOEnter"));
    let bare_pads = fps[0].pads().count();
    assert!(fps.iter().all(|fp| fp.pads().count() == bare_pads));
    assert_eq!(fps[1].on_layer(Layer::DwgsUser).count(), fps[0].on_layer(Layer::DwgsUser).count() + 1);
}

#[test]
fn hotswap_plating_policies() {
    let bare = build(SwitchFamily::HotswapKailh, &[]);
    let plated = build(SwitchFamily::HotswapKailh, &[("hotswap_plated", "yes")]);
    assert_eq!(plated.name, "SW_Hotswap_Kailh_MX_Plated");

    let numbered_smd = |fp: &kiswitch_footprint::Footprint| {
        fp.pads()
            .filter(|p| p.pad_type == PadType::Smd && p.number.is_some())
            .map(|p| p.layers.clone())
            .collect::<Vec<_>>()
    };
    assert!(numbered_smd(&bare)
        .iter()
        .all(|l| *l == [Layer::BCu, Layer::BMask, Layer::BPaste]));
    assert!(numbered_smd(&plated).iter().all(|l| *l == [Layer::BCu]));

    let tht = |fp: &kiswitch_footprint::Footprint| {
        fp.pads().filter(|p| p.pad_type == PadType::ThroughHole).count()
    };
    assert_eq!(tht(&bare), 0);
    assert_eq!(tht(&plated), 2);
    assert!(!bare.on_layer(Layer::BCrtYd).collect::<Vec<_>>().is_empty());
}
