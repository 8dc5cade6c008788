use kiswitch_params::ParamError;
use kiswitch_switch::{Manifest, Scalar, SwitchError};

const MANIFEST: &str = r#"
groups:
  - name: Custom_Switches
    jobs:
      - switch: SwitchCherryMX
        args:
          switch_type: Plate
          cutout: relief
        keycap: Keycap
        sizes: [1u, 2u]
      - switch: StabilizerCherryMX
        args:
          size: 6.25
      - switch: SwitchKailhChoc
        args:
          hotswap: false
          hotswap_plated: true
  - name: Broken
    jobs:
      - switch: SwitchTopre
      - switch: SwitchAlpsMatias
        args:
          text_offset: far
"#;

#[test]
fn yaml_scalars_keep_their_type() {
    let manifest = Manifest::from_yaml(MANIFEST).unwrap();
    let jobs = &manifest.groups[0].jobs;
    assert_eq!(jobs[0].args["switch_type"], Scalar::Text("Plate".to_string()));
    assert_eq!(jobs[1].args["size"], Scalar::Number(6.25));
    assert_eq!(jobs[2].args["hotswap"], Scalar::Bool(false));
    assert_eq!(jobs[0].sizes.as_deref().map(<[String]>::len), Some(2));
}

#[test]
fn failing_jobs_do_not_stop_the_batch() {
    let out = Manifest::from_yaml(MANIFEST).unwrap().generate();
    assert_eq!(out.len(), 2);

    let custom = &out[0];
    assert_eq!(custom.dir_name(), "Custom_Switches.pretty");
    let names: Vec<_> = custom.footprints.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "SW_Cherry_MX_Plate",
            "SW_Cherry_MX_Plate_1.00u",
            "SW_Cherry_MX_Plate_2.00u",
            "Stabilizer_Cherry_MX_6.25u",
        ]
    );
    assert_eq!(custom.failures.len(), 1);
    assert!(matches!(custom.failures[0].1, SwitchError::Unsupported(_)));

    let broken = &out[1];
    assert!(broken.footprints.is_empty());
    assert!(matches!(broken.failures[0].1, SwitchError::UnknownFamily(_)));
    assert!(matches!(
        broken.failures[1].1,
        SwitchError::Param(ParamError::Type { .. })
    ));
}

#[test]
fn unknown_manifest_keys_are_rejected() {
    let err = Manifest::from_yaml("groups:\n  - name: X\n    jobs: []\n    extra: 1\n").unwrap_err();
    assert!(matches!(err, SwitchError::Manifest(_)));
}

#[test]
fn builtin_library_generates_cleanly() {
    let out = Manifest::builtin().generate();
    assert!(out.iter().all(|g| g.failures.is_empty()));

    let count = |name: &str| {
        out.iter()
            .find(|g| g.name == name)
            .map(|g| g.footprints.len())
            .unwrap_or_default()
    };
    assert_eq!(count("Mounting_Keyboard_Stabilizer"), 6);
    assert_eq!(count("Switch_Keyboard_Alps_Matias"), 1 + 17);
    assert_eq!(count("Switch_Keyboard_Cherry_MX"), 2 * (1 + 29));
    assert_eq!(count("Switch_Keyboard_Hybrid"), 1 + 17);
    assert_eq!(count("Switch_Keyboard_Kailh"), 5 * (1 + 29) + (1 + 17));
    assert_eq!(count("Switch_Keyboard_Hotswap_Kailh"), 2 * 4 * (1 + 29));

    let mut names: Vec<_> = out
        .iter()
        .flat_map(|g| g.footprints.iter().map(|f| f.name.clone()))
        .collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total, "footprint names must be unique");
}
