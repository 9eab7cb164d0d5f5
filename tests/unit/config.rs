use super::*;

#[test]
fn empty_json_is_the_hello_preset() {
    let cfg = RevealConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, RevealConfig::hello());
    assert_eq!(cfg.palette.len(), 13);
    assert_eq!(cfg.palette.first(), cfg.palette.last());
    assert_eq!(cfg.stroke_width, 30.0);
    assert_eq!(cfg.duration_ms, 5000);
    assert_eq!(cfg.tolerance, 0.5);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_overrides_selected_fields() {
    let cfg = RevealConfig::from_json_str(
        r##"{
            "path_d": "M0 0 L100 0",
            "palette": ["#ff0000", [0.0, 0.0, 1.0]],
            "interpolation": "oklab",
            "flatten_method": "subdivision",
            "ease": "linear",
            "canvas": { "width": 200, "height": 100 },
            "fps": { "num": 24, "den": 1 }
        }"##,
    )
    .unwrap();
    assert_eq!(cfg.path_d, "M0 0 L100 0");
    assert_eq!(cfg.palette[0], Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(cfg.palette[1], Color::rgb(0.0, 0.0, 1.0));
    assert_eq!(cfg.interpolation, InterpolationSpace::Oklab);
    assert_eq!(cfg.flatten_method, FlattenMethod::Subdivision);
    assert_eq!(cfg.ease, Ease::Linear);
    assert_eq!(cfg.canvas, Canvas { width: 200, height: 100 });
    assert_eq!(cfg.fps, Fps { num: 24, den: 1 });
    assert_eq!(cfg.stroke_width, 30.0);
}

#[test]
fn pretty_json_reads_back_identically() {
    let cfg = RevealConfig::hello();
    let json = cfg.to_json_pretty().unwrap();
    assert!(json.contains("\"#3fcebc\""));
    assert_eq!(RevealConfig::from_json_str(&json).unwrap(), cfg);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = RevealConfig::from_json_str(r#"{ "strokeWidth": 12 }"#).unwrap_err();
    assert!(matches!(err, RevealError::Serde(_)));
}

#[test]
fn validate_catches_out_of_range_values() {
    let base = RevealConfig::hello();
    let cases = [
        RevealConfig { path_d: "  ".into(), ..base.clone() },
        RevealConfig { palette: vec![Color::rgb(1.0, 1.0, 1.0)], ..base.clone() },
        RevealConfig { tolerance: 0.0, ..base.clone() },
        RevealConfig { tolerance: f64::NAN, ..base.clone() },
        RevealConfig { tolerance: 1e-9, ..base.clone() },
        RevealConfig { stroke_width: -1.0, ..base.clone() },
        RevealConfig { duration_ms: 0, ..base.clone() },
        RevealConfig { fps: Fps { num: 0, den: 1 }, ..base.clone() },
        RevealConfig { canvas: Canvas { width: 0, height: 10 }, ..base.clone() },
    ];
    for cfg in cases {
        assert!(
            matches!(cfg.validate(), Err(RevealError::InvalidArgument(_))),
            "{cfg:?}"
        );
    }
}

#[test]
fn from_path_reports_missing_files() {
    let err = RevealConfig::from_path("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("open config"));
}
