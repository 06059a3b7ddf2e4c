use riskq_core::records::CodeField;
use riskq_scales::*;

#[test]
fn lookup_returns_interval_for_known_code() {
    let entry = lookup("CP3").unwrap();
    assert_eq!(entry.level, 3);
    assert_eq!(entry.interval, "10% to 50%");

    let display = describe("HA2").unwrap();
    assert_eq!(display.interval, "10 to 100");
    assert_eq!(display.unit, "persons affected");
}

#[test]
fn lookup_is_case_insensitive_on_prefix() {
    assert_eq!(lookup("dp4"), lookup("DP4"));
    assert!(lookup(" sa1 ").is_some());
}

#[test]
fn unknown_prefix_is_a_miss() {
    assert!(lookup("XX3").is_none());
    assert!(describe("ZZ1").is_none());
}

#[test]
fn out_of_range_digit_is_a_miss() {
    assert!(lookup("DP6").is_none());
    assert!(lookup("DP9").is_none());
    assert!(lookup("DP12").is_none());
}

#[test]
fn malformed_codes_are_misses() {
    for raw in ["", "DP", "3", "DP-1", "DP3a", "D P3", "DP3.5"] {
        assert!(lookup(raw).is_none(), "{raw:?} should not resolve");
    }
}

#[test]
fn describe_or_default_falls_back() {
    let fallback = describe_or_default(Some("QQ7"));
    assert_eq!(fallback.interval, "Unknown");
    assert_eq!(describe_or_default(None).interval, "Unknown");
    assert_eq!(
        describe_or_default(Some("FA5")).interval,
        "More than 1 000"
    );
}

#[test]
fn numeric_conversion_of_known_codes() {
    assert_eq!(to_numeric(Some("HA2")), 2.0);
    assert_eq!(to_numeric(Some("DP0")), 0.0);
    assert_eq!(to_numeric(Some("EA5")), 5.0);
}

#[test]
fn numeric_conversion_defaults_to_zero() {
    assert_eq!(to_numeric(None), 0.0);
    assert_eq!(to_numeric(Some("bogus")), 0.0);
    assert_eq!(to_numeric(Some("DP7")), 0.0);
}

#[test]
fn numeric_for_rejects_codes_from_other_scales() {
    assert_eq!(to_numeric_for(ScaleKind::Human, Some("HA3")), 3.0);
    assert_eq!(to_numeric_for(ScaleKind::Human, Some("FA3")), 0.0);
    assert_eq!(level_for(ScaleKind::Financial, "HA3"), None);
    assert_eq!(level_for(ScaleKind::Financial, "FA0"), Some(0.0));
}

#[test]
fn fields_map_to_their_scales() {
    assert_eq!(kind_for_field(CodeField::Human), ScaleKind::Human);
    assert_eq!(
        kind_for_field(CodeField::ClimateChange),
        ScaleKind::ClimateChange
    );
    assert_eq!(
        kind_for_field(CodeField::DirectProbability),
        ScaleKind::DirectProbability
    );
}

#[test]
fn slider_position_rounds_to_nearest_code() {
    assert_eq!(code_for_position(ScaleKind::DirectProbability, 2.4), "DP2");
    assert_eq!(code_for_position(ScaleKind::DirectProbability, 2.6), "DP3");
    assert_eq!(code_for_position(ScaleKind::Human, -1.0), "HA0");
    assert_eq!(code_for_position(ScaleKind::Human, 9.0), "HA5");
    assert_eq!(code_for_position(ScaleKind::Human, f64::NAN), "HA0");
}

#[test]
fn climate_change_delta_is_signed() {
    assert_eq!(climate_change_delta(Some("DP2"), Some("CC4")), Some(2.0));
    assert_eq!(climate_change_delta(Some("DP3"), Some("CC1")), Some(-2.0));
    assert_eq!(climate_change_delta(Some("DP3"), None), None);
    assert_eq!(climate_change_delta(Some("DP3"), Some("DP4")), None);
}

#[test]
fn every_scale_has_six_ordered_entries() {
    for kind in ScaleKind::ALL {
        let table = scale(kind);
        assert_eq!(table.kind, kind);
        for (i, entry) in table.entries.iter().enumerate() {
            assert_eq!(usize::from(entry.level), i);
        }
        assert!(table.entry(6).is_none());
    }
}

#[test]
fn parsed_code_displays_canonically() {
    let code = parse_code("ha2").unwrap();
    assert_eq!(code.to_string(), "HA2");
}
