use super::*;

#[test]
fn defined_codes_round_trip_through_enum() {
    for (i, ty) in TypeCode::ALL.into_iter().enumerate() {
        assert_eq!(ty.index(), i);
        assert_eq!(TypeCode::from_code(i as i64), Some(ty));
    }
    assert_eq!(TypeCode::from_code(5), None);
    assert_eq!(TypeCode::from_code(-1), None);
}

#[test]
fn defined_codes_use_their_entry() {
    let palette = ColorPalette::default();
    for (i, ty) in TypeCode::ALL.into_iter().enumerate() {
        assert_eq!(palette.resolve(i as i64), palette.entries[i]);
        assert_eq!(palette.color_for(Some(ty)), palette.entries[i]);
    }
    assert_eq!(palette.resolve(2), Rgb8::new(0, 160, 0));
}

#[test]
fn unknown_codes_resolve_to_fallback() {
    let palette = ColorPalette::default();
    for code in [5, 6, 42, -1, i64::MIN, i64::MAX] {
        assert_eq!(palette.resolve(code), Rgb8::new(64, 64, 64));
    }
}

#[test]
fn palette_json_uses_rgb_triplets() {
    let json = r#"{
        "entries": [[0,0,0],[1,1,1],[2,2,2],[3,3,3],[4,4,4]],
        "fallback": [9,9,9]
    }"#;
    let palette: ColorPalette = serde_json::from_str(json).unwrap();
    assert_eq!(palette.resolve(3), Rgb8::new(3, 3, 3));
    assert_eq!(palette.resolve(99), Rgb8::new(9, 9, 9));
}
