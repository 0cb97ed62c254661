use area_calc::{checked_square_area, circle_area, square_area, Area, AreaReport, Shape, PI_APPROX};

#[test]
fn test_square_area_properties() {
    assert_eq!(square_area(4), 16);
    assert_eq!(square_area(0), 0);
    assert_eq!(square_area(-3), 9);
    assert_eq!(square_area(4_u64), 16_u64);
    assert_eq!(square_area(2.5), 6.25);
}

#[test]
fn test_circle_area_properties() {
    assert_eq!(circle_area(0), 0.0);
    assert_eq!(circle_area(2), 3.14159 * 4.0);
    assert_eq!(circle_area(2.0), 12.56636);
    assert_eq!(circle_area(-2.0), circle_area(2.0));
    assert_eq!(PI_APPROX, 3.14159);
}

#[test]
fn test_checked_and_unchecked_agree() {
    for width in [-12_i64, -3, 0, 1, 4, 1_000] {
        assert_eq!(checked_square_area(width).unwrap(), square_area(width));
    }
    assert!(checked_square_area(i64::MIN).is_err());
}

#[test]
fn test_area_reports_from_json_shapes() {
    let shapes: Vec<Shape> = serde_json::from_str(
        r#"[{"shape":"square","width":4.0},{"shape":"circle","radius":2.0}]"#,
    )
    .unwrap();

    let areas: Vec<f64> = shapes.iter().map(Area::area).collect();
    assert_eq!(areas, vec![16.0, 12.56636]);

    let report = AreaReport::from(shapes[0]);
    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["area"], 16.0);
    assert_eq!(json["shape"]["shape"], "square");
}
