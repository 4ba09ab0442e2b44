use battleship_ai::{default_fleet, Orientation, TargetError, DEFAULT_FLEET};

#[test]
fn parses_known_orientation_tags() {
    assert_eq!(
        "horizontal".parse::<Orientation>().unwrap(),
        Orientation::Horizontal
    );
    assert_eq!(
        "vertical".parse::<Orientation>().unwrap(),
        Orientation::Vertical
    );
}

#[test]
fn rejects_unknown_orientation_tags() {
    let err = "diagonal".parse::<Orientation>().unwrap_err();
    assert_eq!(err, TargetError::InvalidOrientation("diagonal".to_string()));
}

#[test]
fn default_fleet_matches_the_standard_lengths() {
    let fleet = default_fleet();
    assert_eq!(fleet.len(), DEFAULT_FLEET.len());
    assert_eq!(fleet["Carrier"], 5);
    assert_eq!(fleet["Battleship"], 4);
    assert_eq!(fleet["Cruiser"], 3);
    assert_eq!(fleet["Submarine"], 3);
    assert_eq!(fleet["Destroyer"], 2);
}
