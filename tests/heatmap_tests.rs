use battleship_ai::{Coord, Heatmap};

#[test]
fn argmax_prefers_first_maximum_in_row_major_order() {
    let mut map = Heatmap::new(3);
    map.add(Coord::new(2, 0), 5);
    map.add(Coord::new(0, 1), 5);
    assert_eq!(map.argmax(), Coord::new(2, 0));
}

#[test]
fn argmax_of_all_zero_counts_is_origin() {
    let map = Heatmap::new(3);
    assert_eq!(map.argmax(), Coord::new(0, 0));
}

#[test]
fn merge_sums_counts_per_cell() {
    let mut a = Heatmap::new(2);
    a.add(Coord::new(0, 0), 1);
    a.add(Coord::new(1, 1), 2);
    let mut b = Heatmap::new(2);
    b.add(Coord::new(1, 1), 3);
    a.merge(&b);
    assert_eq!(a.get(Coord::new(0, 0)), 1);
    assert_eq!(a.get(Coord::new(1, 1)), 5);
    assert_eq!(a.get(Coord::new(1, 0)), 0);
}

#[cfg(debug_assertions)]
#[test]
#[should_panic]
fn get_rejects_out_of_range_x_in_debug_builds() {
    // An x past the edge must not alias into the next row.
    let map = Heatmap::new(2);
    let _ = map.get(Coord::new(2, 0));
}

#[test]
fn cells_iterate_row_major() {
    let map = Heatmap::new(2);
    let coords: Vec<Coord> = map.cells().map(|(coord, _)| coord).collect();
    assert_eq!(
        coords,
        vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(0, 1),
            Coord::new(1, 1)
        ]
    );
}
