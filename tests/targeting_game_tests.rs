use std::collections::BTreeSet;

use battleship_ai::{Coord, EngineConfig, Fleet, TargetingEngine};

#[test]
fn engine_sinks_a_hand_placed_fleet() {
    // Standard fleet on a 10x10 board, fixed layout.
    let layouts: &[(&str, &[(usize, usize)])] = &[
        ("Carrier", &[(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]),
        ("Battleship", &[(7, 3), (7, 4), (7, 5), (7, 6)]),
        ("Cruiser", &[(2, 5), (3, 5), (4, 5)]),
        ("Submarine", &[(0, 8), (1, 8), (2, 8)]),
        ("Destroyer", &[(5, 8), (5, 9)]),
    ];
    let total_cells: usize = layouts.iter().map(|(_, cells)| cells.len()).sum();
    let cell_owner = |coord: Coord| {
        layouts
            .iter()
            .find(|(_, cells)| cells.contains(&(coord.x, coord.y)))
            .map(|(name, _)| *name)
    };

    let mut remaining: Fleet = layouts
        .iter()
        .map(|(name, cells)| (name.to_string(), cells.len()))
        .collect();
    let mut ai = TargetingEngine::new(EngineConfig::new(10));
    let mut struck: BTreeSet<Coord> = BTreeSet::new();
    let mut shots = 0;
    while !remaining.is_empty() {
        shots += 1;
        assert!(shots <= 300, "engine failed to sink the fleet in time");
        let target = ai.next_move(&remaining);
        assert!(target.in_bounds(10));
        let mut was_hit = false;
        if struck.insert(target) {
            if let Some(name) = cell_owner(target) {
                was_hit = true;
                let left = remaining.get_mut(name).expect("struck a sunk ship's cell");
                *left -= 1;
                if *left == 0 {
                    remaining.remove(name);
                }
            }
        }
        ai.register_shot(target, was_hit);
    }
    assert!(shots >= total_cells);
    assert_eq!(ai.hits().len(), total_cells);
}
