use gridhunt::{Coord, Heatmap, REFERENCE_WEIGHTS};

#[test]
fn test_reference_shape() {
    let map = Heatmap::reference();
    assert_eq!(map.size(), 10);
    // Corners are the floor, the center plateau the peak
    assert_eq!(map.weight_at(Coord::new(0, 0)), 8.0);
    assert_eq!(map.weight_at(Coord::new(9, 9)), 8.0);
    assert_eq!(map.weight_at(Coord::new(4, 4)), 21.4);
    assert_eq!(map.weight_at(Coord::new(5, 5)), 21.4);
    for r in 0..10 {
        for c in 0..10 {
            let w = map.weight_at(Coord::new(r, c));
            assert!(w >= 8.0 && w <= 21.4);
            // Radial symmetry in both axes
            assert_eq!(w, map.weight_at(Coord::new(9 - r, c)));
            assert_eq!(w, map.weight_at(Coord::new(r, 9 - c)));
        }
    }
}

#[test]
fn test_reference_constant_matches() {
    let map = Heatmap::reference();
    for (r, row) in REFERENCE_WEIGHTS.iter().enumerate() {
        for (c, &w) in row.iter().enumerate() {
            assert_eq!(map.weight_at(Coord::new(r, c)), w);
        }
    }
}

#[test]
fn test_zero_at_is_idempotent_and_local() {
    let mut map = Heatmap::reference();
    let target = Coord::new(3, 4);
    map.zero_at(target);
    assert_eq!(map.weight_at(target), 0.0);
    map.zero_at(target);
    assert_eq!(map.weight_at(target), 0.0);
    // Neighbors untouched
    assert_eq!(map.weight_at(Coord::new(3, 3)), 20.3);
    assert_eq!(map.weight_at(Coord::new(2, 4)), 19.9);
}

#[test]
fn test_uniform_and_from_table() {
    let map = Heatmap::uniform(4);
    assert_eq!(map.size(), 4);
    assert_eq!(map.weight_at(Coord::new(0, 0)), map.weight_at(Coord::new(3, 3)));

    let map = Heatmap::from_table(2, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(map.weight_at(Coord::new(1, 0)), 3.0);
}
