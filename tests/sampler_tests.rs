use gridhunt::weighted_choice;
use rand::{rngs::SmallRng, SeedableRng};

#[test]
fn test_all_zero_weights_falls_back_to_first() {
    let mut rng = SmallRng::seed_from_u64(7);
    let items = ['a', 'b', 'c'];
    for _ in 0..100 {
        assert_eq!(weighted_choice(&items, &[0.0, 0.0, 0.0], &mut rng), 'a');
    }
}

#[test]
fn test_single_item() {
    let mut rng = SmallRng::seed_from_u64(7);
    assert_eq!(weighted_choice(&[42usize], &[3.5], &mut rng), 42);
}

#[test]
fn test_zero_weight_item_not_drawn() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..1_000 {
        assert_eq!(weighted_choice(&[0, 1], &[0.0, 1.0], &mut rng), 1);
    }
}

#[test]
fn test_frequencies_follow_weights() {
    let mut rng = SmallRng::seed_from_u64(42);
    let items = [0usize, 1, 2];
    let weights = [1.0, 2.0, 7.0];
    let trials = 20_000usize;

    let mut counts = [0usize; 3];
    for _ in 0..trials {
        counts[weighted_choice(&items, &weights, &mut rng)] += 1;
    }
    let expected = [0.1, 0.2, 0.7];
    for (i, &count) in counts.iter().enumerate() {
        let freq = count as f64 / trials as f64;
        assert!(
            (freq - expected[i]).abs() < 0.02,
            "item {}: frequency {} too far from {}",
            i,
            freq,
            expected[i]
        );
    }
}

#[test]
#[should_panic]
fn test_length_mismatch_aborts() {
    let mut rng = SmallRng::seed_from_u64(1);
    weighted_choice(&[1, 2], &[1.0], &mut rng);
}
