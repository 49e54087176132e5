// tests/band.rs
//
// Acceptance band derivation across the three difficulty levels.
//
use gavel::config::options::Difficulty;
use gavel::work::acceptance_band;

#[test]
fn concrete_examples() {
    // +/- 5%
    assert_eq!(acceptance_band((100, 200), Difficulty::Hard.factor()), (95, 210));
    // +/- 25%
    assert_eq!(acceptance_band((100, 200), Difficulty::Easy.factor()), (75, 250));
}

#[test]
fn band_always_contains_the_range() {
    for d in Difficulty::ALL {
        for range in [(0, 0), (1, 1), (37, 6_200), (999_999, 1_000_000)] {
            let (lo, hi) = acceptance_band(range, d.factor());
            assert!(lo <= hi, "{range:?} @ {d:?}");
            assert!(lo <= range.0, "{range:?} @ {d:?}");
            assert!(hi >= range.1, "{range:?} @ {d:?}");
        }
    }
}

#[test]
fn band_widens_with_difficulty() {
    let range = (12_345, 67_890);
    let mut prev = acceptance_band(range, Difficulty::Hard.factor());
    for d in [Difficulty::Medium, Difficulty::Easy] {
        let next = acceptance_band(range, d.factor());
        assert!(next.0 < prev.0, "lower bound should drop at {d:?}");
        assert!(next.1 > prev.1, "upper bound should rise at {d:?}");
        prev = next;
    }
}

#[test]
fn factors_match_levels() {
    assert_eq!(Difficulty::Hard.level(), 0);
    assert_eq!(Difficulty::Medium.level(), 1);
    assert_eq!(Difficulty::Easy.level(), 2);
    assert!((Difficulty::Hard.factor() - 0.05).abs() < 1e-9);
    assert!((Difficulty::Medium.factor() - 0.15).abs() < 1e-9);
    assert!((Difficulty::Easy.factor() - 0.25).abs() < 1e-9);
}
