use super::*;

#[test]
fn test_canonical_id_folds_banded_ids() {
    assert_eq!(canonical_competency_id(1001), 1);
    assert_eq!(canonical_competency_id(2010), 10);
    assert_eq!(canonical_competency_id(3005), 5);
    assert_eq!(canonical_competency_id(11), 1);
    assert_eq!(canonical_competency_id(20), 10);
}

#[test]
fn test_canonical_id_identity_up_to_ten() {
    for id in 1..=10 {
        assert_eq!(canonical_competency_id(id), id);
    }
    assert_eq!(canonical_competency_id(0), 0);
    assert_eq!(canonical_competency_id(-3), -3);
}

#[test]
fn test_is_canonical_competency_range() {
    assert!(is_canonical_competency(1));
    assert!(is_canonical_competency(10));
    assert!(!is_canonical_competency(0));
    assert!(!is_canonical_competency(11));
    assert!(!is_canonical_competency(-1));
}

#[test]
fn test_palette_index_cycles() {
    assert_eq!(palette_index(1, 10), 0);
    assert_eq!(palette_index(10, 10), 9);
    assert_eq!(palette_index(11, 10), 0);
    assert_eq!(palette_index(0, 3), 2);
    assert_eq!(palette_index(5, 0), 0);
}
