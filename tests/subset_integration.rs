use divchain::{
    build_largest_divisible_subset, format_sequence, largest_divisible_chain,
    try_build_largest_divisible_subset, OrderingPolicy, SubsetError, SubsetFinder,
};

#[test]
fn empty_input() {
    assert!(build_largest_divisible_subset(&[]).is_empty());
}

#[test]
fn single_element() {
    assert_eq!(build_largest_divisible_subset(&[7]), vec![7]);
}

#[test]
fn tie_picks_earliest_chain_end() {
    assert_eq!(build_largest_divisible_subset(&[1, 2, 3]), vec![2, 1]);
}

#[test]
fn full_chain_in_reverse_input_order() {
    assert_eq!(build_largest_divisible_subset(&[1, 2, 4, 8]), vec![8, 4, 2, 1]);
}

#[test]
fn unsorted_input_reverse_appearance() {
    let subset = build_largest_divisible_subset(&[4, 8, 2]);
    assert_eq!(subset, vec![2, 8, 4]);
    assert_eq!(format_sequence(&subset), "[2, 8, 4]");
}

#[test]
fn non_members_are_dropped() {
    // sorted: 1 3 5 9 10 18; chains 1-3-9-18 (4) beat 1-5-10 (3).
    let input = [10, 3, 18, 5, 1, 9];
    assert_eq!(build_largest_divisible_subset(&input), vec![9, 1, 18, 3]);
    assert_eq!(largest_divisible_chain(&input), vec![18, 9, 3, 1]);
}

#[test]
fn all_equal_input() {
    assert_eq!(build_largest_divisible_subset(&[3, 3, 3]), vec![3, 3, 3]);
}

#[test]
fn duplicates_inside_a_longer_chain() {
    let input = [2, 7, 4, 2, 8];
    let subset = build_largest_divisible_subset(&input);
    assert_eq!(subset, vec![8, 2, 4, 2]);
}

#[test]
fn caller_input_is_untouched() {
    let input = vec![9, 3, 1];
    let _ = build_largest_divisible_subset(&input);
    assert_eq!(input, vec![9, 3, 1]);
}

#[test]
fn repeated_runs_agree() {
    let input = [12, 6, 3, 24, 2, 4, 8, 5, 15, 30, 60];
    let first = build_largest_divisible_subset(&input);
    for _ in 0..5 {
        assert_eq!(build_largest_divisible_subset(&input), first);
    }
}

#[test]
fn checked_entry_point() {
    assert_eq!(
        try_build_largest_divisible_subset(&[4, 0, 2]),
        Err(SubsetError::NonPositive { index: 1, value: 0 })
    );
    assert_eq!(try_build_largest_divisible_subset(&[4, 8, 2]), Ok(vec![2, 8, 4]));
}

#[test]
fn finder_configuration() {
    let finder = SubsetFinder::new()
        .with_ordering(OrderingPolicy::Chain)
        .with_block_size(1);
    assert_eq!(finder.ordering(), OrderingPolicy::Chain);
    assert_eq!(finder.find(&[4, 8, 2]), vec![8, 4, 2]);
    assert_eq!(finder.try_find(&[-1]), Err(SubsetError::NonPositive { index: 0, value: -1 }));
}
