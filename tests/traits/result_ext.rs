use error_bag::{ErrorBag, ResultExt};

#[test]
fn ok_values_pass_through() {
    let bag = ErrorBag::new();

    assert_eq!("42".parse::<u32>().stash_in(&bag), Some(42));
    assert!(bag.is_empty());
}

#[test]
fn errors_are_stashed_and_none_returned() {
    let bag = ErrorBag::new();

    assert_eq!("nope".parse::<u32>().stash_in(&bag), None);
    assert_eq!(bag.len(), 1);
}

#[test]
fn a_loop_collects_every_failure() {
    let bag = ErrorBag::new();
    let parsed: Vec<u32> = ["1", "x", "3", "y"]
        .iter()
        .filter_map(|s| s.parse::<u32>().stash_in(&bag))
        .collect();

    assert_eq!(parsed, [1, 3]);
    assert_eq!(bag.len(), 2);
}
