use error_bag::{errorf, BagSource, ErrorBag};
use std::fmt;

#[derive(Debug)]
struct Msg(&'static str);

impl fmt::Display for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Msg {}

/// A type that carries a collector, the way a request or session object
/// would.
struct Session {
    bag: ErrorBag,
}

impl BagSource for Session {
    fn error_bag(&self) -> &ErrorBag {
        &self.bag
    }
}

#[test]
fn merging_a_carrier_flattens_its_bag() {
    let session = Session {
        bag: ErrorBag::new(),
    };
    session.bag.add(Msg("first")).add(Msg("second"));

    let parent = ErrorBag::new();
    parent.merge(&session);

    assert_eq!(parent.len(), 2);
    assert_eq!(session.bag.len(), 2);
}

#[test]
fn merging_a_carrier_into_its_own_bag_is_a_noop() {
    let session = Session {
        bag: ErrorBag::new(),
    };
    errorf!(session.bag, "first error");
    errorf!(session.bag, "second error");

    // the carrier exposes the very storage the target is
    session.bag.merge(&session);

    assert_eq!(session.bag.len(), 2);
}

#[test]
fn a_bag_is_its_own_source() {
    let bag = ErrorBag::new();
    bag.add(Msg("x"));

    assert!(bag.error_bag().same(&bag));
}
