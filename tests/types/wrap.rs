use error_bag::{BagError, ErrorBag, ErrorWrapper};
use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct Msg(&'static str);

impl fmt::Display for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for Msg {}

#[derive(Debug)]
struct Tagged(BagError);

impl fmt::Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tagged: {}", self.0)
    }
}

impl std::error::Error for Tagged {}

struct TagOnce;

impl ErrorWrapper for TagOnce {
    fn wrap_error(&self, err: BagError) -> BagError {
        if err.downcast_ref::<Tagged>().is_some() {
            err
        } else {
            Rc::new(Tagged(err))
        }
    }
}

fn texts(bag: &ErrorBag) -> Vec<String> {
    bag.errors().iter().map(|e| e.to_string()).collect()
}

#[test]
fn wrap_without_wrapper_behaves_like_add() {
    let bag = ErrorBag::new();
    bag.wrap(Msg("plain"));

    assert_eq!(texts(&bag), ["plain"]);
}

#[test]
fn wrap_tags_plain_errors_and_passes_tagged_through() {
    let bag = ErrorBag::with_wrapper(TagOnce);
    bag.wrap(Msg("plain"));
    bag.wrap(Tagged(Rc::new(Msg("already"))));

    assert_eq!(texts(&bag), ["tagged: plain", "tagged: already"]);
}

#[test]
fn wrap_transforms_sub_collector_errors_individually() {
    let inner = ErrorBag::new();
    inner.add(Msg("a")).add(Msg("b"));

    let outer = ErrorBag::with_wrapper(TagOnce);
    outer.wrap(&inner);

    assert_eq!(texts(&outer), ["tagged: a", "tagged: b"]);
    assert_eq!(inner.len(), 2);
}

#[test]
fn wrap_of_itself_is_a_noop() {
    let bag = ErrorBag::with_wrapper(TagOnce);
    bag.wrap(Msg("only"));
    bag.wrap(&bag);
    bag.wrap(bag.as_error());

    assert_eq!(bag.len(), 1);
}

#[test]
fn wrapper_can_be_installed_after_construction() {
    let bag = ErrorBag::new();
    bag.set_wrapper(TagOnce);
    bag.wrap(Msg("late"));

    assert_eq!(texts(&bag), ["tagged: late"]);
}

#[test]
fn clearing_the_wrapper_restores_add_behavior() {
    let bag = ErrorBag::with_wrapper(TagOnce);
    bag.wrap(Msg("first"));
    bag.clear_wrapper();
    bag.wrap(Msg("second"));

    assert_eq!(texts(&bag), ["tagged: first", "second"]);
}

#[test]
fn closure_wrappers_are_accepted() {
    let bag = ErrorBag::with_wrapper(|err: BagError| -> BagError { Rc::new(Tagged(err)) });
    bag.wrap(Msg("plain"));

    assert_eq!(texts(&bag), ["tagged: plain"]);
}

#[test]
fn wrap_transform_returning_receiver_is_discarded() {
    let bag = ErrorBag::new();
    bag.add(Msg("seed"));

    let receiver = bag.clone();
    bag.set_wrapper(move |_err: BagError| -> BagError { Rc::new(receiver.as_error()) });
    bag.wrap(Msg("fed back"));

    assert_eq!(bag.len(), 1);
}
