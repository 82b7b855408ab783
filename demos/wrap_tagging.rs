//! Install a wrapper that tags every error flowing through a collector,
//! without double-tagging errors that already carry the tag.

use error_bag::{BagError, ErrorBag};
use std::fmt;
use std::rc::Rc;

#[derive(Debug)]
struct RequestError(BagError);

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request 4711: {}", self.0)
    }
}

impl std::error::Error for RequestError {}

fn main() {
    let bag = ErrorBag::with_wrapper(|err: BagError| -> BagError {
        if err.downcast_ref::<RequestError>().is_some() {
            err
        } else {
            Rc::new(RequestError(err))
        }
    });

    bag.wrap(std::io::Error::other("plain error"));
    bag.wrap(RequestError(Rc::new(std::io::Error::other("custom error"))));

    bag.visit(|err| println!("{err}"));
    // request 4711: plain error
    // request 4711: custom error
}
