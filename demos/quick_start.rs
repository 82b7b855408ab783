//! Accumulate several independent failures and report them once.

use error_bag::{errorf, ErrorBag};

fn main() {
    let bag = ErrorBag::new();

    for path in ["/etc/app/main.conf", "/etc/app/extra.conf"] {
        if let Err(err) = std::fs::read_to_string(path) {
            errorf!(bag, "{path}: {err}");
        }
    }

    match bag.finish() {
        Ok(()) => println!("all good"),
        Err(err) => {
            println!("{err}");
            err.bag().visit(|e| println!("  - {e}"));
        }
    }
}
