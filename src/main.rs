//! Linkweb binary entry point.

use std::process::exit;

fn main() {
    match linkweb::cli::run() {
        Ok(code) => exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            exit(1);
        }
    }
}
