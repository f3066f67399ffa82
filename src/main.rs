//! Binary entry point for `pubspec-pin`.

use std::process;

fn main() {
    if let Err(e) = pubspec_pin::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
