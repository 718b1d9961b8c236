//! Typeahead CLI binary.

use clap::Parser;
use std::process;
use typeahead::cli::{args::*, commands::*};

fn main() {
    // Parse command line arguments using clap
    let args = TypeaheadArgs::parse();

    // Execute the command
    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
