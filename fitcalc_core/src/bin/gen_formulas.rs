//! Writes the formula reference rendered from the registry.
//!
//! ```bash
//! cargo run --bin gen-formulas                 # fitcalc_core/src/formulas/FORMULAS.md
//! cargo run --bin gen-formulas -- docs/ref.md  # any other path
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use fitcalc_core::formulas::{generate_formulas_markdown, ALL_FORMULAS};

const DEFAULT_OUTPUT: &str = "fitcalc_core/src/formulas/FORMULAS.md";

fn main() -> ExitCode {
    let output = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    match std::fs::write(&output, generate_formulas_markdown()) {
        Ok(()) => {
            println!("{} formulas -> {}", ALL_FORMULAS.len(), output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("cannot write {}: {}", output.display(), e);
            ExitCode::FAILURE
        }
    }
}
