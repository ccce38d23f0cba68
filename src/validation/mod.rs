//! Advisory checks run while encoding sprites.
//!
//! Nothing here aborts a run: the dimension tracker reports mismatched
//! sprite sizes as diagnostics and processing continues.

mod dimensions;
mod warning;

pub use dimensions::{DimensionTracker, HEIGHT_MISMATCH, WIDTH_MISMATCH};
pub use warning::{Diagnostic, Diagnostics};

use crate::output::Printer;

/// Print diagnostics as warning lines.
pub fn print_diagnostics(diagnostics: &Diagnostics, printer: &Printer) {
    for d in diagnostics.iter() {
        printer.warning("Warning", &d.message);
        if let Some(help) = &d.help {
            printer.info("", &printer.dim(help));
        }
    }
}
