//! Command handlers for the CLI.

mod folders;
mod notes;
mod tree;


use crossterm::style::Stylize;

use crate::cli::config::Config;
use crate::domain::AccessGuard;
use crate::index::{Root, ScanWarning};

// Re-export public items
pub use folders::handle_folders;
pub use notes::{handle_mkdir, handle_new, handle_open, handle_rm};
pub use tree::handle_tree;

// Re-export for tests
#[cfg(test)]
pub(crate) use folders::folder_listing;
#[cfg(test)]
pub(crate) use notes::{handle_new_impl, handle_open_impl};
#[cfg(test)]
pub(crate) use tree::tree_output;

// ===========================================
// Shared Utilities
// ===========================================

/// Configured roots that pass the access check, in order.
pub(crate) fn permitted_roots(config: &Config, guard: &impl AccessGuard) -> Vec<Root> {
    config
        .roots()
        .into_iter()
        .filter(|root| guard.permits(root.path()))
        .collect()
}

/// Prints scan warnings to stderr in yellow.
pub(crate) fn print_warnings(warnings: &[ScanWarning]) {
    for warning in warnings {
        eprintln!("{}", format!("Warning: {warning}").yellow());
    }
}
