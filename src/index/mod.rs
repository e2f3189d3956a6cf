//! Note scanning and folder synthesis over the configured roots

mod catalog;
mod folders;
mod scanner;

pub use catalog::Catalog;
pub use folders::{FolderTree, derive, group_notes};
pub use scanner::{Root, Scan, ScanWarning, expand_tilde, locate, scan};
