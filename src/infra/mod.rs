//! File operations, editor launching and logging

pub mod editor;
pub mod fs;
pub mod logging;

pub use editor::{EditorError, EditorLauncher, SystemEditor};
pub use fs::{DELETE_CONFIRMATION, OpError, create_folder, create_note, delete_note, resolve_folder};
