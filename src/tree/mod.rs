//! Tree rows, selection and the interactive session

mod builder;
mod selection;
mod session;

pub use builder::build_rows;
pub use selection::{ExpandedSet, Selection};
pub use session::{Command, Intent, Session};
