//! Logical folder paths relative to a search root.

use serde::Serialize;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A folder path expressed relative to the root that contains it.
///
/// Paths are forward-slash separated like `projects/2024`. Notes that sit
/// directly inside a root belong to the root folder, written `.`.
///
/// The path string is the folder's identity: two roots that share a
/// relative subpath contribute the same `LogicalFolder`.
///
/// # Examples
///
/// ```
/// use notecli::domain::LogicalFolder;
///
/// let folder = LogicalFolder::new("projects/2024/q1");
/// assert_eq!(folder.depth(), 2);
/// assert_eq!(folder.indent(), 4);
/// assert_eq!(folder.name(), "q1");
///
/// let ancestors: Vec<String> = folder.ancestors().iter().map(|a| a.to_string()).collect();
/// assert_eq!(ancestors, vec!["projects", "projects/2024"]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalFolder {
    path: String,
}

impl LogicalFolder {
    /// Path of the folder that holds notes placed directly in a root.
    pub const ROOT: &'static str = ".";

    /// Creates a folder from a relative path string.
    ///
    /// Surrounding slashes are stripped; an empty path becomes the root folder.
    pub fn new(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Self::root();
        }
        Self {
            path: trimmed.to_string(),
        }
    }

    /// The root folder (`.`).
    pub fn root() -> Self {
        Self {
            path: Self::ROOT.to_string(),
        }
    }

    /// Builds a folder from a path relative to a root.
    ///
    /// Only normal components are kept, joined with `/`.
    pub fn from_relative(relative: &Path) -> Self {
        let segments: Vec<String> = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if segments.is_empty() {
            Self::root()
        } else {
            Self {
                path: segments.join("/"),
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path == Self::ROOT
    }

    /// Number of `/` separators in the path.
    pub fn depth(&self) -> usize {
        self.path.matches('/').count()
    }

    /// Display indentation of this folder's row.
    pub fn indent(&self) -> usize {
        self.depth() * 2
    }

    /// Last path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Returns the parent folder, or `None` for top-level folders.
    pub fn parent(&self) -> Option<LogicalFolder> {
        self.path.rsplit_once('/').map(|(parent, _)| LogicalFolder {
            path: parent.to_string(),
        })
    }

    /// Returns all proper prefixes, from the top-level folder to the parent.
    pub fn ancestors(&self) -> Vec<LogicalFolder> {
        self.path
            .match_indices('/')
            .map(|(i, _)| LogicalFolder {
                path: self.path[..i].to_string(),
            })
            .collect()
    }

    /// Returns the ancestors followed by the folder itself.
    pub fn with_ancestors(&self) -> Vec<LogicalFolder> {
        let mut all = self.ancestors();
        all.push(self.clone());
        all
    }

    /// Returns the child folder `name` of this folder.
    pub fn child(&self, name: &str) -> LogicalFolder {
        if self.is_root() {
            LogicalFolder::new(name)
        } else {
            LogicalFolder::new(&format!("{}/{}", self.path, name))
        }
    }

    /// Returns whether the path contains an already-lowercased query.
    pub fn matches(&self, query_lower: &str) -> bool {
        self.path.to_lowercase().contains(query_lower)
    }

    /// Converts the folder back to a relative filesystem path.
    pub fn to_relative_path(&self) -> PathBuf {
        if self.is_root() {
            return PathBuf::new();
        }
        self.path.split('/').collect()
    }
}

impl fmt::Display for LogicalFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl fmt::Debug for LogicalFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogicalFolder(\"{}\")", self.path)
    }
}

impl From<&str> for LogicalFolder {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl Serialize for LogicalFolder {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.path)
    }
}
