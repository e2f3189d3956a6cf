//! Safety predicates for user-supplied paths, names and editor commands.

use std::path::{Component, Path, PathBuf};

/// Editors that may be launched on a note.
pub const ALLOWED_EDITORS: &[&str] = &[
    "vim", "nvim", "nano", "code", "subl", "atom", "notepad", "notepad++", "gedit", "kate",
    "mousepad",
];

/// Extensions that mark a file as executable-style and are never created.
pub const BLOCKED_EXTENSIONS: &[&str] = &[
    ".exe", ".sh", ".bat", ".cmd", ".py", ".js", ".php", ".rb", ".pl", ".ps1", ".vbs", ".jar",
    ".app",
];

/// System directories that may not be used as roots.
pub const SENSITIVE_DIRS: &[&str] = &[
    "/etc",
    "/var",
    "/usr",
    "/bin",
    "/sbin",
    "/root",
    "/boot",
    "/dev",
    "/proc",
    "/sys",
    "/tmp",
    "C:\\Windows",
    "C:\\System32",
    "C:\\Program Files",
];

/// Returns whether `base/user_path` stays inside `base`.
///
/// `..` components are resolved lexically, and symlinks are resolved when
/// the joined path exists.
pub fn is_safe_path(base: &Path, user_path: &str) -> bool {
    if user_path.contains('\0') {
        return false;
    }
    let base = resolve(base);
    let joined = base.join(user_path);
    let full = match joined.canonicalize() {
        Ok(p) => p,
        Err(_) => normalize(&joined),
    };
    full.starts_with(&base)
}

/// Returns whether a note or folder name is safe to create.
///
/// Rejects empty names, path separators, traversal sequences, NUL bytes and
/// executable-style extensions.
pub fn is_safe_filename(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    let lower = name.to_lowercase();
    if BLOCKED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return false;
    }
    if name.contains("..") || name.contains('/') || name.contains('\\') {
        return false;
    }
    !name.contains('\0')
}

/// Returns whether an editor command is on the whitelist.
pub fn is_allowed_editor(editor: &str) -> bool {
    let lower = editor.to_lowercase();
    ALLOWED_EDITORS.iter().any(|e| *e == lower)
}

/// Decides whether a directory may be scanned or added as a root.
pub trait AccessGuard {
    fn permits(&self, dir: &Path) -> bool;
}

/// Denylist-based guard for root directories.
///
/// A directory is permitted when it exists, is readable, and does not lie
/// inside a denied directory. Directories inside `home` are exempt from the
/// denylist, unless `home` is itself denied or contains a denied directory
/// (for example a home of `/`).
#[derive(Debug, Clone)]
pub struct FolderGuard {
    denied: Vec<PathBuf>,
    home: Option<PathBuf>,
}

impl FolderGuard {
    pub fn new(denied: Vec<PathBuf>, home: Option<PathBuf>) -> Self {
        let home = home.filter(|home| !denied.iter().any(|d| d.starts_with(home)));
        Self { denied, home }
    }

    /// Guard with the system denylist and the current user's home exemption.
    pub fn system() -> Self {
        Self::new(
            SENSITIVE_DIRS.iter().map(PathBuf::from).collect(),
            dirs::home_dir().map(|h| resolve(&h)),
        )
    }

    /// Guard that only checks that the directory is readable.
    pub fn permissive() -> Self {
        Self::new(Vec::new(), None)
    }

    fn is_denied(&self, resolved: &Path) -> bool {
        if self
            .home
            .as_ref()
            .is_some_and(|home| resolved.starts_with(home))
        {
            return false;
        }
        self.denied.iter().any(|d| resolved.starts_with(d))
    }
}

impl Default for FolderGuard {
    fn default() -> Self {
        Self::system()
    }
}

impl AccessGuard for FolderGuard {
    fn permits(&self, dir: &Path) -> bool {
        let Ok(resolved) = dir.canonicalize() else {
            return false;
        };
        if self.is_denied(&resolved) {
            return false;
        }
        resolved.is_dir() && std::fs::read_dir(&resolved).is_ok()
    }
}

/// Canonicalizes a path, falling back to lexical normalization.
pub(crate) fn resolve(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| normalize(path))
}

/// Resolves `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
