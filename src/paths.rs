//! Path normalization and display utilities.

use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use path_clean::PathClean;

/// Normalize a path by canonicalizing when possible and cleaning otherwise.
pub fn normalize_path(path: &Path) -> PathBuf {
    match dunce::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(_) => path.clean(),
    }
}

/// Render a path for display, using a tilde prefix for the home directory.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~{}{}", MAIN_SEPARATOR, stripped.display());
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use tempfile::tempdir;

    use super::{display_path, normalize_path};

    #[test]
    fn cleans_missing_paths() {
        let path = normalize_path(Path::new("/definitely/not/../here/./colors"));
        assert_eq!(path, Path::new("/definitely/here/colors"));
    }

    #[test]
    fn canonicalizes_existing_paths() {
        let dir = tempdir().expect("tempdir");
        let nested = dir.path().join(".").join("out");
        fs::create_dir(&nested).expect("create dir");
        let normalized = normalize_path(&nested);
        assert!(normalized.is_absolute());
        assert!(normalized.ends_with("out"));
    }

    #[test]
    fn abbreviates_home_directory() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(display_path(&home), "~");
        assert!(display_path(&home.join("colors")).starts_with('~'));
    }
}
