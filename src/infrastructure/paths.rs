use crate::domain::error::{FmtlogError, FmtlogResult};
use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Expand a leading `~` or `~/` to the user's home directory
///
/// `~user` forms are left untouched; only the current user's home is
/// expanded.
pub fn expand_user(path: &Path) -> FmtlogResult<PathBuf> {
    let Some(text) = path.to_str() else {
        return Ok(path.to_path_buf());
    };
    if text == "~" {
        return home_dir();
    }
    if let Some(rest) = text.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }
    Ok(path.to_path_buf())
}

/// Resolve a user-supplied path to absolute canonical form
///
/// Home shorthand is expanded, relative inputs are anchored at the current
/// working directory, and symlinks in the existing portion of the path are
/// resolved. The path does not have to exist: the deepest existing ancestor
/// is canonicalized and the missing tail is appended lexically with `.` and
/// `..` collapsed. Filesystem errors other than "not found" propagate.
pub fn resolve(path: &Path) -> FmtlogResult<PathBuf> {
    let expanded = expand_user(path)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|source| FmtlogError::PathResolution {
            path: path.to_path_buf(),
            source,
        })?;
        cwd.join(expanded)
    };

    // Common case: the whole path exists.
    if let Ok(canonical) = fs::canonicalize(&absolute) {
        return Ok(canonical);
    }

    let mut resolved = PathBuf::new();
    let mut on_disk = true;
    for component in absolute.components() {
        match component {
            Component::Prefix(prefix) => resolved.push(prefix.as_os_str()),
            Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if on_disk {
                    match fs::canonicalize(&resolved) {
                        Ok(canonical) => resolved = canonical,
                        Err(err) if err.kind() == io::ErrorKind::NotFound => on_disk = false,
                        Err(source) => {
                            return Err(FmtlogError::PathResolution {
                                path: path.to_path_buf(),
                                source,
                            })
                        }
                    }
                }
            }
        }
    }
    Ok(resolved)
}

fn home_dir() -> FmtlogResult<PathBuf> {
    dirs::home_dir().ok_or(FmtlogError::HomeDirUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical_cwd() -> PathBuf {
        env::current_dir()
            .expect("current dir")
            .canonicalize()
            .expect("canonicalize cwd")
    }

    #[test]
    fn test_expand_user_bare_tilde() {
        let home = dirs::home_dir().expect("home dir");
        assert_eq!(expand_user(Path::new("~")).unwrap(), home);
    }

    #[test]
    fn test_expand_user_prefixed() {
        let home = dirs::home_dir().expect("home dir");
        assert_eq!(expand_user(Path::new("~/baz")).unwrap(), home.join("baz"));
    }

    #[test]
    fn test_expand_user_untouched() {
        assert_eq!(
            expand_user(Path::new("/var/log/x")).unwrap(),
            PathBuf::from("/var/log/x")
        );
        assert_eq!(expand_user(Path::new("foo")).unwrap(), PathBuf::from("foo"));
    }

    #[test]
    fn test_resolve_relative() {
        assert_eq!(
            resolve(Path::new("foo")).unwrap(),
            canonical_cwd().join("foo")
        );
    }

    #[test]
    fn test_resolve_parent_relative() {
        let parent = canonical_cwd().parent().expect("cwd parent").to_path_buf();
        assert_eq!(resolve(Path::new("../bar")).unwrap(), parent.join("bar"));
    }

    #[test]
    fn test_resolve_home() {
        let home = dirs::home_dir()
            .expect("home dir")
            .canonicalize()
            .expect("canonicalize home");
        assert_eq!(resolve(Path::new("~/baz")).unwrap(), home.join("baz"));
    }

    #[test]
    fn test_resolve_existing_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("present.log");
        fs::write(&file, "").expect("create file");
        assert_eq!(
            resolve(&file).unwrap(),
            dir.path().canonicalize().unwrap().join("present.log")
        );
    }

    #[test]
    fn test_resolve_collapses_missing_tail() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("missing").join("..").join("out.log");
        assert_eq!(
            resolve(&input).unwrap(),
            dir.path().canonicalize().unwrap().join("out.log")
        );
    }

    #[test]
    fn test_resolve_through_file_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").expect("create file");
        let err = resolve(&file.join("under.log")).unwrap_err();
        assert!(matches!(err, FmtlogError::PathResolution { .. }));
    }
}
