use crate::error::{Result, StoreError};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "rolodex";
const BOOK_FILENAME: &str = "addressbook.json";

pub fn book_path_in(dir: &Path) -> PathBuf {
    dir.join(BOOK_FILENAME)
}

/// Explicit path first, then `addressbook.json` in the per-user data directory,
/// which is created private to the user when missing.
pub fn resolve_book_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom {
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path);
    }

    let dir = book_dir_from(env::var_os("XDG_DATA_HOME"), dirs::home_dir())?;
    create_private_dir(&dir)?;
    Ok(book_path_in(&dir))
}

fn book_dir_from(xdg_data_home: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    match xdg_data_home.map(PathBuf::from) {
        Some(base) if base.as_os_str().is_empty() => Err(StoreError::InvalidDataPath(base)),
        Some(base) => Ok(base.join(APP_DIR)),
        None => home
            .map(|home| home.join(".local/share").join(APP_DIR))
            .ok_or(StoreError::MissingHomeDir),
    }
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(unix)]
fn create_private_dir(dir: &Path) -> Result<()> {
    use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
    fs::DirBuilder::new().recursive(true).mode(0o700).create(dir)?;
    // An existing directory keeps whatever mode it was created with.
    fs::set_permissions(dir, fs::Permissions::from_mode(0o700))?;
    Ok(())
}

#[cfg(not(unix))]
fn create_private_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{book_dir_from, book_path_in, resolve_book_path};
    use crate::error::StoreErrorKind;
    use std::ffi::OsString;
    use std::path::PathBuf;

    #[test]
    fn explicit_path_wins() {
        let path = PathBuf::from("/tmp/custom/book.json");
        assert_eq!(resolve_book_path(Some(path.clone())).unwrap(), path);
    }

    #[test]
    fn empty_explicit_path_is_rejected() {
        let err = resolve_book_path(Some(PathBuf::new())).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::InvalidDataPath);
    }

    #[test]
    fn data_home_takes_precedence_over_home() {
        let dir = book_dir_from(
            Some(OsString::from("/data")),
            Some(PathBuf::from("/home/ada")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/data/rolodex"));
        assert_eq!(
            book_path_in(&dir),
            PathBuf::from("/data/rolodex/addressbook.json")
        );
    }

    #[test]
    fn home_fallback_and_failures() {
        let dir = book_dir_from(None, Some(PathBuf::from("/home/ada"))).unwrap();
        assert_eq!(dir, PathBuf::from("/home/ada/.local/share/rolodex"));

        let err = book_dir_from(None, None).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::MissingHomeDir);

        let err = book_dir_from(Some(OsString::new()), None).unwrap_err();
        assert_eq!(err.kind(), StoreErrorKind::InvalidDataPath);
    }
}
