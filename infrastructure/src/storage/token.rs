//! Session token persisted as `<data_dir>/auth_token`

use kababhut_application::{TokenStore, TokenStoreError};
use kababhut_domain::AuthToken;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const TOKEN_FILE: &str = "auth_token";

/// Token store that keeps the bearer token in a file
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(TOKEN_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn save_token(&self, token: &AuthToken) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token.as_str())?;
        restrict_permissions(&self.path)?;
        debug!("Saved session token to {}", self.path.display());
        Ok(())
    }

    fn get_token(&self) -> Result<Option<AuthToken>, TokenStoreError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(AuthToken::new(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear_token(&self) -> Result<(), TokenStoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_get_clear() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("nested"));

        assert!(store.get_token().unwrap().is_none());

        store.save_token(&AuthToken::new("jwt-1").unwrap()).unwrap();
        assert_eq!(store.get_token().unwrap().unwrap().as_str(), "jwt-1");
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "jwt-1");

        store.clear_token().unwrap();
        assert!(store.get_token().unwrap().is_none());
        // Clearing a missing file is not an error
        store.clear_token().unwrap();
    }

    #[test]
    fn test_blank_file_reads_as_signed_out() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(TOKEN_FILE), "  \n").unwrap();

        let store = FileTokenStore::new(dir.path());
        assert!(store.get_token().unwrap().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_token_file_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path());
        store.save_token(&AuthToken::new("secret").unwrap()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
