use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::StoreError;
use crate::format::RecordFormat;
use crate::store::Store;

/// Word file used when no `--file` is given.
pub const DEFAULT_STORE_PATH: &str = "~/.wordy";

/// Per-invocation settings handed to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub format: RecordFormat,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>, format: RecordFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    pub fn open_store(&self) -> Result<Store, StoreError> {
        Store::open_with(&self.path, self.format)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH, RecordFormat::default())
    }
}

/// Replace a leading `~` with the current user's home directory.
///
/// `~user` forms are not supported and produce [`StoreError::HomeDir`].
pub fn expand_home(path: &Path) -> Result<PathBuf, StoreError> {
    let raw = path.to_string_lossy();
    if !raw.starts_with('~') {
        return Ok(path.to_path_buf());
    }
    let rest = &raw[1..];
    if !rest.is_empty() && !rest.starts_with('/') && !rest.starts_with(std::path::MAIN_SEPARATOR) {
        return Err(StoreError::HomeDir(raw.into_owned()));
    }
    let base = BaseDirs::new().ok_or_else(|| StoreError::HomeDir(raw.to_string()))?;
    let rest = rest.trim_start_matches(['/', std::path::MAIN_SEPARATOR]);
    if rest.is_empty() {
        Ok(base.home_dir().to_path_buf())
    } else {
        Ok(base.home_dir().join(rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn home() -> PathBuf {
        BaseDirs::new().unwrap().home_dir().to_path_buf()
    }

    #[test]
    fn expands_tilde_prefix() {
        assert_eq!(expand_home(Path::new("~/.wordy")).unwrap(), home().join(".wordy"));
        assert_eq!(expand_home(Path::new("~")).unwrap(), home());
    }

    #[test]
    fn leaves_other_paths_alone() {
        assert_eq!(
            expand_home(Path::new("/tmp/words")).unwrap(),
            PathBuf::from("/tmp/words")
        );
        assert_eq!(
            expand_home(Path::new("words/~x")).unwrap(),
            PathBuf::from("words/~x")
        );
    }

    #[test]
    fn rejects_other_users_home() {
        assert!(matches!(
            expand_home(Path::new("~bob/.wordy")),
            Err(StoreError::HomeDir(_))
        ));
    }

    #[test]
    fn default_points_at_dot_wordy() {
        let config = Config::default();
        assert_eq!(config.path, PathBuf::from("~/.wordy"));
        assert_eq!(config.format, RecordFormat::Lines);
    }
}
