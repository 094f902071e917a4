//! Script source reading command scripts from the filesystem.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use homedex_app::ports::ScriptSource;
use homedex_domain::error::HomeDexError;

use crate::error::FileError;

/// [`ScriptSource`] resolving script names as paths relative to a base
/// directory (absolute names are used as-is).
#[derive(Debug, Clone)]
pub struct FsScriptSource {
    base: PathBuf,
}

impl Default for FsScriptSource {
    fn default() -> Self {
        Self::new(".")
    }
}

impl FsScriptSource {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let path = Path::new(name);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        }
    }
}

impl ScriptSource for FsScriptSource {
    #[tracing::instrument(skip(self))]
    fn read_script(&self, name: &str) -> Result<Option<Vec<String>>, HomeDexError> {
        let path = self.resolve(name);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content.lines().map(str::to_string).collect())),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FileError::Io { path, source }.into()),
        }
    }

    /// Scripts are identified by their canonical path, so `a.txt` and
    /// `./a.txt` count as the same script.
    fn canonical_name(&self, name: &str) -> String {
        let path = self.resolve(name);
        fs::canonicalize(&path)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_none_when_script_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let scripts = FsScriptSource::new(dir.path());
        assert_eq!(scripts.read_script("missing.txt").unwrap(), None);
    }

    #[test]
    fn should_read_lines_relative_to_base() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("setup.txt"), "# comment\ninsert\r\n\nshow").unwrap();
        let scripts = FsScriptSource::new(dir.path());

        let lines = scripts.read_script("setup.txt").unwrap().unwrap();

        assert_eq!(lines, vec!["# comment", "insert", "", "show"]);
    }

    #[test]
    fn should_use_absolute_names_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("abs.txt");
        fs::write(&path, "info").unwrap();
        let scripts = FsScriptSource::new("/nonexistent-base");

        let lines = scripts.read_script(path.to_str().unwrap()).unwrap().unwrap();

        assert_eq!(lines, vec!["info"]);
    }

    #[test]
    fn should_give_equivalent_paths_the_same_canonical_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "info").unwrap();
        let scripts = FsScriptSource::new(dir.path());

        assert_eq!(scripts.canonical_name("a.txt"), scripts.canonical_name("./a.txt"));
    }

    #[test]
    fn should_report_io_error_when_script_is_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("folder")).unwrap();
        let scripts = FsScriptSource::new(dir.path());

        let result = scripts.read_script("folder");

        assert!(matches!(result, Err(HomeDexError::Storage(_))));
    }
}
