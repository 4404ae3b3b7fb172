use crate::error::WriteError;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Replaces `path` with `contents` in one step.
///
/// Writes a sibling `.tmp` file and renames it over the destination, so a
/// failed run leaves any previous report intact.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), WriteError> {
    let tmp = tmp_path(path);

    let result = fs::write(&tmp, contents).and_then(|()| fs::rename(&tmp, path));
    if let Err(source) = result {
        // The tmp file may not exist if the first write failed.
        let _ = fs::remove_file(&tmp);
        return Err(WriteError {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("report"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.html");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("site.html.tmp").exists());
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("site.html");

        let err = write_atomic(&path, "x").unwrap_err();

        assert_eq!(err.path, path);
        assert!(!path.exists());
    }

    #[test]
    fn tmp_file_sits_next_to_destination() {
        assert_eq!(
            tmp_path(Path::new("out/final_site.html")),
            PathBuf::from("out/final_site.html.tmp")
        );
    }
}
