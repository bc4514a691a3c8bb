use std::path::{Path, PathBuf};

use crate::data::model::SeriesKey;
use crate::error::{ReportError, Result};

/// Move every regular file in `source` with the given extension into
/// `data_dir`, creating `data_dir` and its parents first.
///
/// Returns the new paths. Nothing matching means nothing moves, so running
/// twice is harmless. A file of the same name already in `data_dir` is
/// replaced by the newer one from `source`.
pub fn relocate_results(source: &Path, data_dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(data_dir).map_err(|e| ReportError::io(data_dir, e))?;

    let entries = std::fs::read_dir(source).map_err(|e| ReportError::io(source, e))?;

    let mut moved = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::io(source, e))?;
        let path = entry.path();

        let file_type = entry.file_type().map_err(|e| ReportError::io(&path, e))?;
        if !file_type.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        let target = data_dir.join(entry.file_name());
        if target.exists() {
            log::info!("Replacing {}", target.display());
        }
        std::fs::rename(&path, &target).map_err(|e| ReportError::io(&path, e))?;
        log::info!("Moved {} -> {}", path.display(), target.display());
        match entry.file_name().to_str().and_then(SeriesKey::parse_file_name) {
            Some((dim, key)) => log::debug!("{} holds {dim}D series {key}", target.display()),
            None => log::debug!("{} is not a known result file name", target.display()),
        }
        moved.push(target);
    }

    moved.sort();
    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_only_matching_files_and_creates_dirs() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("2D_ising_clean.txt"), "0 0.1\n").unwrap();
        std::fs::write(root.path().join("2D_xy_clean.txt"), "0 3.0\n").unwrap();
        std::fs::write(root.path().join("notes.md"), "keep").unwrap();
        std::fs::create_dir(root.path().join("sub.txt")).unwrap();

        let data_dir = root.path().join("plot").join("data");
        let moved = relocate_results(root.path(), &data_dir, "txt").unwrap();

        assert_eq!(
            moved,
            vec![
                data_dir.join("2D_ising_clean.txt"),
                data_dir.join("2D_xy_clean.txt"),
            ]
        );
        assert!(!root.path().join("2D_ising_clean.txt").exists());
        assert!(root.path().join("notes.md").exists());
        assert!(root.path().join("sub.txt").is_dir());
        assert_eq!(
            std::fs::read_to_string(data_dir.join("2D_xy_clean.txt")).unwrap(),
            "0 3.0\n"
        );
    }

    #[test]
    fn second_run_is_a_no_op() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("2D_ising_clean.txt"), "0 0.1\n").unwrap();
        let data_dir = root.path().join("plot").join("data");

        let first = relocate_results(root.path(), &data_dir, "txt").unwrap();
        let second = relocate_results(root.path(), &data_dir, "txt").unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
        assert_eq!(
            std::fs::read_to_string(data_dir.join("2D_ising_clean.txt")).unwrap(),
            "0 0.1\n"
        );
    }

    #[test]
    fn newer_file_replaces_relocated_one() {
        let root = tempfile::tempdir().unwrap();
        let data_dir = root.path().join("plot").join("data");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(data_dir.join("2D_xy_clean.txt"), "old\n").unwrap();
        std::fs::write(root.path().join("2D_xy_clean.txt"), "new\n").unwrap();

        relocate_results(root.path(), &data_dir, "txt").unwrap();
        assert_eq!(
            std::fs::read_to_string(data_dir.join("2D_xy_clean.txt")).unwrap(),
            "new\n"
        );
    }

    #[test]
    fn missing_source_is_an_error() {
        let root = tempfile::tempdir().unwrap();
        let err = relocate_results(
            &root.path().join("missing"),
            &root.path().join("data"),
            "txt",
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
