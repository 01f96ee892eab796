//! Graph document persistence
//!
//! The document is always read in full and written in full. Writes go to a
//! sibling temporary file that is then renamed over the target, so readers
//! never observe a half-written document.

use crate::error::{CorpGraphError, CorpGraphResult};
use crate::graph::GraphDocument;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default location of the companies document, relative to the project root
pub const DEFAULT_DOCUMENT_PATH: &str = "src/data/companies.json";

/// Read a whole graph document
///
/// A missing or unreadable file is an error; missing `nodes`/`links` keys
/// are read as empty collections.
pub fn load_document(path: impl AsRef<Path>) -> CorpGraphResult<GraphDocument> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| CorpGraphError::io(path, e))?;
    let document: GraphDocument = serde_json::from_str(&text)?;

    info!(
        "Loaded {} nodes and {} links from {}",
        document.node_count(),
        document.link_count(),
        path.display()
    );
    Ok(document)
}

/// Replace the file at `path` with the pretty-printed document
pub fn save_document(path: impl AsRef<Path>, document: &GraphDocument) -> CorpGraphResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| CorpGraphError::io(parent, e))?;
    }

    let tmp_path = temp_path_for(path);
    let written = write_pretty(&tmp_path, document);
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(CorpGraphError::io(path, e));
    }

    debug!("Renamed {} over {}", tmp_path.display(), path.display());
    info!(
        "Saved {} nodes and {} links to {}",
        document.node_count(),
        document.link_count(),
        path.display()
    );
    Ok(())
}

fn write_pretty(path: &Path, document: &GraphDocument) -> CorpGraphResult<()> {
    let file = File::create(path).map_err(|e| CorpGraphError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document)?;
    writer.flush().map_err(|e| CorpGraphError::io(path, e))?;
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| CorpGraphError::io(path, e))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let result = load_document(temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(CorpGraphError::Io { .. })));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        match load_document(temp_dir.path()) {
            Err(CorpGraphError::Io { path, .. }) => assert_eq!(path, temp_dir.path()),
            other => panic!("expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("companies.json");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("occupied"), "x").unwrap();

        let result = save_document(&target, &GraphDocument::new());
        assert!(matches!(result, Err(CorpGraphError::Io { .. })));
        assert!(!temp_path_for(&target).exists());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "{ nodes: ").unwrap();
        assert!(matches!(load_document(&path), Err(CorpGraphError::Json(_))));
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("companies.json");

        let document: GraphDocument = serde_json::from_value(json!({
            "nodes": [{"id": "c_0", "name": "Société Générale"}],
            "links": []
        }))
        .unwrap();
        save_document(&path, &document).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Société Générale"));
        assert!(text.contains("\n  \"nodes\": ["));
        assert!(!temp_path_for(&path).exists());

        assert_eq!(load_document(&path).unwrap(), document);
    }

    #[test]
    fn test_save_overwrites_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("companies.json");
        fs::write(&path, "x".repeat(10_000)).unwrap();

        save_document(&path, &GraphDocument::new()).unwrap();
        let reloaded = load_document(&path).unwrap();
        assert_eq!(reloaded.node_count(), 0);
        assert!(fs::metadata(&path).unwrap().len() < 100);
    }
}
