//! # Artifact Sinks
//!
//! The only place rendered artifacts touch the outside world. [`FileSystemSink`] writes
//! them under a service root on disk; [`MemorySink`] records them for dry runs and tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::render::{Artifact, Folder};

/// A directory or file operation that failed.
#[derive(Debug)]
pub struct WriteError {
    /// Path of the directory or file being created.
    pub path: PathBuf,
    pub source: std::io::Error,
}

impl std::fmt::Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to write {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for WriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Destination for rendered artifacts.
pub trait ArtifactSink {
    /// Creates every artifact folder under `root`.
    fn prepare(&mut self, root: &Path) -> Result<(), WriteError>;

    /// Writes one artifact under `root`, returning the path it was written to.
    ///
    /// The artifact's folder must already exist, so `prepare` runs first.
    fn write(&mut self, root: &Path, artifact: &Artifact) -> Result<PathBuf, WriteError>;
}

/// Writes artifacts to disk, replacing existing files.
#[derive(Debug, Default)]
pub struct FileSystemSink;

impl FileSystemSink {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactSink for FileSystemSink {
    fn prepare(&mut self, root: &Path) -> Result<(), WriteError> {
        for folder in Folder::ALL {
            let dir = root.join(folder.as_str());
            fs::create_dir_all(&dir).map_err(|source| WriteError { path: dir, source })?;
        }
        Ok(())
    }

    fn write(&mut self, root: &Path, artifact: &Artifact) -> Result<PathBuf, WriteError> {
        let path = root.join(artifact.folder.as_str()).join(&artifact.file_name);
        fs::write(&path, &artifact.content).map_err(|source| WriteError {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Records artifacts in memory instead of writing them.
#[derive(Debug, Default)]
pub struct MemorySink {
    files: Vec<(PathBuf, String)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every recorded `(path, content)` pair, in write order.
    pub fn files(&self) -> &[(PathBuf, String)] {
        &self.files
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, content)| content.as_str())
    }
}

impl ArtifactSink for MemorySink {
    fn prepare(&mut self, _root: &Path) -> Result<(), WriteError> {
        Ok(())
    }

    fn write(&mut self, root: &Path, artifact: &Artifact) -> Result<PathBuf, WriteError> {
        let path = root.join(artifact.folder.as_str()).join(&artifact.file_name);
        self.files.push((path.clone(), artifact.content.clone()));
        Ok(path)
    }
}

/// One artifact that reached its sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Outcome of writing a full artifact set.
#[derive(Debug, Default)]
pub struct WriteReport {
    pub written: Vec<WrittenArtifact>,
    /// The failure that stopped the run, if any. Earlier artifacts stay written.
    pub failure: Option<WriteError>,
}

impl WriteReport {
    pub fn is_success(&self) -> bool {
        self.failure.is_none()
    }

    pub fn into_result(self) -> Result<Vec<WrittenArtifact>, WriteError> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(self.written),
        }
    }
}

/// Prepares the folders under `root` and writes `artifacts` in order, stopping at the
/// first failure.
pub fn write_all<S: ArtifactSink + ?Sized>(
    sink: &mut S,
    root: &Path,
    artifacts: &[Artifact],
) -> WriteReport {
    let mut report = WriteReport::default();
    if let Err(e) = sink.prepare(root) {
        report.failure = Some(e);
        return report;
    }
    for artifact in artifacts {
        match sink.write(root, artifact) {
            Ok(path) => report.written.push(WrittenArtifact {
                path,
                bytes: artifact.content.len(),
            }),
            Err(e) => {
                report.failure = Some(e);
                break;
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_helpers::{FailingSink, ORDER_DEFINITION, TempDir};
    use crate::{EntityParser, render, service_root};

    #[test]
    fn memory_sink_records_paths_under_root() {
        let entity = EntityParser::parse(ORDER_DEFINITION).unwrap();
        let artifacts = render("Acme", &entity);
        let root = PathBuf::from("out").join(service_root("Acme", &entity));

        let mut sink = MemorySink::new();
        let report = write_all(&mut sink, &root, &artifacts);

        assert!(report.is_success());
        assert_eq!(report.written.len(), artifacts.len());
        assert_eq!(sink.files().len(), artifacts.len());
        let dto = sink
            .get(&root.join("DTOs").join("OrderDTO.cs"))
            .expect("dto recorded");
        assert!(dto.contains("public class OrderDTO"));
    }

    #[test]
    fn file_system_sink_creates_all_folders() {
        let temp = TempDir::new("writer_folders");
        let entity = EntityParser::parse("public class Tag { }").unwrap();
        let root = temp.path().join(service_root("Acme", &entity));

        let report = write_all(&mut FileSystemSink::new(), &root, &render("Acme", &entity));

        assert!(report.is_success());
        for folder in Folder::ALL {
            assert!(root.join(folder.as_str()).is_dir(), "{} missing", folder);
        }
        let written = fs::read_to_string(root.join("Commands").join("CreateTagCommand.cs")).unwrap();
        assert!(written.contains("public sealed class CreateTagCommand"));
    }

    #[test]
    fn file_system_sink_overwrites_existing_files() {
        let temp = TempDir::new("writer_overwrite");
        let entity = EntityParser::parse(ORDER_DEFINITION).unwrap();
        let root = temp.path().join(service_root("Acme", &entity));
        let dto_path = root.join("DTOs").join("OrderDTO.cs");
        fs::create_dir_all(dto_path.parent().unwrap()).unwrap();
        fs::write(&dto_path, "stale").unwrap();

        let report = write_all(&mut FileSystemSink::new(), &root, &render("Acme", &entity));

        assert!(report.is_success());
        assert_ne!(fs::read_to_string(&dto_path).unwrap(), "stale");
    }

    #[test]
    fn failure_stops_the_run_and_keeps_earlier_writes() {
        let entity = EntityParser::parse(ORDER_DEFINITION).unwrap();
        let artifacts = render("Acme", &entity);
        let root = PathBuf::from("out");
        let mut sink = FailingSink::new(3);

        let report = write_all(&mut sink, &root, &artifacts);

        assert!(!report.is_success());
        assert_eq!(report.written.len(), 2);
        assert_eq!(sink.recorded(), 2);
        assert_eq!(report.written[0].path, root.join(artifacts[0].relative_path()));
        assert_eq!(report.written[1].path, root.join(artifacts[1].relative_path()));
        let failure = report.failure.as_ref().unwrap();
        assert_eq!(failure.path, root.join(artifacts[2].relative_path()));
        assert_eq!(failure.source.to_string(), "disk full");
    }

    #[test]
    fn write_without_prepare_fails() {
        let temp = TempDir::new("writer_unprepared");
        let entity = EntityParser::parse(ORDER_DEFINITION).unwrap();
        let artifacts = render("Acme", &entity);
        let root = temp.path().join("missing");

        let err = FileSystemSink::new().write(&root, &artifacts[0]).unwrap_err();

        assert_eq!(err.path, root.join(artifacts[0].relative_path()));
        assert!(!root.exists());
    }

    #[test]
    fn prepare_failure_writes_nothing() {
        let temp = TempDir::new("writer_failure");
        let entity = EntityParser::parse(ORDER_DEFINITION).unwrap();
        let root = temp.path().join("root");
        // A plain file where the root directory should be.
        fs::write(&root, "not a directory").unwrap();

        let report = write_all(&mut FileSystemSink::new(), &root, &render("Acme", &entity));

        assert!(!report.is_success());
        assert!(report.written.is_empty());
        let err = report.into_result().unwrap_err();
        assert!(err.to_string().starts_with("Failed to write"));
    }
}
