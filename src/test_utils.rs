#[cfg(test)]
pub mod test_helpers {
    use std::path::{Path, PathBuf};

    use crate::render::Artifact;
    use crate::writer::{ArtifactSink, MemorySink, WriteError};

    /// The order entity used across the renderer tests.
    pub const ORDER_DEFINITION: &str = "public class Order { public Guid OrderId {get;set;} public string Status {get;set;} public DateTime CreatedDate {get;set;} }";

    /// A scratch directory with a unique name, removed on drop
    pub struct TempDir {
        path: PathBuf,
    }

    impl TempDir {
        /// Creates a directory unique to this suffix, process id and timestamp
        pub fn new(suffix: &str) -> Self {
            use std::process;
            use std::time::{SystemTime, UNIX_EPOCH};
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_nanos();
            let path = std::env::temp_dir().join(format!(
                "cqrsgen_{}_{}_{}",
                suffix,
                process::id(),
                timestamp
            ));
            std::fs::create_dir_all(&path).expect("create temp dir");
            Self { path }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            std::fs::remove_dir_all(&self.path).ok();
        }
    }

    /// Records artifacts like `MemorySink` until the `fail_on`th write, which fails
    /// with "disk full".
    pub struct FailingSink {
        inner: MemorySink,
        fail_on: usize,
        attempts: usize,
    }

    impl FailingSink {
        pub fn new(fail_on: usize) -> Self {
            Self {
                inner: MemorySink::new(),
                fail_on,
                attempts: 0,
            }
        }

        /// Number of artifacts recorded before the failure.
        pub fn recorded(&self) -> usize {
            self.inner.files().len()
        }
    }

    impl ArtifactSink for FailingSink {
        fn prepare(&mut self, root: &Path) -> Result<(), WriteError> {
            self.inner.prepare(root)
        }

        fn write(&mut self, root: &Path, artifact: &Artifact) -> Result<PathBuf, WriteError> {
            self.attempts += 1;
            if self.attempts == self.fail_on {
                return Err(WriteError {
                    path: root.join(artifact.folder.as_str()).join(&artifact.file_name),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.write(root, artifact)
        }
    }
}
