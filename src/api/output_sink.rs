use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// Destination for encoded chart images.
///
/// The render pass never decides where an image goes; callers pick a sink
/// (a chat transport, a local debug directory, memory for tests).
pub trait ImageSink {
    fn deliver(&mut self, name: &str, image: &[u8]) -> ChartResult<()>;
}

/// Writes every image as `<dir>/<name>`, creating the directory on demand.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    written: Vec<PathBuf>,
}

impl FileSink {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            written: Vec::new(),
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in delivery order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ImageSink for FileSink {
    fn deliver(&mut self, name: &str, image: &[u8]) -> ChartResult<()> {
        let file_name = Path::new(name)
            .file_name()
            .ok_or_else(|| ChartError::InvalidInput(format!("`{name}` is not a file name")))?;
        fs::create_dir_all(&self.dir).map_err(|err| {
            ChartError::Encode(format!(
                "failed to create output dir `{}`: {err}",
                self.dir.display()
            ))
        })?;

        let path = self.dir.join(file_name);
        fs::write(&path, image).map_err(|err| {
            ChartError::Encode(format!("failed to write `{}`: {err}", path.display()))
        })?;
        debug!(path = %path.display(), bytes = image.len(), "wrote chart image");
        self.written.push(path);
        Ok(())
    }
}

/// Keeps delivered images in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    images: Vec<(String, Vec<u8>)>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn images(&self) -> &[(String, Vec<u8>)] {
        &self.images
    }

    #[must_use]
    pub fn into_images(self) -> Vec<(String, Vec<u8>)> {
        self.images
    }
}

impl ImageSink for MemorySink {
    fn deliver(&mut self, name: &str, image: &[u8]) -> ChartResult<()> {
        self.images.push((name.to_owned(), image.to_vec()));
        Ok(())
    }
}
