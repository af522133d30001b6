//! Append-only log file, for host-side captures and simulator runs.

use super::Sink;
use crate::internal;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends every line to one file. Writes are buffered; call `flush` before exit.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl FileSink {
    /// Opens (creating parent directories and the file as needed) `path` for appending.
    ///
    /// # Errors
    /// Fails if the directory cannot be created or the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, crate::Error> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        internal::debug(&format!("File sink opened: {}", path.display()));

        Ok(Self {
            path,
            writer: BufWriter::new(file),
        })
    }
}

impl Sink for FileSink {
    fn write(&mut self, bytes: &[u8]) -> Result<(), crate::Error> {
        self.writer.write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), crate::Error> {
        self.writer.flush()?;
        Ok(())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        if let Err(e) = self.writer.flush() {
            internal::warn(&format!("Flush of {} failed on drop: {e}", self.path.display()));
        }
    }
}
