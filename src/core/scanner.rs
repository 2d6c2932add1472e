// Streams a log file line by line
//
// Warp logs get big and occasionally contain garbage bytes, so we never load
// the whole file and never choke on bad UTF-8.

use crate::error::{DigestError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::warn;

pub struct LineScanner {
    path: PathBuf,
}

impl LineScanner {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and hand back a fresh line iterator.
    ///
    /// The file handle lives inside the iterator and is closed when it drops,
    /// whether the scan finished, stopped early, or hit an error.
    pub fn open(&self) -> Result<Lines<BufReader<File>>> {
        let file = File::open(&self.path).map_err(|source| DigestError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;

        Ok(Lines::new(BufReader::new(file), self.path.clone()))
    }
}

/// Lossy line iterator over any buffered reader
pub struct Lines<R> {
    reader: R,
    path: PathBuf,
    buf: Vec<u8>,
    failed: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R, path: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            path: path.into(),
            buf: Vec::new(),
            failed: false,
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.ends_with(b"\n") {
                    self.buf.pop();
                    if self.buf.ends_with(b"\r") {
                        self.buf.pop();
                    }
                }
                // Bad bytes become U+FFFD instead of aborting the scan
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(source) => {
                warn!("Read failed on {}: {}", self.path.display(), source);
                self.failed = true;
                Some(Err(DigestError::SourceUnavailable {
                    path: self.path.clone(),
                    source,
                }))
            }
        }
    }
}
