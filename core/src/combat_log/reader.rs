use super::ReaderError;
use encoding_rs::UTF_8;
use memmap2::Mmap;
use std::fs;
use std::path::PathBuf;

pub struct Reader {
    path: PathBuf,
    max_bytes: u64,
}

impl Reader {
    pub fn from(file_path: PathBuf, max_bytes: u64) -> Self {
        Reader {
            path: file_path,
            max_bytes,
        }
    }

    /// Load the whole log into memory as text.
    ///
    /// Game clients write UTF-8, sometimes with a BOM; UTF-16 BOMs are honored
    /// too and invalid sequences are replaced rather than rejected.
    pub fn read_log_file(&self) -> Result<String, ReaderError> {
        let file = fs::File::open(&self.path).map_err(|source| ReaderError::OpenFile {
            path: self.path.clone(),
            source,
        })?;

        let size = file
            .metadata()
            .map_err(|source| ReaderError::Metadata {
                path: self.path.clone(),
                source,
            })?
            .len();
        if size > self.max_bytes {
            return Err(ReaderError::TooLarge {
                path: self.path.clone(),
                size,
                max: self.max_bytes,
            });
        }
        // mapping a zero length file fails on some platforms
        if size == 0 {
            return Ok(String::new());
        }

        let mmap = unsafe { Mmap::map(&file) }.map_err(|source| ReaderError::MemoryMap {
            path: self.path.clone(),
            source,
        })?;

        let (text, encoding, had_errors) = UTF_8.decode(mmap.as_ref());
        if had_errors {
            tracing::warn!(
                path = %self.path.display(),
                encoding = encoding.name(),
                "log contained invalid byte sequences, replaced"
            );
        }

        Ok(text.into_owned())
    }
}
