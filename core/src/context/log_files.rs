use crate::combat_log::ReaderError;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

pub struct LogFileMetaData {
    pub path: PathBuf,
    pub filename: String,
    /// Session start encoded in the file name, when it follows the client's
    /// `YYYYMMDD_HHMMSS[_characterid].txt` pattern
    pub created_at: Option<NaiveDateTime>,
    pub is_empty: bool,
    pub file_size: u64,
}

impl LogFileMetaData {
    /// Formatted timestamp for display (date + time)
    pub fn formatted_datetime(&self) -> String {
        self.created_at
            .map(|dt| dt.format("%Y-%m-%d %-H:%M").to_string())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Game logs in one directory, oldest first.
#[derive(Default)]
pub struct DirectoryIndex {
    entries: Vec<LogFileMetaData>,
}

impl DirectoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build_index(dir: &Path) -> Result<Self, ReaderError> {
        let mut index = Self::new();

        if !dir.exists() {
            return Ok(index);
        }

        let read_dir = fs::read_dir(dir).map_err(|source| ReaderError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;

        // client file names start with the session timestamp, so name order is age order
        let mut files: Vec<_> = read_dir
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
            })
            .collect();
        files.sort_by_key(|e| e.file_name());

        index.entries = files
            .iter()
            .filter_map(|entry| Self::create_entry(&entry.path()))
            .collect();

        tracing::debug!(dir = %dir.display(), files = index.entries.len(), "indexed log directory");
        Ok(index)
    }

    fn create_entry(path: &Path) -> Option<LogFileMetaData> {
        let filename = path.file_name()?.to_str()?.to_string();
        let metadata = fs::metadata(path).ok()?;
        let file_size = metadata.len();

        Some(LogFileMetaData {
            path: path.to_path_buf(),
            created_at: parse_log_filename(&filename),
            filename,
            is_empty: file_size == 0,
            file_size,
        })
    }

    pub fn entries(&self) -> &[LogFileMetaData] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent non-empty log.
    pub fn newest(&self) -> Option<&LogFileMetaData> {
        self.entries.iter().rev().find(|e| !e.is_empty)
    }
}

/// Parse the session start out of `20240314_185951_90000001.txt`.
pub fn parse_log_filename(filename: &str) -> Option<NaiveDateTime> {
    let stem = filename.get(..15)?;
    NaiveDateTime::parse_from_str(stem, "%Y%m%d_%H%M%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fleetlog-index-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_log_filename() {
        let dt = parse_log_filename("20240314_185951_90000001.txt").unwrap();
        assert_eq!(dt.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-14 18:59:51");

        assert!(parse_log_filename("20240314_185951.txt").is_some());
        assert!(parse_log_filename("notes.txt").is_none());
        assert!(parse_log_filename("").is_none());
    }

    #[test]
    fn test_build_index_sorted_and_filtered() {
        let dir = temp_dir("sorted");
        fs::write(dir.join("20240315_100000_1.txt"), "Listener: B").unwrap();
        fs::write(dir.join("20240314_100000_1.txt"), "Listener: A").unwrap();
        fs::write(dir.join("20240316_100000_1.txt"), "").unwrap();
        fs::write(dir.join("readme.md"), "ignored").unwrap();

        let index = DirectoryIndex::build_index(&dir).unwrap();
        let names: Vec<&str> = index.entries().iter().map(|e| e.filename.as_str()).collect();

        assert_eq!(
            names,
            vec!["20240314_100000_1.txt", "20240315_100000_1.txt", "20240316_100000_1.txt"]
        );
        // newest skips the empty file
        assert_eq!(index.newest().unwrap().filename, "20240315_100000_1.txt");
    }

    #[test]
    fn test_build_index_missing_dir() {
        let index = DirectoryIndex::build_index(Path::new("/definitely/not/here")).unwrap();
        assert!(index.is_empty());
        assert!(index.newest().is_none());
    }
}
