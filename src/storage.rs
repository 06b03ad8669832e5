//! Narrow filesystem access layer
//!
//! Every piece of disk I/O the handlers perform goes through one of these
//! three handles, so the routing and streaming logic can be exercised
//! against a temp directory in tests. The server never creates, moves, or
//! deletes media files; only the CSV file is ever written.

use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncSeekExt};

/// Read-only view of the media directory
#[derive(Debug, Clone)]
pub struct MediaStore {
    dir: PathBuf,
    extensions: Vec<String>,
}

impl MediaStore {
    #[must_use]
    pub fn new(dir: PathBuf, extensions: Vec<String>) -> Self {
        let extensions = extensions
            .iter()
            .map(|e| e.to_ascii_lowercase())
            .collect();
        Self { dir, extensions }
    }

    /// List media filenames matching the extension allow-list.
    ///
    /// Non-recursive. Sorted for deterministic output; the underlying
    /// directory enumeration order is platform-dependent.
    pub async fn list(&self) -> std::io::Result<Vec<String>> {
        let mut entries = fs::read_dir(&self.dir).await?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.matches_extension(&name) {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    fn matches_extension(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.contains(&e.to_ascii_lowercase()))
    }

    /// File size in bytes. Any stat failure (missing file, permission
    /// denial, broken symlink) surfaces as the plain `io::Error`.
    pub async fn len(&self, name: &str) -> std::io::Result<u64> {
        let meta = fs::metadata(self.dir.join(name)).await?;
        Ok(meta.len())
    }

    /// Open a file positioned at `start`, capped at `len` bytes.
    ///
    /// The handle is released when the returned reader is dropped,
    /// including when the client disconnects mid-stream. Reads past the end
    /// of the file simply come up short.
    pub async fn open_range(
        &self,
        name: &str,
        start: u64,
        len: u64,
    ) -> std::io::Result<impl AsyncRead + Send + Sync + 'static> {
        let mut file = fs::File::open(self.dir.join(name)).await?;
        if start > 0 {
            file.seek(SeekFrom::Start(start)).await?;
        }
        Ok(file.take(len))
    }
}

/// The single CSV resource, fully replaced on every save
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Truncate-and-write: after a successful save the file content equals
    /// `content` exactly. No locking; concurrent saves are last-write-wins.
    pub async fn save(&self, content: &[u8]) -> std::io::Result<()> {
        fs::write(&self.path, content).await
    }
}

/// Read-only view of the static asset root
#[derive(Debug, Clone)]
pub struct AssetStore {
    dir: PathBuf,
    index_file: String,
}

impl AssetStore {
    #[must_use]
    pub fn new(dir: PathBuf, index_file: String) -> Self {
        Self { dir, index_file }
    }

    /// Map a request path to a filesystem path.
    ///
    /// `/` aliases to the index document; a trailing query string is cut
    /// off before resolution.
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = path.split('?').next().unwrap_or(path);
        let relative = if path == "/" {
            self.index_file.as_str()
        } else {
            path.trim_start_matches('/')
        };
        self.dir.join(relative)
    }

    /// Resolve and read a whole asset. Returns the resolved path alongside
    /// the content so the caller can derive the content type.
    pub async fn read(&self, path: &str) -> std::io::Result<(PathBuf, Vec<u8>)> {
        let resolved = self.resolve(path);
        let content = fs::read(&resolved).await?;
        Ok((resolved, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    fn test_pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| u8::try_from(i % 251).unwrap()).collect()
    }

    #[tokio::test]
    async fn list_filters_by_extension_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.mp4"), b"x").unwrap();
        std::fs::write(dir.path().join("b.txt"), b"x").unwrap();
        std::fs::write(dir.path().join("c.MKV"), b"x").unwrap();

        let store = MediaStore::new(
            dir.path().to_path_buf(),
            vec!["mp4".to_string(), "mkv".to_string()],
        );
        let names = store.list().await.unwrap();
        assert_eq!(names, vec!["a.mp4".to_string(), "c.MKV".to_string()]);
    }

    #[tokio::test]
    async fn list_missing_directory_errors() {
        let store = MediaStore::new(
            PathBuf::from("/definitely/not/a/real/dir"),
            vec!["mp4".to_string()],
        );
        assert!(store.list().await.is_err());
    }

    #[tokio::test]
    async fn len_reports_file_size() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("clip.mp4"), test_pattern(1000)).unwrap();

        let store = MediaStore::new(dir.path().to_path_buf(), vec!["mp4".to_string()]);
        assert_eq!(store.len("clip.mp4").await.unwrap(), 1000);
        assert!(store.len("missing.mp4").await.is_err());
    }

    #[tokio::test]
    async fn open_range_returns_exact_window() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_pattern(1000);
        std::fs::write(dir.path().join("clip.mp4"), &data).unwrap();

        let store = MediaStore::new(dir.path().to_path_buf(), vec!["mp4".to_string()]);
        let mut reader = store.open_range("clip.mp4", 100, 50).await.unwrap();
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, &data[100..150]);
    }

    #[tokio::test]
    async fn open_range_past_eof_yields_short_read() {
        let dir = tempfile::tempdir().unwrap();
        let data = test_pattern(1000);
        std::fs::write(dir.path().join("clip.mp4"), &data).unwrap();

        let store = MediaStore::new(dir.path().to_path_buf(), vec!["mp4".to_string()]);
        let mut reader = store.open_range("clip.mp4", 990, 100).await.unwrap();
        let mut buf = Vec::new();
        reader.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, &data[990..]);
    }

    #[tokio::test]
    async fn csv_save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("rules.csv"));

        store.save(b"a,b\n1,2\n").await.unwrap();
        store.save(b"x\n").await.unwrap();

        let on_disk = std::fs::read(dir.path().join("rules.csv")).unwrap();
        assert_eq!(on_disk, b"x\n");
    }

    #[tokio::test]
    async fn asset_read_aliases_root_to_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), b"hello").unwrap();

        let store = AssetStore::new(dir.path().to_path_buf(), "index.html".to_string());
        let (resolved, content) = store.read("/").await.unwrap();
        assert_eq!(content, b"hello");
        assert!(resolved.ends_with("index.html"));
    }

    #[tokio::test]
    async fn asset_read_strips_query_string() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.js"), b"console.log(1);").unwrap();

        let store = AssetStore::new(dir.path().to_path_buf(), "index.html".to_string());
        let (_, content) = store.read("/app.js?v=2").await.unwrap();
        assert_eq!(content, b"console.log(1);");
    }

    #[tokio::test]
    async fn asset_read_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let store = AssetStore::new(dir.path().to_path_buf(), "index.html".to_string());
        assert!(store.read("/nope.css").await.is_err());
    }
}
