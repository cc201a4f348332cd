//! Static file loading and path resolution.
//!
//! The URL space maps literally onto the filesystem under the served
//! root; the only rewrite is the root URL serving the entry document.

use crate::http::mime;
use crate::logger;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Outcome of a file load attempt.
pub enum Loaded {
    File {
        content: Vec<u8>,
        content_type: &'static str,
    },
    NotFound,
    Error(ErrorKind),
}

/// Map a request URL onto a relative filesystem path.
///
/// The root URL serves the entry document; every other URL is taken
/// literally, query string and all, appended to the served root.
/// Percent escapes are not decoded.
pub fn resolve_path(url: &str, root: &str, index: &str) -> String {
    if url == "/" {
        format!("{root}{index}")
    } else {
        format!("{root}{url}")
    }
}

/// Read a resolved file in full, rejecting paths that escape the root.
pub async fn load(file_path: &str, root: &str) -> Loaded {
    if escapes_root(Path::new(file_path), Path::new(root)) {
        logger::log_warning(&format!("Path traversal attempt blocked: {file_path}"));
        return Loaded::NotFound;
    }

    match fs::read(file_path).await {
        Ok(content) => {
            let content_type = mime::content_type(mime::extension_of(file_path));
            Loaded::File {
                content,
                content_type,
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Loaded::NotFound,
        Err(e) => Loaded::Error(e.kind()),
    }
}

/// A resolved path must stay inside the served root once both are
/// canonicalized. Paths that fail to canonicalize pass through so the
/// read itself reports them as missing.
fn escapes_root(file_path: &Path, root: &Path) -> bool {
    let Ok(root_canonical) = root.canonicalize() else {
        return false;
    };
    match file_path.canonicalize() {
        Ok(p) => !p.starts_with(&root_canonical),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_url_serves_the_entry_document() {
        assert_eq!(resolve_path("/", ".", "/index.html"), "./index.html");
    }

    #[test]
    fn test_other_urls_are_taken_literally() {
        assert_eq!(resolve_path("/style.css", ".", "/index.html"), "./style.css");
        assert_eq!(
            resolve_path("/video/seg-1.m4s", ".", "/index.html"),
            "./video/seg-1.m4s"
        );
    }

    #[test]
    fn test_query_strings_are_kept() {
        assert_eq!(
            resolve_path("/style.css?v=2", ".", "/index.html"),
            "./style.css?v=2"
        );
        // A root URL with a query is not the root URL.
        assert_eq!(resolve_path("/?x=1", ".", "/index.html"), "./?x=1");
    }

    #[test]
    fn test_escape_is_detected() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("public");
        std::fs::create_dir(&root).unwrap();
        std::fs::write(outer.path().join("secret.txt"), "s").unwrap();
        std::fs::write(root.join("open.txt"), "o").unwrap();

        let escape = root.join("..").join("secret.txt");
        assert!(escapes_root(&escape, &root));
        assert!(!escapes_root(&root.join("open.txt"), &root));
        // Missing files pass through and fail at read time instead.
        assert!(!escapes_root(&root.join("missing.txt"), &root));
    }

    #[tokio::test]
    async fn test_load_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = format!("{}/missing.html", dir.path().display());
        assert!(matches!(
            load(&path, &dir.path().to_string_lossy()).await,
            Loaded::NotFound
        ));
    }

    #[tokio::test]
    async fn test_load_reports_other_errors_by_kind() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("media")).unwrap();
        let path = format!("{}/media", dir.path().display());
        match load(&path, &dir.path().to_string_lossy()).await {
            Loaded::Error(kind) => assert_ne!(kind, ErrorKind::NotFound),
            _ => panic!("expected a read error for a directory"),
        }
    }
}
