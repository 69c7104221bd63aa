//! Browser preview of rendered HTML

use std::path::Path;
use tracing::{debug, info};

use crate::error::{MjmlError, Result};

/// Opens a local file in a browser
pub trait BrowserOpener {
    fn open(&self, path: &Path) -> Result<()>;
}

/// Uses the platform's default browser
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl BrowserOpener for SystemBrowser {
    fn open(&self, path: &Path) -> Result<()> {
        open::that(path).map_err(|e| MjmlError::Browser(format!("{}: {}", path.display(), e)))
    }
}

/// Write `html` to `path`, creating parent directories as needed
pub fn write_preview(path: &Path, html: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    debug!(path = %path.display(), bytes = html.len(), "Wrote preview file");
    Ok(())
}

/// Write the preview file and hand it to the browser
pub fn open_preview(opener: &dyn BrowserOpener, path: &Path, html: &str) -> Result<()> {
    write_preview(path, html)?;
    opener.open(path)?;
    info!(path = %path.display(), "Preview opened");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingBrowser {
        opened: RefCell<Vec<PathBuf>>,
    }

    impl BrowserOpener for RecordingBrowser {
        fn open(&self, path: &Path) -> Result<()> {
            self.opened.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    struct BrokenBrowser;

    impl BrowserOpener for BrokenBrowser {
        fn open(&self, _path: &Path) -> Result<()> {
            Err(MjmlError::Browser("no display".to_string()))
        }
    }

    #[test]
    fn test_write_preview_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("output.html");

        write_preview(&path, "<html></html>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_open_preview_writes_then_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.html");
        let browser = RecordingBrowser::default();

        open_preview(&browser, &path, "<p>hi</p>").unwrap();

        assert_eq!(browser.opened.borrow().as_slice(), &[path.clone()]);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_browser_failure_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.html");

        let err = open_preview(&BrokenBrowser, &path, "<p>hi</p>").unwrap_err();
        assert!(matches!(err, MjmlError::Browser(_)));
        assert!(path.exists());
    }
}
