use super::{inject_page_css, PdfBackend};
use crate::error::{Error, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;
use tracing::debug;
use url::Url;
use which::which;

/// Prints HTML to PDF with a headless Chrome/Chromium binary.
#[derive(Debug, Clone)]
pub struct ChromePdfBackend {
    binary: Option<PathBuf>,
    window: (u32, u32),
}

impl Default for ChromePdfBackend {
    fn default() -> Self {
        Self {
            binary: None,
            window: (1280, 960),
        }
    }
}

impl ChromePdfBackend {
    /// Uses `binary` instead of searching for one.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: Some(binary.into()),
            ..Self::default()
        }
    }

    pub fn window_size(mut self, width: u32, height: u32) -> Self {
        self.window = (width, height);
        self
    }
}

impl PdfBackend for ChromePdfBackend {
    fn html_to_pdf(&self, html: &str, stylesheets: &[&str]) -> Result<Vec<u8>> {
        let chrome = match &self.binary {
            Some(path) => path.clone(),
            None => resolve_chrome_binary()?,
        };
        let html = inject_page_css(html, stylesheets);

        let temp_dir = tempdir().map_err(|e| Error::Backend(format!("Temp dir error: {e}")))?;
        let html_path = temp_dir.path().join("amdown-export.html");
        let mut html_file = fs::File::create(&html_path).map_err(|e| Error::io(&html_path, e))?;
        html_file
            .write_all(html.as_bytes())
            .map_err(|e| Error::io(&html_path, e))?;

        let pdf_path = temp_dir.path().join("amdown-export.pdf");
        let file_url = Url::from_file_path(&html_path).map_err(|_| {
            Error::Backend("Failed to construct file:// URL for HTML input".to_string())
        })?;

        let (w, h) = self.window;
        debug!(chrome = %chrome.display(), "printing to PDF");
        let status = Command::new(&chrome)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--print-to-pdf-no-header")
            .arg(format!("--print-to-pdf={}", pdf_path.display()))
            .arg(format!("--window-size={w},{h}"))
            .arg(file_url.as_str())
            .status()
            .map_err(|e| {
                Error::Backend(format!(
                    "Failed to launch Chrome ({}): {e}",
                    chrome.display()
                ))
            })?;

        if !status.success() {
            return Err(Error::Backend(format!("Chrome exited with status {status}")));
        }

        fs::read(&pdf_path).map_err(|e| Error::Backend(format!("Chrome produced no PDF: {e}")))
    }
}

/// Locates Chrome: `AMDOWN_CHROME_BIN`, `GOOGLE_CHROME_BIN`, `CHROME_BIN`, the
/// `PATH`, then the usual install locations.
pub fn resolve_chrome_binary() -> Result<PathBuf> {
    for var in ["AMDOWN_CHROME_BIN", "GOOGLE_CHROME_BIN", "CHROME_BIN"] {
        if let Some(path) = env::var_os(var) {
            if !path.is_empty() {
                return Ok(PathBuf::from(path));
            }
        }
    }

    for candidate in [
        "google-chrome",
        "google-chrome-stable",
        "chromium",
        "chromium-browser",
        "chrome",
        "msedge",
    ] {
        if let Ok(path) = which(candidate) {
            return Ok(path);
        }
    }

    #[cfg(target_os = "macos")]
    {
        let candidate =
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    #[cfg(target_os = "windows")]
    {
        for candidate in [
            r"C:\Program Files\Google\Chrome\Application\chrome.exe",
            r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe",
        ] {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    #[cfg(target_os = "linux")]
    {
        for candidate in [
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium-browser",
            "/usr/bin/chromium",
        ] {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(path);
            }
        }
    }

    Err(Error::Backend(
        "Unable to locate a Chrome/Chromium binary. Set AMDOWN_CHROME_BIN to override the detection."
            .to_string(),
    ))
}
