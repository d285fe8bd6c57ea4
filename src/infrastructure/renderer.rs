// src/infrastructure/renderer.rs
use crate::application::NoteExporter;
use crate::constants::BROWSER_LAUNCH_DELAY_MS;
use crate::domain::{DomainError, Note};
use crate::ports::HtmlPresenter;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{Builder, TempDir};
use tracing::{info, instrument};

/// Exports notes as an HTML document in a temporary directory.
#[derive(Debug)]
pub struct HtmlExporter {
    presenter: HtmlPresenter,
    open_after_export: bool,
    // Removed on drop unless `keep` is called
    temp_dir: Option<TempDir>,
}

impl HtmlExporter {
    pub fn new(presenter: HtmlPresenter) -> Self {
        Self {
            presenter,
            open_after_export: false,
            temp_dir: None,
        }
    }

    pub fn open_in_browser_after_export(mut self, open: bool) -> Self {
        self.open_after_export = open;
        self
    }

    /// Leave the exported file on disk after this exporter is dropped.
    pub fn keep(&mut self) -> Option<PathBuf> {
        self.temp_dir.take().map(TempDir::keep)
    }

    pub fn create_temp_file(&mut self, content: &str) -> Result<PathBuf> {
        let temp_dir = Builder::new()
            .prefix("studynotes-")
            .rand_bytes(5)
            .tempdir()
            .context("Failed to create temporary directory")?;

        let file_path = temp_dir.path().join("notes.html");

        File::create(&file_path)
            .with_context(|| format!("Failed to create temp file at {}", file_path.display()))?
            .write_all(content.as_bytes())
            .context("Failed to write content to temporary file")?;

        self.temp_dir = Some(temp_dir);

        Ok(file_path)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn open_in_browser(&mut self, path: &Path) -> Result<()> {
        let path_str = path.to_str().context("Failed to convert path to string")?;

        #[cfg(target_os = "macos")]
        {
            std::process::Command::new("open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "windows")]
        {
            std::process::Command::new("cmd")
                .args(["/C", "start", path_str])
                .spawn()
                .context("Failed to open browser")?;
        }
        #[cfg(target_os = "linux")]
        {
            std::process::Command::new("xdg-open")
                .arg(path_str)
                .spawn()
                .context("Failed to open browser")?;
        }

        // Keep the temp directory alive briefly
        std::thread::sleep(std::time::Duration::from_millis(BROWSER_LAUNCH_DELAY_MS));

        Ok(())
    }

    fn export_html(&mut self, notes: &[Note]) -> Result<PathBuf> {
        let html = self.presenter.render(notes);
        let path = self.create_temp_file(&html)?;
        if self.open_after_export {
            self.open_in_browser(&path)?;
        }
        info!(path = %path.display(), count = notes.len(), "Exported notes");
        Ok(path)
    }
}

impl Default for HtmlExporter {
    fn default() -> Self {
        Self::new(HtmlPresenter::new())
    }
}

impl NoteExporter for HtmlExporter {
    fn export(&mut self, notes: &[Note]) -> Result<PathBuf, DomainError> {
        self.export_html(notes)
            .map_err(|e| DomainError::ExportFailed(format!("{:#}", e)))
    }
}
