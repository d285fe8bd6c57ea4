// src/infrastructure/clipboard.rs
use crate::application::Clipboard;
use crate::domain::DomainError;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, instrument};

/// System clipboard: the native one through `arboard`, or a configured copy
/// program fed through stdin.
pub struct SystemClipboard {
    backend: Backend,
}

enum Backend {
    Native(arboard::Clipboard),
    Program { path: PathBuf, args: Vec<String> },
}

impl SystemClipboard {
    /// Use `configured` when given (program name plus arguments, whitespace
    /// separated), otherwise the native clipboard.
    pub fn detect(configured: Option<&str>) -> Result<Self, DomainError> {
        match configured.map(str::trim).filter(|s| !s.is_empty()) {
            Some(command) => Self::program(command),
            None => Self::native(),
        }
    }

    pub fn native() -> Result<Self, DomainError> {
        let clipboard = arboard::Clipboard::new().map_err(unavailable)?;
        Ok(Self {
            backend: Backend::Native(clipboard),
        })
    }

    /// Resolve the first word of `command` on `PATH`; the rest are its arguments.
    pub fn program(command: &str) -> Result<Self, DomainError> {
        let mut parts = command.split_whitespace();
        let name = parts
            .next()
            .ok_or_else(|| DomainError::ClipboardUnavailable("empty clipboard program".to_string()))?;
        let path = which::which(name)
            .map_err(|e| DomainError::ClipboardUnavailable(format!("{name}: {e}")))?;
        Ok(Self {
            backend: Backend::Program {
                path,
                args: parts.map(str::to_string).collect(),
            },
        })
    }

    pub fn is_native(&self) -> bool {
        matches!(self.backend, Backend::Native(_))
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.backend {
            Backend::Native(_) => f.write_str("SystemClipboard(native)"),
            Backend::Program { path, args } => f
                .debug_struct("SystemClipboard")
                .field("path", path)
                .field("args", args)
                .finish(),
        }
    }
}

impl Clipboard for SystemClipboard {
    #[instrument(level = "debug", skip(self, text))]
    fn write_text(&mut self, text: &str) -> Result<(), DomainError> {
        match &mut self.backend {
            Backend::Native(clipboard) => clipboard.set_text(text).map_err(unavailable)?,
            Backend::Program { path, args } => pipe_to_program(path, args, text)?,
        }
        debug!(bytes = text.len(), "Wrote clipboard text");
        Ok(())
    }
}

fn unavailable(e: impl fmt::Display) -> DomainError {
    DomainError::ClipboardUnavailable(e.to_string())
}

fn pipe_to_program(path: &Path, args: &[String], text: &str) -> Result<(), DomainError> {
    let mut child = Command::new(path)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(unavailable)?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).map_err(unavailable)?;
    }

    let status = child.wait().map_err(unavailable)?;
    if !status.success() {
        return Err(DomainError::ClipboardUnavailable(format!(
            "{} exited with {}",
            path.display(),
            status
        )));
    }
    Ok(())
}
