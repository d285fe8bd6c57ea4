// src/infrastructure/source_reader.rs
use crate::application::GenerationRequest;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Read markdown file content
pub fn read_markdown_file(path: impl AsRef<Path>) -> Result<String> {
    std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read markdown file {}", path.as_ref().display()))
}

/// Markdown files under `path`: the file itself, or the `.md` files of a
/// directory (descending into subdirectories when `recursive`), sorted by path.
pub fn collect_markdown_files(path: impl AsRef<Path>, recursive: bool) -> Result<Vec<PathBuf>> {
    let path = path.as_ref();
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        bail!("Source path does not exist: {}", path.display());
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(path)
        .follow_links(false)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|p| p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("md"))
        .collect();
    files.sort();
    debug!(count = files.len(), dir = %path.display(), "Collected markdown sources");
    Ok(files)
}

/// One generation request per markdown source. Files under a directory are
/// named by their path relative to it, a single file by its file name.
pub fn read_sources(path: impl AsRef<Path>, recursive: bool) -> Result<Vec<GenerationRequest>> {
    let root = path.as_ref();
    collect_markdown_files(root, recursive)?
        .into_iter()
        .map(|file| {
            let text = read_markdown_file(&file)?;
            Ok(GenerationRequest::new(source_name(root, &file), text))
        })
        .collect()
}

fn source_name(root: &Path, file: &Path) -> String {
    let relative = match file.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel,
        _ => Path::new(file.file_name().unwrap_or(file.as_os_str())),
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
