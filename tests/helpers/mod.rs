use anyhow::{Context, Result};
use std::path::PathBuf;
use studynotes::domain::Note;
use studynotes::infrastructure::note_file;
use studynotes::util::testing::sample_notes;
use tempfile::TempDir;

/// Temporary notes file seeded with a known note list
#[allow(dead_code)]
pub struct TestNotesFile {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestNotesFile {
    /// Notes file holding `sample_notes()`
    pub fn new() -> Result<Self> {
        Self::with_notes(&sample_notes())
    }

    pub fn with_notes(notes: &[Note]) -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let path = temp_dir.path().join("notes.json");
        note_file::save_notes(&path, notes)?;

        Ok(Self {
            _temp_dir: temp_dir,
            path,
        })
    }

    pub fn load(&self) -> Result<Vec<Note>> {
        note_file::load_notes(&self.path)
    }
}

/// Temporary directory of markdown sources
#[allow(dead_code)]
pub struct TestSources {
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestSources {
    pub fn new(files: &[(&str, &str)]) -> Result<Self> {
        let dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        for (name, content) in files {
            let path = dir.path().join(name);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        Ok(Self { dir })
    }
}

/// Section ids of the notes, in order
#[allow(dead_code)]
pub fn ids(notes: &[Note]) -> Vec<String> {
    notes.iter().map(|n| n.section_id.clone()).collect()
}

/// The two-note list used by the cats/dogs scenarios
#[allow(dead_code)]
pub fn cats_and_dogs() -> Vec<Note> {
    vec![
        Note::new("a", "Cats").with_importance(2).with_tags(["Term"]),
        Note::new("b", "Dogs").with_importance(5).with_tags(["Definition"]),
    ]
}
