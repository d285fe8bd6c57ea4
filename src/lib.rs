// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::fmt::Write as _;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

use crate::application::{copy_note, GenerationMode, NoteCard, NoteStore, NotesResults};
use crate::cli::args::{Args, Command};
use crate::domain::{DomainError, SortCriterion};
use crate::infrastructure::{
    note_file, source_reader, Config, HtmlExporter, MarkdownNoteGenerator, SystemClipboard,
};
use crate::ports::HtmlPresenter;
use crate::util::text::importance_stars;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting studynotes with arguments");

    let config = load_config(args.config.as_deref())?;
    debug!(?config, "Loaded configuration");

    match args.command {
        Command::Generate {
            path,
            output,
            recursive,
            append,
            topics,
        } => {
            let mode = if append { GenerationMode::Append } else { config.generation.mode };
            generate(&path, output.as_deref(), recursive || config.generation.recursive, mode, &topics)
        }
        Command::List {
            notes,
            search,
            tags,
            sort,
            expand,
            json,
        } => {
            let view = list_view(&notes, &config, search, tags, sort, &expand)?;
            print!("{}", render_list(&view, json)?);
            Ok(())
        }
        Command::Tags { notes } => {
            let view = open_view(&notes, &config)?;
            for tag in view.available_tags() {
                println!("{tag}");
            }
            Ok(())
        }
        Command::Star { notes, id } => {
            let mut view = open_view(&notes, &config)?;
            let event = card(&mut view, &id)?.toggle_star();
            view.dispatch(event)?;
            info!(section_id = %id, "Toggled star");
            note_file::save_notes(&notes, view.notes())
        }
        Command::Tag { notes, id, tag } => {
            let mut view = open_view(&notes, &config)?;
            let card = card(&mut view, &id)?;
            card.set_tag_input(tag);
            match card.submit_tag() {
                Some(event) => {
                    view.dispatch(event)?;
                    note_file::save_notes(&notes, view.notes())
                }
                None => {
                    debug!(section_id = %id, "Tag empty or already present, nothing to do");
                    Ok(())
                }
            }
        }
        Command::Edit { notes, id, content } => {
            let mut view = open_view(&notes, &config)?;
            let card = card(&mut view, &id)?;
            card.begin_edit();
            card.set_buffer(content);
            if let Some(event) = card.save() {
                view.dispatch(event)?;
            }
            note_file::save_notes(&notes, view.notes())
        }
        Command::Delete { notes, id, yes } => delete(&notes, &id, yes, &config),
        Command::Export { notes, open } => {
            let path = export(&notes, &config, open)?;
            println!("{}", path.display());
            Ok(())
        }
        Command::Copy { notes, id } => {
            let view = open_view(&notes, &config)?;
            let note = view
                .store()
                .get(&id)
                .ok_or_else(|| DomainError::NoteNotFound(id.clone()))?;
            match SystemClipboard::detect(config.clipboard.program()) {
                Ok(mut clipboard) => {
                    if copy_note(&mut clipboard, note) {
                        println!("Copied {id}");
                    }
                }
                Err(e) => warn!(error = %e, "Clipboard not available"),
            }
            Ok(())
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => match infrastructure::config::default_config_path() {
            Some(path) => Config::load_or_default(path),
            None => Ok(Config::default()),
        },
    }
}

fn open_view(notes: &Path, config: &Config) -> Result<NotesResults> {
    let store = NoteStore::new(note_file::load_notes(notes)?)?;
    Ok(NotesResults::new(store)
        .with_sort(config.view.default_sort)
        .with_confirm_window(config.card.confirm_window()))
}

fn card<'a>(view: &'a mut NotesResults, id: &str) -> Result<&'a mut NoteCard> {
    let card = view
        .card_mut(id)
        .ok_or_else(|| DomainError::NoteNotFound(id.to_string()))?;
    Ok(card)
}

fn list_view(
    notes: &Path,
    config: &Config,
    search: Option<String>,
    tags: Vec<String>,
    sort: Option<SortCriterion>,
    expand: &[String],
) -> Result<NotesResults> {
    let mut view = open_view(notes, config)?;
    view.set_search(search.unwrap_or_default());
    view.set_selected_tags(tags.into_iter().collect());
    if let Some(sort) = sort {
        view.set_sort(sort);
    }
    // Repeated ids expand once
    for id in expand {
        if !view.is_expanded(id) {
            view.toggle_expanded(id);
        }
    }
    Ok(view)
}

fn render_list(view: &NotesResults, json: bool) -> Result<String> {
    let visible = view.visible_notes();
    if json {
        return Ok(note_file::to_json(&visible)? + "\n");
    }

    let mut out = String::new();
    for note in &visible {
        let star = if note.is_starred() { "*" } else { " " };
        let tags: Vec<&str> = note.all_tags().map(String::as_str).collect();
        writeln!(
            out,
            "{star} {} {:<14} {} [{}]",
            importance_stars(note.importance),
            note.section_id,
            note.section_title,
            tags.join(", ")
        )?;
        if view.is_expanded(&note.section_id) {
            for line in &note.content {
                writeln!(out, "      - {line}")?;
            }
        }
    }
    debug!(shown = visible.len(), total = view.notes().len(), "Listed notes");
    Ok(out)
}

fn export(notes: &Path, config: &Config, open: bool) -> Result<PathBuf> {
    let view = open_view(notes, config)?;
    let title = notes
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Study Notes".to_string());
    let mut exporter = HtmlExporter::new(HtmlPresenter::with_title(title))
        .open_in_browser_after_export(open);
    let path = view.request_export().send(&mut exporter)?;
    if let Some(dir) = exporter.keep() {
        debug!(dir = %dir.display(), "Kept export directory");
    }
    Ok(path)
}

fn generate(
    path: &Path,
    output: Option<&Path>,
    recursive: bool,
    mode: GenerationMode,
    topics: &[String],
) -> Result<()> {
    let existing = match (output, mode) {
        (Some(out), GenerationMode::Append) => note_file::load_notes_or_empty(out)?,
        _ => Vec::new(),
    };
    let mut view = NotesResults::new(NoteStore::new(existing)?);
    let mut generator = MarkdownNoteGenerator::new();

    let requests = source_reader::read_sources(path, recursive)?;
    if requests.is_empty() {
        bail!("No markdown sources found in {}", path.display());
    }

    // Later sources in one run always extend the earlier ones.
    let mut next_mode = mode;
    for mut request in requests {
        for topic in topics {
            if !request.add_topic(topic) {
                debug!(topic = %topic, "Topic ignored");
            }
        }
        if view.generate(&mut generator, request, next_mode).is_ok() {
            next_mode = GenerationMode::Append;
        }
        view.dismiss_banner();
    }

    if view.notes().is_empty() {
        bail!("Generation produced no notes from {}", path.display());
    }

    match output {
        Some(out) => {
            note_file::save_notes(out, view.notes())?;
            println!("Wrote {} notes to {}", view.notes().len(), out.display());
        }
        None => println!("{}", note_file::to_json(view.notes())?),
    }
    Ok(())
}

fn delete(notes: &Path, id: &str, yes: bool, config: &Config) -> Result<()> {
    let mut view = open_view(notes, config)?;
    let window = config.card.confirm_window();
    let card = card(&mut view, id)?;

    // A fresh card only arms on the first press.
    let armed = card.press_delete();
    debug_assert!(armed.is_none());
    if !yes {
        println!(
            "Press Enter within {}s to delete \"{}\"",
            window.as_secs_f32(),
            card.note().section_title
        );
        let mut line = String::new();
        std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read confirmation")?;
    }

    match card.press_delete() {
        Some(event) => {
            view.dispatch(event)?;
            note_file::save_notes(notes, view.notes())?;
            println!("Deleted {id}");
        }
        None => println!("Confirmation expired, nothing deleted"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{self, sample_notes};
    use tempfile::TempDir;

    #[ctor::ctor]
    fn init() {
        testing::init_test_setup().expect("Failed to initialize test setup");
    }

    fn notes_file() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("biology.json");
        note_file::save_notes(&path, &sample_notes()).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn given_search_tags_and_sort_when_listing_json_then_outputs_filtered_sorted_notes() {
        let (_dir, path) = notes_file();
        let view = list_view(
            &path,
            &Config::default(),
            Some("  ".to_string()),
            vec!["Location".to_string(), "Definition".to_string(), "exam".to_string()],
            Some(SortCriterion::ByTag),
            &[],
        )
        .unwrap();

        let json = render_list(&view, true).unwrap();

        let listed = note_file::parse_notes(&json).unwrap();
        let ids: Vec<&str> = listed.iter().map(|n| n.section_id.as_str()).collect();
        assert_eq!(ids, vec!["sec-cell", "sec-yeast", "sec-amazon"]);
    }

    #[test]
    fn given_search_when_listing_text_then_shows_matching_notes_only() {
        let (_dir, path) = notes_file();
        let view = list_view(&path, &Config::default(), Some("calvin".to_string()), vec![], None, &[]).unwrap();

        let text = render_list(&view, false).unwrap();

        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("Photosynthesis"));
    }

    #[test]
    fn given_repeated_expand_ids_when_listing_then_note_is_expanded_once() {
        let (_dir, path) = notes_file();
        let expand = vec!["sec-cell".to_string(), "sec-cell".to_string()];

        let view = list_view(&path, &Config::default(), None, vec![], None, &expand).unwrap();

        assert!(view.is_expanded("sec-cell"));
        assert!(render_list(&view, false).unwrap().contains("      - Basic unit of life"));
    }

    #[test]
    fn given_notes_file_when_exporting_then_writes_kept_html_named_after_file() {
        let (_dir, path) = notes_file();

        let html_path = export(&path, &Config::default(), false).unwrap();

        let html = std::fs::read_to_string(&html_path).unwrap();
        assert!(html.contains("<title>biology</title>"));
        assert!(html.contains("5 notes"));
        std::fs::remove_dir_all(html_path.parent().unwrap()).unwrap();
    }
}
