// src/application/results_view.rs
use crate::application::note_card::{CardEvent, NoteCard};
use crate::application::note_exporter::ExportRequested;
use crate::application::note_filter::filter_notes;
use crate::application::note_generator::{GenerationMode, GenerationRequest, NoteGenerator};
use crate::application::note_sorter::sort_notes;
use crate::application::note_store::NoteStore;
use crate::application::tag_extractor::extract_tags;
use crate::application::tag_filter_panel::{TagEntry, TagFilterPanel};
use crate::constants::DELETE_CONFIRM_TIMEOUT_MS;
use crate::domain::{DomainError, Note, SortCriterion};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Dismissible notice shown after a failed generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
    pub retryable: bool,
}

/// View-model of the notes results page.
///
/// Derived values (tags, visible notes) are recomputed from the store on
/// every call.
#[derive(Debug)]
pub struct NotesResults {
    store: NoteStore,
    search: String,
    selected_tags: HashSet<String>,
    sort: SortCriterion,
    expanded: HashSet<String>,
    cards: HashMap<String, NoteCard>,
    panel: TagFilterPanel,
    banner: Option<ErrorBanner>,
    last_request: Option<(GenerationRequest, GenerationMode)>,
    confirm_window: Duration,
}

impl NotesResults {
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            search: String::new(),
            selected_tags: HashSet::new(),
            sort: SortCriterion::default(),
            expanded: HashSet::new(),
            cards: HashMap::new(),
            panel: TagFilterPanel::new(),
            banner: None,
            last_request: None,
            confirm_window: Duration::from_millis(DELETE_CONFIRM_TIMEOUT_MS),
        }
    }

    pub fn with_sort(mut self, sort: SortCriterion) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_confirm_window(mut self, confirm_window: Duration) -> Self {
        self.confirm_window = confirm_window;
        self
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    pub fn sort(&self) -> SortCriterion {
        self.sort
    }

    pub fn set_sort(&mut self, sort: SortCriterion) {
        self.sort = sort;
    }

    pub fn selected_tags(&self) -> &HashSet<String> {
        &self.selected_tags
    }

    pub fn set_selected_tags(&mut self, selected: HashSet<String>) {
        self.selected_tags = selected;
    }

    pub fn available_tags(&self) -> Vec<String> {
        extract_tags(self.store.notes())
    }

    /// Filtered then sorted copy of the notes.
    pub fn visible_notes(&self) -> Vec<Note> {
        let filtered = filter_notes(self.store.notes(), &self.search, &self.selected_tags);
        sort_notes(&filtered, self.sort)
    }

    pub fn toggle_expanded(&mut self, section_id: &str) {
        if !self.expanded.remove(section_id) {
            self.expanded.insert(section_id.to_string());
        }
    }

    pub fn is_expanded(&self, section_id: &str) -> bool {
        self.expanded.contains(section_id)
    }

    pub fn card(&self, section_id: &str) -> Option<&NoteCard> {
        self.cards.get(section_id)
    }

    /// Card state for a note, created on first access.
    pub fn card_mut(&mut self, section_id: &str) -> Option<&mut NoteCard> {
        let note = self.store.get(section_id)?.clone();
        let window = self.confirm_window;
        Some(
            self.cards
                .entry(section_id.to_string())
                .or_insert_with(|| NoteCard::with_confirm_window(note, window)),
        )
    }

    /// Apply a card event as a whole-list replacement and re-sync local state.
    #[instrument(level = "debug", skip(self))]
    pub fn dispatch(&mut self, event: CardEvent) -> Result<(), DomainError> {
        self.store.apply(&event)?;
        self.reconcile();
        Ok(())
    }

    pub fn tag_panel(&self) -> &TagFilterPanel {
        &self.panel
    }

    pub fn open_tag_panel(&mut self) {
        self.panel.open();
    }

    pub fn close_tag_panel(&mut self) {
        self.panel.close();
    }

    pub fn tag_entries(&self) -> Vec<TagEntry> {
        self.panel.entries(&self.available_tags(), &self.selected_tags)
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.selected_tags = self.panel.toggle(tag, &self.selected_tags);
    }

    pub fn clear_tags(&mut self) {
        self.selected_tags = self.panel.clear_all();
    }

    pub fn banner(&self) -> Option<&ErrorBanner> {
        self.banner.as_ref()
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    /// Run the generator and merge its output. On failure the current notes stay
    /// and a retryable banner is raised.
    pub fn generate<G: NoteGenerator>(
        &mut self,
        generator: &mut G,
        request: GenerationRequest,
        mode: GenerationMode,
    ) -> Result<usize, DomainError> {
        self.last_request = Some((request.clone(), mode));
        let result = generator.generate(&request).and_then(|notes| match mode {
            GenerationMode::Replace => {
                let count = notes.len();
                self.store.replace(notes).map(|_| count)
            }
            GenerationMode::Append => self.store.append(notes),
        });

        match result {
            Ok(count) => {
                info!(source = %request.source_name, count, ?mode, "Generated notes");
                self.banner = None;
                self.reconcile();
                Ok(count)
            }
            Err(e) => {
                warn!(source = %request.source_name, error = %e, "Generation failed");
                self.banner = Some(ErrorBanner {
                    message: e.to_string(),
                    retryable: true,
                });
                Err(e)
            }
        }
    }

    /// Repeat the last generation request.
    pub fn retry_generation<G: NoteGenerator>(&mut self, generator: &mut G) -> Result<usize, DomainError> {
        let (request, mode) = self
            .last_request
            .clone()
            .ok_or_else(|| DomainError::GenerationFailed("nothing to retry".to_string()))?;
        self.generate(generator, request, mode)
    }

    pub fn request_export(&self) -> ExportRequested {
        ExportRequested {
            notes: self.store.snapshot(),
        }
    }

    fn reconcile(&mut self) {
        let store = &self.store;
        self.expanded.retain(|id| store.contains(id));
        self.cards.retain(|id, card| match store.get(id) {
            Some(note) => {
                card.sync(note.clone());
                true
            }
            None => false,
        });
        debug!(
            revision = store.revision(),
            cards = self.cards.len(),
            "Reconciled card state"
        );
    }
}
