//! Interactive application state and event handling.
//!
//! [`App`] owns the state behind each tab and runs the event loop via `run()`:
//!
//! - **Assistant**: question input, the pending search, related questions, search history
//! - **Training Log**: the log store, success filter, new-entry form and delete confirmation
//! - **Providers**: search text, category filter, sort key, contact actions
//! - **Profile**: read-only summary
//!
//! Each loop iteration polls the pending search, so the simulated delay never blocks input.
//! Rendering only happens when state changed or at least every 100ms.

use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Utc};
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use super::events::{Action, poll_event};
use super::form::EntryForm;
use super::rendering::render_ui;
use crate::assistant::{EXAMPLE_QUESTIONS, SearchSession};
use crate::clipboard::{contact_card, copy_to_clipboard, plain_answer};
use crate::config::AppConfig;
use crate::directory::{ContactChannel, Launcher, open_contact, query_providers, seed_providers};
use crate::models::{CategoryFilter, ServiceProvider, SortKey, SuccessFilter, TrainingEntry};
use crate::training::{InMemoryTrainingLog, MediaLibrary, TrainingLogStore};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
const MAX_INPUT_CHARS: usize = 256;
const PAGE_SIZE: isize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Assistant,
    TrainingLog,
    Providers,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Assistant, Tab::TrainingLog, Tab::Providers, Tab::Profile];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Assistant => "Assistant",
            Tab::TrainingLog => "Training Log",
            Tab::Providers => "Providers",
            Tab::Profile => "Profile",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Selectable line on the assistant screen
#[derive(Debug, Clone, PartialEq)]
pub enum AssistantChoice {
    Suggestion(String),
    Example(&'static str),
    Recent { query: String, timestamp: DateTime<Utc> },
}

impl AssistantChoice {
    pub fn text(&self) -> &str {
        match self {
            AssistantChoice::Suggestion(text) => text,
            AssistantChoice::Example(text) => text,
            AssistantChoice::Recent { query, .. } => query,
        }
    }
}

pub struct App {
    pub(super) tab: Tab,
    should_quit: bool,
    // Assistant
    pub(super) session: SearchSession,
    pub(super) assistant_selected: Option<usize>,
    // Training log
    pub(super) log: Box<dyn TrainingLogStore>,
    pub(super) success_filter: SuccessFilter,
    pub(super) log_idx: usize,
    pub(super) form: Option<EntryForm>,
    pub(super) pending_delete: Option<TrainingEntry>,
    media: Box<dyn MediaLibrary>,
    // Providers
    providers: Vec<ServiceProvider>,
    pub(super) provider_search: String,
    pub(super) category: CategoryFilter,
    pub(super) sort_key: SortKey,
    pub(super) visible_providers: Vec<ServiceProvider>,
    pub(super) provider_idx: usize,
    pub(super) show_provider_detail: bool,
    launcher: Box<dyn Launcher>,
    // Status message (clipboard and contact feedback, validation errors)
    pub(super) status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(
        config: &AppConfig,
        launcher: Box<dyn Launcher>,
        media: Box<dyn MediaLibrary>,
    ) -> Self {
        let log: Box<dyn TrainingLogStore> = if config.training.sample_entries {
            Box::new(InMemoryTrainingLog::with_sample_entries())
        } else {
            Box::new(InMemoryTrainingLog::new())
        };

        let providers = seed_providers();
        let sort_key = config.directory.default_sort;
        let visible_providers = query_providers(&providers, "", CategoryFilter::All, sort_key);

        Self {
            tab: Tab::Assistant,
            should_quit: false,
            session: SearchSession::new(config.search.delay()),
            assistant_selected: None,
            log,
            success_filter: SuccessFilter::All,
            log_idx: 0,
            form: None,
            pending_delete: None,
            media,
            providers,
            provider_search: String::new(),
            category: CategoryFilter::All,
            sort_key,
            visible_providers,
            provider_idx: 0,
            show_provider_detail: false,
            launcher,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType) {
        let duration_ms = match message_type {
            MessageType::Success => STATUS_SUCCESS_DURATION_MS,
            MessageType::Error => STATUS_ERROR_DURATION_MS,
        };
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self, now: Instant) {
        if self.status_message.as_ref().is_some_and(|msg| now >= msg.expires_at) {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Time-driven updates: status expiry and the pending search
    pub(super) fn tick(&mut self, now: Instant) {
        self.check_and_clear_expired_status(now);
        if self.session.poll(now).is_some() {
            self.assistant_selected = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.tick(Instant::now());

            // Draw if dirty or if it's been >100ms (resize, loading indicator)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, self))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    pub(super) fn handle_action(&mut self, action: Action) {
        if action == Action::Quit {
            self.should_quit = true;
            return;
        }
        if self.form.is_some() {
            self.handle_form_action(action);
            return;
        }
        if self.pending_delete.is_some() {
            self.handle_confirm_action(action);
            return;
        }

        match action {
            Action::NextTab => self.switch_tab(self.tab.next()),
            Action::PrevTab => self.switch_tab(self.tab.prev()),
            Action::None => {}
            _ => match self.tab {
                Tab::Assistant => self.handle_assistant_action(action),
                Tab::TrainingLog => self.handle_log_action(action),
                Tab::Providers => self.handle_provider_action(action),
                Tab::Profile => {}
            },
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        debug!(from = self.tab.title(), to = tab.title(), "switch tab");
        self.tab = tab;
        self.needs_redraw = true;
    }

    // Assistant

    /// Related questions after an answer; otherwise example questions then recent searches
    pub(super) fn assistant_choices(&self) -> Vec<AssistantChoice> {
        if self.session.is_loading() {
            return Vec::new();
        }
        if let Some(result) = self.session.result() {
            return result.suggestion_list.iter().cloned().map(AssistantChoice::Suggestion).collect();
        }
        EXAMPLE_QUESTIONS
            .into_iter()
            .map(AssistantChoice::Example)
            .chain(self.session.history().items().iter().map(|item| AssistantChoice::Recent {
                query: item.query.clone(),
                timestamp: item.timestamp,
            }))
            .collect()
    }

    fn handle_assistant_action(&mut self, action: Action) {
        match action {
            Action::Input(c) => {
                if !c.is_control() && self.session.query().chars().count() < MAX_INPUT_CHARS {
                    self.session.query_mut().push(c);
                    self.assistant_selected = None;
                    self.needs_redraw = true;
                }
            }
            Action::DeleteChar => {
                if self.session.query_mut().pop().is_some() {
                    self.assistant_selected = None;
                    self.needs_redraw = true;
                }
            }
            Action::MoveUp => self.move_assistant_selection(-1),
            Action::MoveDown => self.move_assistant_selection(1),
            Action::PageUp => self.move_assistant_selection(-PAGE_SIZE),
            Action::PageDown => self.move_assistant_selection(PAGE_SIZE),
            Action::Select => self.activate_assistant(),
            Action::Back => {
                if self.session.cancel() {
                    self.set_status("Search cancelled", MessageType::Success);
                } else if self.assistant_selected.is_some() {
                    self.assistant_selected = None;
                } else {
                    self.session.query_mut().clear();
                }
                self.needs_redraw = true;
            }
            Action::ClearHistory => {
                self.session.clear_history();
                self.assistant_selected = None;
                self.set_status("✓ Search history cleared", MessageType::Success);
            }
            Action::Copy => {
                let outcome = match self.session.result() {
                    Some(result) => copy_to_clipboard(&plain_answer(result)),
                    None => {
                        self.set_status("✗ No answer to copy", MessageType::Error);
                        return;
                    }
                };
                self.report_copy(outcome);
            }
            _ => {}
        }
    }

    fn move_assistant_selection(&mut self, delta: isize) {
        let total = self.assistant_choices().len();
        if total == 0 {
            self.assistant_selected = None;
            return;
        }
        let current = self.assistant_selected.map(|i| i as isize).unwrap_or(-1);
        let next = (current + delta).clamp(0, total as isize - 1) as usize;
        if self.assistant_selected != Some(next) {
            self.assistant_selected = Some(next);
            self.needs_redraw = true;
        }
    }

    /// Enter: pick the highlighted choice, or submit the typed question
    fn activate_assistant(&mut self) {
        let choices = self.assistant_choices();
        if let Some(idx) = self.assistant_selected
            && let Some(choice) = choices.get(idx)
        {
            match choice {
                AssistantChoice::Suggestion(text) => self.session.choose_suggestion(text),
                other => self.session.set_query(other.text()),
            }
            self.assistant_selected = None;
            self.needs_redraw = true;
            return;
        }

        match self.session.submit(Instant::now()) {
            Some(generation) => {
                debug!(generation, "search pending");
                self.assistant_selected = None;
                self.needs_redraw = true;
            }
            None => self.set_status("✗ Type a question first", MessageType::Error),
        }
    }

    // Training log

    pub(super) fn visible_entries(&self) -> Vec<TrainingEntry> {
        self.log.filter_by_success(self.success_filter)
    }

    fn handle_log_action(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.move_log_selection(-1),
            Action::MoveDown => self.move_log_selection(1),
            Action::PageUp => self.move_log_selection(-PAGE_SIZE),
            Action::PageDown => self.move_log_selection(PAGE_SIZE),
            Action::CycleFilter => {
                self.success_filter = self.success_filter.next();
                self.log_idx = 0;
                self.needs_redraw = true;
            }
            Action::Back => {
                if self.success_filter != SuccessFilter::All {
                    self.success_filter = SuccessFilter::All;
                    self.log_idx = 0;
                    self.needs_redraw = true;
                }
            }
            Action::NewEntry => {
                self.form = Some(EntryForm::new());
                self.needs_redraw = true;
            }
            Action::DeleteEntry => match self.visible_entries().into_iter().nth(self.log_idx) {
                Some(entry) => {
                    self.pending_delete = Some(entry);
                    self.needs_redraw = true;
                }
                None => self.set_status("✗ No entry selected", MessageType::Error),
            },
            _ => {}
        }
    }

    fn move_log_selection(&mut self, delta: isize) {
        let total = self.visible_entries().len();
        self.log_idx = step(self.log_idx, delta, total);
        self.needs_redraw = true;
    }

    fn handle_form_action(&mut self, action: Action) {
        let Some(form) = self.form.as_mut() else {
            return;
        };
        match action {
            Action::Input(c) => form.input(c),
            Action::DeleteChar => form.backspace(),
            Action::NextTab | Action::MoveDown => form.next_field(),
            Action::PrevTab | Action::MoveUp => form.prev_field(),
            Action::Left => form.cycle(false),
            Action::Right => form.cycle(true),
            Action::Back => self.form = None,
            Action::Select => self.save_form(),
            _ => {}
        }
        self.needs_redraw = true;
    }

    /// Invalid input keeps the form open with an error status
    fn save_form(&mut self) {
        let Some(form) = self.form.as_ref() else {
            return;
        };
        let draft = match form.to_draft(self.media.as_mut()) {
            Ok(draft) => draft,
            Err(e) => {
                self.set_status(format!("✗ {}", e), MessageType::Error);
                return;
            }
        };

        match self.log.add(draft) {
            Ok(entry) => {
                self.form = None;
                self.log_idx = 0;
                self.set_status(
                    format!("✓ Logged {} for {}", entry.activity, entry.dog_name),
                    MessageType::Success,
                );
            }
            Err(e) => self.set_status(format!("✗ {}", e), MessageType::Error),
        }
    }

    fn handle_confirm_action(&mut self, action: Action) {
        match action {
            Action::Select | Action::Input('y') | Action::Input('Y') => {
                if let Some(entry) = self.pending_delete.take() {
                    if self.log.remove(&entry.id) {
                        self.set_status(
                            format!("✓ Deleted {} for {}", entry.activity, entry.dog_name),
                            MessageType::Success,
                        );
                    }
                    let total = self.visible_entries().len();
                    self.log_idx = self.log_idx.min(total.saturating_sub(1));
                }
            }
            Action::Back | Action::Input('n') | Action::Input('N') => self.pending_delete = None,
            _ => {}
        }
        self.needs_redraw = true;
    }

    // Providers

    fn refresh_providers(&mut self) {
        self.visible_providers =
            query_providers(&self.providers, &self.provider_search, self.category, self.sort_key);
        self.provider_idx = 0;
        self.show_provider_detail = false;
        self.needs_redraw = true;
    }

    pub(super) fn selected_provider(&self) -> Option<&ServiceProvider> {
        self.visible_providers.get(self.provider_idx)
    }

    fn handle_provider_action(&mut self, action: Action) {
        match action {
            Action::Input(c) => {
                if !c.is_control() && self.provider_search.chars().count() < MAX_INPUT_CHARS {
                    self.provider_search.push(c);
                    self.refresh_providers();
                }
            }
            Action::DeleteChar => {
                if self.provider_search.pop().is_some() {
                    self.refresh_providers();
                }
            }
            Action::MoveUp => self.move_provider_selection(-1),
            Action::MoveDown => self.move_provider_selection(1),
            Action::PageUp => self.move_provider_selection(-PAGE_SIZE),
            Action::PageDown => self.move_provider_selection(PAGE_SIZE),
            Action::CycleFilter => {
                self.category = self.category.next();
                self.refresh_providers();
            }
            Action::ToggleSort => {
                self.sort_key = self.sort_key.toggle();
                self.refresh_providers();
            }
            Action::Select => {
                if self.selected_provider().is_some() {
                    self.show_provider_detail = !self.show_provider_detail;
                    self.needs_redraw = true;
                }
            }
            Action::Back => {
                if self.show_provider_detail {
                    self.show_provider_detail = false;
                    self.needs_redraw = true;
                } else if !self.provider_search.is_empty() {
                    self.provider_search.clear();
                    self.refresh_providers();
                } else if self.category != CategoryFilter::All {
                    self.category = CategoryFilter::All;
                    self.refresh_providers();
                }
            }
            Action::Call => self.contact_selected(ContactChannel::Call),
            Action::Email => self.contact_selected(ContactChannel::Email),
            Action::Website => self.contact_selected(ContactChannel::Website),
            Action::Copy => {
                let outcome = match self.selected_provider() {
                    Some(provider) => copy_to_clipboard(&contact_card(provider)),
                    None => {
                        self.set_status("✗ No provider selected", MessageType::Error);
                        return;
                    }
                };
                self.report_copy(outcome);
            }
            _ => {}
        }
    }

    fn move_provider_selection(&mut self, delta: isize) {
        let old = self.provider_idx;
        self.provider_idx = step(self.provider_idx, delta, self.visible_providers.len());
        if old != self.provider_idx {
            self.show_provider_detail = false;
            self.needs_redraw = true;
        }
    }

    fn contact_selected(&mut self, channel: ContactChannel) {
        let Some(provider) = self.visible_providers.get(self.provider_idx) else {
            self.set_status("✗ No provider selected", MessageType::Error);
            return;
        };
        match open_contact(self.launcher.as_mut(), provider, channel) {
            Ok(target) => self.set_status(format!("✓ Opened {}", target), MessageType::Success),
            Err(e) => self.set_status(format!("✗ {}", e), MessageType::Error),
        }
    }

    fn report_copy(&mut self, outcome: Result<()>) {
        match outcome {
            Ok(()) => self.set_status("✓ Copied to clipboard", MessageType::Success),
            Err(e) => self.set_status(format!("✗ Clipboard error: {}", e), MessageType::Error),
        }
    }
}

/// Move an index by `delta`, clamped to `0..total`
fn step(idx: usize, delta: isize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (idx as isize + delta).clamp(0, total as isize - 1) as usize
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    use super::*;
    use crate::error::{LaunchError, PickerError};
    use crate::models::{PhotoRef, SuccessLevel, Topic};

    #[derive(Clone, Default)]
    struct SharedLauncher {
        opened: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl Launcher for SharedLauncher {
        fn open(&mut self, target: &str) -> Result<(), LaunchError> {
            if self.fail {
                return Err(LaunchError::Rejected { target: target.to_string(), status: 1 });
            }
            self.opened.borrow_mut().push(target.to_string());
            Ok(())
        }
    }

    struct AcceptAll;

    impl MediaLibrary for AcceptAll {
        fn pick(&mut self, requested: &[PathBuf]) -> Result<Vec<PhotoRef>, PickerError> {
            Ok(requested.iter().cloned().map(PhotoRef).collect())
        }
    }

    fn config(delay_ms: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.search.delay_ms = delay_ms;
        config
    }

    fn create_app() -> App {
        App::new(&config(0), Box::new(SharedLauncher::default()), Box::new(AcceptAll))
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|c| app.handle_action(Action::Input(c)));
    }

    fn later() -> Instant {
        Instant::now() + Duration::from_secs(10)
    }

    #[test]
    fn test_app_new_initializes_state() {
        let app = create_app();

        assert_eq!(app.tab, Tab::Assistant);
        assert!(!app.should_quit);
        assert_eq!(app.log.len(), 2);
        assert_eq!(app.visible_providers.len(), 5);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_sample_entries_disabled() {
        let mut config = config(0);
        config.training.sample_entries = false;
        let app = App::new(&config, Box::new(SharedLauncher::default()), Box::new(AcceptAll));
        assert!(app.log.is_empty());
    }

    #[test]
    fn test_default_sort_from_config() {
        let mut config = config(0);
        config.directory.default_sort = SortKey::Rating;
        let app = App::new(&config, Box::new(SharedLauncher::default()), Box::new(AcceptAll));
        let ratings: Vec<f64> = app.visible_providers.iter().map(|p| p.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_handle_action_quit() {
        let mut app = create_app();
        app.handle_action(Action::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycle_wraps() {
        let mut app = create_app();
        app.handle_action(Action::PrevTab);
        assert_eq!(app.tab, Tab::Profile);
        app.handle_action(Action::NextTab);
        app.handle_action(Action::NextTab);
        assert_eq!(app.tab, Tab::TrainingLog);
    }

    #[test]
    fn test_submit_and_tick_produces_answer() {
        let mut app = create_app();
        type_text(&mut app, "my dog loves to sniff");
        app.handle_action(Action::Select);
        assert!(app.session.is_loading());

        app.tick(later());
        let result = app.session.result().unwrap();
        assert_eq!(result.topic, Topic::Sniffing);
        assert_eq!(app.session.history().len(), 1);
    }

    #[test]
    fn test_blank_submit_sets_error() {
        let mut app = create_app();
        type_text(&mut app, "   ");
        app.handle_action(Action::Select);

        assert!(!app.session.is_loading());
        assert!(app.session.history().is_empty());
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.message_type, MessageType::Error);
    }

    #[test]
    fn test_resubmit_supersedes_pending_search() {
        let mut app =
            App::new(&config(1000), Box::new(SharedLauncher::default()), Box::new(AcceptAll));
        type_text(&mut app, "sniffing");
        app.handle_action(Action::Select);
        app.session.set_query("biting");
        app.handle_action(Action::Select);

        app.tick(later());
        assert_eq!(app.session.result().unwrap().topic, Topic::Biting);
        assert!(!app.session.is_loading());
        assert_eq!(app.session.history().len(), 2);
    }

    #[test]
    fn test_esc_cancels_pending_search() {
        let mut app =
            App::new(&config(1000), Box::new(SharedLauncher::default()), Box::new(AcceptAll));
        type_text(&mut app, "leash");
        app.handle_action(Action::Select);
        app.handle_action(Action::Back);

        app.tick(later());
        assert!(app.session.result().is_none());
        assert_eq!(app.status_message.as_ref().unwrap().text, "Search cancelled");
    }

    #[test]
    fn test_esc_clears_query_when_idle() {
        let mut app = create_app();
        type_text(&mut app, "stay");
        app.handle_action(Action::Back);
        assert_eq!(app.session.query(), "");
    }

    #[test]
    fn test_choose_suggestion_replaces_query() {
        let mut app = create_app();
        type_text(&mut app, "puppy bite");
        app.handle_action(Action::Select);
        app.tick(later());

        let first = app.session.result().unwrap().suggestion_list[0].clone();
        app.handle_action(Action::MoveDown);
        assert_eq!(app.assistant_selected, Some(0));
        app.handle_action(Action::Select);

        assert_eq!(app.session.query(), first);
        assert!(app.session.result().is_none());
        assert!(!app.session.is_loading());
    }

    #[test]
    fn test_example_question_sets_query_only() {
        let mut app = create_app();
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::Select);

        assert_eq!(app.session.query(), EXAMPLE_QUESTIONS[0]);
        assert!(!app.session.is_loading());
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn test_recent_searches_follow_examples() {
        let mut app = create_app();
        type_text(&mut app, "crate training");
        app.handle_action(Action::Select);
        app.tick(later());
        // Picking a suggestion clears the answer, revealing examples and history
        app.handle_action(Action::MoveDown);
        app.handle_action(Action::Select);

        let choices = app.assistant_choices();
        assert_eq!(choices.len(), EXAMPLE_QUESTIONS.len() + 1);
        assert_eq!(choices.last().unwrap().text(), "crate training");
    }

    #[test]
    fn test_typing_resets_selection() {
        let mut app = create_app();
        app.handle_action(Action::MoveDown);
        type_text(&mut app, "x");
        assert_eq!(app.assistant_selected, None);
    }

    #[test]
    fn test_assistant_selection_clamped() {
        let mut app = create_app();
        app.handle_action(Action::PageDown);
        assert_eq!(app.assistant_selected, Some(EXAMPLE_QUESTIONS.len() - 1));
        app.handle_action(Action::PageUp);
        assert_eq!(app.assistant_selected, Some(0));
    }

    #[test]
    fn test_clear_history() {
        let mut app = create_app();
        type_text(&mut app, "recall");
        app.handle_action(Action::Select);
        app.handle_action(Action::ClearHistory);

        assert!(app.session.history().is_empty());
        assert_eq!(app.status_message.as_ref().unwrap().message_type, MessageType::Success);
    }

    #[test]
    fn test_copy_without_answer() {
        let mut app = create_app();
        app.handle_action(Action::Copy);
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.text, "✗ No answer to copy");
        assert_eq!(msg.message_type, MessageType::Error);
    }

    #[test]
    fn test_copy_answer() {
        let mut app = create_app();
        type_text(&mut app, "leash pulling");
        app.handle_action(Action::Select);
        app.tick(later());
        app.handle_action(Action::Copy);

        // Clipboard might not be available in test environment
        let msg = app.status_message.as_ref().unwrap();
        if msg.message_type == MessageType::Success {
            assert_eq!(msg.text, "✓ Copied to clipboard");
        } else {
            assert!(msg.text.starts_with("✗ Clipboard error:"));
        }
    }

    #[test]
    fn test_new_entry_form_saves() {
        let mut app = create_app();
        app.handle_action(Action::NextTab);
        app.handle_action(Action::NewEntry);
        assert!(app.form.is_some());

        type_text(&mut app, "Rex");
        app.handle_action(Action::NextTab);
        type_text(&mut app, "Sit Command");
        app.handle_action(Action::Select);

        assert!(app.form.is_none());
        assert_eq!(app.log.len(), 3);
        assert_eq!(app.log.entries()[0].dog_name, "Rex");
        assert_eq!(app.log.entries()[0].success, SuccessLevel::Medium);
        assert_eq!(app.status_message.as_ref().unwrap().text, "✓ Logged Sit Command for Rex");
    }

    #[test]
    fn test_new_entry_missing_dog_name_keeps_form() {
        let mut app = create_app();
        app.handle_action(Action::NextTab);
        app.handle_action(Action::NewEntry);
        app.handle_action(Action::NextTab);
        type_text(&mut app, "Recall Training");
        app.handle_action(Action::Select);

        assert!(app.form.is_some());
        assert_eq!(app.log.len(), 2);
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.text, "✗ dog name is required");
        assert_eq!(msg.message_type, MessageType::Error);
    }

    #[test]
    fn test_form_escape_discards() {
        let mut app = create_app();
        app.handle_action(Action::NextTab);
        app.handle_action(Action::NewEntry);
        type_text(&mut app, "Rex");
        app.handle_action(Action::Back);

        assert!(app.form.is_none());
        assert_eq!(app.log.len(), 2);
        assert_eq!(app.tab, Tab::TrainingLog);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = create_app();
        app.handle_action(Action::NextTab);
        app.handle_action(Action::DeleteEntry);
        assert!(app.pending_delete.is_some());
        assert_eq!(app.log.len(), 2);

        app.handle_action(Action::Select);
        assert!(app.pending_delete.is_none());
        assert_eq!(app.log.len(), 1);
        assert_eq!(app.log.entries()[0].dog_name, "Bella");
    }

    #[test]
    fn test_delete_cancelled() {
        let mut app = create_app();
        app.handle_action(Action::NextTab);
        app.handle_action(Action::DeleteEntry);
        app.handle_action(Action::Input('n'));

        assert!(app.pending_delete.is_none());
        assert_eq!(app.log.len(), 2);
    }

    #[test]
    fn test_delete_last_entry_clamps_selection() {
        let mut app = create_app();
        app.handle_action(Action::NextTab);
        app.handle_action(Action::MoveDown);
        assert_eq!(app.log_idx, 1);
        app.handle_action(Action::DeleteEntry);
        app.handle_action(Action::Select);

        assert_eq!(app.log.len(), 1);
        assert_eq!(app.log_idx, 0);
    }

    #[test]
    fn test_success_filter_cycle() {
        let mut app = create_app();
        app.handle_action(Action::NextTab);
        app.handle_action(Action::CycleFilter);
        assert_eq!(app.success_filter, SuccessFilter::Level(SuccessLevel::High));
        assert_eq!(app.visible_entries().len(), 2);

        app.handle_action(Action::CycleFilter);
        assert!(app.visible_entries().is_empty());
        // Filtered view does not change the summary
        assert_eq!(app.log.summary_counts().total, 2);

        app.handle_action(Action::Back);
        assert_eq!(app.success_filter, SuccessFilter::All);
    }

    #[test]
    fn test_delete_with_empty_view() {
        let mut app = create_app();
        app.handle_action(Action::NextTab);
        app.handle_action(Action::CycleFilter);
        app.handle_action(Action::CycleFilter);
        app.handle_action(Action::DeleteEntry);

        assert!(app.pending_delete.is_none());
        assert_eq!(app.status_message.as_ref().unwrap().text, "✗ No entry selected");
    }

    fn providers_tab() -> App {
        let mut app = create_app();
        app.handle_action(Action::PrevTab);
        app.handle_action(Action::PrevTab);
        assert_eq!(app.tab, Tab::Providers);
        app
    }

    #[test]
    fn test_provider_search_filters() {
        let mut app = providers_tab();
        type_text(&mut app, "groom");
        assert!(!app.visible_providers.is_empty());
        assert!(app.visible_providers.iter().all(|p| {
            p.name.to_lowercase().contains("groom")
                || p.description.to_lowercase().contains("groom")
                || p.service_type.label().to_lowercase().contains("groom")
                || p.specialties.iter().any(|s| s.to_lowercase().contains("groom"))
        }));

        app.handle_action(Action::Back);
        assert_eq!(app.provider_search, "");
        assert_eq!(app.visible_providers.len(), 5);
    }

    #[test]
    fn test_provider_no_matches() {
        let mut app = providers_tab();
        type_text(&mut app, "zzzz");
        assert!(app.visible_providers.is_empty());
        assert!(app.selected_provider().is_none());
    }

    #[test]
    fn test_provider_category_cycle() {
        let mut app = providers_tab();
        app.handle_action(Action::CycleFilter);
        assert_ne!(app.category, CategoryFilter::All);
        let wanted = app.category;
        assert!(app.visible_providers.iter().all(|p| wanted.matches(p.service_type)));
    }

    #[test]
    fn test_provider_sort_toggle() {
        let mut app = providers_tab();
        app.handle_action(Action::ToggleSort);
        assert_eq!(app.sort_key, SortKey::Rating);
        let ratings: Vec<f64> = app.visible_providers.iter().map(|p| p.rating).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_provider_detail_toggle() {
        let mut app = providers_tab();
        app.handle_action(Action::Select);
        assert!(app.show_provider_detail);
        app.handle_action(Action::MoveDown);
        assert!(!app.show_provider_detail);
        assert_eq!(app.provider_idx, 1);
    }

    #[test]
    fn test_contact_call_uses_launcher() {
        let launcher = SharedLauncher::default();
        let opened = launcher.opened.clone();
        let mut app = App::new(&config(0), Box::new(launcher), Box::new(AcceptAll));
        app.handle_action(Action::PrevTab);
        app.handle_action(Action::PrevTab);

        app.handle_action(Action::Call);
        let opened = opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("tel:"));
        assert_eq!(app.status_message.as_ref().unwrap().message_type, MessageType::Success);
    }

    #[test]
    fn test_contact_failure_sets_error() {
        let launcher = SharedLauncher { fail: true, ..Default::default() };
        let mut app = App::new(&config(0), Box::new(launcher), Box::new(AcceptAll));
        app.handle_action(Action::PrevTab);
        app.handle_action(Action::PrevTab);

        app.handle_action(Action::Email);
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.message_type, MessageType::Error);
        assert!(msg.text.starts_with("✗ "));
    }

    #[test]
    fn test_contact_website_missing() {
        let launcher = SharedLauncher::default();
        let opened = launcher.opened.clone();
        let mut app = App::new(&config(0), Box::new(launcher), Box::new(AcceptAll));
        app.handle_action(Action::PrevTab);
        app.handle_action(Action::PrevTab);

        let idx = app.visible_providers.iter().position(|p| p.website.is_none()).unwrap();
        app.provider_idx = idx;
        app.handle_action(Action::Website);

        assert!(opened.borrow().is_empty());
        assert_eq!(app.status_message.as_ref().unwrap().message_type, MessageType::Error);
    }

    #[test]
    fn test_contact_shortcuts_ignored_on_other_tabs() {
        let launcher = SharedLauncher::default();
        let opened = launcher.opened.clone();
        let mut app = App::new(&config(0), Box::new(launcher), Box::new(AcceptAll));
        app.handle_action(Action::Call);
        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn test_set_status_and_expiry() {
        let mut app = create_app();
        app.set_status("Saved", MessageType::Success);
        let msg = app.status_message.as_ref().unwrap();
        assert!(msg.expires_at > Instant::now());

        app.needs_redraw = false;
        app.tick(Instant::now());
        assert!(app.status_message.is_some());

        app.tick(later());
        assert!(app.status_message.is_none());
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_status_message_replacement() {
        let mut app = create_app();
        app.set_status("First", MessageType::Success);
        app.set_status("Second", MessageType::Error);
        assert_eq!(app.status_message.as_ref().unwrap().text, "Second");
    }

    #[test]
    fn test_input_length_limit() {
        let mut app = create_app();
        type_text(&mut app, &"a".repeat(MAX_INPUT_CHARS + 10));
        assert_eq!(app.session.query().chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_step_bounds() {
        assert_eq!(step(0, -1, 3), 0);
        assert_eq!(step(1, 10, 3), 2);
        assert_eq!(step(2, -1, 3), 1);
        assert_eq!(step(5, 1, 0), 0);
    }

    #[test]
    fn test_tab_titles() {
        let titles: Vec<&str> = Tab::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(titles, vec!["Assistant", "Training Log", "Providers", "Profile"]);
    }
}
