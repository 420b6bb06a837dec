//! Session state machine.
//!
//! [`App`] owns the active [`Screen`] and the [`SessionContext`] shared by all
//! screens. It never touches the terminal or the network: key presses and
//! finished embedding jobs come in as [`AppEvent`]s, and any provider work is
//! handed back to the caller as a [`Command`]. Only the entry and
//! configuration screens issue commands, and both move to the loading screen
//! when they do. The loading screen ignores keys, so at most one job is ever
//! in flight.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ember_embeddings::{ComparisonSet, Embedding, EmbeddingError, MAX_COMPARISONS, SimilarityResult};
use tracing::{error, info, warn};

use crate::defaults;
use crate::event::{AppEvent, Command};
use crate::text_buffer::TextBuffer;

/// Spinner animation frames for the loading screen.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// State shared by every screen.
#[derive(Debug)]
pub struct SessionContext {
    /// Texts and vectors queries are ranked against.
    pub comparisons: ComparisonSet,

    /// The last query that embedded successfully.
    pub last_query: Option<LastQuery>,

    /// Message from the most recent failed job, shown until the next submit.
    pub last_error: Option<String>,

    /// Model name, for display.
    pub model: String,
}

/// A remembered query and its embedding.
#[derive(Debug, Clone, PartialEq)]
pub struct LastQuery {
    pub text: String,
    pub embedding: Embedding,
}

/// The active screen and the data only that screen uses.
#[derive(Debug)]
pub enum Screen {
    Input(InputScreen),
    Results(ResultsScreen),
    Configure(ConfigureScreen),
    Loading(LoadingScreen),
    QuitConfirm(QuitConfirmScreen),
}

/// Discriminant of [`Screen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Input,
    Results,
    Configure,
    Loading,
    QuitConfirm,
}

impl Screen {
    pub fn kind(&self) -> ScreenKind {
        match self {
            Self::Input(_) => ScreenKind::Input,
            Self::Results(_) => ScreenKind::Results,
            Self::Configure(_) => ScreenKind::Configure,
            Self::Loading(_) => ScreenKind::Loading,
            Self::QuitConfirm(_) => ScreenKind::QuitConfirm,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputScreen {
    pub editor: TextBuffer,
}

impl InputScreen {
    pub fn new() -> Self {
        Self::with_editor(TextBuffer::new("Enter text to embed..."))
    }

    fn with_editor(editor: TextBuffer) -> Self {
        Self { editor }
    }
}

impl Default for InputScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsScreen {
    /// The text that was compared.
    pub query: String,

    /// One result per comparison entry, in entry order.
    pub results: Vec<SimilarityResult>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureScreen {
    /// One field per comparison text, between 1 and [`MAX_COMPARISONS`].
    pub fields: Vec<TextBuffer>,

    /// Index of the field receiving keys.
    pub focused: usize,

    /// Entry-screen text to restore on the way back.
    draft: TextBuffer,
}

impl ConfigureScreen {
    /// Fields pre-filled from the current comparison set.
    fn from_set(set: &ComparisonSet, draft: TextBuffer) -> Self {
        let mut fields: Vec<TextBuffer> = set
            .labels()
            .into_iter()
            .take(MAX_COMPARISONS)
            .map(|label| TextBuffer::default().with_text(label))
            .collect();
        if fields.is_empty() {
            fields = vec![TextBuffer::default(), TextBuffer::default()];
        }

        let mut screen = Self {
            fields,
            focused: 0,
            draft,
        };
        screen.renumber();
        screen
    }

    fn renumber(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_placeholder(format!("Enter comparison text {}...", i + 1));
        }
    }

    fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.fields.len();
    }

    fn focus_prev(&mut self) {
        self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
    }

    fn add_field(&mut self) {
        if self.fields.len() < MAX_COMPARISONS {
            self.fields.push(TextBuffer::default());
            self.focused = self.fields.len() - 1;
            self.renumber();
        }
    }

    fn remove_focused(&mut self) {
        if self.fields.len() > 1 {
            self.fields.remove(self.focused);
            self.focused = self.focused.min(self.fields.len() - 1);
            self.renumber();
        }
    }

    /// Non-blank field texts, in field order.
    fn texts(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|field| !field.is_blank())
            .map(|field| field.text().to_string())
            .collect()
    }
}

/// Which job the loading screen is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingJob {
    Query,
    Comparisons,
}

#[derive(Debug)]
pub struct LoadingScreen {
    pub message: String,
    pub spinner_frame: usize,
    pub pending: PendingJob,

    /// Screen to restore if the job fails.
    return_to: Box<Screen>,
}

impl LoadingScreen {
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}

#[derive(Debug)]
pub struct QuitConfirmScreen {
    previous: Box<Screen>,
}

impl QuitConfirmScreen {
    /// What a cancel would return to.
    pub fn previous_kind(&self) -> ScreenKind {
        self.previous.kind()
    }
}

/// The interactive session.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    context: SessionContext,
}

impl App {
    /// Start on the entry screen with an already embedded comparison set.
    pub fn new(comparisons: ComparisonSet, model: impl Into<String>) -> Self {
        Self {
            screen: Screen::Input(InputScreen::new()),
            context: SessionContext {
                comparisons,
                last_query: None,
                last_error: None,
                model: model.into(),
            },
        }
    }

    /// Start on the loading screen, embedding the built-in comparison texts.
    ///
    /// The returned command must be executed for the session to leave the
    /// loading screen.
    pub fn with_default_embedding(model: impl Into<String>) -> (Self, Command) {
        let mut app = Self::new(ComparisonSet::empty(), model);
        app.screen = Screen::Loading(LoadingScreen {
            message: "Embedding default comparison texts...".to_string(),
            spinner_frame: 0,
            pending: PendingJob::Comparisons,
            return_to: Box::new(Screen::Input(InputScreen::new())),
        });

        let command = Command::EmbedComparisons {
            texts: defaults::default_texts(),
        };
        (app, command)
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Dispatch one event, returning the work it requires, if any.
    pub fn handle_event(&mut self, event: AppEvent) -> Option<Command> {
        let screen = std::mem::replace(&mut self.screen, Screen::Input(InputScreen::new()));

        let (next, command) = match event {
            AppEvent::Key(key) => self.on_key(screen, key),
            AppEvent::Tick => (on_tick(screen), None),
            AppEvent::QueryEmbedded { text, result } => {
                (self.on_query_embedded(screen, text, result), None)
            }
            AppEvent::ComparisonsEmbedded { texts, result } => {
                (self.on_comparisons_embedded(screen, texts, result), None)
            }
        };

        self.screen = next;
        command
    }

    fn on_key(&mut self, screen: Screen, key: KeyEvent) -> (Screen, Option<Command>) {
        match screen {
            Screen::Input(mut input) => {
                if is_cancel(key) {
                    (quit_confirm(Screen::Input(input)), None)
                } else if is_plain(key, KeyCode::Tab) {
                    let configure = ConfigureScreen::from_set(&self.context.comparisons, input.editor);
                    (Screen::Configure(configure), None)
                } else if is_submit(key) {
                    self.submit_query(input)
                } else {
                    input.editor.handle_key(key);
                    (Screen::Input(input), None)
                }
            }
            Screen::Results(results) => {
                if is_cancel(key) {
                    (quit_confirm(Screen::Results(results)), None)
                } else if is_plain(key, KeyCode::Enter) {
                    (Screen::Input(InputScreen::new()), None)
                } else {
                    (Screen::Results(results), None)
                }
            }
            Screen::Configure(mut configure) => {
                if is_cancel(key) {
                    (Screen::Input(InputScreen::with_editor(configure.draft)), None)
                } else if is_plain(key, KeyCode::Tab) {
                    configure.focus_next();
                    (Screen::Configure(configure), None)
                } else if key.code == KeyCode::BackTab {
                    configure.focus_prev();
                    (Screen::Configure(configure), None)
                } else if is_ctrl(key, 'n') {
                    configure.add_field();
                    (Screen::Configure(configure), None)
                } else if is_ctrl(key, 'x') {
                    configure.remove_focused();
                    (Screen::Configure(configure), None)
                } else if is_submit(key) {
                    self.submit_comparisons(configure)
                } else {
                    let focused = configure.focused;
                    if let Some(field) = configure.fields.get_mut(focused) {
                        field.handle_key(key);
                    }
                    (Screen::Configure(configure), None)
                }
            }
            // No cancellation while a job runs.
            Screen::Loading(loading) => (Screen::Loading(loading), None),
            Screen::QuitConfirm(confirm) => match key.code {
                KeyCode::Char('y' | 'Y') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    (Screen::QuitConfirm(confirm), Some(Command::Quit))
                }
                KeyCode::Char('n' | 'N') if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    (*confirm.previous, None)
                }
                _ if is_cancel(key) => (*confirm.previous, None),
                _ => (Screen::QuitConfirm(confirm), None),
            },
        }
    }

    fn submit_query(&mut self, input: InputScreen) -> (Screen, Option<Command>) {
        if input.editor.is_blank() {
            return (Screen::Input(input), None);
        }

        self.context.last_error = None;
        let text = input.editor.text().to_string();

        if let Some(last) = self.context.last_query.as_ref().filter(|last| last.text == text) {
            info!("Reusing cached embedding for repeated query");
            let results = self.context.comparisons.rank(&last.embedding);
            return (Screen::Results(ResultsScreen { query: text, results }), None);
        }

        let loading = LoadingScreen {
            message: "Generating embeddings for comparison...".to_string(),
            spinner_frame: 0,
            pending: PendingJob::Query,
            return_to: Box::new(Screen::Input(input)),
        };
        (Screen::Loading(loading), Some(Command::EmbedQuery { text }))
    }

    fn submit_comparisons(&mut self, configure: ConfigureScreen) -> (Screen, Option<Command>) {
        let texts = configure.texts();
        if texts.is_empty() {
            return (Screen::Configure(configure), None);
        }

        self.context.last_error = None;
        let loading = LoadingScreen {
            message: "Generating custom embeddings...".to_string(),
            spinner_frame: 0,
            pending: PendingJob::Comparisons,
            return_to: Box::new(Screen::Configure(configure)),
        };
        (Screen::Loading(loading), Some(Command::EmbedComparisons { texts }))
    }

    fn on_query_embedded(
        &mut self,
        screen: Screen,
        text: String,
        result: Result<Embedding, EmbeddingError>,
    ) -> Screen {
        let loading = match screen {
            Screen::Loading(loading) if loading.pending == PendingJob::Query => loading,
            other => {
                warn!("Dropping query embedding that arrived on {:?} screen", other.kind());
                return other;
            }
        };

        match result {
            Ok(embedding) => {
                let results = self.context.comparisons.rank(&embedding);
                self.context.last_query = Some(LastQuery {
                    text: text.clone(),
                    embedding,
                });
                Screen::Results(ResultsScreen {
                    query: text,
                    results,
                })
            }
            Err(err) => {
                error!("Query embedding failed: {err}");
                self.context.last_error = Some(err.to_string());
                *loading.return_to
            }
        }
    }

    fn on_comparisons_embedded(
        &mut self,
        screen: Screen,
        texts: Vec<String>,
        result: Result<Vec<Embedding>, EmbeddingError>,
    ) -> Screen {
        let loading = match screen {
            Screen::Loading(loading) if loading.pending == PendingJob::Comparisons => loading,
            other => {
                warn!("Dropping comparison embeddings that arrived on {:?} screen", other.kind());
                return other;
            }
        };

        let vectors = match result {
            Ok(vectors) => vectors,
            Err(err) => {
                error!("Comparison embedding failed: {err}");
                self.context.last_error = Some(err.to_string());
                return *loading.return_to;
            }
        };

        match self.context.comparisons.replace_from_batch(texts, vectors) {
            Ok(()) => match *loading.return_to {
                Screen::Configure(configure) => {
                    Screen::Input(InputScreen::with_editor(configure.draft))
                }
                other => other,
            },
            Err(err) => {
                error!("Rejected comparison batch: {err}");
                self.context.last_error = Some(err.to_string());
                *loading.return_to
            }
        }
    }
}

fn on_tick(screen: Screen) -> Screen {
    match screen {
        Screen::Loading(mut loading) => {
            loading.spinner_frame = (loading.spinner_frame + 1) % SPINNER_FRAMES.len();
            Screen::Loading(loading)
        }
        other => other,
    }
}

fn quit_confirm(previous: Screen) -> Screen {
    Screen::QuitConfirm(QuitConfirmScreen {
        previous: Box::new(previous),
    })
}

fn is_cancel(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc || is_ctrl(key, 'c')
}

fn is_submit(key: KeyEvent) -> bool {
    (key.code == KeyCode::Enter && key.modifiers.contains(KeyModifiers::ALT)) || is_ctrl(key, 's')
}

fn is_ctrl(key: KeyEvent, c: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(c)
}

fn is_plain(key: KeyEvent, code: KeyCode) -> bool {
    key.code == code && key.modifiers.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_embeddings::ComparisonEntry;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> AppEvent {
        AppEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn alt_enter() -> AppEvent {
        AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::ALT))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(app.handle_event(key(KeyCode::Char(c))), None);
        }
    }

    fn app() -> App {
        App::new(
            ComparisonSet::new(vec![
                ComparisonEntry::new("California", vec![1.0, 2.0, 2.0]),
                ComparisonEntry::new("Washington", vec![2.0, 2.0, 1.0]),
            ]),
            "test-model",
        )
    }

    fn input_text(app: &App) -> &str {
        match app.screen() {
            Screen::Input(input) => input.editor.text(),
            other => panic!("expected input screen, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_starts_on_input() {
        assert_eq!(app().screen().kind(), ScreenKind::Input);
    }

    #[test]
    fn test_blank_submit_does_nothing() {
        let mut app = app();
        type_text(&mut app, "   ");
        assert_eq!(app.handle_event(alt_enter()), None);
        assert_eq!(app.screen().kind(), ScreenKind::Input);
    }

    #[test]
    fn test_submit_query_then_results() {
        let mut app = app();
        type_text(&mut app, "Sacramento");

        let command = app.handle_event(alt_enter());
        assert_eq!(
            command,
            Some(Command::EmbedQuery {
                text: "Sacramento".to_string()
            })
        );
        assert_eq!(app.screen().kind(), ScreenKind::Loading);

        app.handle_event(AppEvent::QueryEmbedded {
            text: "Sacramento".to_string(),
            result: Ok(vec![1.0, 2.0, 2.0]),
        });

        match app.screen() {
            Screen::Results(results) => {
                assert_eq!(results.query, "Sacramento");
                assert_eq!(
                    results.results,
                    vec![
                        SimilarityResult::new("California", 1.0),
                        SimilarityResult::new("Washington", 8.0 / 9.0),
                    ]
                );
            }
            other => panic!("expected results, got {:?}", other.kind()),
        }

        app.handle_event(key(KeyCode::Enter));
        assert_eq!(input_text(&app), "");
    }

    #[test]
    fn test_ctrl_s_also_submits() {
        let mut app = app();
        type_text(&mut app, "x");
        assert!(matches!(
            app.handle_event(ctrl('s')),
            Some(Command::EmbedQuery { .. })
        ));
    }

    #[test]
    fn test_failed_query_restores_input_text() {
        let mut app = app();
        type_text(&mut app, "Olympia");
        app.handle_event(alt_enter());

        app.handle_event(AppEvent::QueryEmbedded {
            text: "Olympia".to_string(),
            result: Err(EmbeddingError::NoData),
        });

        assert_eq!(input_text(&app), "Olympia");
        assert_eq!(
            app.context().last_error.as_deref(),
            Some("no embedding data returned")
        );
        assert_eq!(app.context().last_query, None);
    }

    #[test]
    fn test_loading_ignores_keys() {
        let mut app = app();
        type_text(&mut app, "q");
        app.handle_event(alt_enter());

        assert_eq!(app.handle_event(key(KeyCode::Esc)), None);
        assert_eq!(app.handle_event(ctrl('c')), None);
        assert_eq!(app.handle_event(alt_enter()), None);
        assert_eq!(app.screen().kind(), ScreenKind::Loading);
    }

    #[test]
    fn test_tick_advances_spinner_only_while_loading() {
        let mut app = app();
        app.handle_event(AppEvent::Tick);
        assert_eq!(app.screen().kind(), ScreenKind::Input);

        type_text(&mut app, "q");
        app.handle_event(alt_enter());
        for _ in 0..11 {
            app.handle_event(AppEvent::Tick);
        }
        match app.screen() {
            Screen::Loading(loading) => {
                assert_eq!(loading.spinner_frame, 1);
                assert_eq!(loading.spinner(), SPINNER_FRAMES[1]);
            }
            other => panic!("expected loading, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = app();
        app.handle_event(AppEvent::QueryEmbedded {
            text: "late".to_string(),
            result: Ok(vec![1.0, 0.0, 0.0]),
        });
        assert_eq!(app.screen().kind(), ScreenKind::Input);
        assert_eq!(app.context().last_query, None);
    }

    #[test]
    fn test_repeated_query_uses_cache() {
        let mut app = app();
        type_text(&mut app, "Seattle");
        app.handle_event(alt_enter());
        app.handle_event(AppEvent::QueryEmbedded {
            text: "Seattle".to_string(),
            result: Ok(vec![2.0, 2.0, 1.0]),
        });
        app.handle_event(key(KeyCode::Enter));

        type_text(&mut app, "Seattle");
        assert_eq!(app.handle_event(alt_enter()), None);
        match app.screen() {
            Screen::Results(results) => assert_eq!(results.results[1].score, 1.0),
            other => panic!("expected results, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = app();
        type_text(&mut app, "keep me");

        app.handle_event(key(KeyCode::Esc));
        match app.screen() {
            Screen::QuitConfirm(confirm) => assert_eq!(confirm.previous_kind(), ScreenKind::Input),
            other => panic!("expected quit confirm, got {:?}", other.kind()),
        }

        app.handle_event(key(KeyCode::Char('n')));
        assert_eq!(input_text(&app), "keep me");

        app.handle_event(ctrl('c'));
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(input_text(&app), "keep me");

        app.handle_event(ctrl('c'));
        assert_eq!(app.handle_event(key(KeyCode::Char('x'))), None);
        assert_eq!(app.handle_event(key(KeyCode::Char('Y'))), Some(Command::Quit));
    }

    #[test]
    fn test_configure_prefills_current_labels() {
        let mut app = app();
        app.handle_event(key(KeyCode::Tab));

        match app.screen() {
            Screen::Configure(configure) => {
                let texts: Vec<&str> = configure.fields.iter().map(TextBuffer::text).collect();
                assert_eq!(texts, vec!["California", "Washington"]);
                assert_eq!(configure.focused, 0);
                assert_eq!(configure.fields[1].placeholder(), "Enter comparison text 2...");
            }
            other => panic!("expected configure, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_configure_field_limits() {
        let mut app = App::new(ComparisonSet::empty(), "m");
        app.handle_event(key(KeyCode::Tab));

        for _ in 0..20 {
            app.handle_event(ctrl('n'));
        }
        match app.screen() {
            Screen::Configure(configure) => {
                assert_eq!(configure.fields.len(), MAX_COMPARISONS);
                assert_eq!(configure.focused, MAX_COMPARISONS - 1);
            }
            other => panic!("expected configure, got {:?}", other.kind()),
        }

        for _ in 0..20 {
            app.handle_event(ctrl('x'));
        }
        match app.screen() {
            Screen::Configure(configure) => {
                assert_eq!(configure.fields.len(), 1);
                assert_eq!(configure.focused, 0);
            }
            other => panic!("expected configure, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_configure_focus_wraps() {
        let mut app = app();
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(AppEvent::Key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)));

        match app.screen() {
            Screen::Configure(configure) => assert_eq!(configure.focused, 1),
            other => panic!("expected configure, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_configure_escape_restores_draft() {
        let mut app = app();
        type_text(&mut app, "draft");
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(key(KeyCode::Esc));
        assert_eq!(input_text(&app), "draft");
    }

    #[test]
    fn test_configure_submit_replaces_set() {
        let mut app = app();
        type_text(&mut app, "draft");
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(ctrl('n'));
        type_text(&mut app, "Oregon");

        let command = app.handle_event(alt_enter());
        let texts = vec![
            "California".to_string(),
            "Washington".to_string(),
            "Oregon".to_string(),
        ];
        assert_eq!(
            command,
            Some(Command::EmbedComparisons {
                texts: texts.clone()
            })
        );

        app.handle_event(AppEvent::ComparisonsEmbedded {
            texts,
            result: Ok(vec![vec![1.0], vec![2.0], vec![3.0]]),
        });

        assert_eq!(input_text(&app), "draft");
        assert_eq!(
            app.context().comparisons.labels(),
            vec!["California", "Washington", "Oregon"]
        );
    }

    #[test]
    fn test_configure_skips_blank_fields() {
        let mut app = App::new(ComparisonSet::empty(), "m");
        app.handle_event(key(KeyCode::Tab));
        assert_eq!(app.handle_event(alt_enter()), None);

        app.handle_event(key(KeyCode::Tab));
        type_text(&mut app, "only");
        assert_eq!(
            app.handle_event(alt_enter()),
            Some(Command::EmbedComparisons {
                texts: vec!["only".to_string()]
            })
        );
    }

    #[test]
    fn test_failed_batch_keeps_previous_set() {
        let mut app = app();
        app.handle_event(key(KeyCode::Tab));
        app.handle_event(ctrl('n'));
        type_text(&mut app, "Oregon");
        app.handle_event(alt_enter());

        app.handle_event(AppEvent::ComparisonsEmbedded {
            texts: vec!["California".to_string(), "Washington".to_string(), "Oregon".to_string()],
            result: Err(EmbeddingError::ProviderUnavailable),
        });

        assert_eq!(app.screen().kind(), ScreenKind::Configure);
        assert_eq!(app.context().comparisons.labels(), vec!["California", "Washington"]);
        assert!(app.context().last_error.is_some());
    }

    #[test]
    fn test_default_embedding_startup() {
        let (mut app, command) = App::with_default_embedding("m");
        assert_eq!(app.screen().kind(), ScreenKind::Loading);
        assert_eq!(
            command,
            Command::EmbedComparisons {
                texts: defaults::default_texts()
            }
        );

        app.handle_event(AppEvent::ComparisonsEmbedded {
            texts: defaults::default_texts(),
            result: Ok(vec![vec![1.0, 0.0], vec![0.0, 1.0]]),
        });

        assert_eq!(input_text(&app), "");
        assert_eq!(app.context().comparisons.len(), 2);
    }
}
