//! Application state and core logic

use crate::backend::{SimulatedBackend, SubmitBackend};
use crate::config::TuiConfig;
use crate::state::{AppState, FieldName, Form, LoadingState, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

/// Messages sent from background tasks back to the UI loop
#[derive(Debug)]
pub enum AppEvent {
    /// A submission task finished
    SubmitFinished {
        id: Uuid,
        result: std::result::Result<(), String>,
        /// When the backend returned; the success window starts here
        finished_at: Instant,
    },
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where submitted values go
    backend: Arc<dyn SubmitBackend>,
    /// Whether the app should quit
    quit: bool,
    /// Short feedback shown in the status bar
    pub status_message: Option<String>,
    /// Loading placeholder state
    pub loading_state: Option<LoadingState>,
    /// Number of ticks processed, drives the spinner
    pub frame_count: u64,
    /// Cancelled on teardown so in-flight submissions are dropped
    cancel: CancellationToken,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Id of the submission whose completion we are waiting for
    pending_submit: Option<Uuid>,
}

impl App {
    /// Create a new App with the simulated backend
    pub fn new(config: &TuiConfig) -> Self {
        let backend = Arc::new(SimulatedBackend::new(config.submit_delay()));
        Self::with_backend(backend, config.loading_delay(), config.success_display())
    }

    /// Create an App with a specific backend
    pub fn with_backend(
        backend: Arc<dyn SubmitBackend>,
        loading_delay: Duration,
        success_window: Duration,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(success_window),
            backend,
            quit: false,
            status_message: None,
            loading_state: Some(LoadingState::starting_at(now(), loading_delay)),
            frame_count: 0,
            cancel: CancellationToken::new(),
            events_tx,
            events_rx,
            pending_submit: None,
        }
    }

    /// Advance timers and apply finished background work
    pub fn tick(&mut self) {
        self.update(now());
    }

    /// Advance timers to `now`
    pub fn update(&mut self, now: Instant) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.update_loading(now);
        self.process_events();
        self.state.form.tick(now);
    }

    /// Update loading placeholder state
    /// Returns true if the placeholder finished on this update
    fn update_loading(&mut self, now: Instant) -> bool {
        if let Some(ref mut loading) = self.loading_state {
            loading.update(now);
            if loading.is_complete() {
                self.finish_loading();
                return true;
            }
        }
        false
    }

    fn finish_loading(&mut self) {
        self.loading_state = None;
        self.state.current_view = View::Form;
        self.state.form.set_active_field(FieldName::Name.index());
        tracing::info!("Form ready");
    }

    /// Check if the loading placeholder is showing
    pub fn in_loading(&self) -> bool {
        matches!(self.state.current_view, View::Loading)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Ask the run loop to exit
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Drop any in-flight work; completions arriving later are discarded
    pub fn shutdown(&mut self) {
        if !self.cancel.is_cancelled() {
            tracing::debug!("Cancelling background tasks");
            self.cancel.cancel();
        }
        self.pending_submit = None;
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        match self.state.current_view {
            View::Loading => self.handle_loading_key(key),
            View::Form => self.handle_form_key(key),
        }
        Ok(())
    }

    fn handle_loading_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut loading) = self.loading_state {
            loading.skip();
        }
        self.finish_loading();
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let active = self.state.form.active_field_name();
        let on_country = active == Some(FieldName::Country);
        let on_secret = active.is_some_and(|f| f.is_secret());
        let on_button = self.state.form.is_submit_active();
        // AltGr arrives as Ctrl+Alt on Windows and must still type
        let shortcut = (key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL))
            && !key.modifiers.contains(KeyModifiers::ALT);

        match key.code {
            KeyCode::Esc => return self.request_quit(),
            KeyCode::Char('s') if shortcut => return self.submit(),
            KeyCode::Enter if on_button => return self.submit(),
            _ => {}
        }

        let form = &mut self.state.form;
        match key.code {
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Char('r') if shortcut && on_secret => form.toggle_reveal(),
            KeyCode::F(2) if on_secret => form.toggle_reveal(),
            // Country select
            KeyCode::Left if on_country => form.prev_country(),
            KeyCode::Right | KeyCode::Char(' ') if on_country => form.next_country(),
            KeyCode::Backspace | KeyCode::Delete if on_country => form.set_country(None),
            // Text input
            KeyCode::Char(c) if !shortcut => form.push_char(c),
            KeyCode::Backspace => form.pop_char(),
            _ => {}
        }
    }

    /// Start submitting the form if it is valid and idle
    pub fn submit(&mut self) {
        let values = match self.state.form.begin_submit() {
            Ok(values) => values,
            Err(err) => {
                tracing::debug!(%err, "Submit rejected");
                self.status_message = Some(format!("Cannot submit: {err}"));
                return;
            }
        };

        let id = Uuid::new_v4();
        self.pending_submit = Some(id);
        tracing::info!(%id, "Submission started");

        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();
        let cancel = self.cancel.child_token();
        tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::debug!(%id, "Submission dropped after shutdown");
                }
                result = backend.submit(values) => {
                    let result = result.map_err(|e| format!("{e:#}"));
                    let finished_at = now();
                    // Receiver is gone only when the app has been torn down
                    let _ = tx.send(AppEvent::SubmitFinished { id, result, finished_at });
                }
            }
        });
    }

    /// Apply events from background tasks
    fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::SubmitFinished {
                    id,
                    result,
                    finished_at,
                } => {
                    if self.pending_submit != Some(id) {
                        tracing::warn!(%id, "Ignoring stale submission result");
                        continue;
                    }
                    self.pending_submit = None;
                    match result {
                        Ok(()) => {
                            self.state.form.complete_submit(finished_at);
                            tracing::info!(%id, "Submission succeeded");
                        }
                        Err(message) => {
                            self.state.form.fail_submit();
                            tracing::warn!(%id, error = %message, "Submission failed");
                            self.push_error(format!("Submission failed: {message}"));
                        }
                    }
                }
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Current time on the tokio clock so paused-time tests drive the timers
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockSubmitBackend;
    use crate::state::{Country, FormValues, SubmissionState};

    const LOADING: Duration = Duration::from_millis(2000);
    const SUBMIT: Duration = Duration::from_millis(2000);
    const SUCCESS: Duration = Duration::from_millis(1200);

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn simulated_app() -> App {
        App::with_backend(
            Arc::new(SimulatedBackend::new(SUBMIT)),
            LOADING,
            SUCCESS,
        )
    }

    /// App past the loading placeholder with a valid form
    fn ready_app(backend: Arc<dyn SubmitBackend>) -> App {
        let mut app = App::with_backend(backend, Duration::ZERO, SUCCESS);
        app.tick();
        type_text(&mut app, "Alice");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "secret");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        type_text(&mut app, "secret");
        app.handle_key(key(KeyCode::Tab)).unwrap();
        for _ in 0..6 {
            app.handle_key(key(KeyCode::Right)).unwrap();
        }
        app
    }

    /// Let spawned tasks run and then apply their events
    async fn settle(app: &mut App, wait: Duration) {
        tokio::time::sleep(wait).await;
        tokio::task::yield_now().await;
        app.tick();
    }

    mod loading {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_starts_in_loading_view() {
            let app = simulated_app();
            assert!(app.in_loading());
            assert!(app.loading_state.is_some());
        }

        #[tokio::test(start_paused = true)]
        async fn test_form_appears_after_delay() {
            let mut app = simulated_app();
            tokio::time::sleep(Duration::from_millis(1999)).await;
            app.tick();
            assert!(app.in_loading());
            tokio::time::sleep(Duration::from_millis(1)).await;
            app.tick();
            assert_eq!(app.state.current_view, View::Form);
            assert!(app.loading_state.is_none());
            assert_eq!(app.state.form.active_field_name(), Some(FieldName::Name));
        }

        #[tokio::test(start_paused = true)]
        async fn test_any_key_skips_loading() {
            let mut app = simulated_app();
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert_eq!(app.state.current_view, View::Form);
            // the skipping key is not typed into the form
            assert_eq!(app.state.form.values().name, "");
        }
    }

    mod input {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_typing_fills_fields() {
            let app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            let values = app.state.form.values();
            assert_eq!(values.name, "Alice");
            assert_eq!(values.password, "secret");
            assert_eq!(values.confirm_password, "secret");
            assert_eq!(values.country, Some(Country::Japan));
            assert!(app.state.form.is_valid());
        }

        #[tokio::test(start_paused = true)]
        async fn test_backspace_edits_and_revalidates() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.state.form.set_active_field(FieldName::Name.index());
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Backspace)).unwrap();
            }
            assert_eq!(app.state.form.values().name, "Al");
            assert!(!app.state.form.is_valid());
        }

        #[tokio::test(start_paused = true)]
        async fn test_backspace_clears_country() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert!(app.state.form.values().country.is_none());
        }

        #[tokio::test(start_paused = true)]
        async fn test_reveal_shortcuts_only_on_password_fields() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.state.form.set_active_field(FieldName::Password.index());
            app.handle_key(ctrl('r')).unwrap();
            assert!(app.state.form.field(FieldName::Password).revealed);
            app.handle_key(key(KeyCode::F(2))).unwrap();
            assert!(!app.state.form.field(FieldName::Password).revealed);
            // ctrl+r is not typed into the field
            assert_eq!(app.state.form.values().password, "secret");
        }

        #[tokio::test(start_paused = true)]
        async fn test_altgr_characters_are_typed() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.state.form.set_active_field(FieldName::Password.index());
            let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
            for c in ['@', '{', 's'] {
                app.handle_key(KeyEvent::new(KeyCode::Char(c), altgr)).unwrap();
            }
            assert_eq!(app.state.form.values().password, "secret@{s");
            assert_eq!(app.state.form.submission(), SubmissionState::Idle);
        }

        #[tokio::test(start_paused = true)]
        async fn test_esc_quits() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.should_quit());
        }
    }

    mod submit {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test(start_paused = true)]
        async fn test_full_lifecycle() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(app.state.form.submission(), SubmissionState::Submitting);

            settle(&mut app, Duration::from_millis(1990)).await;
            assert_eq!(app.state.form.submission(), SubmissionState::Submitting);
            assert_eq!(app.state.form.values().name, "Alice");

            settle(&mut app, Duration::from_millis(20)).await;
            assert_eq!(app.state.form.submission(), SubmissionState::Succeeded);
            assert_eq!(app.state.form.values(), &FormValues::default());

            settle(&mut app, Duration::from_millis(1100)).await;
            assert_eq!(app.state.form.submission(), SubmissionState::Succeeded);

            settle(&mut app, Duration::from_millis(200)).await;
            assert_eq!(app.state.form.submission(), SubmissionState::Idle);
            assert!(!app.state.has_errors());
        }

        #[tokio::test(start_paused = true)]
        async fn test_success_window_starts_when_backend_finishes() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.submit();

            // backend finishes at 2000ms, the UI only catches up at 3000ms
            settle(&mut app, SUBMIT + Duration::from_millis(1000)).await;
            assert_eq!(app.state.form.submission(), SubmissionState::Succeeded);

            settle(&mut app, Duration::from_millis(150)).await;
            assert_eq!(app.state.form.submission(), SubmissionState::Succeeded);

            settle(&mut app, Duration::from_millis(100)).await;
            assert_eq!(app.state.form.submission(), SubmissionState::Idle);
        }

        #[tokio::test(start_paused = true)]
        async fn test_enter_on_button_submits() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.handle_key(key(KeyCode::Tab)).unwrap();
            assert!(app.state.form.is_submit_active());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.state.form.submission(), SubmissionState::Submitting);
        }

        #[tokio::test(start_paused = true)]
        async fn test_invalid_form_is_not_submitted() {
            let mut mock = MockSubmitBackend::new();
            mock.expect_submit().never();
            let mut app = App::with_backend(Arc::new(mock), Duration::ZERO, SUCCESS);
            app.tick();
            type_text(&mut app, "Al");
            app.handle_key(ctrl('s')).unwrap();

            assert_eq!(app.state.form.submission(), SubmissionState::Idle);
            assert!(app
                .status_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Cannot submit")));
            settle(&mut app, SUBMIT).await;
            assert_eq!(app.state.form.submission(), SubmissionState::Idle);
        }

        #[tokio::test(start_paused = true)]
        async fn test_backend_receives_values() {
            let mut mock = MockSubmitBackend::new();
            mock.expect_submit()
                .withf(|values: &FormValues| {
                    values.name == "Alice" && values.country == Some(Country::Japan)
                })
                .times(1)
                .returning(|_| Ok(()));
            let mut app = ready_app(Arc::new(mock));
            app.submit();
            settle(&mut app, Duration::from_millis(1)).await;
            assert_eq!(app.state.form.submission(), SubmissionState::Succeeded);
        }

        #[tokio::test(start_paused = true)]
        async fn test_second_submit_while_in_flight_is_ignored() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.submit();
            let first = app.pending_submit;
            app.submit();
            assert_eq!(app.pending_submit, first);
            assert!(app.status_message.is_some());
        }

        #[tokio::test(start_paused = true)]
        async fn test_failure_keeps_values_and_shows_error() {
            let mut mock = MockSubmitBackend::new();
            mock.expect_submit()
                .returning(|_| Err(anyhow::anyhow!("server unavailable")));
            let mut app = ready_app(Arc::new(mock));
            app.submit();
            settle(&mut app, Duration::from_millis(1)).await;

            assert_eq!(app.state.form.submission(), SubmissionState::Idle);
            assert_eq!(app.state.form.values().name, "Alice");
            assert_eq!(
                app.state.current_error(),
                Some("Submission failed: server unavailable")
            );

            // error dialog is modal until dismissed
            app.handle_key(key(KeyCode::Char('z'))).unwrap();
            assert!(app.state.has_errors());
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(!app.state.has_errors());
        }

        #[tokio::test(start_paused = true)]
        async fn test_shutdown_drops_late_completion() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.submit();
            app.shutdown();
            settle(&mut app, SUBMIT * 2).await;
            assert!(app.events_rx.try_recv().is_err());
            assert_eq!(app.state.form.submission(), SubmissionState::Submitting);
            assert_eq!(app.state.form.values().name, "Alice");
        }

        #[tokio::test(start_paused = true)]
        async fn test_stale_result_is_ignored() {
            let mut app = ready_app(Arc::new(SimulatedBackend::new(SUBMIT)));
            app.submit();
            app.events_tx
                .send(AppEvent::SubmitFinished {
                    id: Uuid::new_v4(),
                    result: Ok(()),
                    finished_at: now(),
                })
                .unwrap();
            app.tick();
            assert_eq!(app.state.form.submission(), SubmissionState::Submitting);
        }
    }
}
