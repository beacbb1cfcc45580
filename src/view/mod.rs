//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod helpers;
mod layout;
mod results;
mod search_input;
mod status_bar;
mod styles;
mod trending;

pub use help::render_help_overlay;
pub use helpers::{spinner_glyph, truncate_to_width};
pub use layout::{calculate_areas, render_layout, ScreenAreas};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, Palette};

use crate::config::keybindings::KeyBindings;
use crate::effects::EffectRunner;
use crate::model::KeyAction;
use crate::state::{AppState, Effect, Outcome};
use constants::TICK_INTERVAL;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Instant;
use thiserror::Error;
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Presentation settings fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Root URL poster paths are appended to.
    pub image_base_url: String,
    /// Whether to use colors.
    pub colors: ColorConfig,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    runner: EffectRunner,
    outcomes: UnboundedReceiver<Outcome>,
    palette: Palette,
    image_base_url: String,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(
        app_state: AppState,
        runner: EffectRunner,
        outcomes: UnboundedReceiver<Outcome>,
        options: ViewOptions,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            runner,
            outcomes,
            palette: Palette::new(options.colors),
            image_base_url: options.image_base_url,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Between terminal events the loop wakes
    /// every [`TICK_INTERVAL`] to settle debounced input, collect finished
    /// requests and animate the loading indicator.
    pub fn run(&mut self, initial_query: &str) -> Result<(), TuiError> {
        self.start(initial_query);
        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    // Release events would double every keystroke on terminals that report them
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        if self.handle_key(key, Instant::now()) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "Terminal resized");
                        dirty = true;
                    }
                    _ => {}
                }
            }

            dirty |= self.on_tick(Instant::now());
            dirty |= self.drain_outcomes();

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Kick off the initial discover or search plus the trending load.
    fn start(&mut self, initial_query: &str) {
        let effects = self.app_state.start(initial_query);
        self.runner.run_all(effects);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => {
                info!("Quit requested");
                return true;
            }
            Some(action) => {
                let effect = self.app_state.handle_action(action, now);
                self.run_effect(effect);
            }
            None => {
                if let KeyCode::Char(ch) = key.code {
                    // Unbound chords are not text
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    {
                        self.app_state.handle_char(ch, now);
                    }
                }
            }
        }
        false
    }

    /// Advance the clock. Returns true when the screen needs a redraw.
    fn on_tick(&mut self, now: Instant) -> bool {
        let was_debouncing = self.app_state.is_debouncing();
        let effect = self.app_state.tick(now);
        let changed = effect.is_some()
            || was_debouncing != self.app_state.is_debouncing()
            || self.app_state.controller.is_loading();
        self.run_effect(effect);
        changed
    }

    /// Apply every outcome that has arrived. Returns true if any did.
    fn drain_outcomes(&mut self) -> bool {
        let mut applied = false;
        loop {
            match self.outcomes.try_recv() {
                Ok(outcome) => {
                    self.apply_outcome(outcome);
                    applied = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("Outcome channel closed");
                    break;
                }
            }
        }
        applied
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        let follow_up = self.app_state.apply_outcome(outcome);
        self.run_effect(follow_up);
    }

    fn run_effect(&self, effect: Option<Effect>) {
        if let Some(effect) = effect {
            self.runner.run(effect);
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let Self {
            terminal,
            app_state,
            palette,
            image_base_url,
            ..
        } = self;
        terminal.draw(|frame| layout::render_layout(frame, app_state, palette, image_base_url))?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization. Used by the acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        runner: EffectRunner,
        outcomes: UnboundedReceiver<Outcome>,
        options: ViewOptions,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            runner,
            outcomes,
            palette: Palette::new(options.colors),
            image_base_url: options.image_base_url,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Run the startup effects (test-only accessor)
    pub(crate) fn start_test(&mut self, initial_query: &str) {
        self.start(initial_query)
    }

    /// Handle a single keyboard event at `now` (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    /// Advance the clock to `now` (test-only accessor)
    pub(crate) fn tick_test(&mut self, now: Instant) -> bool {
        self.on_tick(now)
    }

    /// Apply outcomes already delivered (test-only accessor)
    pub(crate) fn drain_outcomes_test(&mut self) -> bool {
        self.drain_outcomes()
    }

    /// Block until one outcome arrives or `timeout` passes, then apply it.
    ///
    /// Returns false on timeout. Must not be called from inside the runtime.
    pub(crate) fn wait_for_outcome_test(&mut self, timeout: std::time::Duration) -> bool {
        let handle = self.runner.handle().clone();
        let outcomes = &mut self.outcomes;
        let received = handle.block_on(async { tokio::time::timeout(timeout, outcomes.recv()).await });
        match received {
            Ok(Some(outcome)) => {
                self.apply_outcome(outcome);
                true
            }
            _ => false,
        }
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Set up the terminal, run the event loop, and restore the terminal.
///
/// The terminal is restored even when the loop fails.
/// Logging must be initialized by caller before calling this function.
pub fn run_app(
    app_state: AppState,
    runner: EffectRunner,
    outcomes: UnboundedReceiver<Outcome>,
    options: ViewOptions,
    initial_query: &str,
) -> Result<(), TuiError> {
    let result = TuiApp::new(app_state, runner, outcomes, options)
        .and_then(|mut app| app.run(initial_query));

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
