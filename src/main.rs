//! Ragterm - terminal client for a document-retrieval QA backend
//!
//! Entry point with terminal setup and cleanup. The main loop renders the
//! active tab and routes events: key input to the active panel, request
//! completions back onto their workflow state machines.

use crossterm::{
    event::{self, KeyCode, KeyModifiers},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ragterm::{
    api::{ApiClient, SharedBackend},
    config::{load_config, Config},
    core::Result,
    events::{Event, EventBus},
    panels::PanelRegistry,
    state::AppState,
    ui::{self, labels},
};
use ratatui::backend::{Backend as TuiBackend, CrosstermBackend};
use ratatui::Terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;

fn main() -> Result<()> {
    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut term = Terminal::new(backend)?;

    let result = run_app(&mut term);

    // Restore terminal (ALWAYS, even on error)
    terminal::disable_raw_mode()?;
    execute!(term.backend_mut(), LeaveAlternateScreen)?;
    term.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {}", e);
    }

    result
}

/// Main application loop
fn run_app<B: TuiBackend>(terminal: &mut Terminal<B>) -> Result<()> {
    // Create event bus with bounded channel
    let event_bus = EventBus::new(1024);

    // Load configuration (base URL of the backend)
    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = load_config(&cwd).unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
        Config::default()
    });

    let backend: SharedBackend = Arc::new(ApiClient::new(&config.api.base_url));

    let mut state = AppState::new();
    let mut panels = PanelRegistry::new(backend, event_bus.sender());

    // One-time initial load of both lists
    panels.history.view.refresh();
    panels.documents.view.refresh();

    // Spawn input reader thread
    spawn_input_reader(event_bus.sender());

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state, &panels);
        })?;

        // Process events with timeout (50ms for responsive UI)
        if let Some(event) = event_bus.recv_timeout(Duration::from_millis(50)) {
            if handle_event(&event, &mut state, &mut panels)? {
                break;
            }
        }

        // Drain additional events to prevent lag
        for event in event_bus.drain(50) {
            if handle_event(&event, &mut state, &mut panels)? {
                break;
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Processes a single application event
///
/// Handles global keybindings (quit, tab cycling), applies request
/// completions to their workflows, and forwards everything else to the
/// active panel. Returns `Ok(true)` if the application should exit.
fn handle_event(event: &Event, state: &mut AppState, panels: &mut PanelRegistry) -> Result<bool> {
    match event {
        Event::Key(key) => {
            // Ctrl+Q / Ctrl+C: quit
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
            {
                state.quit();
                return Ok(true);
            }

            // Tab / Shift+Tab: cycle tabs; never cancels in-flight requests
            // and never refreshes the tab being entered
            if key.code == KeyCode::Tab {
                state.tabs.next();
                return Ok(false);
            }
            if key.code == KeyCode::BackTab {
                state.tabs.prev();
                return Ok(false);
            }

            // Forward to the active panel
            let active = state.tabs.active();
            panels.get_mut(active).handle_key(key, state)?;
        }

        Event::UploadDone { filename, chunks } => {
            panels.upload.workflow.complete();
            state.info(format!(
                "{} {}: {} {}",
                labels::MSG_UPLOADED_PREFIX,
                filename,
                chunks,
                labels::LABEL_CHUNKS
            ));
            panels.documents.view.refresh();
        }

        Event::UploadFailed(message) => {
            panels.upload.workflow.fail();
            state.error(message.clone());
        }

        Event::AnswerReady(result) => {
            panels.chat.workflow.complete(result.clone());
            panels.history.view.refresh();
        }

        Event::AskFailed(message) => {
            panels.chat.workflow.fail();
            state.error(message.clone());
        }

        Event::HistoryLoaded(items) => {
            panels.history.view.apply(items.clone());
        }

        Event::HistoryFailed(message) => {
            panels.history.view.fail();
            state.error(message.clone());
        }

        Event::DocumentsLoaded(items) => {
            panels.documents.view.apply(items.clone());
        }

        Event::DocumentsFailed(message) => {
            panels.documents.view.fail();
            state.error(message.clone());
        }

        Event::Quit => {
            state.quit();
            return Ok(true);
        }

        // Resize is handled by the next draw; tick is idle time
        Event::Resize(_, _) | Event::Tick => {}
    }

    Ok(false)
}

/// Spawns a dedicated thread to read input events (keyboard, resize)
///
/// Events are sent to the main loop via the provided channel. The thread
/// polls with a timeout to allow for clean shutdown.
fn spawn_input_reader(tx: crossbeam_channel::Sender<Event>) {
    std::thread::spawn(move || loop {
        if event::poll(Duration::from_millis(100)).unwrap_or(false) {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx.send(Event::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(event::Event::Resize(w, h)) => {
                    if tx.send(Event::Resize(w, h)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}
