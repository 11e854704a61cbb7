//! Opsdeck TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use opsdeck_tui::config::TuiConfig;
use opsdeck_tui::error::TuiError;
use opsdeck_tui::events::TuiEvent;
use opsdeck_tui::keys::{map_key, Action};
use opsdeck_tui::nav::Screen;
use opsdeck_tui::persistence::{self, PersistedState};
use opsdeck_tui::state::{App, InputFocus};
use opsdeck_tui::views::render_view;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_tracing(&config)?;

    let mut app = App::new(config);
    if let Ok(Some(state)) = persistence::load(&app.config.persistence_path) {
        app.switch_industry(state.industry);
        app.active_screen = state.active_screen;
    }

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    let tick_rate = Duration::from_millis(app.config.tick_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event, &event_tx) {
                    break;
                }
            }
        }
    }

    let persisted = PersistedState {
        active_screen: app.active_screen,
        industry: app.industry,
    };
    let _ = persistence::save(&app.config.persistence_path, &persisted);

    Ok(())
}

fn init_tracing(config: &TuiConfig) -> Result<(), TuiError> {
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .init();
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

fn handle_event(app: &mut App, event: TuiEvent, sender: &mpsc::Sender<TuiEvent>) -> bool {
    match event {
        TuiEvent::Input(key) => {
            if app.input_focus != InputFocus::None {
                handle_focused_input(app, key.code, sender);
                return false;
            }
            if let Some(action) = map_key(key) {
                return handle_action(app, action);
            }
        }
        TuiEvent::ChatReply(text) => app.apply_chat_reply(text),
        TuiEvent::Resize { .. } | TuiEvent::Tick => {}
    }
    false
}

/// Keystrokes go straight to the focused buffer; only Enter, Esc, and
/// Backspace keep their control meaning.
fn handle_focused_input(app: &mut App, code: KeyCode, sender: &mpsc::Sender<TuiEvent>) {
    match code {
        KeyCode::Char(c) => app.push_input_char(c),
        KeyCode::Backspace => app.pop_input_char(),
        KeyCode::Enter => {
            if app.confirm_input().is_some() {
                schedule_chat_reply(app, sender);
            }
        }
        KeyCode::Esc => app.cancel_input(),
        _ => {}
    }
}

fn schedule_chat_reply(app: &App, sender: &mpsc::Sender<TuiEvent>) {
    let reply = app.canned_reply();
    let latency = Duration::from_millis(app.config.reply_latency_ms);
    let sender = sender.clone();
    tokio::spawn(async move {
        tokio::time::sleep(latency).await;
        let _ = sender.send(TuiEvent::ChatReply(reply)).await;
    });
}

fn handle_action(app: &mut App, action: Action) -> bool {
    if app.help_open {
        app.help_open = false;
        return matches!(action, Action::Quit);
    }
    match action {
        Action::Quit => return true,
        Action::NextScreen => app.active_screen = app.active_screen.next(),
        Action::PrevScreen => app.active_screen = app.active_screen.previous(),
        Action::SwitchScreen(index) => {
            if let Some(screen) = Screen::from_index(index) {
                app.active_screen = screen;
            }
        }
        Action::CycleIndustry => app.cycle_industry(),
        Action::MoveDown => app.select_next(),
        Action::MoveUp => app.select_previous(),
        Action::MoveLeft => {
            if app.active_screen == Screen::Dashboard {
                app.drill_out();
            }
        }
        Action::MoveRight => {
            if app.active_screen == Screen::Dashboard {
                app.drill_in();
            }
        }
        Action::Select => {
            if app.active_screen == Screen::Studio {
                app.toggle_selected_agent();
            }
        }
        Action::Confirm => {
            if app.action_modal.is_some() {
                app.submit_action();
            } else {
                match app.active_screen {
                    Screen::Operations => app.open_selected_record(),
                    Screen::Studio => {
                        if app.studio.tab == opsdeck_tui::nav::StudioTab::TestChat {
                            app.input_focus = InputFocus::Chat;
                        }
                    }
                    Screen::Dashboard => app.drill_in(),
                }
            }
        }
        Action::Cancel => {
            if app.action_modal.is_some() {
                app.close_modal();
            }
        }
        Action::OpenSearch => {
            app.active_screen = Screen::Operations;
            app.input_focus = InputFocus::Search;
        }
        Action::EditDate => {
            app.active_screen = Screen::Operations;
            app.input_focus = InputFocus::Date;
        }
        Action::CycleBucket => app.cycle_bucket(),
        Action::CyclePeriod => app.cycle_period(),
        Action::OpenActions => app.open_actions(),
        Action::ClearFilters => app.clear_filters(),
        Action::NextTab => {
            if app.active_screen == Screen::Studio {
                app.next_studio_tab();
            }
        }
        Action::OpenHelp => app.help_open = true,
    }
    false
}
