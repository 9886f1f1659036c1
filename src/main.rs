mod app;
mod components;
mod draw;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::AppSettings;
use crate::state::messages::UiEvent;
use crate::state::notifier::ChannelNotifier;
use crate::state::ticker::GameTicker;
use aebl_league::{League, endpoints, export};
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use std::io::Stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::{io, panic};
use tokio::sync::{Mutex, mpsc};
use tokio::time::Duration;
use tui::{Terminal, backend::CrosstermBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args()? {
        return Ok(());
    }

    better_panic::install();

    let settings = AppSettings::load();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    tui_logger::init_logger(settings.log_level)?;
    tui_logger::set_default_level(settings.log_level);

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);

    let notifier = ChannelNotifier::new(ui_event_tx.clone(), settings.notifications);
    let ticker = GameTicker::new(ui_event_tx.clone(), settings.tick);
    let app = Arc::new(Mutex::new(App::new(settings, notifier)?));

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Animation tick thread, 80ms ≈ 12.5 FPS
    let anim_tx = ui_event_tx.clone();
    let animation_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(80));
        loop {
            interval.tick().await;
            if anim_tx.send(UiEvent::AnimationTick).await.is_err() {
                break;
            }
        }
    });

    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app, ui_event_rx, ticker).await;

    input_handler.abort();
    animation_task.abort();

    Ok(())
}

/// Handles the non-interactive flags. Returns true when the process should
/// exit without starting the UI.
fn handle_cli_args() -> anyhow::Result<bool> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(arg) = args.first() else {
        return Ok(false);
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            Ok(true)
        }
        "-V" | "--version" => {
            println!("aebl {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        "--dump" => {
            let league = League::aebl();
            let what = args.get(1).map(String::as_str);
            let payload = match what {
                Some("teams") => endpoints::teams_payload(&league),
                Some("team") => {
                    let id = args.get(2).map(String::as_str).unwrap_or_default();
                    match endpoints::team_payload(&league, id) {
                        Ok(payload) => payload,
                        Err(e) => {
                            eprintln!("{}", endpoints::error_payload(&e));
                            std::process::exit(1);
                        }
                    }
                }
                Some("matches") => {
                    endpoints::matches_payload(&league, args.get(2).map(String::as_str))
                }
                _ => {
                    eprintln!("Unknown dump target\n\n{}", usage_text());
                    std::process::exit(2);
                }
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(true)
        }
        "--export" => {
            let dir = args
                .get(1)
                .map(PathBuf::from)
                .unwrap_or_else(|| AppSettings::load().export_dir);
            for path in export::write_all(&League::aebl(), &dir)? {
                println!("{}", path.display());
            }
            Ok(true)
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

fn usage_text() -> &'static str {
    "aebl - African Elite Basketball League in your terminal

Usage:
  aebl
  aebl --dump teams
  aebl --dump team <id>
  aebl --dump matches [finished|scheduled|live]
  aebl --export [dir]
  aebl --help
  aebl --version

Environment:
  AEBL_LOG_LEVEL       Log level for the log pane (default info)
  AEBL_EXPORT_DIR      Export directory (default $XDG_DATA_HOME/aebl)
  AEBL_SEED            Seed for the live game simulator
  AEBL_TICK_MS         Milliseconds per simulated game second (default 1000)
  AEBL_NOTIFICATIONS   Set to off to mute score alerts"
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    app: Arc<Mutex<App>>,
    mut ui_events: mpsc::Receiver<UiEvent>,
    mut ticker: GameTicker,
) {
    while let Some(ui_event) = ui_events.recv().await {
        let should_redraw = handle_ui_event(ui_event, &app, &mut ticker).await;
        if should_redraw {
            let mut app_guard = app.lock().await;
            draw::draw(&mut terminal, &mut app_guard);
        }
    }
}

async fn handle_ui_event(ui_event: UiEvent, app: &Arc<Mutex<App>>, ticker: &mut GameTicker) -> bool {
    match ui_event {
        UiEvent::AppStarted => {
            log::info!("AEBL Courtside started");
            true
        }
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app, ticker).await;
            true
        }
        UiEvent::Resize => true,
        UiEvent::AnimationTick => {
            let mut guard = app.lock().await;
            if !guard.state.show_intro {
                return false;
            }
            guard.advance_animation(crate::components::banner::FRAME_COUNT);
            true
        }
        UiEvent::GameTick { epoch } => {
            if !ticker.is_current(epoch) {
                return false;
            }
            let command = app.lock().await.on_game_tick();
            keys::apply(command, ticker);
            true
        }
        UiEvent::Notification(notification) => {
            app.lock().await.on_notification(notification);
            true
        }
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        let event = match tokio::task::spawn_blocking(crossterm_event::read).await {
            Ok(Ok(event)) => event,
            Ok(Err(e)) => {
                log::error!("input error: {e}");
                continue;
            }
            Err(_) => break,
        };
        let ui_event = match event {
            Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
            Event::Resize(_, _) => Some(UiEvent::Resize),
            _ => None,
        };

        if let Some(ui_event) = ui_event
            && ui_events.send(ui_event).await.is_err()
        {
            break;
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
