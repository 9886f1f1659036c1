use crate::app::{App, MenuItem, TickerCommand};
use crate::state::ticker::GameTicker;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::Mutex;

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    ticker: &mut GameTicker,
) {
    let mut guard = app.lock().await;

    if guard.state.show_intro {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Enter, _) => guard.dismiss_intro(),
            (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => quit(),
            _ => {}
        }
        return;
    }

    // Search input swallows everything except its own exit keys.
    if guard.state.active_tab == MenuItem::Search && guard.state.search.composing {
        match (key_event.code, key_event.modifiers) {
            (Char('c'), KeyModifiers::CONTROL) => quit(),
            (KeyCode::Esc | KeyCode::Enter, _) => guard.search_end(),
            (KeyCode::Backspace, _) => guard.search_backspace(),
            (Char(ch), _) => guard.search_input(ch),
            _ => {}
        }
        return;
    }

    let command = match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => quit(),

        // Tab switching
        (_, Char('1'), _) => tab(&mut guard, MenuItem::Home),
        (_, Char('2'), _) => tab(&mut guard, MenuItem::Teams),
        (_, Char('3'), _) => tab(&mut guard, MenuItem::Standings),
        (_, Char('4'), _) => tab(&mut guard, MenuItem::Schedule),
        (_, Char('5'), _) => tab(&mut guard, MenuItem::Stats),
        (_, Char('6'), _) => tab(&mut guard, MenuItem::Live),
        (_, Char('7'), _) => tab(&mut guard, MenuItem::Search),
        (_, Char('8'), _) => tab(&mut guard, MenuItem::Export),
        (_, Char('?'), _) => tab(&mut guard, MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => {
            guard.exit_help();
            TickerCommand::Keep
        }

        // Teams
        (MenuItem::Teams, Char('j') | KeyCode::Down, _) => {
            guard.team_down();
            TickerCommand::Keep
        }
        (MenuItem::Teams, Char('k') | KeyCode::Up, _) => {
            guard.team_up();
            TickerCommand::Keep
        }

        // Schedule
        (MenuItem::Schedule, Char('c') | KeyCode::Tab, _) => {
            guard.schedule_cycle_filter();
            TickerCommand::Keep
        }
        (MenuItem::Schedule, Char('j') | KeyCode::Down, _) => {
            guard.schedule_scroll_down();
            TickerCommand::Keep
        }
        (MenuItem::Schedule, Char('k') | KeyCode::Up, _) => {
            guard.schedule_scroll_up();
            TickerCommand::Keep
        }

        // Stats
        (MenuItem::Stats, Char('c') | KeyCode::Tab, _) => {
            guard.stats_cycle_category();
            TickerCommand::Keep
        }

        // Live game
        (MenuItem::Live, Char('s'), _) => guard.live_start(),
        (MenuItem::Live, Char('p'), _) => guard.live_pause(),
        (MenuItem::Live, Char('r'), _) => guard.live_resume(),
        (MenuItem::Live, Char('x'), _) => guard.live_reset(),
        (MenuItem::Live, Char('l') | KeyCode::Right, _) => {
            guard.live_next_matchup();
            TickerCommand::Keep
        }
        (MenuItem::Live, Char('h') | KeyCode::Left, _) => {
            guard.live_prev_matchup();
            TickerCommand::Keep
        }

        // Search
        (MenuItem::Search, Char('/') | KeyCode::Enter, _) => {
            guard.search_begin();
            TickerCommand::Keep
        }
        (MenuItem::Search, KeyCode::Esc, _) => {
            guard.search_clear();
            TickerCommand::Keep
        }

        // Export
        (MenuItem::Export, Char('j') | KeyCode::Down, _) => {
            guard.state.export.next_dataset();
            TickerCommand::Keep
        }
        (MenuItem::Export, Char('k') | KeyCode::Up, _) => {
            guard.state.export.prev_dataset();
            TickerCommand::Keep
        }
        (MenuItem::Export, Char('h' | 'l') | KeyCode::Left | KeyCode::Right, _) => {
            guard.state.export.next_format();
            TickerCommand::Keep
        }
        (MenuItem::Export, KeyCode::Enter, _) => {
            guard.export_selected();
            TickerCommand::Keep
        }

        // Global
        (_, Char('n'), _) => {
            guard.toggle_notifications();
            TickerCommand::Keep
        }
        (_, Char('f'), _) => {
            guard.toggle_full_screen();
            TickerCommand::Keep
        }
        (_, Char('"'), _) => {
            guard.toggle_show_logs();
            TickerCommand::Keep
        }

        _ => TickerCommand::Keep,
    };

    apply(command, ticker);
}

fn tab(app: &mut App, item: MenuItem) -> TickerCommand {
    app.update_tab(item);
    TickerCommand::Keep
}

pub fn apply(command: TickerCommand, ticker: &mut GameTicker) {
    match command {
        TickerCommand::Start => ticker.start(),
        TickerCommand::Stop => ticker.stop(),
        TickerCommand::Keep => {}
    }
}

fn quit() -> ! {
    crate::cleanup_terminal();
    std::process::exit(0);
}
