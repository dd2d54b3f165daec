//! easylife-tui - EasyLife marketplace in the terminal
//!
//! Browse the demo catalog, register as a buyer or seller and list products.

use anyhow::Context;
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libeasylife::{Config, EasyLifeError, Moment};

use easylife_tui::{
    app::{event::EventHandler, event::TuiEvent, reduce, Action, AppState},
    cli::Args,
    terminal::{install_panic_hook, restore_terminal, setup_terminal, Tui},
    ui, TuiError,
};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::load().context("Failed to load config")?,
    };

    // The terminal belongs to the UI, so logs only ever go to a file
    if let Some(logging) = args.logging() {
        logging.init().context("Failed to initialize logging")?;
    }
    tracing::info!(
        transition_ms = config.navigation.transition_ms,
        seeded = config.marketplace.seed_catalog,
        "Starting easylife-tui"
    );

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &config);
    restore_terminal(terminal)?;

    result.map_err(Into::into)
}

fn run_app(terminal: &mut Tui, config: &Config) -> easylife_tui::Result<()> {
    let mut state = AppState::with_config(config);

    // The description editor is a stateful widget kept outside the state
    let mut textarea = ui::new_description_editor();

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        ui::style_description(&mut textarea, &state);
        terminal.draw(|frame| ui::render(frame, &state, &textarea))?;

        let action = match event_handler.next()? {
            TuiEvent::Key(key) if state.description_focused() && !is_global_key(&key) => {
                textarea.input(key);
                Action::ListingDescriptionChanged(textarea.lines().join("\n"))
            }
            other => other.into_action(Moment::now()),
        };

        state = reduce(state, action);
        // Keys also move the clock so transitions finish on time under input
        state = reduce(state, Action::Tick(Moment::now()));

        // A submitted form clears the draft; follow it in the editor
        if state.listing.draft.description.is_empty() && !textarea.is_empty() {
            textarea = ui::new_description_editor();
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!("Exiting easylife-tui");
    Ok(())
}

/// Keys the description editor never swallows
fn is_global_key(key: &KeyEvent) -> bool {
    matches!(
        (key.code, key.modifiers),
        (KeyCode::F(_), _)
            | (KeyCode::Tab, _)
            | (KeyCode::BackTab, _)
            | (KeyCode::Esc, _)
            | (KeyCode::Char('s'), KeyModifiers::CONTROL)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Char('q'), KeyModifiers::CONTROL)
    )
}

fn exit_code(error: &anyhow::Error) -> i32 {
    if let Some(e) = error.downcast_ref::<TuiError>() {
        return e.exit_code();
    }
    if let Some(e) = error.downcast_ref::<EasyLifeError>() {
        return e.exit_code();
    }
    1
}
