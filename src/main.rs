use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use classic_snake::config::tick_interval_from_arg;
use classic_snake::game::{GameState, RunState};
use classic_snake::input::{self, GameInput};
use classic_snake::platform::Platform;
use classic_snake::renderer;
use classic_snake::terminal_runtime::{install_panic_hook, AppTerminal, TerminalSession};
use classic_snake::theme::ThemeCatalog;

/// How long one input poll may block; paces the frame loop.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(8);

#[derive(Debug, Parser)]
#[command(version, about = "Classic arcade Snake for the terminal")]
struct Cli {
    /// Tick interval in milliseconds; malformed values fall back to 75.
    #[arg(long = "tick-ms")]
    tick_ms: Option<String>,

    /// Seed for the food placement sequence (reproducible runs).
    #[arg(long)]
    seed: Option<u64>,

    /// Theme id to play with.
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let platform = Platform::detect();
    let tick_interval = tick_interval_from_arg(cli.tick_ms.as_deref());

    let mut themes = ThemeCatalog::load();
    if let Some(requested) = cli.theme.as_deref() {
        if !themes.select_by_id(requested) {
            eprintln!(
                "Warning: unknown theme {requested:?}; using \"{}\"",
                themes.current_id()
            );
        }
    }

    let mut state = match cli.seed {
        Some(seed) => GameState::new_with_seed(seed),
        None => GameState::new(),
    };

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(
        session.terminal_mut(),
        &mut state,
        &themes,
        platform,
        tick_interval,
    )
}

fn run(
    terminal: &mut AppTerminal,
    state: &mut GameState,
    themes: &ThemeCatalog,
    platform: Platform,
    tick_interval: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| renderer::render(frame, state, platform, themes.current_theme()))?;

        match input::poll_input(INPUT_POLL_TIMEOUT)? {
            Some(GameInput::Quit) => break,
            Some(event) => handle_input(state, event, &mut last_tick),
            None => {}
        }

        // Tick accrual is gated on the run state: the timer stops with the
        // GameOver transition and is re-armed by the restart path.
        if state.run_state == RunState::Running && last_tick.elapsed() >= tick_interval {
            state.advance();
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn handle_input(state: &mut GameState, input: GameInput, last_tick: &mut Instant) {
    match input {
        GameInput::Direction(direction) => state.set_direction(direction),
        // The restart control only exists on the game-over screen.
        GameInput::Confirm if state.run_state == RunState::GameOver => {
            state.reset();
            *last_tick = Instant::now();
        }
        GameInput::Confirm | GameInput::Quit => {}
    }
}
