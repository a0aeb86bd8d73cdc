//! Terminal lunar lander (default binary).
//!
//! One cooperative loop: render, wait for input until the next tick is due,
//! apply input, then advance the fixed-timestep simulation.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal;

use tui_lander::config::LanderConfig;
use tui_lander::core::{GameLoop, GameSnapshot, GameState};
use tui_lander::input::{should_quit, InputHandler};
use tui_lander::logging;
use tui_lander::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Poll interval once the round is over and nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = LanderConfig::from_env()?;
    logging::init(config.log_path.as_deref())?;
    log::info!(
        "session start: seed {}, tick {}ms, key hold delay {}ms, key release timeout {}ms",
        config.seed,
        config.tick_ms,
        config.key_hold_delay_ms,
        config.key_release_timeout_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up terminal")?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        log::warn!("failed to restore terminal: {err:#}");
    }
    log::info!("session end");
    result
}

fn run(term: &mut TerminalRenderer, config: &LanderConfig) -> Result<()> {
    let mut game = GameLoop::with_tick_ms(GameState::new(config.seed), config.tick_ms);

    let release_timeout = if term.enhanced_keys() {
        0
    } else {
        config.key_release_timeout_ms
    };
    let mut input = InputHandler::new()
        .with_key_hold_delay_ms(config.key_hold_delay_ms)
        .with_key_release_timeout_ms(release_timeout);

    let view = GameView::default();
    let (w, h) = terminal::size().context("failed to query terminal size")?;
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut snap = GameSnapshot::default();

    let mut last = Instant::now();

    loop {
        game.state().snapshot_into(&mut snap);
        view.render_into(&snap, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        let wait = game
            .time_until_next_tick_ms()
            .map(|ms| Duration::from_millis(ms as u64))
            .unwrap_or(IDLE_POLL);

        if event::poll(wait)? {
            loop {
                match event::read()? {
                    Event::Key(key) => {
                        if handle_key(key, &mut game, &mut input) == Flow::Quit {
                            return Ok(());
                        }
                    }
                    Event::Resize(w, h) => {
                        viewport = Viewport::new(w, h);
                        term.invalidate();
                        log::info!("terminal resized to {w}x{h}");
                    }
                    _ => {}
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        for action in input.update() {
            game.apply_action(action);
        }

        // Advance by whole milliseconds and keep the remainder for later.
        let elapsed_ms = last.elapsed().as_millis().min(u32::MAX as u128) as u32;
        last += Duration::from_millis(elapsed_ms as u64);
        game.advance(elapsed_ms);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

fn handle_key(key: KeyEvent, game: &mut GameLoop, input: &mut InputHandler) -> Flow {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if should_quit(key) {
                return Flow::Quit;
            }

            // Restart is edge-triggered inside the handler, so key repeat
            // (reported as Press without keyboard enhancement) cannot chain
            // restarts.
            if let Some(action) = input.handle_key_press(key.code) {
                game.apply_action(action);
            }
        }
        KeyEventKind::Release => {
            if let Some(action) = input.handle_key_release(key.code) {
                game.apply_action(action);
            }
        }
    }
    Flow::Continue
}
