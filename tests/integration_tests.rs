//! Integration tests for the round lifecycle and the reference scenarios

use tui_lander::core::{GameLoop, GameState, Lander, Pad};
use tui_lander::input::InputHandler;
use tui_lander::types::{
    GameAction, Outcome, ThrustDirection, ARENA_HEIGHT, CRASH_MESSAGE, GRAVITY, INITIAL_FUEL,
    LANDER_SIZE, SAFE_MESSAGE, THRUST_UP, TICK_MS,
};

use crossterm::event::KeyCode;

const EPS: f64 = 1e-9;

/// Lander one tick above the floor, arriving with `contact_vy` after gravity.
fn one_tick_from_floor(x: f64, contact_vy: f64) -> Lander {
    Lander {
        x,
        y: ARENA_HEIGHT - LANDER_SIZE - contact_vy + 0.1,
        vx: 0.0,
        vy: contact_vy - GRAVITY,
        fuel: INITIAL_FUEL,
    }
}

fn run_to_touchdown(state: &mut GameState, limit: u32) -> Outcome {
    for _ in 0..limit {
        if let Some(outcome) = state.tick() {
            return outcome;
        }
    }
    panic!("no touchdown within {limit} ticks");
}

#[test]
fn test_game_lifecycle() {
    let mut game = GameLoop::new(GameState::new(12345));
    assert!(game.is_running());
    assert!(game.state().flying());
    assert_eq!(game.state().lander().fuel, INITIAL_FUEL);

    // Free fall to the floor at 20ms per tick.
    while game.is_running() {
        game.advance(TICK_MS * 4);
    }
    assert_eq!(game.state().outcome(), Some(Outcome::Crash));
    assert_eq!(game.state().outcome().unwrap().message(), CRASH_MESSAGE);

    // Restart brings back a fresh round and the loop resumes.
    game.apply_action(GameAction::Restart);
    assert!(game.is_running());
    assert!(game.state().flying());
    assert_eq!(game.state().episode_id(), 1);
    assert_eq!(game.state().tick_count(), 0);
    assert_eq!(*game.state().lander(), Lander::spawn());
}

#[test]
fn test_scenario_free_fall_lands_on_predicted_tick() {
    // y_n = 50 + 0.005 * n(n+1)/2; bottom reaches 500 first at n = 405.
    let mut state = GameState::new(7);
    let mut ticks = 0;
    let outcome = loop {
        ticks += 1;
        if let Some(outcome) = state.tick() {
            break outcome;
        }
        assert!(ticks < 1_000);
    };

    assert_eq!(ticks, 405);
    assert_eq!(state.tick_count(), 405);
    assert!((state.lander().vy - 405.0 * GRAVITY).abs() < EPS);
    assert_eq!(state.lander().x, 230.0);
    // Far too fast for any pad.
    assert_eq!(outcome, Outcome::Crash);
}

#[test]
fn test_scenario_up_thrust_rises_until_fuel_runs_out() {
    let mut state = GameState::new(7);
    state.apply_action(GameAction::StartThrust(ThrustDirection::Up));

    state.tick();
    assert!((state.lander().vy - (GRAVITY - THRUST_UP)).abs() < EPS);
    assert!((state.lander().vy + 0.015).abs() < EPS);

    let mut ticks = 1;
    while state.lander().has_fuel() {
        state.tick();
        ticks += 1;
        assert!(ticks <= 1_001);
    }

    assert!((1_000..=1_001).contains(&ticks));
    assert!(state.flying());
    assert!(state.lander().y < 50.0);

    // Out of fuel: the flag stays set but only gravity acts now.
    let vy = state.lander().vy;
    state.tick();
    assert!((state.lander().vy - (vy + GRAVITY)).abs() < EPS);
}

#[test]
fn test_scenario_soft_landing_on_pad_is_safe() {
    let mut state = GameState::new(1);
    state.set_pad(Pad::new(200.0));
    state.set_lander(one_tick_from_floor(210.0, 0.5));

    assert_eq!(state.tick(), Some(Outcome::Safe));
    assert_eq!(state.outcome().unwrap().message(), SAFE_MESSAGE);
    let report = state.last_landing().unwrap();
    assert!(report.on_pad && report.soft);
    assert!((report.speed - 0.5).abs() < EPS);
}

#[test]
fn test_scenario_landing_off_pad_crashes() {
    let mut state = GameState::new(1);
    state.set_pad(Pad::new(200.0));
    state.set_lander(one_tick_from_floor(150.0, 0.5));

    assert_eq!(state.tick(), Some(Outcome::Crash));
    assert!(!state.last_landing().unwrap().on_pad);
}

#[test]
fn test_scenario_fast_landing_on_pad_crashes() {
    let mut state = GameState::new(1);
    state.set_pad(Pad::new(200.0));
    state.set_lander(one_tick_from_floor(210.0, 1.5));

    assert_eq!(state.tick(), Some(Outcome::Crash));
    let report = state.last_landing().unwrap();
    assert!(report.on_pad);
    assert!(!report.soft);
}

#[test]
fn test_outcome_is_sticky_until_reset() {
    let mut state = GameState::new(3);
    let outcome = run_to_touchdown(&mut state, 1_000);
    let frozen = *state.lander();

    for _ in 0..10 {
        assert_eq!(state.tick(), None);
    }
    assert_eq!(state.resolve_landing(), outcome);
    assert_eq!(*state.lander(), frozen);
    assert_eq!(state.outcome(), Some(outcome));

    state.reset();
    assert!(state.flying());
    assert!(state.last_landing().is_none());
}

#[test]
fn test_reset_from_any_state_restores_round_start() {
    let mut state = GameState::new(99);

    // Mid-flight with thrust held.
    state.apply_action(GameAction::StartThrust(ThrustDirection::Left));
    state.apply_action(GameAction::StartThrust(ThrustDirection::Up));
    for _ in 0..50 {
        state.tick();
    }
    state.reset();
    assert_eq!(*state.lander(), Lander::spawn());
    assert!(!state.thrust().any());

    // After a crash.
    run_to_touchdown(&mut state, 1_000);
    state.reset();
    assert_eq!(state.lander().fuel, INITIAL_FUEL);
    assert_eq!((state.lander().vx, state.lander().vy), (0.0, 0.0));
    assert!(state.outcome().is_none());
    assert!((50.0..=450.0).contains(&state.pad().x));
}

#[test]
fn test_restart_mid_round_keeps_ticking() {
    let mut game = GameLoop::new(GameState::new(5));
    game.advance(TICK_MS * 5);
    assert_eq!(game.state().tick_count(), 5);

    game.restart();
    assert_eq!(game.state().tick_count(), 0);
    assert_eq!(game.advance(TICK_MS), 1);
    assert_eq!(game.state().tick_count(), 1);
}

#[test]
fn test_key_input_drives_thrust() {
    let mut game = GameLoop::new(GameState::new(11));
    let mut input = InputHandler::new().with_key_release_timeout_ms(0);

    let press = input.handle_key_press(KeyCode::Up).unwrap();
    game.apply_action(press);
    // Auto-repeat does not re-emit.
    assert!(input.handle_key_press(KeyCode::Up).is_none());

    game.advance(TICK_MS);
    assert!(game.state().lander().vy < 0.0);

    let release = input.handle_key_release(KeyCode::Up).unwrap();
    game.apply_action(release);
    assert!(!game.state().thrust().up);

    // A release without a press is harmless.
    let stray = input.handle_key_release(KeyCode::Left).unwrap();
    assert!(!game.apply_action(stray));
}

#[test]
fn test_same_seed_same_pad_sequence() {
    let mut a = GameState::new(2024);
    let mut b = GameState::new(2024);
    for _ in 0..20 {
        assert_eq!(a.pad(), b.pad());
        a.reset();
        b.reset();
    }
}

#[test]
fn test_held_restart_key_restarts_once() {
    let mut game = GameLoop::new(GameState::new(13));
    let mut input = InputHandler::new();

    // Without release events, a held key arrives as a stream of presses.
    for _ in 0..20 {
        if let Some(action) = input.handle_key_press(KeyCode::Char('r')) {
            game.apply_action(action);
        }
        game.advance(TICK_MS);
    }

    assert_eq!(game.state().episode_id(), 1);
    assert_eq!(game.state().tick_count(), 20);
}
