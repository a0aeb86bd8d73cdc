//! Held-key tracking for thrust and restart input.
//!
//! Thrust is "on while the key is down". Terminals that report key release
//! events drive this directly. Terminals that do not only send repeated
//! key-down events while a key is held, so a held key that goes quiet is
//! released automatically. The first repeat arrives only after the OS repeat
//! delay, so a fresh press gets a longer grace period than later repeats.
//!
//! Restart fires once per physical press; auto-repeat of the restart key is
//! swallowed until the key is released or times out.

use std::time::Instant;

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::{is_restart_key, thrust_for_key};
use crate::types::{
    GameAction, ThrustDirection, DEFAULT_KEY_HOLD_DELAY_MS, DEFAULT_KEY_RELEASE_TIMEOUT_MS,
};

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    last_seen: Instant,
    /// At least one auto-repeat arrived since the key went down.
    repeated: bool,
}

impl HeldKey {
    fn pressed() -> Self {
        Self {
            last_seen: Instant::now(),
            repeated: false,
        }
    }
}

/// Tracks which keys are held and when each was last seen.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Indexed by [`ThrustDirection::index`].
    thrust: [Option<HeldKey>; 3],
    restart: Option<HeldKey>,
    /// Grace before the first repeat.
    key_hold_delay_ms: u32,
    /// Grace between repeats. 0 disables auto-release entirely.
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            thrust: [None; 3],
            restart: None,
            key_hold_delay_ms: DEFAULT_KEY_HOLD_DELAY_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// Set the auto-release timeout between repeats. Use 0 when the terminal
    /// reports key release events.
    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Set the grace period before the first repeat of a fresh press.
    pub fn with_key_hold_delay_ms(mut self, delay_ms: u32) -> Self {
        self.key_hold_delay_ms = delay_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn key_hold_delay_ms(&self) -> u32 {
        self.key_hold_delay_ms
    }

    pub fn is_held(&self, direction: ThrustDirection) -> bool {
        self.thrust[direction.index()].is_some()
    }

    /// Key-down (or auto-repeat).
    ///
    /// Emits `StartThrust` only when the thrust key was not already held, and
    /// `Restart` only on a fresh press of a restart key. Repeats just keep
    /// the key alive.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        if let Some(direction) = thrust_for_key(code) {
            let fresh = refresh(&mut self.thrust[direction.index()]);
            return fresh.then_some(GameAction::StartThrust(direction));
        }

        if is_restart_key(code) && refresh(&mut self.restart) {
            // The new round starts with all flags cleared; held thrust keys
            // must go down again to re-engage.
            self.thrust = [None; 3];
            return Some(GameAction::Restart);
        }

        None
    }

    /// Key-up. Emits `StopThrust` for the matching direction even if the key
    /// was never seen going down; stopping an idle thruster is a no-op.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        if is_restart_key(code) {
            self.restart = None;
            return None;
        }

        let direction = thrust_for_key(code)?;
        self.thrust[direction.index()] = None;
        Some(GameAction::StopThrust(direction))
    }

    /// Release keys that have gone quiet for longer than their grace period.
    pub fn update(&mut self) -> ArrayVec<GameAction, 3> {
        let mut actions = ArrayVec::<GameAction, 3>::new();
        if self.key_release_timeout_ms == 0 {
            return actions;
        }

        let (hold, repeat) = (self.key_hold_delay_ms, self.key_release_timeout_ms);
        for direction in ThrustDirection::ALL {
            let slot = &mut self.thrust[direction.index()];
            if expire(slot, hold, repeat) {
                actions.push(GameAction::StopThrust(direction));
            }
        }
        expire(&mut self.restart, hold, repeat);

        actions
    }

    /// Forget all held keys.
    pub fn reset(&mut self) {
        self.thrust = [None; 3];
        self.restart = None;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Mark a key as seen now. Returns true if it was not held before.
fn refresh(slot: &mut Option<HeldKey>) -> bool {
    match slot {
        Some(held) => {
            held.last_seen = Instant::now();
            held.repeated = true;
            false
        }
        None => {
            *slot = Some(HeldKey::pressed());
            true
        }
    }
}

/// Clear the slot if its key went quiet. Returns true if it was cleared.
fn expire(slot: &mut Option<HeldKey>, hold_ms: u32, repeat_ms: u32) -> bool {
    let expired = slot
        .map(|held| {
            let limit = if held.repeated { repeat_ms } else { hold_ms.max(repeat_ms) };
            held.last_seen.elapsed().as_millis() > limit as u128
        })
        .unwrap_or(false);
    if expired {
        *slot = None;
    }
    expired
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn age(ih: &mut InputHandler, direction: ThrustDirection, ms: u64) {
        if let Some(held) = ih.thrust[direction.index()].as_mut() {
            held.last_seen = Instant::now() - Duration::from_millis(ms);
        }
    }

    fn age_restart(ih: &mut InputHandler, ms: u64) {
        if let Some(held) = ih.restart.as_mut() {
            held.last_seen = Instant::now() - Duration::from_millis(ms);
        }
    }

    #[test]
    fn test_press_emits_start_once() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyCode::Up),
            Some(GameAction::StartThrust(ThrustDirection::Up))
        );
        // OS key repeat: no duplicate action.
        assert_eq!(ih.handle_key_press(KeyCode::Up), None);
        assert_eq!(ih.handle_key_press(KeyCode::Char('w')), None);
        assert!(ih.is_held(ThrustDirection::Up));
    }

    #[test]
    fn test_release_emits_stop() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Left);
        assert_eq!(
            ih.handle_key_release(KeyCode::Left),
            Some(GameAction::StopThrust(ThrustDirection::Left))
        );
        assert!(!ih.is_held(ThrustDirection::Left));
    }

    #[test]
    fn test_unmatched_release_is_tolerated() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_release(KeyCode::Right),
            Some(GameAction::StopThrust(ThrustDirection::Right))
        );
        assert_eq!(ih.handle_key_release(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_directions_are_independent() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Up);
        ih.handle_key_press(KeyCode::Right);
        ih.handle_key_release(KeyCode::Up);
        assert!(!ih.is_held(ThrustDirection::Up));
        assert!(ih.is_held(ThrustDirection::Right));
    }

    #[test]
    fn test_fresh_press_survives_os_repeat_delay() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Up);

        // Longer than the repeat timeout, shorter than typical repeat delays.
        age(&mut ih, ThrustDirection::Up, 200);
        assert!(ih.update().is_empty());
        assert!(ih.is_held(ThrustDirection::Up));

        age(&mut ih, ThrustDirection::Up, 500);
        assert!(ih.update().is_empty());
        assert!(ih.is_held(ThrustDirection::Up));
    }

    #[test]
    fn test_fresh_press_without_repeat_times_out() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Up);

        age(&mut ih, ThrustDirection::Up, (DEFAULT_KEY_HOLD_DELAY_MS + 50) as u64);
        assert_eq!(
            ih.update().as_slice(),
            &[GameAction::StopThrust(ThrustDirection::Up)]
        );
        assert!(!ih.is_held(ThrustDirection::Up));
    }

    #[test]
    fn test_auto_release_after_repeats_stop() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Up);
        ih.handle_key_press(KeyCode::Up);
        ih.handle_key_press(KeyCode::Left);

        // Up has repeated, so the short timeout applies; Left is still in
        // its first-repeat grace.
        age(&mut ih, ThrustDirection::Up, 51);
        age(&mut ih, ThrustDirection::Left, 51);
        let actions = ih.update();
        assert_eq!(
            actions.as_slice(),
            &[GameAction::StopThrust(ThrustDirection::Up)]
        );
        assert!(ih.is_held(ThrustDirection::Left));

        // Already released: nothing more to emit.
        assert!(ih.update().is_empty());
    }

    #[test]
    fn test_repeat_keeps_key_alive() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Up);
        ih.handle_key_press(KeyCode::Up);
        age(&mut ih, ThrustDirection::Up, 40);
        assert_eq!(ih.handle_key_press(KeyCode::Up), None);
        assert!(ih.update().is_empty());
        assert!(ih.is_held(ThrustDirection::Up));
    }

    #[test]
    fn test_zero_timeout_disables_auto_release() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(0);
        ih.handle_key_press(KeyCode::Right);
        ih.handle_key_press(KeyCode::Right);
        age(&mut ih, ThrustDirection::Right, 1_000);
        assert!(ih.update().is_empty());
        assert!(ih.is_held(ThrustDirection::Right));
    }

    #[test]
    fn test_default_timeouts() {
        let ih = InputHandler::new();
        assert!(ih.key_release_timeout_ms() > 0);
        assert!(ih.key_hold_delay_ms() > ih.key_release_timeout_ms());
    }

    #[test]
    fn test_restart_fires_once_per_press() {
        let mut ih = InputHandler::new();
        assert_eq!(
            ih.handle_key_press(KeyCode::Char('r')),
            Some(GameAction::Restart)
        );
        // Auto-repeat arrives as more presses on terminals without
        // release events.
        for _ in 0..10 {
            assert_eq!(ih.handle_key_press(KeyCode::Char('r')), None);
        }

        ih.handle_key_release(KeyCode::Char('r'));
        assert_eq!(
            ih.handle_key_press(KeyCode::Char('r')),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_restart_rearms_after_key_goes_quiet() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Enter);
        ih.handle_key_press(KeyCode::Enter);
        age_restart(&mut ih, 51);

        // Restart expiry emits nothing.
        assert!(ih.update().is_empty());
        assert_eq!(
            ih.handle_key_press(KeyCode::Enter),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_restart_drops_held_thrust() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Up);
        ih.handle_key_press(KeyCode::Char('r'));
        assert!(!ih.is_held(ThrustDirection::Up));

        // The next repeat of the still-held key re-engages thrust.
        assert_eq!(
            ih.handle_key_press(KeyCode::Up),
            Some(GameAction::StartThrust(ThrustDirection::Up))
        );
    }

    #[test]
    fn test_reset_clears_held_keys() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(10);
        ih.handle_key_press(KeyCode::Up);
        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_press(KeyCode::Char('r'));
        ih.reset();

        assert!(!ih.is_held(ThrustDirection::Up));
        assert!(!ih.is_held(ThrustDirection::Left));
        assert!(ih.update().is_empty());
        // A fresh press starts thrust again.
        assert_eq!(
            ih.handle_key_press(KeyCode::Up),
            Some(GameAction::StartThrust(ThrustDirection::Up))
        );
        assert_eq!(
            ih.handle_key_press(KeyCode::Char('r')),
            Some(GameAction::Restart)
        );
    }
}
