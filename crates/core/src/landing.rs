//! Landing classification
//!
//! A landing is judged once, at the first tick the lander's bottom edge
//! reaches the floor. Only vertical speed counts; horizontal drift is ignored.

use crate::lander::{Lander, Pad};
use crate::types::{Outcome, SAFE_LANDING_SPEED};

/// Everything known about a touchdown, for logging and display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingReport {
    pub outcome: Outcome,
    /// `|vy|` at contact
    pub speed: f64,
    /// Lander fully within the pad interval
    pub on_pad: bool,
    /// Vertical speed within the safe limit
    pub soft: bool,
}

/// Classify a touchdown.
///
/// Safe iff `pad.left <= lander.left`, `lander.right <= pad.right` and
/// `|vy| <= SAFE_LANDING_SPEED`. All bounds are inclusive.
pub fn classify_landing(lander: &Lander, pad: &Pad) -> LandingReport {
    let speed = lander.speed();
    let on_pad = pad.contains_span(lander.left(), lander.right());
    let soft = speed <= SAFE_LANDING_SPEED;

    let outcome = if on_pad && soft {
        Outcome::Safe
    } else {
        Outcome::Crash
    };

    LandingReport {
        outcome,
        speed,
        on_pad,
        soft,
    }
}
