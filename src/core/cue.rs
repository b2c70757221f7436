//! Reactions to a seat changing status.
//!
//! The store notifies a [`CueSink`] after every successful status cycle and
//! never looks at what the sink does with it. Sinks are free to do nothing.

use crate::models::SeatStatus;
use crate::utils::colors::{RESET, color_for_status};
use std::io::{self, Write};

/// A seat that just moved one step along the status cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatTransition {
    pub index: usize,
    pub name: String,
    pub from: SeatStatus,
    pub to: SeatStatus,
}

pub trait CueSink {
    fn seat_transitioned(&mut self, transition: &SeatTransition);
}

impl<C: CueSink + ?Sized> CueSink for Box<C> {
    fn seat_transitioned(&mut self, transition: &SeatTransition) {
        (**self).seat_transitioned(transition);
    }
}

/// Drops every cue. Used for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentCue;

impl CueSink for SilentCue {
    fn seat_transitioned(&mut self, _transition: &SeatTransition) {}
}

/// Rings the terminal bell and prints a one-line flash for the seat.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalCue;

impl TerminalCue {
    pub fn flash_line(transition: &SeatTransition) -> String {
        format!(
            "🥫 #{} {}: {} → {}{}{}",
            transition.index + 1,
            transition.name,
            transition.from,
            color_for_status(transition.to),
            transition.to,
            RESET
        )
    }
}

impl CueSink for TerminalCue {
    fn seat_transitioned(&mut self, transition: &SeatTransition) {
        let mut out = io::stdout().lock();
        // a closed stdout only loses the cue
        let _ = write!(out, "\x07");
        let _ = writeln!(out, "{}", Self::flash_line(transition));
        let _ = out.flush();
    }
}

/// Records every cue it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingCue {
    pub seen: Vec<SeatTransition>,
}

impl CueSink for RecordingCue {
    fn seat_transitioned(&mut self, transition: &SeatTransition) {
        self.seen.push(transition.clone());
    }
}
