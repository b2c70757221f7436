pub mod collation;
pub mod cue;
pub mod log;
pub mod names;
pub mod persistence;
pub mod store;

pub use cue::{CueSink, SeatTransition, SilentCue, TerminalCue};
pub use store::AttendanceStore;
