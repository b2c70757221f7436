//! ANSI color helper utilities for terminal output.
use crate::models::SeatStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Colour of a seat on the board:
/// present → green, late → yellow, excused → blue, absent → red.
pub fn color_for_status(status: SeatStatus) -> &'static str {
    match status {
        SeatStatus::None => WHITE,
        SeatStatus::Present => GREEN,
        SeatStatus::Late => YELLOW,
        SeatStatus::Excused => BLUE,
        SeatStatus::Absent => RED,
    }
}

/// Ratio colour for the dashboard:
/// everyone present → green, nobody → grey, otherwise cyan.
pub fn color_for_ratio(present: usize, total: usize) -> &'static str {
    if total == 0 || present == 0 {
        GREY
    } else if present == total {
        GREEN
    } else {
        CYAN
    }
}
