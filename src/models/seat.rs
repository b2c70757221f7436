use crate::models::status::SeatStatus;
use serde::Serialize;

/// Maximum number of characters accepted for a seat name.
pub const MAX_NAME_CHARS: usize = 4;

/// One fixed position on the board.
///
/// An empty `name` means the seat is unassigned; unassigned seats always
/// carry `SeatStatus::None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Seat {
    pub name: String,
    pub status: SeatStatus,
}

impl Seat {
    pub fn is_occupied(&self) -> bool {
        !self.name.is_empty()
    }

    /// Empty the seat and drop its status.
    pub fn clear(&mut self) {
        self.name.clear();
        self.status = SeatStatus::None;
    }
}

/// True when `name` is acceptable as a seat name (1..=4 characters).
pub fn is_valid_name(name: &str) -> bool {
    let len = name.chars().count();
    (1..=MAX_NAME_CHARS).contains(&len)
}
