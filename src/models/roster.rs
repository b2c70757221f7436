use crate::models::seat::Seat;
use crate::models::status::SeatStatus;
use serde::Serialize;

/// Number of seats on the board. Fixed at compile time.
pub const CAPACITY: usize = 30;

/// The fixed-length, ordered sequence of every seat on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    seats: [Seat; CAPACITY],
}

/// Derived counters shown above the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DashboardCounts {
    pub total: usize,
    pub present: usize,
}

impl Default for Roster {
    fn default() -> Self {
        Self::empty()
    }
}

impl Roster {
    /// CAPACITY unassigned seats, all with status `None`.
    pub fn empty() -> Self {
        Self {
            seats: std::array::from_fn(|_| Seat::default()),
        }
    }

    /// Build a roster from per-index names and statuses.
    ///
    /// Missing trailing entries become empty seats, extra entries are dropped,
    /// and unassigned seats are forced back to `None`.
    pub fn from_parts(names: &[String], statuses: &[SeatStatus]) -> Self {
        let mut roster = Self::empty();
        for (i, seat) in roster.seats.iter_mut().enumerate() {
            let name = names.get(i).map(String::as_str).unwrap_or("");
            if name.is_empty() {
                continue;
            }
            seat.name = name.to_string();
            seat.status = statuses.get(i).copied().unwrap_or_default();
        }
        roster
    }

    pub fn get(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Seat> {
        self.seats.get_mut(index)
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub(crate) fn seats_mut(&mut self) -> &mut [Seat] {
        &mut self.seats
    }

    /// Occupied seats with their index, in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Seat)> {
        self.seats.iter().enumerate().filter(|(_, s)| s.is_occupied())
    }

    /// Names per index, `""` for unassigned seats.
    pub fn names(&self) -> Vec<String> {
        self.seats.iter().map(|s| s.name.clone()).collect()
    }

    pub fn statuses(&self) -> Vec<SeatStatus> {
        self.seats.iter().map(|s| s.status).collect()
    }

    pub fn dashboard_counts(&self) -> DashboardCounts {
        self.occupied().fold(DashboardCounts::default(), |mut acc, (_, seat)| {
            acc.total += 1;
            if seat.status.is_present() {
                acc.present += 1;
            }
            acc
        })
    }
}
