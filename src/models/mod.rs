pub mod roster;
pub mod seat;
pub mod status;

pub use roster::{CAPACITY, DashboardCounts, Roster};
pub use seat::Seat;
pub use status::SeatStatus;
