//! The attendance board state machine.
//!
//! [`AttendanceStore`] owns the roster, applies every command to it, persists
//! the result and tells the cue sink when a seat changes status. Callers read
//! the current board back through [`AttendanceStore::snapshot`].

use crate::core::collation::korean_cmp;
use crate::core::cue::{CueSink, SeatTransition, SilentCue};
use crate::core::names::parse_names;
use crate::core::persistence::PersistenceAdapter;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{DashboardCounts, Roster, Seat};

pub struct AttendanceStore<K: KeyValueStore, C: CueSink = SilentCue> {
    kv: K,
    cue: C,
    roster: Roster,
    last_save_ok: bool,
}

impl<K: KeyValueStore> AttendanceStore<K, SilentCue> {
    /// Open the board stored in `kv`, without cues.
    pub fn open(kv: K) -> Self {
        Self::with_cue(kv, SilentCue)
    }
}

impl<K: KeyValueStore, C: CueSink> AttendanceStore<K, C> {
    pub fn with_cue(kv: K, cue: C) -> Self {
        let roster = Self::load_or_default(&kv);
        Self {
            kv,
            cue,
            roster,
            last_save_ok: true,
        }
    }

    /// Persisted roster, or CAPACITY empty seats when nothing usable is stored.
    pub fn load_or_default(kv: &K) -> Roster {
        PersistenceAdapter::load(kv).into_roster()
    }

    /// Replace the roster with a comma-separated batch of names.
    ///
    /// Seats that stay occupied keep their status even if the name changed.
    /// Blank input clears the whole board.
    pub fn set_names(&mut self, raw: &str) -> &Roster {
        if raw.trim().is_empty() {
            return self.clear_all();
        }

        let names = parse_names(raw);
        for (i, seat) in self.roster.seats_mut().iter_mut().enumerate() {
            match names.get(i) {
                Some(name) => seat.name.clone_from(name),
                None => seat.clear(),
            }
        }

        self.persist();
        &self.roster
    }

    /// Empty every seat and reset every status.
    pub fn clear_all(&mut self) -> &Roster {
        self.roster = Roster::empty();
        self.persist();
        &self.roster
    }

    /// Advance the seat at `index` one step along the status cycle.
    ///
    /// Returns `Ok(None)` (and changes nothing) when the seat is unassigned.
    pub fn cycle_status(&mut self, index: usize) -> AppResult<Option<SeatTransition>> {
        let seat = self
            .roster
            .get_mut(index)
            .ok_or(AppError::InvalidSeat(index))?;

        if !seat.is_occupied() {
            return Ok(None);
        }

        let from = seat.status;
        seat.status = from.next();
        let transition = SeatTransition {
            index,
            name: seat.name.clone(),
            from,
            to: seat.status,
        };

        self.persist();
        self.cue.seat_transitioned(&transition);
        Ok(Some(transition))
    }

    /// Put every occupied seat back to `None`.
    pub fn reset_all_statuses(&mut self) -> &Roster {
        for seat in self.roster.seats_mut() {
            seat.status = Default::default();
        }
        self.persist();
        &self.roster
    }

    /// Compact occupied seats to the front in 가나다 order.
    ///
    /// Each name keeps its status. Equal names keep their relative order.
    pub fn sort_by_name(&mut self) -> &Roster {
        let mut occupied: Vec<Seat> = self
            .roster
            .occupied()
            .map(|(_, seat)| seat.clone())
            .collect();
        occupied.sort_by(|a, b| korean_cmp(&a.name, &b.name));

        for (i, seat) in self.roster.seats_mut().iter_mut().enumerate() {
            match occupied.get_mut(i) {
                Some(sorted) => *seat = std::mem::take(sorted),
                None => seat.clear(),
            }
        }

        self.persist();
        &self.roster
    }

    pub fn snapshot(&self) -> &Roster {
        &self.roster
    }

    pub fn dashboard_counts(&self) -> DashboardCounts {
        self.roster.dashboard_counts()
    }

    /// Occupied names joined by `", "`; feeding it back to `set_names`
    /// reproduces the same names.
    pub fn names_line(&self) -> String {
        self.roster
            .occupied()
            .map(|(_, seat)| seat.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Whether the most recent save reached the store.
    pub fn last_save_ok(&self) -> bool {
        self.last_save_ok
    }

    pub fn kv(&self) -> &K {
        &self.kv
    }

    pub fn cue(&self) -> &C {
        &self.cue
    }

    fn persist(&mut self) {
        self.last_save_ok = PersistenceAdapter::save(&mut self.kv, &self.roster);
    }
}
