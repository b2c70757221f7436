//! Load/save of the board state through a [`KeyValueStore`].
//!
//! Two stable keys are used, matching the layout written by earlier versions
//! of the board:
//!
//! - `busAttendees`: JSON array of names, `""` for an unassigned seat
//! - `busAttendeeStates`: JSON object, seat index → `0 | 1 | 2 | 3 | "x"`
//!
//! Loading never fails: a missing key is reported as [`Loaded::Absent`] and a
//! value that does not parse as [`Loaded::Corrupt`]. Saving never fails
//! either; a write error is reported as a warning and otherwise ignored.

use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::models::seat::is_valid_name;
use crate::models::{CAPACITY, Roster, SeatStatus};
use crate::ui::messages::warning;
use std::collections::{BTreeMap, HashMap};

pub const NAMES_KEY: &str = "busAttendees";
pub const STATUSES_KEY: &str = "busAttendeeStates";

/// Outcome of reading one persisted field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    Absent,
    Corrupt,
    Present(T),
}

impl<T> Loaded<T> {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Loaded::Corrupt)
    }
}

/// Raw result of [`PersistenceAdapter::load`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedState {
    /// One entry per seat index (padded/truncated to CAPACITY).
    pub names: Loaded<Vec<String>>,
    /// One entry per seat index; missing indices are `None`.
    pub statuses: Loaded<Vec<SeatStatus>>,
}

impl PersistedState {
    /// Turn whatever was stored into a valid roster.
    ///
    /// Corruption under either key, or missing names, yields the default
    /// (empty) roster. Names without statuses start every seat at `None`.
    pub fn into_roster(self) -> Roster {
        if self.names.is_corrupt() || self.statuses.is_corrupt() {
            return Roster::empty();
        }
        match (self.names, self.statuses) {
            (Loaded::Present(names), Loaded::Present(statuses)) => {
                Roster::from_parts(&names, &statuses)
            }
            (Loaded::Present(names), _) => Roster::from_parts(&names, &[]),
            _ => Roster::empty(),
        }
    }
}

/// Stateless adapter between the roster and the key-value store.
pub struct PersistenceAdapter;

impl PersistenceAdapter {
    pub fn load<K: KeyValueStore>(kv: &K) -> PersistedState {
        PersistedState {
            names: read_field(kv, NAMES_KEY, decode_names),
            statuses: read_field(kv, STATUSES_KEY, decode_statuses),
        }
    }

    /// Write both keys. Returns `false` if any write failed; the failure has
    /// already been reported and must not abort the caller.
    pub fn save<K: KeyValueStore>(kv: &mut K, roster: &Roster) -> bool {
        match Self::try_save(kv, roster) {
            Ok(()) => true,
            Err(e) => {
                warning(format!("Board state not saved: {}", e));
                false
            }
        }
    }

    fn try_save<K: KeyValueStore>(kv: &mut K, roster: &Roster) -> AppResult<()> {
        let names = encode_names(roster)?;
        let statuses = encode_statuses(roster)?;
        kv.set(NAMES_KEY, &names)?;
        kv.set(STATUSES_KEY, &statuses)?;
        Ok(())
    }
}

fn read_field<K, T, F>(kv: &K, key: &str, decode: F) -> Loaded<T>
where
    K: KeyValueStore,
    F: FnOnce(&str) -> AppResult<T>,
{
    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Loaded::Absent,
        Err(e) => {
            warning(format!("Could not read '{}': {}", key, e));
            return Loaded::Absent;
        }
    };

    match decode(&raw) {
        Ok(v) => Loaded::Present(v),
        Err(e) => {
            warning(format!("Ignoring unreadable '{}': {}", key, e));
            Loaded::Corrupt
        }
    }
}

pub fn encode_names(roster: &Roster) -> AppResult<String> {
    Ok(serde_json::to_string(&roster.names())?)
}

pub fn encode_statuses(roster: &Roster) -> AppResult<String> {
    let map: BTreeMap<usize, SeatStatus> = roster.statuses().into_iter().enumerate().collect();
    Ok(serde_json::to_string(&map)?)
}

/// `null` entries are unassigned seats; anything else that is not a string
/// is rejected. Names that are not 1..=4 characters after trimming load as
/// unassigned seats.
pub fn decode_names(raw: &str) -> AppResult<Vec<String>> {
    let entries: Vec<Option<String>> = serde_json::from_str(raw)?;
    let mut names: Vec<String> = entries
        .into_iter()
        .take(CAPACITY)
        .map(|entry| {
            let name = entry.as_deref().unwrap_or("").trim();
            if is_valid_name(name) {
                name.to_string()
            } else {
                String::new()
            }
        })
        .collect();
    names.resize(CAPACITY, String::new());
    Ok(names)
}

/// Keys that are not seat indices below CAPACITY are skipped.
pub fn decode_statuses(raw: &str) -> AppResult<Vec<SeatStatus>> {
    let map: HashMap<String, SeatStatus> = serde_json::from_str(raw)?;
    let mut statuses = vec![SeatStatus::None; CAPACITY];
    for (key, status) in map {
        if let Ok(index) = key.trim().parse::<usize>()
            && index < CAPACITY
        {
            statuses[index] = status;
        }
    }
    Ok(statuses)
}
