use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Attendance status of an occupied seat.
///
/// Persisted with the legacy board encoding: `0`, `1`, `2`, `3` and `"x"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeatStatus {
    #[default]
    None, // 0
    Present, // 1
    Late,    // 2
    Excused, // 3
    Absent,  // "x"
}

impl SeatStatus {
    /// Every variant, in cycle order.
    pub const ALL: [SeatStatus; 5] = [
        SeatStatus::None,
        SeatStatus::Present,
        SeatStatus::Late,
        SeatStatus::Excused,
        SeatStatus::Absent,
    ];

    /// Next state in the circular cycle `None → Present → Late → Excused → Absent → None`.
    pub fn next(self) -> Self {
        match self {
            SeatStatus::None => SeatStatus::Present,
            SeatStatus::Present => SeatStatus::Late,
            SeatStatus::Late => SeatStatus::Excused,
            SeatStatus::Excused => SeatStatus::Absent,
            SeatStatus::Absent => SeatStatus::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeatStatus::None => "none",
            SeatStatus::Present => "present",
            SeatStatus::Late => "late",
            SeatStatus::Excused => "excused",
            SeatStatus::Absent => "absent",
        }
    }

    /// Short marker drawn next to the name in the grid.
    pub fn marker(&self) -> &'static str {
        match self {
            SeatStatus::None => "·",
            SeatStatus::Present => "O",
            SeatStatus::Late => "L",
            SeatStatus::Excused => "E",
            SeatStatus::Absent => "X",
        }
    }

    /// Convert legacy numeric code → enum (`"x"` is handled separately)
    pub fn from_code(code: u64) -> Option<Self> {
        match code {
            0 => Some(SeatStatus::None),
            1 => Some(SeatStatus::Present),
            2 => Some(SeatStatus::Late),
            3 => Some(SeatStatus::Excused),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, SeatStatus::Present)
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for SeatStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SeatStatus::None => serializer.serialize_u8(0),
            SeatStatus::Present => serializer.serialize_u8(1),
            SeatStatus::Late => serializer.serialize_u8(2),
            SeatStatus::Excused => serializer.serialize_u8(3),
            SeatStatus::Absent => serializer.serialize_str("x"),
        }
    }
}

struct SeatStatusVisitor;

impl<'de> Visitor<'de> for SeatStatusVisitor {
    type Value = SeatStatus;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("one of 0, 1, 2, 3, \"x\" or null")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<SeatStatus, E> {
        SeatStatus::from_code(v)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<SeatStatus, E> {
        u64::try_from(v)
            .ok()
            .and_then(SeatStatus::from_code)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SeatStatus, E> {
        match v {
            "x" => Ok(SeatStatus::Absent),
            _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
        }
    }

    // `null` shows up when the board was saved with holes in the map
    fn visit_unit<E: de::Error>(self) -> Result<SeatStatus, E> {
        Ok(SeatStatus::None)
    }

    fn visit_none<E: de::Error>(self) -> Result<SeatStatus, E> {
        Ok(SeatStatus::None)
    }
}

impl<'de> Deserialize<'de> for SeatStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SeatStatusVisitor)
    }
}
