use serde::{Deserialize, Serialize};

pub const FIRST_SLOT_HOUR: u32 = 9;
pub const LAST_SLOT_HOUR: u32 = 17;
pub const SLOT_DURATION_MINUTES: i64 = 60;

/// One of the fixed hourly visiting slots, `09:00` through `17:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotTime(u32);

impl SlotTime {
    pub fn from_hour(hour: u32) -> Option<Self> {
        (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR)
            .contains(&hour)
            .then_some(SlotTime(hour))
    }

    pub fn parse(s: &str) -> Option<Self> {
        let (hour, minute) = s.trim().split_once(':')?;
        if minute != "00" || hour.len() != 2 {
            return None;
        }
        Self::from_hour(hour.parse().ok()?)
    }

    pub fn all() -> impl Iterator<Item = SlotTime> {
        (FIRST_SLOT_HOUR..=LAST_SLOT_HOUR).map(SlotTime)
    }

    pub fn hour(&self) -> u32 {
        self.0
    }

    /// Zero-based position of the slot within the day.
    pub fn index(&self) -> usize {
        (self.0 - FIRST_SLOT_HOUR) as usize
    }

    pub fn label(&self) -> String {
        format!("{:02}:00", self.0)
    }
}

impl std::fmt::Display for SlotTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl Serialize for SlotTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for SlotTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        SlotTime::parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid slot: {s}")))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SlotAvailability {
    pub time: SlotTime,
    pub available: u32,
    pub sold_out: bool,
}

impl SlotAvailability {
    pub fn new(time: SlotTime, available: u32) -> Self {
        Self {
            time,
            available,
            sold_out: available == 0,
        }
    }

    pub fn status_label(&self) -> String {
        if self.sold_out {
            "Sold Out".to_string()
        } else {
            format!("{} available", self.available)
        }
    }
}
