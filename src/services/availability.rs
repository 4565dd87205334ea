use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, NaiveDate};

use crate::errors::ReservationError;
use crate::models::{SlotAvailability, SlotTime};

/// Mock ticket counts for every slot of `date`, seeded from the day of the
/// month so the same date always yields the same numbers.
pub fn mock_slot_counts(date: NaiveDate, capacity: u32) -> Vec<(SlotTime, u32)> {
    let seed = date.day() as u64;
    let modulus = capacity as u64 + 1;
    SlotTime::all()
        .map(|slot| {
            // the result is below both seed * 9 and capacity + 1, so it fits u32
            let count = (seed * (slot.index() as u64 + 1)) % modulus;
            (slot, count as u32)
        })
        .collect()
}

/// Caps the day's total at `limit`. Each slot keeps its proportional share
/// rounded down, and the tickets lost to rounding go one apiece to the slots
/// with the largest remainders, earliest slot first on ties.
pub fn apply_daily_limit(counts: &[(SlotTime, u32)], limit: u32) -> Vec<(SlotTime, u32)> {
    let total: u64 = counts.iter().map(|(_, c)| *c as u64).sum();
    if total <= limit as u64 {
        return counts.to_vec();
    }

    let limit = limit as u64;
    let mut adjusted: Vec<(SlotTime, u32)> = Vec::with_capacity(counts.len());
    let mut remainders: Vec<(usize, u64)> = Vec::with_capacity(counts.len());
    for (i, (slot, count)) in counts.iter().enumerate() {
        let share = *count as u64 * limit;
        adjusted.push((*slot, (share / total) as u32));
        remainders.push((i, share % total));
    }

    let assigned: u64 = adjusted.iter().map(|(_, c)| *c as u64).sum();
    let leftover = (limit - assigned) as usize;

    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (i, _) in remainders.into_iter().take(leftover) {
        adjusted[i].1 += 1;
    }

    adjusted
}

/// Tickets taken during this process's lifetime, keyed by visit date and slot.
/// Nothing is persisted; a restart frees every slot.
pub struct SlotLedger {
    capacity: u32,
    daily_limit: u32,
    taken: Mutex<HashMap<(NaiveDate, SlotTime), u32>>,
}

impl SlotLedger {
    pub fn new(capacity: u32, daily_limit: u32) -> Self {
        Self {
            capacity,
            daily_limit,
            taken: Mutex::new(HashMap::new()),
        }
    }

    fn base_counts(&self, date: NaiveDate) -> Vec<(SlotTime, u32)> {
        apply_daily_limit(&mock_slot_counts(date, self.capacity), self.daily_limit)
    }

    pub fn availability(&self, date: NaiveDate) -> Vec<SlotAvailability> {
        let base = self.base_counts(date);
        let taken = self.taken.lock().unwrap_or_else(PoisonError::into_inner);

        base.into_iter()
            .map(|(slot, count)| {
                let used = taken.get(&(date, slot)).copied().unwrap_or(0);
                SlotAvailability::new(slot, count.saturating_sub(used))
            })
            .collect()
    }

    pub fn available(&self, date: NaiveDate, slot: SlotTime) -> u32 {
        self.availability(date)
            .into_iter()
            .find(|a| a.time == slot)
            .map(|a| a.available)
            .unwrap_or(0)
    }

    pub fn reserve(
        &self,
        date: NaiveDate,
        slot: SlotTime,
        visitors: u32,
    ) -> Result<u32, ReservationError> {
        let base = self
            .base_counts(date)
            .into_iter()
            .find(|(s, _)| *s == slot)
            .map(|(_, c)| c)
            .unwrap_or(0);

        let mut taken = self.taken.lock().unwrap_or_else(PoisonError::into_inner);
        let used = taken.entry((date, slot)).or_insert(0);
        let available = base.saturating_sub(*used);

        if available == 0 {
            return Err(ReservationError::SoldOut);
        }
        if available < visitors {
            return Err(ReservationError::InsufficientTickets { available });
        }

        *used += visitors;
        Ok(available - visitors)
    }
}
