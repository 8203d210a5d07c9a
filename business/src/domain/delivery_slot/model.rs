use chrono::NaiveDate;

use super::errors::DeliverySlotError;

/// Share of free capacity, in percent, at which a slot is recommended.
pub const DEFAULT_RECOMMENDED_PERCENT: u32 = 60;

/// A shipment day with a fixed number of order slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliverySlot {
    pub date: NaiveDate,
    capacity_total: u32,
    capacity_used: u32,
}

impl DeliverySlot {
    pub fn new(
        date: NaiveDate,
        capacity_total: u32,
        capacity_used: u32,
    ) -> Result<Self, DeliverySlotError> {
        if capacity_total == 0 || capacity_used > capacity_total {
            return Err(DeliverySlotError::InvalidCapacity);
        }
        Ok(Self {
            date,
            capacity_total,
            capacity_used,
        })
    }

    pub fn capacity_total(&self) -> u32 {
        self.capacity_total
    }

    pub fn capacity_used(&self) -> u32 {
        self.capacity_used
    }

    pub fn remaining(&self) -> u32 {
        self.capacity_total - self.capacity_used
    }

    pub fn is_full(&self) -> bool {
        self.capacity_used >= self.capacity_total
    }

    pub fn is_selectable(&self) -> bool {
        !self.is_full()
    }

    /// Advisory only: at least `threshold_percent` of the capacity is still free.
    pub fn is_recommended(&self, threshold_percent: u32) -> bool {
        u64::from(self.remaining()) * 100
            >= u64::from(self.capacity_total) * u64::from(threshold_percent)
    }

    /// Used capacity in percent, rounded to the nearest integer.
    pub fn fill_percent(&self) -> u32 {
        let used = u64::from(self.capacity_used) * 100;
        let total = u64::from(self.capacity_total);
        ((used + total / 2) / total) as u32
    }
}
