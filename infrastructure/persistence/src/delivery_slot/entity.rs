use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use business::domain::delivery_slot::model::DeliverySlot;
use business::domain::errors::RepositoryError;

/// Stored as total and still-free shipment places for the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliverySlotEntity {
    pub date: NaiveDate,
    pub max_slots: u32,
    pub available: u32,
}

impl DeliverySlotEntity {
    pub fn into_domain(self) -> Result<DeliverySlot, RepositoryError> {
        let used = self
            .max_slots
            .checked_sub(self.available)
            .ok_or(RepositoryError::Persistence)?;
        DeliverySlot::new(self.date, self.max_slots, used).map_err(|_| RepositoryError::persistence())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(max_slots: u32, available: u32) -> DeliverySlotEntity {
        DeliverySlotEntity {
            date: NaiveDate::from_ymd_opt(2024, 12, 25).unwrap(),
            max_slots,
            available,
        }
    }

    #[test]
    fn should_derive_used_capacity() {
        let slot = entity(8, 2).into_domain().unwrap();

        assert_eq!(slot.capacity_used(), 6);
        assert_eq!(slot.remaining(), 2);
    }

    #[test]
    fn should_reject_more_free_places_than_capacity() {
        assert_eq!(entity(8, 9).into_domain().unwrap_err(), RepositoryError::Persistence);
    }

    #[test]
    fn should_reject_zero_capacity() {
        assert_eq!(entity(0, 0).into_domain().unwrap_err(), RepositoryError::Persistence);
    }
}
