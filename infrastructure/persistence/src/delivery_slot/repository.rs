use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::delivery_slot::model::DeliverySlot;
use business::domain::delivery_slot::repository::DeliverySlotRepository;
use business::domain::errors::RepositoryError;

use super::entity::DeliverySlotEntity;

pub struct DeliverySlotRepositoryInMemory {
    slots: RwLock<Vec<DeliverySlotEntity>>,
}

impl DeliverySlotRepositoryInMemory {
    pub fn new(mut slots: Vec<DeliverySlotEntity>) -> Self {
        slots.sort_by_key(|s| s.date);
        Self {
            slots: RwLock::new(slots),
        }
    }
}

#[async_trait]
impl DeliverySlotRepository for DeliverySlotRepositoryInMemory {
    async fn get_all(&self) -> Result<Vec<DeliverySlot>, RepositoryError> {
        let slots = self.slots.read().await;
        slots
            .iter()
            .cloned()
            .map(DeliverySlotEntity::into_domain)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entity(day: u32, available: u32) -> DeliverySlotEntity {
        DeliverySlotEntity {
            date: NaiveDate::from_ymd_opt(2024, 12, day).unwrap(),
            max_slots: 8,
            available,
        }
    }

    #[tokio::test]
    async fn should_list_slots_in_calendar_order() {
        let repository =
            DeliverySlotRepositoryInMemory::new(vec![entity(30, 3), entity(25, 2), entity(27, 7)]);

        let slots = repository.get_all().await.unwrap();

        let days: Vec<String> = slots.iter().map(|s| s.date.to_string()).collect();
        assert_eq!(days, vec!["2024-12-25", "2024-12-27", "2024-12-30"]);
    }

    #[tokio::test]
    async fn should_mark_fully_booked_slot() {
        let repository = DeliverySlotRepositoryInMemory::new(vec![entity(31, 0)]);

        let slots = repository.get_all().await.unwrap();

        assert!(slots[0].is_full());
        assert!(!slots[0].is_selectable());
    }
}
