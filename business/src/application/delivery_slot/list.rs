use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::delivery_slot::errors::DeliverySlotError;
use crate::domain::delivery_slot::repository::DeliverySlotRepository;
use crate::domain::delivery_slot::selector::{DeliverySlotSelector, SlotOffer};
use crate::domain::delivery_slot::use_cases::list::ListDeliverySlotsUseCase;
use crate::domain::logger::Logger;

pub struct ListDeliverySlotsUseCaseImpl {
    pub repository: Arc<dyn DeliverySlotRepository>,
    pub recommended_percent: u32,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListDeliverySlotsUseCase for ListDeliverySlotsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<SlotOffer>, DeliverySlotError> {
        self.logger.info("Listing delivery slots");
        let slots = self.repository.get_all().await?;
        let offers =
            DeliverySlotSelector::with_threshold(slots, self.recommended_percent).list_slots();
        self.logger.info(&format!(
            "{} delivery slots, {} selectable",
            offers.len(),
            offers.iter().filter(|o| o.slot.is_selectable()).count()
        ));
        Ok(offers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::delivery_slot::model::DeliverySlot;
    use crate::domain::errors::RepositoryError;
    use chrono::NaiveDate;
    use mockall::mock;

    mock! {
        pub SlotRepo {}

        #[async_trait]
        impl DeliverySlotRepository for SlotRepo {
            async fn get_all(&self) -> Result<Vec<DeliverySlot>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn slot(day: u32, used: u32) -> DeliverySlot {
        DeliverySlot::new(NaiveDate::from_ymd_opt(2024, 12, day).unwrap(), 8, used).unwrap()
    }

    #[tokio::test]
    async fn should_list_slots_with_recommendation() {
        let mut repo = MockSlotRepo::new();
        repo.expect_get_all()
            .returning(|| Ok(vec![slot(25, 6), slot(26, 3)]));

        let use_case = ListDeliverySlotsUseCaseImpl {
            repository: Arc::new(repo),
            recommended_percent: 60,
            logger: mock_logger(),
        };

        let offers = use_case.execute().await.unwrap();

        assert_eq!(offers.len(), 2);
        assert!(!offers[0].recommended);
        assert!(offers[1].recommended);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut repo = MockSlotRepo::new();
        repo.expect_get_all()
            .returning(|| Err(RepositoryError::NotFound));

        let use_case = ListDeliverySlotsUseCaseImpl {
            repository: Arc::new(repo),
            recommended_percent: 60,
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert_eq!(
            result,
            Err(DeliverySlotError::Repository(RepositoryError::NotFound))
        );
    }
}
