use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::history::{history_trail, trail_counts};
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_history::{
    GetOrderHistoryParams, GetOrderHistoryUseCase, OrderHistory,
};

pub struct GetOrderHistoryUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderHistoryUseCase for GetOrderHistoryUseCaseImpl {
    async fn execute(&self, params: GetOrderHistoryParams) -> Result<OrderHistory, OrderError> {
        self.logger
            .info(&format!("Getting status history of order: {}", params.id));

        let order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        let entries = history_trail(&order);
        let counts = trail_counts(&entries);
        Ok(OrderHistory {
            order_id: order.id,
            status: order.status(),
            entries,
            counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::model::{NewOrderProps, Order, OrderId, OrderLine};
    use crate::domain::order::status::OrderStatus;
    use crate::domain::product::value_objects::Warehouse;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
            async fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError>;
            async fn next_id(&self) -> Result<OrderId, RepositoryError>;
            async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;
            async fn advance(&self, id: OrderId, at: chrono::DateTime<chrono::Utc>) -> Result<Order, OrderError>;
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

    #[tokio::test]
    async fn should_derive_trail_for_stored_order() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo.expect_get_by_id().returning(|id| {
            let mut order = Order::new(NewOrderProps {
                id,
                lines: vec![OrderLine {
                    product_id: 1,
                    quantity: 200,
                    warehouse_source: Warehouse::A,
                }],
                total_amount: 312_890,
                delivery_date: None,
                created_at: Utc::now(),
            })
            .unwrap();
            for _ in 0..5 {
                order.advance(Utc::now()).unwrap();
            }
            Ok(order)
        });

        let use_case = GetOrderHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let history = use_case
            .execute(GetOrderHistoryParams { id: 12869 })
            .await
            .unwrap();

        assert_eq!(history.order_id, 12869);
        assert_eq!(history.status, OrderStatus::Shipped);
        assert_eq!(history.entries.len(), 7);
        assert_eq!(history.counts.completed, 5);
        assert_eq!(history.counts.current, 1);
        assert_eq!(history.counts.pending, 1);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_order() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetOrderHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetOrderHistoryParams { id: 5 }).await;

        assert!(matches!(result, Err(OrderError::NotFound)));
    }
}
