use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::status::OrderStatus;
use crate::domain::order::use_cases::advance::{AdvanceOrderParams, AdvanceOrderUseCase};

pub struct AdvanceOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AdvanceOrderUseCase for AdvanceOrderUseCaseImpl {
    async fn execute(&self, params: AdvanceOrderParams) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Advancing order: {}", params.id));

        let order = match self.repository.advance(params.id, Utc::now()).await {
            Ok(order) => order,
            Err(OrderError::TerminalStateReached) => {
                self.logger.warn(&format!(
                    "Order {} cannot advance past {}",
                    params.id,
                    OrderStatus::Delivered
                ));
                return Err(OrderError::TerminalStateReached);
            }
            Err(e) => return Err(e),
        };

        self.logger
            .info(&format!("Order {} moved to {}", order.id, order.status()));
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::order::model::{NewOrderProps, OrderId, OrderLine};
    use crate::domain::product::value_objects::Warehouse;
    use mockall::mock;

    mock! {
        pub OrderRepo {}

        #[async_trait]
        impl OrderRepository for OrderRepo {
            async fn get_all(&self) -> Result<Vec<Order>, RepositoryError>;
            async fn get_by_id(&self, id: OrderId) -> Result<Order, RepositoryError>;
            async fn next_id(&self) -> Result<OrderId, RepositoryError>;
            async fn insert(&self, order: &Order) -> Result<(), RepositoryError>;
            async fn advance(&self, id: OrderId, at: chrono::DateTime<Utc>) -> Result<Order, OrderError>;
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

    fn order_in(status: OrderStatus) -> Order {
        let mut order = Order::new(NewOrderProps {
            id: 12851,
            lines: vec![OrderLine {
                product_id: 2,
                quantity: 80,
                warehouse_source: Warehouse::A,
            }],
            total_amount: 187_340,
            delivery_date: None,
            created_at: Utc::now(),
        })
        .unwrap();
        while order.status() != status {
            order.advance(Utc::now()).unwrap();
        }
        order
    }

    #[tokio::test]
    async fn should_move_order_to_next_state() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_advance()
            .withf(|id, _| *id == 12851)
            .times(1)
            .returning(|_, _| Ok(order_in(OrderStatus::Picking)));

        let use_case = AdvanceOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let order = use_case
            .execute(AdvanceOrderParams { id: 12851 })
            .await
            .unwrap();

        assert_eq!(order.status(), OrderStatus::Picking);
        assert!(order.reached_at(OrderStatus::Picking).is_some());
    }

    #[tokio::test]
    async fn should_reject_advance_of_delivered_order() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_advance()
            .returning(|_, _| Err(OrderError::TerminalStateReached));

        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().times(1).returning(|_| ());

        let use_case = AdvanceOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: Arc::new(logger),
        };

        let result = use_case.execute(AdvanceOrderParams { id: 12851 }).await;

        assert!(matches!(result, Err(OrderError::TerminalStateReached)));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_order() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_advance()
            .returning(|_, _| Err(OrderError::NotFound));

        let use_case = AdvanceOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(AdvanceOrderParams { id: 1 }).await;

        assert!(matches!(result, Err(OrderError::NotFound)));
    }

    #[tokio::test]
    async fn should_surface_repository_failure() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_advance()
            .returning(|_, _| Err(OrderError::Repository(RepositoryError::persistence())));

        let use_case = AdvanceOrderUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(AdvanceOrderParams { id: 12851 }).await;

        assert!(matches!(result, Err(OrderError::Repository(_))));
    }
}
