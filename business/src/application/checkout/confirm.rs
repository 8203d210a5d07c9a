use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::OrderConfirmation;
use crate::domain::checkout::use_cases::confirm::{ConfirmOrderParams, ConfirmOrderUseCase};
use crate::domain::delivery_slot::repository::DeliverySlotRepository;
use crate::domain::delivery_slot::selector::DeliverySlotSelector;
use crate::domain::fulfillment::splitter;
use crate::domain::logger::Logger;
use crate::domain::order::use_cases::create::{CreateOrderParams, CreateOrderUseCase};
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::Amount;

pub struct ConfirmOrderUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub slot_repository: Arc<dyn DeliverySlotRepository>,
    pub create_order: Arc<dyn CreateOrderUseCase>,
    pub minimum_order_amount: Amount,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConfirmOrderUseCase for ConfirmOrderUseCaseImpl {
    async fn execute(&self, params: ConfirmOrderParams) -> Result<OrderConfirmation, CheckoutError> {
        if params.session_id.is_blank() {
            return Err(CheckoutError::SessionBlank);
        }
        self.logger.info(&format!(
            "Confirming order for session {} with delivery on {}",
            params.session_id, params.delivery_date
        ));

        let cart = self.cart_repository.get(&params.session_id).await?;
        let catalog = self.product_repository.get_all().await?;

        let total = cart.total(&catalog);
        if total < self.minimum_order_amount {
            self.logger.warn(&format!(
                "Cart total {} of session {} is below the minimum of {}",
                total, params.session_id, self.minimum_order_amount
            ));
            return Err(CheckoutError::BelowMinimumAmount {
                total,
                minimum: self.minimum_order_amount,
            });
        }

        let split = splitter::split_fulfillable(&cart, &catalog)?;

        let slots = self.slot_repository.get_all().await?;
        let slot = DeliverySlotSelector::new(slots).select(params.delivery_date)?;

        let order = self
            .create_order
            .execute(CreateOrderParams {
                lines: split.in_stock_lines(),
                total_amount: split.in_stock_amount(),
                delivery_date: slot.date,
            })
            .await?;

        let pending = split.pending_fulfillment(order.created_at);
        if let Some(pending) = &pending {
            self.logger.warn(&format!(
                "Order {} was split, {} lines wait for stock as {}",
                order.id,
                pending.lines.len(),
                pending.id
            ));
        }

        self.cart_repository.clear(&params.session_id).await?;

        Ok(OrderConfirmation { order, pending })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{Cart, CartLine};
    use crate::domain::delivery_slot::errors::DeliverySlotError;
    use crate::domain::delivery_slot::model::DeliverySlot;
    use crate::domain::errors::RepositoryError;
    use crate::domain::fulfillment::errors::FulfillmentError;
    use crate::domain::fulfillment::model::PendingStatus;
    use crate::domain::order::errors::OrderError;
    use crate::domain::order::model::{NewOrderProps, Order};
    use crate::domain::order::status::OrderStatus;
    use crate::domain::product::model::{NewProductProps, Product, ProductId};
    use crate::domain::shared::value_objects::SessionId;
    use chrono::{NaiveDate, Utc};
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get(&self, session_id: &SessionId) -> Result<Cart, RepositoryError>;
            async fn save(&self, session_id: &SessionId, cart: &Cart) -> Result<(), RepositoryError>;
            async fn clear(&self, session_id: &SessionId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: ProductId) -> Result<Product, RepositoryError>;
        }
    }

    mock! {
        pub SlotRepo {}

        #[async_trait]
        impl DeliverySlotRepository for SlotRepo {
            async fn get_all(&self) -> Result<Vec<DeliverySlot>, RepositoryError>;
        }
    }

    mock! {
        pub CreateOrder {}

        #[async_trait]
        impl CreateOrderUseCase for CreateOrder {
            async fn execute(&self, params: CreateOrderParams) -> Result<Order, OrderError>;
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

    fn product(id: ProductId, a: u32, b: u32, unit_price: Amount) -> Product {
        Product::new(NewProductProps {
            id,
            name: format!("MANNOL {}", id),
            article_code: format!("MN{}", id),
            stock_warehouse_a: a,
            stock_warehouse_b: b,
            unit_price,
            rating: 4.8,
            is_new: false,
            recommendation: None,
        })
        .unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, day).unwrap()
    }

    fn line(product_id: ProductId, quantity: u32) -> CartLine {
        CartLine {
            product_id,
            quantity,
        }
    }

    struct Fixture {
        cart: Cart,
        cart_cleared: bool,
        order_created: bool,
    }

    impl Fixture {
        fn new(lines: Vec<CartLine>) -> Self {
            Self {
                cart: Cart::from_lines(lines),
                cart_cleared: true,
                order_created: true,
            }
        }

        fn rejected(mut self) -> Self {
            self.cart_cleared = false;
            self.order_created = false;
            self
        }

        fn build(self) -> ConfirmOrderUseCaseImpl {
            let cart = self.cart;
            let mut cart_repo = MockCartRepo::new();
            cart_repo.expect_get().returning(move |_| Ok(cart.clone()));
            cart_repo
                .expect_clear()
                .times(usize::from(self.cart_cleared))
                .returning(|_| Ok(()));

            let mut product_repo = MockProductRepo::new();
            product_repo.expect_get_all().returning(|| {
                Ok(vec![
                    product(1, 1200, 450, 8500),
                    product(3, 85, 15, 14500),
                    product(5, 42, 8, 7900),
                ])
            });

            let mut slot_repo = MockSlotRepo::new();
            slot_repo.expect_get_all().returning(|| {
                Ok(vec![
                    DeliverySlot::new(date(25), 8, 6).unwrap(),
                    DeliverySlot::new(date(26), 8, 3).unwrap(),
                    DeliverySlot::new(date(31), 8, 8).unwrap(),
                ])
            });

            let mut create_order = MockCreateOrder::new();
            create_order
                .expect_execute()
                .times(usize::from(self.order_created))
                .returning(|params| {
                    Order::new(NewOrderProps {
                        id: 12870,
                        lines: params.lines,
                        total_amount: params.total_amount,
                        delivery_date: Some(params.delivery_date),
                        created_at: Utc::now(),
                    })
                });

            ConfirmOrderUseCaseImpl {
                cart_repository: Arc::new(cart_repo),
                product_repository: Arc::new(product_repo),
                slot_repository: Arc::new(slot_repo),
                create_order: Arc::new(create_order),
                minimum_order_amount: 50000,
                logger: mock_logger(),
            }
        }
    }

    fn params(day: u32) -> ConfirmOrderParams {
        ConfirmOrderParams {
            session_id: SessionId::new("partner-1"),
            delivery_date: date(day),
        }
    }

    #[tokio::test]
    async fn should_create_order_from_fully_stocked_cart() {
        let use_case = Fixture::new(vec![line(1, 120), line(3, 50)]).build();

        let confirmation = use_case.execute(params(26)).await.unwrap();

        assert_eq!(confirmation.order.lines.len(), 2);
        assert_eq!(confirmation.order.total_amount, 120 * 8500 + 50 * 14500);
        assert_eq!(confirmation.order.delivery_date, Some(date(26)));
        assert!(confirmation.pending.is_none());
    }

    #[tokio::test]
    async fn should_split_order_and_emit_pending_fulfillment() {
        let use_case = Fixture::new(vec![line(1, 120), line(5, 95)]).build();

        let confirmation = use_case.execute(params(25)).await.unwrap();

        assert_eq!(confirmation.order.lines.len(), 1);
        assert_eq!(confirmation.order.lines[0].product_id, 1);
        assert_eq!(confirmation.order.total_amount, 120 * 8500);

        let pending = confirmation.pending.unwrap();
        assert_eq!(pending.lines.len(), 1);
        assert_eq!(pending.lines[0].product_id, 5);
        assert_eq!(pending.lines[0].quantity, 95);
        assert_eq!(pending.status, PendingStatus::AwaitingStock);
        assert!(pending.delivery_date.is_none());
    }

    #[tokio::test]
    async fn should_refuse_cart_with_nothing_in_stock() {
        let use_case = Fixture::new(vec![line(5, 95)]).rejected().build();

        let result = use_case.execute(params(25)).await;

        assert!(matches!(
            result,
            Err(CheckoutError::Fulfillment(
                FulfillmentError::EmptyFulfillableSet
            ))
        ));
    }

    #[tokio::test]
    async fn should_refuse_cart_below_minimum_amount() {
        let use_case = Fixture::new(vec![line(1, 5)]).rejected().build();

        let result = use_case.execute(params(25)).await;

        assert!(matches!(
            result,
            Err(CheckoutError::BelowMinimumAmount {
                total: 42500,
                minimum: 50000
            })
        ));
    }

    #[tokio::test]
    async fn should_refuse_full_slot() {
        let use_case = Fixture::new(vec![line(1, 120)]).rejected().build();

        let result = use_case.execute(params(31)).await;

        assert!(matches!(
            result,
            Err(CheckoutError::DeliverySlot(DeliverySlotError::SlotUnavailable))
        ));
    }

    #[tokio::test]
    async fn should_refuse_unknown_slot() {
        let use_case = Fixture::new(vec![line(1, 120)]).rejected().build();

        let result = use_case.execute(params(28)).await;

        assert!(matches!(
            result,
            Err(CheckoutError::DeliverySlot(DeliverySlotError::SlotNotFound))
        ));
    }

    #[tokio::test]
    async fn should_keep_order_in_created_state() {
        let use_case = Fixture::new(vec![line(3, 50)]).build();

        let confirmation = use_case.execute(params(26)).await.unwrap();

        assert_eq!(confirmation.order.status(), OrderStatus::Created);
    }
}
