use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositoryInMemory;
use persistence::delivery_slot::repository::DeliverySlotRepositoryInMemory;
use persistence::fixtures::Seed;
use persistence::order::repository::OrderRepositoryInMemory;
use persistence::product::repository::ProductRepositoryInMemory;

use business::application::analytics::get_summary::GetAnalyticsSummaryUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::set_quantity::SetCartItemQuantityUseCaseImpl;
use business::application::checkout::check_availability::CheckAvailabilityUseCaseImpl;
use business::application::checkout::confirm::ConfirmOrderUseCaseImpl;
use business::application::delivery_slot::list::ListDeliverySlotsUseCaseImpl;
use business::application::order::advance::AdvanceOrderUseCaseImpl;
use business::application::order::create::CreateOrderUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::get_history::GetOrderHistoryUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;

use crate::config::checkout_config::CheckoutConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub checkout_api: crate::api::checkout::routes::CheckoutApi,
    pub delivery_slot_api: crate::api::delivery_slot::routes::DeliverySlotApi,
    pub order_api: crate::api::order::routes::OrderApi,
    pub analytics_api: crate::api::analytics::routes::AnalyticsApi,
}

impl DependencyContainer {
    pub fn new(checkout: CheckoutConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let seed = Seed::load()?;
        let product_repository = Arc::new(ProductRepositoryInMemory::new(seed.products));
        let order_repository = Arc::new(OrderRepositoryInMemory::new(seed.orders));
        let slot_repository = Arc::new(DeliverySlotRepositoryInMemory::new(seed.delivery_slots));
        let cart_repository = Arc::new(CartRepositoryInMemory::new());

        // Product use cases
        let get_all_products_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            cart_repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let add_cart_item_use_case = Arc::new(AddCartItemUseCaseImpl {
            cart_repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let set_cart_item_quantity_use_case = Arc::new(SetCartItemQuantityUseCaseImpl {
            cart_repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let remove_cart_item_use_case = Arc::new(RemoveCartItemUseCaseImpl {
            cart_repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            logger: logger.clone(),
        });

        // Order use cases
        let create_order_use_case = Arc::new(CreateOrderUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_orders_use_case = Arc::new(GetAllOrdersUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_by_id_use_case = Arc::new(GetOrderByIdUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let advance_order_use_case = Arc::new(AdvanceOrderUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });
        let get_order_history_use_case = Arc::new(GetOrderHistoryUseCaseImpl {
            repository: order_repository.clone(),
            logger: logger.clone(),
        });

        // Delivery slot use cases
        let list_delivery_slots_use_case = Arc::new(ListDeliverySlotsUseCaseImpl {
            repository: slot_repository.clone(),
            recommended_percent: checkout.recommended_slot_percent,
            logger: logger.clone(),
        });

        // Checkout use cases
        let check_availability_use_case = Arc::new(CheckAvailabilityUseCaseImpl {
            cart_repository: cart_repository.clone(),
            product_repository: product_repository.clone(),
            minimum_order_amount: checkout.min_order_amount,
            logger: logger.clone(),
        });
        let confirm_order_use_case = Arc::new(ConfirmOrderUseCaseImpl {
            cart_repository,
            product_repository: product_repository.clone(),
            slot_repository,
            create_order: create_order_use_case,
            minimum_order_amount: checkout.min_order_amount,
            logger: logger.clone(),
        });

        // Analytics use cases
        let get_analytics_summary_use_case = Arc::new(GetAnalyticsSummaryUseCaseImpl {
            order_repository,
            product_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            get_all_products_use_case,
            get_product_by_id_use_case,
        );

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_cart_use_case,
            add_cart_item_use_case,
            set_cart_item_quantity_use_case,
            remove_cart_item_use_case,
        );

        let checkout_api = crate::api::checkout::routes::CheckoutApi::new(
            check_availability_use_case,
            confirm_order_use_case,
        );

        let delivery_slot_api =
            crate::api::delivery_slot::routes::DeliverySlotApi::new(list_delivery_slots_use_case);

        let order_api = crate::api::order::routes::OrderApi::new(
            get_all_orders_use_case,
            get_order_by_id_use_case,
            advance_order_use_case,
            get_order_history_use_case,
        );

        let analytics_api =
            crate::api::analytics::routes::AnalyticsApi::new(get_analytics_summary_use_case);

        Ok(Self {
            health_api,
            product_api,
            cart_api,
            checkout_api,
            delivery_slot_api,
            order_api,
            analytics_api,
        })
    }
}
