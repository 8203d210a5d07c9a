use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartSummary};
use crate::domain::logger::Logger;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::SessionId;

pub(crate) fn ensure_session(session_id: &SessionId) -> Result<(), CartError> {
    if session_id.is_blank() {
        return Err(CartError::SessionBlank);
    }
    Ok(())
}

/// Prices a cart against the current catalog, logging lines whose product
/// has disappeared since it was added.
pub(crate) async fn price_cart(
    products: &dyn ProductRepository,
    logger: &dyn Logger,
    session_id: &SessionId,
    cart: Cart,
) -> Result<CartSummary, CartError> {
    let catalog = products.get_all().await?;

    let dangling = cart.dangling_references(&catalog);
    if !dangling.is_empty() {
        logger.warn(&format!(
            "Cart for session {} references unknown products {:?}, skipping them in total",
            session_id, dangling
        ));
    }

    Ok(CartSummary::new(cart, &catalog))
}
