use tracing::{debug, instrument};
use crate::domain::{ItemPayload, Order, OrderId};
use crate::error::ApiError;

/// Client for the orders (`/orders`) resource.
#[derive(Clone)]
pub struct OrderClient {
    inner: crate::actor_framework::ResourceClient<Order>,
}

impl_client_new!(OrderClient, Order);
impl_client_methods!(OrderClient, Order, order; get);

impl OrderClient {
    #[instrument(skip(self, payload), fields(item_id = %payload.id))]
    pub async fn create_order(&self, payload: ItemPayload) -> Result<OrderId, ApiError> {
        debug!("Sending request");
        Ok(self.inner.create(payload).await?)
    }
}
