use crate::actor_framework::Entity;
use crate::domain::{ItemPayload, Order, OrderId};

impl Entity for Order {
    type Id = OrderId;
    type CreatePayload = ItemPayload;

    fn id(&self) -> &OrderId { &self.id }

    /// Creates a new Order from the submitted item projection.
    fn from_create(id: OrderId, item: ItemPayload) -> Result<Self, String> {
        Ok(Self { id, item })
    }
}
