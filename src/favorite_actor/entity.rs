use crate::actor_framework::Entity;
use crate::domain::{Favorite, ItemId, ItemPayload};

impl Entity for Favorite {
    type Id = ItemId;
    type CreatePayload = ItemPayload;

    fn id(&self) -> &ItemId { &self.item.id }

    fn from_create(id: ItemId, payload: ItemPayload) -> Result<Self, String> {
        Ok(Self { item: ItemPayload { id, ..payload } })
    }

    /// Favorites are stored under the item id so they can be deleted by it.
    fn preferred_id(payload: &ItemPayload) -> Option<ItemId> {
        Some(payload.id)
    }
}
